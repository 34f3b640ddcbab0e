//! # Simulated Latency
//!
//! Every facade call waits a fixed delay before touching the store, so the
//! front end gets to show its loading states.
//!
//! | Operation | Demo delay |
//! |-----------|-----------:|
//! | login / register | 800 ms |
//! | create / update | 600 ms |
//! | list / delete / restock | 500 ms |
//! | purchase | 400 ms |
//! | get | 300 ms |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Facade operations that carry a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Register,
    ListSweets,
    GetSweet,
    CreateSweet,
    UpdateSweet,
    DeleteSweet,
    PurchaseSweet,
    RestockSweet,
}

impl Operation {
    /// The demo delay for this operation.
    pub const fn demo_delay(self) -> Duration {
        let ms = match self {
            Operation::Login | Operation::Register => 800,
            Operation::CreateSweet | Operation::UpdateSweet => 600,
            Operation::ListSweets | Operation::DeleteSweet | Operation::RestockSweet => 500,
            Operation::PurchaseSweet => 400,
            Operation::GetSweet => 300,
        };
        Duration::from_millis(ms)
    }
}

/// Latency profile for the facade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Latency {
    /// Per-operation demo delays.
    #[default]
    Demo,
    /// No waiting at all (tests, scripted sessions).
    None,
}

impl Latency {
    /// How long `op` waits under this profile.
    pub fn delay_for(self, op: Operation) -> Duration {
        match self {
            Latency::Demo => op.demo_delay(),
            Latency::None => Duration::ZERO,
        }
    }

    /// Waits out the delay for `op`.
    pub async fn simulate(self, op: Operation) {
        let delay = self.delay_for(op);
        if delay.is_zero() {
            return;
        }
        trace!(operation = ?op, delay_ms = delay.as_millis() as u64, "Simulating latency");
        tokio::time::sleep(delay).await;
    }
}

impl fmt::Display for Latency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Latency::Demo => write!(f, "demo"),
            Latency::None => write!(f, "none"),
        }
    }
}

impl FromStr for Latency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(Latency::Demo),
            "none" | "off" => Ok(Latency::None),
            other => Err(format!("unknown latency profile '{}' (expected demo or none)", other)),
        }
    }
}
