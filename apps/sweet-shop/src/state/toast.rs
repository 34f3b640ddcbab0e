//! # Toasts
//!
//! Short notifications raised by page actions and printed by the shell
//! after each command.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

/// Title used by every success toast.
pub const SUCCESS_TITLE: &str = "Success!";

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// One notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.variant {
            ToastVariant::Default => "✔",
            ToastVariant::Destructive => "✖",
        };
        write!(f, "{} {}: {}", marker, self.title, self.description)
    }
}

/// Queue of toasts waiting to be shown.
///
/// Clones share one queue.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    pending: Arc<Mutex<Vec<Toast>>>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    fn queue(&self) -> MutexGuard<'_, Vec<Toast>> {
        // A panic while holding the lock cannot leave a Vec half-pushed.
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, toast: Toast) {
        self.queue().push(toast);
    }

    /// Raises a "Success!" toast.
    pub fn success(&self, description: impl Into<String>) {
        self.push(Toast {
            title: SUCCESS_TITLE.to_string(),
            description: description.into(),
            variant: ToastVariant::Default,
        });
    }

    /// Raises a destructive toast.
    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(Toast {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        });
    }

    /// Removes and returns every pending toast, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.queue())
    }

    pub fn is_empty(&self) -> bool {
        self.queue().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_in_order_and_empties() {
        let toaster = Toaster::new();
        toaster.success("Sweet purchased successfully");
        toaster.error("Purchase failed", "Out of stock");

        let toasts = toaster.drain();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].title, "Success!");
        assert_eq!(toasts[1].variant, ToastVariant::Destructive);
        assert!(toaster.is_empty());
    }

    #[test]
    fn test_clones_share_queue() {
        let toaster = Toaster::new();
        toaster.clone().success("shared");
        assert_eq!(toaster.drain().len(), 1);
    }

    #[test]
    fn test_display() {
        let toast = Toast {
            title: "Purchase failed".to_string(),
            description: "Out of stock".to_string(),
            variant: ToastVariant::Destructive,
        };
        assert_eq!(toast.to_string(), "✖ Purchase failed: Out of stock");
    }
}
