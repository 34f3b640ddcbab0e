//! # Shell Commands
//!
//! Parses one input line into a [`Command`] with clap.
//!
//! ## Command Reference
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Anywhere           help, quit                                          │
//! │                                                                         │
//! │  Login screen       login <email> <password>                            │
//! │                     register <email> <password> <name...>               │
//! │                                                                         │
//! │  Signed in          logout, dashboard, admin, show, refresh             │
//! │                                                                         │
//! │  Dashboard          search [text...]     category [name...]             │
//! │                     categories           min [price]   max [price]      │
//! │                     view grid|table      buy <id>                       │
//! │                                                                         │
//! │  Admin              add                  edit <id>     restock <id>     │
//! │                     set <field> <value...>             amount <n>       │
//! │                     save                 cancel                         │
//! │                     delete <id>          yes | no                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The line is split on whitespace. Trailing arguments that may contain
//! spaces (search text, category, names, form values) are joined back with
//! single spaces. `<command> --help` prints clap's usage for that command.

use clap::{CommandFactory, Parser, Subcommand};
use thiserror::Error;

use crate::pages::{FormField, ViewMode};

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { email: String, password: String },
    Register { email: String, password: String, name: String },
    Logout,
    Dashboard,
    Admin,
    Show,
    Refresh,
    Search(String),
    Category(String),
    Categories,
    MinPrice(String),
    MaxPrice(String),
    View(ViewMode),
    Buy(String),
    Add,
    Edit(String),
    Restock(String),
    Set(FormField, String),
    Amount(String),
    Save,
    Cancel,
    Delete(String),
    Yes,
    No,
    Help,
    Quit,
}

/// Why a line did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command '{0}'. Type `help` for the list.")]
    Unknown(String),

    /// clap's rendered message, usage line included.
    #[error("{0}")]
    Usage(String),
}

// =============================================================================
// clap Definitions
// =============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "sweet-shop",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct Line {
    #[command(subcommand)]
    command: Input,
}

#[derive(Subcommand, Debug)]
enum Input {
    /// Sign in (any credentials work)
    Login {
        email: String,
        #[arg(allow_hyphen_values = true)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        email: String,
        #[arg(allow_hyphen_values = true)]
        password: String,
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        name: Vec<String>,
    },
    /// End the session
    Logout,
    /// Go to the dashboard
    #[command(alias = "back")]
    Dashboard,
    /// Go to the admin panel
    Admin,
    /// Print the current page again
    #[command(alias = "ls")]
    Show,
    /// Reload the list
    #[command(alias = "reload")]
    Refresh,
    /// Filter by name; no text clears the search
    Search {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Filter by category; no name shows all
    Category {
        #[arg(num_args = 0.., trailing_var_arg = true)]
        name: Vec<String>,
    },
    /// List the category choices
    Categories,
    /// Lowest price; no value clears it
    #[command(name = "min")]
    MinPrice {
        #[arg(allow_hyphen_values = true)]
        price: Option<String>,
    },
    /// Highest price; no value clears it
    #[command(name = "max")]
    MaxPrice {
        #[arg(allow_hyphen_values = true)]
        price: Option<String>,
    },
    /// Switch between grid and table
    View { mode: ViewMode },
    /// Buy one unit
    #[command(alias = "purchase")]
    Buy { id: String },
    /// Open the Add dialog
    Add,
    /// Open the Edit dialog
    Edit { id: String },
    /// Open the Restock dialog
    Restock { id: String },
    /// Fill a form field
    Set {
        field: FormField,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Fill the restock amount
    Amount {
        #[arg(allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// Submit the open dialog
    #[command(alias = "submit")]
    Save,
    /// Close the open dialog
    #[command(alias = "close")]
    Cancel,
    /// Ask to delete a sweet
    #[command(alias = "rm")]
    Delete { id: String },
    /// Confirm a delete
    #[command(alias = "y")]
    Yes,
    /// Decline a delete
    #[command(alias = "n")]
    No,
    /// List the commands
    #[command(alias = "?")]
    Help,
    /// Leave the shell
    #[command(aliases = ["exit", "q"])]
    Quit,
}

impl From<Input> for Command {
    fn from(input: Input) -> Self {
        match input {
            Input::Login { email, password } => Command::Login { email, password },
            Input::Register {
                email,
                password,
                name,
            } => Command::Register {
                email,
                password,
                name: name.join(" "),
            },
            Input::Logout => Command::Logout,
            Input::Dashboard => Command::Dashboard,
            Input::Admin => Command::Admin,
            Input::Show => Command::Show,
            Input::Refresh => Command::Refresh,
            Input::Search { text } => Command::Search(text.join(" ")),
            Input::Category { name } if name.is_empty() => {
                Command::Category(sweets_core::ALL_CATEGORIES.to_string())
            }
            Input::Category { name } => Command::Category(name.join(" ")),
            Input::Categories => Command::Categories,
            Input::MinPrice { price } => Command::MinPrice(price.unwrap_or_default()),
            Input::MaxPrice { price } => Command::MaxPrice(price.unwrap_or_default()),
            Input::View { mode } => Command::View(mode),
            Input::Buy { id } => Command::Buy(id),
            Input::Add => Command::Add,
            Input::Edit { id } => Command::Edit(id),
            Input::Restock { id } => Command::Restock(id),
            Input::Set { field, value } => Command::Set(field, value.join(" ")),
            Input::Amount { amount } => Command::Amount(amount.unwrap_or_default()),
            Input::Save => Command::Save,
            Input::Cancel => Command::Cancel,
            Input::Delete { id } => Command::Delete(id),
            Input::Yes => Command::Yes,
            Input::No => Command::No,
            Input::Help => Command::Help,
            Input::Quit => Command::Quit,
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a line. Blank lines yield `Ok(None)`.
///
/// The command word is case-insensitive; arguments are kept as typed.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let mut words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    let Some(head) = words.first_mut() else {
        return Ok(None);
    };
    *head = head.to_lowercase();

    if Line::command().find_subcommand(head.as_str()).is_none() {
        return Err(ParseError::Unknown(head.clone()));
    }

    let parsed = Line::try_parse_from(&words)
        .map_err(|e| ParseError::Usage(e.render().to_string().trim_end().to_string()))?;
    Ok(Some(parsed.command.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(line: &str) -> Command {
        parse(line).unwrap().unwrap()
    }

    fn usage(line: &str) -> String {
        match parse(line) {
            Err(ParseError::Usage(text)) => text,
            other => panic!("expected usage error for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_definitions_are_consistent() {
        Line::command().debug_assert();
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn test_login_and_register() {
        assert_eq!(
            ok("login admin@example.com secret"),
            Command::Login {
                email: "admin@example.com".to_string(),
                password: "secret".to_string(),
            }
        );
        assert_eq!(
            ok("register ada@example.com pw Ada Lovelace"),
            Command::Register {
                email: "ada@example.com".to_string(),
                password: "pw".to_string(),
                name: "Ada Lovelace".to_string(),
            }
        );
        assert!(usage("login admin@example.com").contains("Usage:"));
        assert!(usage("register ada@example.com pw").contains("Usage:"));
    }

    #[test]
    fn test_trailing_arguments_are_joined() {
        assert_eq!(ok("search  hard candy"), Command::Search("hard candy".to_string()));
        assert_eq!(ok("category Hard Candy"), Command::Category("Hard Candy".to_string()));
        assert_eq!(ok("category"), Command::Category("all".to_string()));
        assert_eq!(ok("search"), Command::Search(String::new()));
        assert_eq!(ok("min"), Command::MinPrice(String::new()));
        assert_eq!(ok("max 9.50"), Command::MaxPrice("9.50".to_string()));
        assert_eq!(
            ok("set description Rich and  dark"),
            Command::Set(FormField::Description, "Rich and dark".to_string())
        );
        assert_eq!(ok("set price -1"), Command::Set(FormField::Price, "-1".to_string()));
    }

    #[test]
    fn test_id_commands_need_an_id() {
        assert_eq!(ok("buy 3"), Command::Buy("3".to_string()));
        assert_eq!(ok("DELETE 4"), Command::Delete("4".to_string()));
        assert!(usage("edit").contains("<ID>"));
        assert!(usage("restock ").contains("<ID>"));
        assert!(usage("buy 1 2").contains("unexpected argument"));
    }

    #[test]
    fn test_view_and_field_validation() {
        assert_eq!(ok("view table"), Command::View(ViewMode::Table));
        assert!(usage("view carousel").contains("carousel"));
        assert!(usage("set colour red").contains("colour"));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(parse("dance"), Err(ParseError::Unknown("dance".to_string())));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(ok("q"), Command::Quit);
        assert_eq!(ok("y"), Command::Yes);
        assert_eq!(ok("back"), Command::Dashboard);
        assert_eq!(ok("?"), Command::Help);
        assert_eq!(ok("purchase 5"), Command::Buy("5".to_string()));
    }

    #[test]
    fn test_per_command_help() {
        assert!(usage("buy --help").contains("Buy one unit"));
    }
}
