//! # Session Commands
//!
//! Parsing of the one-line commands typed into a shell session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input line              Command                 Store call             │
//! │  ──────────              ───────                 ──────────             │
//! │  items                   Items                   items()                │
//! │  search Apple            Search("Apple")         search_by_name()       │
//! │  tag sweet               Tag("sweet")            search_by_hashtag()    │
//! │  add Apple Pie           Add("Apple Pie")        add_by_name()          │
//! │  remove Pie              Remove("Pie")           remove_by_name()       │
//! │  cart                    Cart                    cart()                 │
//! │  checkout                Checkout                checkout()             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything after the first word is the argument, so item names may
//! contain spaces.

use std::str::FromStr;

use thiserror::Error;

/// Help text printed by `help`.
pub const HELP: &str = "\
Commands:
  items             list the catalog
  search [TEXT]     items whose name contains TEXT (case-sensitive)
  tag HASHTAG       items carrying HASHTAG
  add NAME          add the single item whose name contains NAME
  remove NAME       remove the single cart item whose name contains NAME
  cart              show the cart and its subtotal
  checkout          show the total to pay
  help              show this help
  quit              leave the shop";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Items,
    Search(String),
    Tag(String),
    Add(String),
    Remove(String),
    Cart,
    Checkout,
    Help,
    Quit,
}

/// Why an input line is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("Usage: {usage}")]
    MissingArgument { usage: &'static str },
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        let required = |usage: &'static str| {
            if arg.is_empty() {
                Err(ParseError::MissingArgument { usage })
            } else {
                Ok(arg.to_string())
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "items" | "list" => Ok(Command::Items),
            "search" => Ok(Command::Search(arg.to_string())),
            "tag" => required("tag HASHTAG").map(Command::Tag),
            "add" => required("add NAME").map(Command::Add),
            "remove" | "rm" => required("remove NAME").map(Command::Remove),
            "cart" => Ok(Command::Cart),
            "checkout" => Ok(Command::Checkout),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ParseError::Unknown(word.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("items".parse(), Ok(Command::Items));
        assert_eq!("  CART ".parse(), Ok(Command::Cart));
        assert_eq!("checkout".parse(), Ok(Command::Checkout));
        assert_eq!("exit".parse(), Ok(Command::Quit));
        assert_eq!("?".parse(), Ok(Command::Help));
    }

    #[test]
    fn test_argument_keeps_inner_spaces_and_case() {
        assert_eq!(
            "add   Apple  Pie".parse(),
            Ok(Command::Add("Apple  Pie".to_string()))
        );
        assert_eq!("tag sweet".parse(), Ok(Command::Tag("sweet".to_string())));
        assert_eq!("rm pie".parse(), Ok(Command::Remove("pie".to_string())));
    }

    #[test]
    fn test_search_argument_is_optional() {
        assert_eq!("search".parse(), Ok(Command::Search(String::new())));
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            "add".parse::<Command>(),
            Err(ParseError::MissingArgument { usage: "add NAME" })
        );
        assert!("tag   ".parse::<Command>().is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            "buy milk".parse::<Command>(),
            Err(ParseError::Unknown("buy".to_string()))
        );
    }
}
