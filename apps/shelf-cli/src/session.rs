//! # Shell Session
//!
//! One customer's visit: a [`Store`] driven by lines read from an input.
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  read line ──► parse Command ──► execute against Store ──► write output │
//! │      ▲              │                    │                      │       │
//! │      │         ParseError           CoreError                   │       │
//! │      │              │                    │                      │       │
//! │      │              └──── print, keep going ◄──┘                │       │
//! │      └──────────────────────────────────────────────────────────┘       │
//! │                                                                         │
//! │  Ends on `quit` or end of input.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use shelf_core::{Item, Store};
use tracing::debug;

use crate::commands::{Command, HELP};

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A store plus the presentation bits of the shell.
#[derive(Debug)]
pub struct Session {
    store: Store,
    store_name: String,
}

impl Session {
    pub fn new(store: Store, store_name: impl Into<String>) -> Self {
        Session {
            store,
            store_name: store_name.into(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Reads commands from `input` until `quit` or end of input.
    ///
    /// With `interactive` set, a greeting and a prompt are written as well.
    pub fn run<R, W>(&mut self, input: R, out: &mut W, interactive: bool) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        if interactive {
            writeln!(
                out,
                "Welcome to {} ({} items). Type 'help' for commands.",
                self.store_name,
                self.store.items().len()
            )?;
        }

        let mut lines = input.lines();
        loop {
            if interactive {
                write!(out, "> ")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command, out)? == Flow::Quit {
                        break;
                    }
                }
                Err(err) => writeln!(out, "error: {}", err)?,
            }
        }

        Ok(())
    }

    /// Runs a single command, writing its result (or error) to `out`.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        debug!(?command, "Executing command");

        match command {
            Command::Items => {
                let items: Vec<&Item> = self.store.items().iter().collect();
                write_items(out, &items)?;
            }
            Command::Search(query) => write_items(out, &self.store.search_by_name(&query))?,
            Command::Tag(hashtag) => write_items(out, &self.store.search_by_hashtag(&hashtag))?,
            Command::Add(query) => match self.store.add_by_name(&query) {
                Ok(item) => writeln!(out, "Added '{}' to the cart.", item.name)?,
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            Command::Remove(query) => match self.store.remove_by_name(&query) {
                Ok(item) => writeln!(out, "Removed '{}' from the cart.", item.name)?,
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            Command::Cart => {
                let cart = self.store.cart();
                let items: Vec<&Item> = cart.items().iter().collect();
                write_items(out, &items)?;
                writeln!(out, "Subtotal: {}", cart.subtotal())?;
            }
            Command::Checkout => writeln!(out, "Total: {}", self.store.checkout())?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}

fn write_items<W: Write>(out: &mut W, items: &[&Item]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "  (no items)");
    }

    for item in items {
        let tags: Vec<String> = item.hashtags.iter().map(|t| format!("#{}", t)).collect();
        writeln!(
            out,
            "  {:<24} {:>6}  {}",
            item.name,
            item.price,
            tags.join(" ")
        )?;
        if !item.description.is_empty() {
            writeln!(out, "      {}", item.description)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session() -> Session {
        Session::new(
            Store::new(vec![
                Item::new("Apple Pie", 12, ["sweet", "bakery"], ""),
                Item::new("Apple Juice", 5, ["fruit"], ""),
                Item::new("Honey Cake", 9, ["sweet", "sweet"], "Sticky"),
            ]),
            "Test Shop",
        )
    }

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session
            .run(Cursor::new(script), &mut out, false)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_remove_and_checkout() {
        let mut session = session();

        let output = run_script(&mut session, "add Pie\nadd Juice\ncheckout\nremove Juice\ncart\n");

        assert!(output.contains("Added 'Apple Pie' to the cart."));
        assert!(output.contains("Added 'Apple Juice' to the cart."));
        assert!(output.contains("Total: 17"));
        assert!(output.contains("Removed 'Apple Juice' from the cart."));
        assert!(output.contains("Subtotal: 12"));
        assert_eq!(session.store().cart().len(), 1);
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let mut session = session();

        let output = run_script(&mut session, "add Apple\nfly away\nadd\nadd Honey\n");

        assert!(output.contains("error: Too many items in the store match the name 'Apple'"));
        assert!(output.contains("error: Unknown command 'fly'"));
        assert!(output.contains("error: Usage: add NAME"));
        assert!(output.contains("Added 'Honey Cake' to the cart."));
    }

    #[test]
    fn test_search_output_is_ranked() {
        let mut session = session();

        let output = run_script(&mut session, "add Pie\nsearch\n");

        let honey = output.find("Honey Cake").unwrap();
        let juice = output.find("Apple Juice").unwrap();
        assert!(honey < juice);
        assert_eq!(output.matches("Apple Pie").count(), 1);
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = session();

        let output = run_script(&mut session, "quit\nadd Pie\n");

        assert!(output.is_empty());
        assert!(session.store().cart().is_empty());
    }

    #[test]
    fn test_empty_results_and_blank_lines() {
        let mut session = session();

        let output = run_script(&mut session, "\n   \ntag spicy\n");

        assert_eq!(output, "  (no items)\n");
    }

    #[test]
    fn test_interactive_greeting_and_prompt() {
        let mut session = session();
        let mut out = Vec::new();

        session
            .run(Cursor::new("checkout\n"), &mut out, true)
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Welcome to Test Shop (3 items)."));
        assert!(output.contains("> Total: 0"));
    }
}
