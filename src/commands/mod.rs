//! Text command interface for front ends.
//!
//! A front end (the bundled binary, or anything else) turns a line of user
//! input into a [`Command`] and hands it to a [`CommandProcessor`], which
//! applies it to the address book and returns an [`Outcome`]. Errors from the
//! core are returned unchanged; rendering them is the front end's job.

pub mod processor;

pub use processor::{CommandProcessor, Outcome};

use crate::error::{CommandError, CommandResult};

/// One parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Greeting
    Hello,

    /// Create a contact, or append a phone to an existing one
    Add { name: String, phone: String },

    /// Replace one of a contact's phones
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Show a contact's phones
    Phone { name: String },

    /// Remove a whole contact, or a single phone when one is given
    Remove { name: String, phone: Option<String> },

    /// Set a contact's birthday
    Birthday { name: String, date: String },

    /// Days until a contact's next birthday
    Days { name: String },

    /// List every contact, page by page
    ShowAll,

    /// Leave the session
    Exit,
}

const EXIT_WORDS: [&str; 4] = ["good bye", "close", "exit", "."];

impl Command {
    /// Parse a line of input.
    ///
    /// The command word is matched case-insensitively; arguments are
    /// whitespace-separated and keep their case. For `add`, everything after
    /// the name is taken as the phone so spaced numbers work.
    ///
    /// # Errors
    ///
    /// - `CommandError::UnknownCommand` for an unrecognised command word
    /// - `CommandError::MissingArgument` when a required argument is absent
    pub fn parse(line: &str) -> CommandResult<Self> {
        let mut words: Vec<&str> = line.split_whitespace().collect();
        let phrase = words.join(" ").to_lowercase();
        if EXIT_WORDS.contains(&phrase.as_str()) {
            return Ok(Command::Exit);
        }
        if phrase == "show all" {
            return Ok(Command::ShowAll);
        }

        let keyword = if words.is_empty() {
            String::new()
        } else {
            words.remove(0).to_lowercase()
        };
        let mut args = Args {
            command: "",
            words: words.into_iter(),
        };

        let command = match keyword.as_str() {
            "hello" => Command::Hello,
            "add" => {
                args.command = "add";
                let name = args.required("name")?;
                let phone = args.remainder("phone")?;
                Command::Add { name, phone }
            }
            "change" => {
                args.command = "change";
                Command::Change {
                    name: args.required("name")?,
                    old_phone: args.required("old phone")?,
                    new_phone: args.required("new phone")?,
                }
            }
            "phone" => {
                args.command = "phone";
                Command::Phone {
                    name: args.required("name")?,
                }
            }
            "remove" => {
                args.command = "remove";
                let name = args.required("name")?;
                let phone = args.remainder("phone").ok();
                Command::Remove { name, phone }
            }
            "birthday" => {
                args.command = "birthday";
                Command::Birthday {
                    name: args.required("name")?,
                    date: args.required("date")?,
                }
            }
            "days" => {
                args.command = "days";
                Command::Days {
                    name: args.required("name")?,
                }
            }
            _ => return Err(CommandError::UnknownCommand(line.trim().to_string())),
        };

        Ok(command)
    }
}

struct Args<'a> {
    command: &'static str,
    words: std::vec::IntoIter<&'a str>,
}

impl Args<'_> {
    fn required(&mut self, argument: &'static str) -> CommandResult<String> {
        self.words
            .next()
            .map(str::to_string)
            .ok_or(CommandError::MissingArgument {
                command: self.command,
                argument,
            })
    }

    fn remainder(&mut self, argument: &'static str) -> CommandResult<String> {
        let rest = self.words.by_ref().collect::<Vec<_>>().join(" ");
        if rest.is_empty() {
            return Err(CommandError::MissingArgument {
                command: self.command,
                argument,
            });
        }
        Ok(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("hello").unwrap(), Command::Hello);
        assert_eq!(Command::parse("  HELLO ").unwrap(), Command::Hello);
        assert_eq!(Command::parse("show all").unwrap(), Command::ShowAll);
        assert_eq!(Command::parse("Show   All").unwrap(), Command::ShowAll);
    }

    #[test]
    fn test_parse_exit_words() {
        for line in ["good bye", "Good Bye", "close", "exit", "."] {
            assert_eq!(Command::parse(line).unwrap(), Command::Exit, "{line}");
        }
    }

    #[test]
    fn test_parse_add_keeps_spaced_phone() {
        assert_eq!(
            Command::parse("add Alice +1 123 456 7890").unwrap(),
            Command::Add {
                name: "Alice".to_string(),
                phone: "+1 123 456 7890".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_change() {
        assert_eq!(
            Command::parse("change Bob 1234567890 0987654321").unwrap(),
            Command::Change {
                name: "Bob".to_string(),
                old_phone: "1234567890".to_string(),
                new_phone: "0987654321".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_remove_with_and_without_phone() {
        assert_eq!(
            Command::parse("remove Bob").unwrap(),
            Command::Remove {
                name: "Bob".to_string(),
                phone: None,
            }
        );
        assert_eq!(
            Command::parse("remove Bob 123-456-7890").unwrap(),
            Command::Remove {
                name: "Bob".to_string(),
                phone: Some("123-456-7890".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_missing_arguments() {
        assert_eq!(
            Command::parse("add Alice"),
            Err(CommandError::MissingArgument {
                command: "add",
                argument: "phone",
            })
        );
        assert_eq!(
            Command::parse("birthday"),
            Err(CommandError::MissingArgument {
                command: "birthday",
                argument: "name",
            })
        );
        assert!(matches!(
            Command::parse("change Bob 1234567890"),
            Err(CommandError::MissingArgument {
                argument: "new phone",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Command::parse("dance wildly"),
            Err(CommandError::UnknownCommand("dance wildly".to_string()))
        );
        assert_eq!(
            Command::parse("   "),
            Err(CommandError::UnknownCommand(String::new()))
        );
    }
}
