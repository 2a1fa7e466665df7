//! Applies parsed commands to an address book.

use super::Command;
use crate::config::Config;
use crate::domain::{normalize_phone, today, Field};
use crate::error::{BookError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user; the session continues
    Reply(String),

    /// Text to show the user; the session ends
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Reply(msg) | Outcome::Exit(msg) => msg,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit(_))
    }
}

/// Owns the address book for one session and executes commands against it.
#[derive(Debug)]
pub struct CommandProcessor {
    book: AddressBook,
    page_size: usize,
    fixed_date: Option<NaiveDate>,
}

impl CommandProcessor {
    /// Create a processor around `book`, listing `page_size` records per page.
    pub fn new(book: AddressBook, page_size: usize) -> Self {
        Self {
            book,
            page_size,
            fixed_date: None,
        }
    }

    /// Create a processor with an empty book, configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(AddressBook::new(), config.page_size)
    }

    /// Validate birthdays and count days against `date` instead of the clock.
    pub fn with_fixed_date(mut self, date: NaiveDate) -> Self {
        self.fixed_date = Some(date);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Parse `line` and execute it.
    pub fn handle_line(&mut self, line: &str) -> CommandResult<Outcome> {
        let command = Command::parse(line)?;
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> CommandResult<Outcome> {
        tracing::debug!(?command, "Executing command");

        let reply = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => self.add(name, &phone)?,
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => {
                let record = self.book.find_mut(&name)?;
                let old = normalize_phone(&old_phone)?;
                record.phones_mut().edit_phone(&old, &new_phone)?;
                format!("The phone number for {} has been updated", name)
            }
            Command::Phone { name } => {
                let record = self.book.find(&name)?;
                match record.phones().get() {
                    Some(_) => format!("The phone number for {} is {}", name, record.phones()),
                    None => format!("{} has no phone numbers", name),
                }
            }
            Command::Remove { name, phone: None } => {
                self.book.remove_record(&name)?;
                format!("{} has been removed from your contacts", name)
            }
            Command::Remove {
                name,
                phone: Some(phone),
            } => {
                let formatted = normalize_phone(&phone)?;
                self.book
                    .find_mut(&name)?
                    .phones_mut()
                    .remove_phone(&formatted)?;
                format!("The phone number {} for {} is deleted", formatted, name)
            }
            Command::Birthday { name, date } => {
                let today = self.today();
                let record = self.book.find_mut(&name)?;
                record.birthday_mut().set_at(Some(&date), today)?;
                format!("Birthday for {} set to {}", name, record.birthday())
            }
            Command::Days { name } => {
                let today = self.today();
                let record = self.book.find(&name)?;
                match record.days_to_birthday_from(today) {
                    Some(days) => format!("{} days until {}'s birthday", days, name),
                    None => format!("No birthday set for {}", name),
                }
            }
            Command::ShowAll => self.show_all()?,
            Command::Exit => return Ok(Outcome::Exit("Good bye!".to_string())),
        };

        Ok(Outcome::Reply(reply))
    }

    fn add(&mut self, name: String, phone: &str) -> Result<String, BookError> {
        if let Ok(record) = self.book.find_mut(&name) {
            let formatted = record.phones_mut().add_phone(phone)?;
            return Ok(format!("Phone {} added to {}", formatted, name));
        }

        let mut record = Record::new(name.as_str());
        record.phones_mut().add_phone(phone)?;
        self.book.add_record(record);
        tracing::info!(name = %name, "Contact created");
        Ok(format!("{} has been added to your contacts", name))
    }

    fn show_all(&self) -> Result<String, BookError> {
        if self.book.is_empty() {
            return Ok("You have no contacts".to_string());
        }

        let pages: Vec<String> = self
            .book
            .iter_batches(self.page_size)?
            .enumerate()
            .map(|(i, batch)| {
                let lines: Vec<String> = batch.iter().map(Record::to_string).collect();
                format!("Page {}:\n{}", i + 1, lines.join("\n"))
            })
            .collect();
        Ok(pages.join("\n"))
    }

    fn today(&self) -> NaiveDate {
        self.fixed_date.unwrap_or_else(today)
    }
}
