//! Contact record: one person's name, phone numbers and birthday.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// Phones keep insertion order and may contain duplicates. All mutation
/// goes through validating methods, so a failed call leaves the record
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns whether anything was removed; an absent phone is not an error.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first stored phone with a new validated number.
    ///
    /// # Errors
    ///
    /// - `BookError::EmptyPhoneList` when the record has no phones
    /// - `BookError::Validation` when `phone` is not a valid number
    pub fn edit_first_phone(&mut self, phone: &str) -> BookResult<()> {
        if self.phones.is_empty() {
            return Err(BookError::EmptyPhoneList(self.name.to_string()));
        }
        let phone = Phone::new(phone)?;
        self.phones[0] = phone;
        Ok(())
    }

    /// Look up a stored phone by exact match.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Remove every phone, returning how many were dropped.
    pub fn clear_phones(&mut self) -> usize {
        let count = self.phones.len();
        self.phones.clear();
        count
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Phones joined the way they are displayed: `p1; p2`.
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}; birthday: ",
            self.name,
            self.phone_list()
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "None"),
        }
    }
}
