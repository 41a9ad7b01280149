// 🪪 Name Entity - First/last name pair
//
// Both halves are validated independently at construction:
// - not blank
// - at most MAX_NAME_LENGTH characters
// - never contains ILLEGAL_SUBSTRING, in any casing

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BankError, Result};
use crate::validation::validate_string;

pub const MAX_NAME_LENGTH: usize = 45;
pub const ILLEGAL_SUBSTRING: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NameParts", into = "NameParts")]
pub struct Name {
    first_name: String,
    last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NameParts {
    first_name: String,
    last_name: String,
}

impl Name {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Result<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        validate_name(&first_name)?;
        validate_name(&last_name)?;

        Ok(Name {
            first_name,
            last_name,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Each part capitalized, joined by one space
    ///
    /// Example: ("aLBERT", "eiNSTEIN") → "Albert Einstein"
    pub fn full_name(&self) -> String {
        format!("{} {}", capitalize(&self.first_name), capitalize(&self.last_name))
    }

    /// Example: ("Albert", "Einstein") → "A.E."
    pub fn initials(&self) -> String {
        format!("{}.{}.", initial(&self.first_name), initial(&self.last_name))
    }

    /// "first last" in its original casing, reversed character by character
    ///
    /// Example: ("John", "Smith") → "htimS nhoJ"
    pub fn reverse_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .chars()
            .rev()
            .collect()
    }
}

fn validate_name(name: &str) -> Result<()> {
    validate_string(name, "Name")?;

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(BankError::invalid(format!(
            "Name exceeds maximum length of {}",
            MAX_NAME_LENGTH
        )));
    }

    if name.to_lowercase().contains(ILLEGAL_SUBSTRING) {
        return Err(BankError::invalid(format!(
            "Name contains illegal substring {}",
            ILLEGAL_SUBSTRING
        )));
    }

    Ok(())
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(&chars.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

fn initial(part: &str) -> String {
    part.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

impl TryFrom<NameParts> for Name {
    type Error = BankError;

    fn try_from(parts: NameParts) -> Result<Self> {
        Name::new(parts.first_name, parts.last_name)
    }
}

impl From<Name> for NameParts {
    fn from(name: Name) -> Self {
        NameParts {
            first_name: name.first_name,
            last_name: name.last_name,
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}
