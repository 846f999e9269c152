//! Full name value object.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants::{MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use crate::error::{check_text, DomainError, DomainResult};

/// Only the leading capital is checked; whatever follows is accepted.
static FIRST_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]*").expect("valid first name pattern"));

static LAST_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z'][ a-zA-Z'-]*$").expect("valid last name pattern"));

/// A person's first and last name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullName {
    first_name: String,
    last_name: String,
}

impl FullName {
    /// Validate and build a full name.
    ///
    /// The first name is checked completely before the last name.
    pub fn new(first_name: &str, last_name: &str) -> DomainResult<Self> {
        const OP: &str = "FullName::new";

        check_text(OP, "first name", first_name, MIN_NAME_LENGTH, MAX_NAME_LENGTH)?;
        if !FIRST_NAME_PATTERN.is_match(first_name) {
            return Err(DomainError::format(OP, "first name", first_name));
        }

        check_text(OP, "last name", last_name, MIN_NAME_LENGTH, MAX_NAME_LENGTH)?;
        if !LAST_NAME_PATTERN.is_match(last_name) {
            return Err(DomainError::format(OP, "last name", last_name));
        }

        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// `"<first> <last>"`
    pub fn as_formatted_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// A new name with the first name replaced.
    pub fn with_changed_first_name(&self, first_name: &str) -> DomainResult<Self> {
        Self::new(first_name, &self.last_name)
    }

    /// A new name with the last name replaced.
    pub fn with_changed_last_name(&self, last_name: &str) -> DomainResult<Self> {
        Self::new(&self.first_name, last_name)
    }
}

impl PartialEq for FullName {
    fn eq(&self, other: &Self) -> bool {
        self.first_name == other.first_name && self.last_name == other.last_name
    }
}

impl Eq for FullName {}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FullName [firstName={}, lastName={}]",
            self.first_name, self.last_name
        )
    }
}
