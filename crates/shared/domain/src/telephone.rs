//! Telephone number value object.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants::{MAX_TELEPHONE_LENGTH, MIN_TELEPHONE_LENGTH};
use crate::error::{check_text, DomainError, DomainResult};

/// Digit groups separated by single hyphens, e.g. `090-1234-5678`.
static TELEPHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(-[0-9]+)*$").expect("valid telephone pattern"));

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Telephone {
    number: String,
}

impl Telephone {
    pub fn new(number: &str) -> DomainResult<Self> {
        const OP: &str = "Telephone::new";

        check_text(
            OP,
            "telephone number",
            number,
            MIN_TELEPHONE_LENGTH,
            MAX_TELEPHONE_LENGTH,
        )?;
        if !TELEPHONE_PATTERN.is_match(number) {
            return Err(DomainError::format(OP, "telephone number", number));
        }

        Ok(Self {
            number: number.to_string(),
        })
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

impl PartialEq for Telephone {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Telephone {}

impl fmt::Display for Telephone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.number)
    }
}
