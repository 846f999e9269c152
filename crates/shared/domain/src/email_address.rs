//! Email address value object.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants::MAX_EMAIL_ADDRESS_LENGTH;
use crate::error::{check_text, DomainError, DomainResult};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([-+.']\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$").expect("valid email pattern")
});

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct EmailAddress {
    address: String,
}

impl EmailAddress {
    pub fn new(address: &str) -> DomainResult<Self> {
        const OP: &str = "EmailAddress::new";

        check_text(OP, "email address", address, 1, MAX_EMAIL_ADDRESS_LENGTH)?;
        if !EMAIL_PATTERN.is_match(address) {
            return Err(DomainError::format(OP, "email address", address));
        }

        Ok(Self {
            address: address.to_string(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl PartialEq for EmailAddress {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for EmailAddress {}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}
