//! Contact information value object.
//!
//! Aggregates an email address, a postal address and two telephone numbers.
//! Every `change_*` operation returns a new instance and leaves the receiver
//! untouched.

use serde::Serialize;

use crate::email_address::EmailAddress;
use crate::postal_address::PostalAddress;
use crate::telephone::Telephone;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInformation {
    email_address: EmailAddress,
    postal_address: PostalAddress,
    primary_telephone: Telephone,
    secondary_telephone: Telephone,
}

impl ContactInformation {
    /// Assemble contact information from already validated parts.
    pub fn new(
        email_address: EmailAddress,
        postal_address: PostalAddress,
        primary_telephone: Telephone,
        secondary_telephone: Telephone,
    ) -> Self {
        Self {
            email_address,
            postal_address,
            primary_telephone,
            secondary_telephone,
        }
    }

    /// Field-for-field duplicate sharing nothing with `existing`.
    pub fn copy_of(existing: &ContactInformation) -> Self {
        Self::new(
            existing.email_address.clone(),
            existing.postal_address.clone(),
            existing.primary_telephone.clone(),
            existing.secondary_telephone.clone(),
        )
    }

    pub fn change_email_address(&self, email_address: EmailAddress) -> Self {
        Self {
            email_address,
            ..Self::copy_of(self)
        }
    }

    pub fn change_postal_address(&self, postal_address: PostalAddress) -> Self {
        Self {
            postal_address,
            ..Self::copy_of(self)
        }
    }

    pub fn change_primary_telephone(&self, telephone: Telephone) -> Self {
        Self {
            primary_telephone: telephone,
            ..Self::copy_of(self)
        }
    }

    pub fn change_secondary_telephone(&self, telephone: Telephone) -> Self {
        Self {
            secondary_telephone: telephone,
            ..Self::copy_of(self)
        }
    }

    pub fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }

    pub fn postal_address(&self) -> &PostalAddress {
        &self.postal_address
    }

    pub fn primary_telephone(&self) -> &Telephone {
        &self.primary_telephone
    }

    pub fn secondary_telephone(&self) -> &Telephone {
        &self.secondary_telephone
    }
}

impl PartialEq for ContactInformation {
    fn eq(&self, other: &Self) -> bool {
        self.email_address == other.email_address
            && self.postal_address == other.postal_address
            && self.primary_telephone == other.primary_telephone
            && self.secondary_telephone == other.secondary_telephone
    }
}

impl Eq for ContactInformation {}
