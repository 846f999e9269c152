//! Postal address value object.

use serde::Serialize;

use crate::constants::{
    COUNTRY_CODE_LENGTH, MAX_CITY_LENGTH, MAX_POSTAL_CODE_LENGTH, MAX_STATE_PROVINCE_LENGTH,
    MAX_STREET_ADDRESS_LENGTH, MIN_POSTAL_CODE_LENGTH, MIN_STATE_PROVINCE_LENGTH,
};
use crate::error::{check_text, DomainResult};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    street_address: String,
    city: String,
    state_province: String,
    postal_code: String,
    country_code: String,
}

impl PostalAddress {
    /// Validate and build a postal address. Fields are checked in argument order.
    pub fn new(
        street_address: &str,
        city: &str,
        state_province: &str,
        postal_code: &str,
        country_code: &str,
    ) -> DomainResult<Self> {
        const OP: &str = "PostalAddress::new";

        check_text(OP, "street address", street_address, 1, MAX_STREET_ADDRESS_LENGTH)?;
        check_text(OP, "city", city, 1, MAX_CITY_LENGTH)?;
        check_text(
            OP,
            "state/province",
            state_province,
            MIN_STATE_PROVINCE_LENGTH,
            MAX_STATE_PROVINCE_LENGTH,
        )?;
        check_text(
            OP,
            "postal code",
            postal_code,
            MIN_POSTAL_CODE_LENGTH,
            MAX_POSTAL_CODE_LENGTH,
        )?;
        check_text(
            OP,
            "country code",
            country_code,
            COUNTRY_CODE_LENGTH,
            COUNTRY_CODE_LENGTH,
        )?;

        Ok(Self {
            street_address: street_address.to_string(),
            city: city.to_string(),
            state_province: state_province.to_string(),
            postal_code: postal_code.to_string(),
            country_code: country_code.to_string(),
        })
    }

    pub fn street_address(&self) -> &str {
        &self.street_address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state_province(&self) -> &str {
        &self.state_province
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// `"<street>, <city>, <state> <postal> <country>"`
    pub fn as_formatted_address(&self) -> String {
        format!(
            "{}, {}, {} {} {}",
            self.street_address, self.city, self.state_province, self.postal_code, self.country_code
        )
    }
}

impl PartialEq for PostalAddress {
    fn eq(&self, other: &Self) -> bool {
        self.street_address == other.street_address
            && self.city == other.city
            && self.state_province == other.state_province
            && self.postal_code == other.postal_code
            && self.country_code == other.country_code
    }
}

impl Eq for PostalAddress {}
