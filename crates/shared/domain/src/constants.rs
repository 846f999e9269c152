//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Names
// =============================================================================

/// Maximum length of a first or last name
pub const MAX_NAME_LENGTH: usize = 50;

/// Minimum length of a first or last name
pub const MIN_NAME_LENGTH: usize = 1;

/// Maximum length of a tenant name
pub const MAX_TENANT_NAME_LENGTH: usize = 100;

// =============================================================================
// Contact details
// =============================================================================

pub const MIN_TELEPHONE_LENGTH: usize = 5;
pub const MAX_TELEPHONE_LENGTH: usize = 20;

pub const MAX_EMAIL_ADDRESS_LENGTH: usize = 100;

pub const MAX_STREET_ADDRESS_LENGTH: usize = 100;
pub const MAX_CITY_LENGTH: usize = 100;
pub const MIN_STATE_PROVINCE_LENGTH: usize = 2;
pub const MAX_STATE_PROVINCE_LENGTH: usize = 100;
pub const MIN_POSTAL_CODE_LENGTH: usize = 5;
pub const MAX_POSTAL_CODE_LENGTH: usize = 12;

/// Country codes are two-letter ISO codes
pub const COUNTRY_CODE_LENGTH: usize = 2;

// =============================================================================
// Users
// =============================================================================

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 250;

/// Score below which a password is considered weak
pub const DEFAULT_STRONG_THRESHOLD: u32 = 20;

/// Score at or above which a password is considered very strong
pub const DEFAULT_VERY_STRONG_THRESHOLD: u32 = 40;

/// Length of generated passwords
pub const DEFAULT_GENERATED_PASSWORD_LENGTH: usize = 16;

/// Characters a password may be generated from
pub const PASSWORD_DIGITS: &str = "0123456789";
pub const PASSWORD_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const PASSWORD_SYMBOLS: &str = "\"`!?$%^&*()_-+={[}]:;@'~#|\\<,>./";
