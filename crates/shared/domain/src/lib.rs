//! Domain layer - Identity and access entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! no I/O, no logging, no environment access.
//!
//! - Value objects (`TenantId`, `FullName`, `Telephone`, `EmailAddress`,
//!   `PostalAddress`, `ContactInformation`, `Password`, `Enablement`) validate
//!   themselves on construction and are never mutated afterwards.
//! - Entities (`Tenant`, `Person`, `User`) are assembled from valid value
//!   objects and change only through named operations.
//! - Collaborators (`PasswordHasher`, `Clock`) are traits so callers can
//!   inject them.

pub mod clock;
pub mod constants;
pub mod contact_information;
pub mod email_address;
pub mod enablement;
pub mod error;
pub mod full_name;
pub mod password;
pub mod person;
pub mod postal_address;
pub mod telephone;
pub mod tenant;
pub mod tenant_id;
pub mod user;

pub use clock::{Clock, FixedClock, SystemClock};
pub use contact_information::ContactInformation;
pub use email_address::EmailAddress;
pub use enablement::Enablement;
pub use error::{DomainError, DomainResult, ErrorKind, PolicyViolation};
pub use full_name::FullName;
pub use password::{
    Argon2Hasher, Password, PasswordHasher, PasswordPolicy, PasswordService, PasswordStrength,
};
pub use person::Person;
pub use postal_address::PostalAddress;
pub use telephone::Telephone;
pub use tenant::Tenant;
pub use tenant_id::TenantId;
pub use user::User;

#[cfg(any(test, feature = "test-utils"))]
pub use clock::MockClock;
#[cfg(any(test, feature = "test-utils"))]
pub use password::MockPasswordHasher;
