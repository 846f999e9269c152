//! Tenant identifier value object.

use std::fmt;

use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Identifier of a tenant, held in canonical hyphenated lowercase form.
#[derive(Debug, Clone)]
pub struct TenantId {
    id: String,
    uuid: Uuid,
}

impl TenantId {
    /// Parse an identifier string.
    ///
    /// Accepts any textual form the UUID parser understands and stores the
    /// canonical hyphenated form.
    ///
    /// # Errors
    /// Returns [`DomainError::IdentifierParse`] wrapping the parser error.
    pub fn new(id: &str) -> DomainResult<Self> {
        let uuid = Uuid::parse_str(id).map_err(|source| DomainError::IdentifierParse {
            operation: "TenantId::new",
            value: id.to_string(),
            source,
        })?;
        Ok(Self::from(uuid))
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self::from(Uuid::new_v4())
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }

    pub fn as_uuid(&self) -> Uuid {
        self.uuid
    }

    /// True for the all-zero identifier.
    pub fn is_nil(&self) -> bool {
        self.as_uuid().is_nil()
    }
}

impl From<Uuid> for TenantId {
    fn from(uuid: Uuid) -> Self {
        Self {
            id: uuid.hyphenated().to_string(),
            uuid,
        }
    }
}

impl PartialEq for TenantId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TenantId {}

impl std::hash::Hash for TenantId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Serialize for TenantId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id)
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_tenant_id() {
        let uu = Uuid::new_v4().to_string();
        let tenant_id = TenantId::new(&uu).unwrap();

        assert_eq!(tenant_id.as_str(), uu);
    }

    #[test]
    fn test_invalid_uuid_length() {
        let err = TenantId::new("UUID").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::IdentifierParse);
        assert!(err.source().is_some());
        match err {
            DomainError::IdentifierParse { value, .. } => assert_eq!(value, "UUID"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_other_textual_forms_are_normalized() {
        let uuid = Uuid::new_v4();
        let simple = uuid.simple().to_string().to_uppercase();
        let braced = uuid.braced().to_string();

        let from_simple = TenantId::new(&simple).unwrap();
        let from_braced = TenantId::new(&braced).unwrap();

        assert_eq!(from_simple, from_braced);
        assert_eq!(from_simple.as_str(), uuid.hyphenated().to_string());
        assert_eq!(from_simple.as_uuid(), uuid);
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(TenantId::generate(), TenantId::generate());
        assert!(!TenantId::generate().is_nil());
    }

    #[test]
    fn test_nil() {
        assert!(TenantId::from(Uuid::nil()).is_nil());
    }
}
