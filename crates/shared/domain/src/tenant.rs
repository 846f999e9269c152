//! Tenant entity: the isolation boundary every user and person belongs to.

use serde::Serialize;

use crate::constants::MAX_TENANT_NAME_LENGTH;
use crate::contact_information::ContactInformation;
use crate::enablement::Enablement;
use crate::error::{check_text, DomainError, DomainResult, PolicyViolation};
use crate::full_name::FullName;
use crate::password::PasswordService;
use crate::person::Person;
use crate::tenant_id::TenantId;
use crate::user::User;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    tenant_id: TenantId,
    name: String,
    active: bool,
}

impl Tenant {
    /// Validate the name, then the identifier.
    ///
    /// # Errors
    /// Required/length errors for the name; a required error for the nil
    /// identifier.
    pub fn new(tenant_id: TenantId, name: &str, active: bool) -> DomainResult<Self> {
        const OP: &str = "Tenant::new";

        check_text(OP, "tenant name", name, 1, MAX_TENANT_NAME_LENGTH)?;
        if tenant_id.is_nil() {
            return Err(DomainError::required(OP, "tenant id"));
        }

        Ok(Self {
            tenant_id,
            name: name.to_string(),
            active,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Register a user under this tenant. Only active tenants accept users.
    pub fn register_user(
        &self,
        username: &str,
        plain_password: &str,
        enablement: Enablement,
        passwords: &PasswordService,
    ) -> DomainResult<User> {
        if !self.active {
            return Err(DomainError::policy(
                "Tenant::register_user",
                PolicyViolation::TenantInactive,
            ));
        }
        User::new(
            self.tenant_id.clone(),
            username,
            plain_password,
            enablement,
            passwords,
        )
    }

    pub fn register_person(&self, name: FullName, contact_information: ContactInformation) -> Person {
        Person::new(self.tenant_id.clone(), name, contact_information)
    }
}

/// Tenants are the same entity when their identifiers match.
impl PartialEq for Tenant {
    fn eq(&self, other: &Self) -> bool {
        self.tenant_id == other.tenant_id
    }
}

impl Eq for Tenant {}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use uuid::Uuid;

    use super::*;
    use crate::email_address::EmailAddress;
    use crate::error::ErrorKind;
    use crate::password::{Argon2Hasher, PasswordPolicy};
    use crate::postal_address::PostalAddress;
    use crate::telephone::Telephone;

    fn passwords() -> PasswordService {
        let hasher = Argon2Hasher::with_params(1024, 1, 1).unwrap();
        PasswordService::new(Arc::new(hasher), PasswordPolicy::default())
    }

    #[test]
    fn test_new_tenant() {
        let uu = Uuid::new_v4().to_string();
        let tenant_id = TenantId::new(&uu).unwrap();

        let tenant = Tenant::new(tenant_id, "TenantName", true).unwrap();

        assert_eq!(tenant.tenant_id().as_str(), uu);
        assert_eq!(tenant.name(), "TenantName");
        assert!(tenant.is_active());
    }

    #[test]
    fn test_empty_name() {
        let err = Tenant::new(TenantId::generate(), "", true).unwrap_err();
        assert_eq!(err, DomainError::required("Tenant::new", "tenant name"));
        assert_eq!(err.to_string(), "Tenant::new: tenant name is required.");
    }

    #[test]
    fn test_name_over_100_characters() {
        let err = Tenant::new(TenantId::generate(), &"a".repeat(101), true).unwrap_err();
        assert_eq!(err, DomainError::length("Tenant::new", "tenant name", 1, 100, 101));
    }

    #[test]
    fn test_nil_tenant_id() {
        let err = Tenant::new(TenantId::from(Uuid::nil()), "TenantName", true).unwrap_err();
        assert_eq!(err, DomainError::required("Tenant::new", "tenant id"));

        // name is checked first
        let err = Tenant::new(TenantId::from(Uuid::nil()), "", true).unwrap_err();
        assert_eq!(err, DomainError::required("Tenant::new", "tenant name"));
    }

    #[test]
    fn test_tenant_equals() {
        let tenant_id = TenantId::generate();
        let tenant = Tenant::new(tenant_id.clone(), "TenantName", true).unwrap();
        let renamed = Tenant::new(tenant_id, "Other", false).unwrap();
        assert_eq!(tenant, renamed);

        let other = Tenant::new(TenantId::generate(), "TenantName", true).unwrap();
        assert_ne!(tenant, other);
    }

    #[test]
    fn test_activation() {
        let mut tenant = Tenant::new(TenantId::generate(), "TenantName", false).unwrap();
        assert!(!tenant.is_active());

        tenant.activate();
        assert!(tenant.is_active());

        tenant.deactivate();
        assert!(!tenant.is_active());
    }

    #[test]
    fn test_register_user() {
        let tenant = Tenant::new(TenantId::generate(), "TenantName", true).unwrap();
        let user = tenant
            .register_user("userName", "qwerty!ASDFG#", Enablement::indefinite(), &passwords())
            .unwrap();

        assert_eq!(user.tenant_id(), tenant.tenant_id());
    }

    #[test]
    fn test_inactive_tenant_refuses_users() {
        let tenant = Tenant::new(TenantId::generate(), "TenantName", false).unwrap();
        let err = tenant
            .register_user("userName", "qwerty!ASDFG#", Enablement::indefinite(), &passwords())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Policy);
        assert_eq!(err.violation(), Some(PolicyViolation::TenantInactive));
    }

    #[test]
    fn test_register_person() {
        let tenant = Tenant::new(TenantId::generate(), "TenantName", true).unwrap();
        let person = tenant.register_person(
            FullName::new("Jane", "Doe").unwrap(),
            ContactInformation::new(
                EmailAddress::new("jane@example.com").unwrap(),
                PostalAddress::new("1 Main St", "Springfield", "IL", "62701", "US").unwrap(),
                Telephone::new("555-0100").unwrap(),
                Telephone::new("555-0101").unwrap(),
            ),
        );

        assert_eq!(person.tenant_id(), tenant.tenant_id());
    }
}
