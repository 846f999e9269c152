//! User domain entity.

use serde::Serialize;

use crate::clock::Clock;
use crate::constants::{MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH};
use crate::enablement::Enablement;
use crate::error::{check_text, DomainError, DomainResult, PolicyViolation};
use crate::password::{Password, PasswordPolicy, PasswordService};
use crate::tenant_id::TenantId;

/// User domain entity, identified by its tenant.
///
/// The plain text password handed to [`User::new`] or
/// [`User::change_password`] is hashed immediately and never kept.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    tenant_id: TenantId,
    username: String,
    #[serde(skip_serializing)]
    password: Password,
    enablement: Enablement,
}

impl User {
    /// Register a new user.
    ///
    /// Checks the username (required, then length), the tenant id (not nil),
    /// then the password (not weak, not equal to the username), then hashes it.
    pub fn new(
        tenant_id: TenantId,
        username: &str,
        plain_password: &str,
        enablement: Enablement,
        passwords: &PasswordService,
    ) -> DomainResult<Self> {
        check_text(
            "User::new",
            "username",
            username,
            MIN_USERNAME_LENGTH,
            MAX_USERNAME_LENGTH,
        )?;
        if tenant_id.is_nil() {
            return Err(DomainError::required("User::new", "tenant id"));
        }

        // replaced by protect_password before the user is handed out
        let mut user = Self {
            tenant_id,
            username: username.to_string(),
            password: Password::from_hash(String::new()),
            enablement,
        };
        user.protect_password("", plain_password, passwords)?;
        Ok(user)
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The stored (hashed) password
    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn enablement(&self) -> &Enablement {
        &self.enablement
    }

    /// Replace the enablement window
    pub fn define_enablement(&mut self, enablement: Enablement) {
        self.enablement = enablement;
    }

    pub fn is_enabled(&self, clock: &dyn Clock) -> bool {
        self.enablement.is_enabled(clock)
    }

    pub fn verify_password(&self, plain_password: &str, passwords: &PasswordService) -> bool {
        passwords.verify(plain_password, &self.password)
    }

    /// Change the password after confirming the current one.
    ///
    /// # Errors
    /// Fails when the current password does not verify, or when the new
    /// password is unchanged, weak or equal to the username. The stored
    /// password is left untouched on failure.
    pub fn change_password(
        &mut self,
        current_password: &str,
        new_password: &str,
        passwords: &PasswordService,
    ) -> DomainResult<()> {
        if !self.verify_password(current_password, passwords) {
            return Err(DomainError::policy(
                "User::change_password",
                PolicyViolation::CurrentPasswordNotConfirmed,
            ));
        }
        self.protect_password(current_password, new_password, passwords)
    }

    pub fn assert_password_not_same(&self, current_password: &str, new_password: &str) -> DomainResult<()> {
        if current_password == new_password {
            return Err(DomainError::policy(
                "User::assert_password_not_same",
                PolicyViolation::PasswordUnchanged,
            ));
        }
        Ok(())
    }

    /// Case-sensitive comparison against the username.
    pub fn assert_username_password_not_same(&self, new_password: &str) -> DomainResult<()> {
        if self.username == new_password {
            return Err(DomainError::policy(
                "User::assert_username_password_not_same",
                PolicyViolation::PasswordEqualsUsername,
            ));
        }
        Ok(())
    }

    pub fn assert_password_not_weak(&self, new_password: &str, policy: &PasswordPolicy) -> DomainResult<()> {
        const OP: &str = "User::assert_password_not_weak";

        if new_password.is_empty() {
            return Err(DomainError::required(OP, "password"));
        }
        if policy.is_weak(new_password) {
            return Err(DomainError::policy(OP, PolicyViolation::PasswordTooWeak));
        }
        Ok(())
    }

    fn protect_password(
        &mut self,
        current_password: &str,
        new_password: &str,
        passwords: &PasswordService,
    ) -> DomainResult<()> {
        if !current_password.is_empty() {
            self.assert_password_not_same(current_password, new_password)?;
        }
        self.assert_password_not_weak(new_password, passwords.policy())?;
        self.assert_username_password_not_same(new_password)?;

        self.password = passwords.hash(new_password)?;
        Ok(())
    }
}

/// Users are the same entity when they belong to the same tenant.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.tenant_id == other.tenant_id
    }
}

impl Eq for User {}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::clock::FixedClock;
    use crate::error::ErrorKind;
    use crate::password::{Argon2Hasher, MockPasswordHasher};

    const USERNAME: &str = "userName";
    const PASSWORD: &str = "qwerty!ASDFG#";

    fn passwords() -> PasswordService {
        let hasher = Argon2Hasher::with_params(1024, 1, 1).unwrap();
        PasswordService::new(Arc::new(hasher), PasswordPolicy::default())
    }

    fn at(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
    }

    fn enablement() -> Enablement {
        Enablement::new(true, Some(at(2020)), Some(at(2030))).unwrap()
    }

    fn create_test_user(tenant_id: TenantId) -> User {
        User::new(tenant_id, USERNAME, PASSWORD, enablement(), &passwords()).unwrap()
    }

    #[test]
    fn test_new_user() {
        let tenant_id = TenantId::generate();
        let service = passwords();
        let user = User::new(tenant_id.clone(), USERNAME, PASSWORD, enablement(), &service).unwrap();

        assert_eq!(user.tenant_id(), &tenant_id);
        assert_eq!(user.username(), USERNAME);
        assert_eq!(user.enablement(), &enablement());
        assert_ne!(user.password().as_str(), PASSWORD);
        assert!(user.verify_password(PASSWORD, &service));
    }

    #[test]
    fn test_username_required() {
        let err = User::new(TenantId::generate(), "", PASSWORD, enablement(), &passwords()).unwrap_err();
        assert_eq!(err, DomainError::required("User::new", "username"));
    }

    #[test]
    fn test_nil_tenant_id() {
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().never();
        let service = PasswordService::new(Arc::new(hasher), PasswordPolicy::default());

        let err = User::new(TenantId::from(Uuid::nil()), USERNAME, PASSWORD, enablement(), &service)
            .unwrap_err();
        assert_eq!(err, DomainError::required("User::new", "tenant id"));
    }

    #[test]
    fn test_username_too_short() {
        let err = User::new(TenantId::generate(), "na", PASSWORD, enablement(), &passwords()).unwrap_err();
        assert_eq!(err, DomainError::length("User::new", "username", 3, 250, 2));
    }

    #[test]
    fn test_username_too_long() {
        let username = "a".repeat(251);
        let err = User::new(TenantId::generate(), &username, PASSWORD, enablement(), &passwords())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Length);
    }

    #[test]
    fn test_username_checked_before_hashing() {
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().never();
        let service = PasswordService::new(Arc::new(hasher), PasswordPolicy::default());

        assert!(User::new(TenantId::generate(), "na", PASSWORD, enablement(), &service).is_err());
    }

    #[test]
    fn test_weak_password_rejected_at_creation() {
        let err = User::new(TenantId::generate(), USERNAME, "123456", enablement(), &passwords())
            .unwrap_err();
        assert_eq!(err.violation(), Some(PolicyViolation::PasswordTooWeak));
    }

    #[test]
    fn test_password_equal_to_username_rejected_at_creation() {
        let username = "Strong!Username#2024";
        let err = User::new(TenantId::generate(), username, username, enablement(), &passwords())
            .unwrap_err();
        assert_eq!(err.violation(), Some(PolicyViolation::PasswordEqualsUsername));
    }

    #[test]
    fn test_hashing_failure_propagates() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Err(DomainError::hashing("boom")));
        let service = PasswordService::new(Arc::new(hasher), PasswordPolicy::default());

        let err = User::new(TenantId::generate(), USERNAME, PASSWORD, enablement(), &service)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Collaborator);
    }

    #[test]
    fn test_assert_password_not_same() {
        let user = create_test_user(TenantId::generate());

        assert!(user.assert_password_not_same(PASSWORD, "ASDFG#qwerty!").is_ok());

        let err = user.assert_password_not_same(PASSWORD, "qwerty!ASDFG#").unwrap_err();
        assert_eq!(
            err.to_string(),
            "User::assert_password_not_same: The password is unchanged."
        );
    }

    #[test]
    fn test_assert_username_password_not_same() {
        let user = create_test_user(TenantId::generate());

        assert!(user.assert_username_password_not_same("qwerty!ASDFG#").is_ok());
        assert!(user.assert_username_password_not_same("username").is_ok());

        let err = user.assert_username_password_not_same("userName").unwrap_err();
        assert_eq!(err.violation(), Some(PolicyViolation::PasswordEqualsUsername));
    }

    #[test]
    fn test_assert_password_not_weak() {
        let user = create_test_user(TenantId::generate());
        let policy = PasswordPolicy::default();

        assert!(user.assert_password_not_weak("qwerty!ASDFG", &policy).is_ok());

        let err = user.assert_password_not_weak("", &policy).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Required);

        let err = user.assert_password_not_weak("123456", &policy).unwrap_err();
        assert_eq!(
            err.to_string(),
            "User::assert_password_not_weak: The password must be stronger."
        );
    }

    #[test]
    fn test_change_password() {
        let service = passwords();
        let mut user = User::new(TenantId::generate(), USERNAME, PASSWORD, enablement(), &service).unwrap();

        user.change_password(PASSWORD, "ASDFG#qwerty!", &service).unwrap();

        assert!(user.verify_password("ASDFG#qwerty!", &service));
        assert!(!user.verify_password(PASSWORD, &service));
    }

    #[test]
    fn test_change_password_requires_current() {
        let service = passwords();
        let mut user = User::new(TenantId::generate(), USERNAME, PASSWORD, enablement(), &service).unwrap();
        let before = user.password().clone();

        let err = user.change_password("wrong", "ASDFG#qwerty!", &service).unwrap_err();
        assert_eq!(err.violation(), Some(PolicyViolation::CurrentPasswordNotConfirmed));

        let err = user.change_password(PASSWORD, PASSWORD, &service).unwrap_err();
        assert_eq!(err.violation(), Some(PolicyViolation::PasswordUnchanged));

        let err = user.change_password(PASSWORD, "123456", &service).unwrap_err();
        assert_eq!(err.violation(), Some(PolicyViolation::PasswordTooWeak));

        assert_eq!(user.password(), &before);
    }

    #[test]
    fn test_enablement() {
        let mut user = create_test_user(TenantId::generate());

        assert!(user.is_enabled(&FixedClock(at(2025))));
        assert!(!user.is_enabled(&FixedClock(at(2031))));

        user.define_enablement(Enablement::disabled());
        assert!(!user.is_enabled(&FixedClock(at(2025))));
    }

    #[test]
    fn test_user_equals() {
        let tenant_id = TenantId::generate();
        let user = create_test_user(tenant_id.clone());

        let service = passwords();
        let other = User::new(tenant_id, "someoneElse", "ASDFG#qwerty!", Enablement::disabled(), &service)
            .unwrap();
        assert_eq!(user, other);

        let stranger = create_test_user(TenantId::generate());
        assert_ne!(user, stranger);
    }

    #[test]
    fn test_debug_hides_password_hash() {
        let user = create_test_user(TenantId::generate());
        let debug = format!("{:?}", user);
        assert!(!debug.contains(user.password().as_str()));
    }
}
