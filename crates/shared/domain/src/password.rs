//! Password value object and the password collaborators.
//!
//! DDD: The domain decides *when* a password is hashed, compared or rated;
//! the hashing algorithm sits behind [`PasswordHasher`].
//! DRY: Centralized Argon2 configuration in [`Argon2Hasher`].

use std::sync::Arc;

use argon2::{
    password_hash::{
        rand_core::{OsRng, RngCore},
        PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::constants::{
    DEFAULT_GENERATED_PASSWORD_LENGTH, DEFAULT_STRONG_THRESHOLD, DEFAULT_VERY_STRONG_THRESHOLD,
    PASSWORD_DIGITS, PASSWORD_LETTERS, PASSWORD_SYMBOLS,
};
use crate::error::{DomainError, DomainResult, PolicyViolation};

/// Generated passwords are never shorter than this.
const MIN_GENERATED_PASSWORD_LENGTH: usize = 12;

/// Attempts before password generation gives up.
const MAX_GENERATION_ATTEMPTS: usize = 1000;

/// Hash-on-write, verify-on-read primitive.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain text password into an encoded string.
    fn hash(&self, plain_text: &str) -> DomainResult<String>;

    /// Check a plain text password against an encoded hash.
    fn verify(&self, plain_text: &str, hash: &str) -> bool;
}

/// Argon2id hasher producing PHC strings with a random salt.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Build a hasher with explicit cost parameters.
    ///
    /// # Errors
    /// Returns a hashing error when argon2 rejects the parameters.
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> DomainResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| DomainError::hashing(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Self { params })
    }

    #[inline]
    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::hashing(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, plain_text: &str, hash: &str) -> bool {
        // cost parameters are read back from the PHC string
        PasswordHash::new(hash)
            .map(|parsed| {
                self.argon2()
                    .verify_password(plain_text.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

/// Password value object holding only the encoded hash.
///
/// DDD: Value object - immutable, compared by value.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// # Errors
    /// Returns a required error for an empty password, or the hasher's error.
    pub fn new(plain_text: &str, hasher: &dyn PasswordHasher) -> DomainResult<Self> {
        if plain_text.is_empty() {
            return Err(DomainError::required("Password::new", "password"));
        }

        let hash = hasher.hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str, hasher: &dyn PasswordHasher) -> bool {
        hasher.verify(plain_text, &self.hash)
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

/// Rating of a plain text password under a [`PasswordPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Strong,
    VeryStrong,
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasswordStrength::Weak => write!(f, "weak"),
            PasswordStrength::Strong => write!(f, "strong"),
            PasswordStrength::VeryStrong => write!(f, "very strong"),
        }
    }
}

/// Scoring rule for password strength.
///
/// ```text
/// score  = len > 7 ? 10 + (len - 7) : 0
/// score += uppercase + lowercase + symbols
/// score += letters + digits        (only when both counts are >= 2)
/// ```
///
/// A password scoring below `strong_threshold` is weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub strong_threshold: u32,
    pub very_strong_threshold: u32,
    pub generated_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            strong_threshold: DEFAULT_STRONG_THRESHOLD,
            very_strong_threshold: DEFAULT_VERY_STRONG_THRESHOLD,
            generated_length: DEFAULT_GENERATED_PASSWORD_LENGTH,
        }
    }
}

impl PasswordPolicy {
    pub fn score(&self, plain_text: &str) -> u32 {
        let length = plain_text.chars().count() as u32;
        let mut score = 0;
        if length > 7 {
            score += 10 + (length - 7);
        }

        let (mut digits, mut letters, mut lower, mut upper, mut symbols) = (0u32, 0u32, 0u32, 0u32, 0u32);
        for ch in plain_text.chars() {
            if ch.is_alphabetic() {
                letters += 1;
                if ch.is_uppercase() {
                    upper += 1;
                } else if ch.is_lowercase() {
                    lower += 1;
                }
            } else if ch.is_numeric() {
                digits += 1;
            } else if !ch.is_whitespace() {
                symbols += 1;
            }
        }

        score += upper + lower + symbols;
        if letters >= 2 && digits >= 2 {
            score += letters + digits;
        }
        score
    }

    pub fn strength(&self, plain_text: &str) -> PasswordStrength {
        let score = self.score(plain_text);
        if score >= self.very_strong_threshold {
            PasswordStrength::VeryStrong
        } else if score >= self.strong_threshold {
            PasswordStrength::Strong
        } else {
            PasswordStrength::Weak
        }
    }

    pub fn is_weak(&self, plain_text: &str) -> bool {
        self.strength(plain_text) == PasswordStrength::Weak
    }
}

/// Domain service bundling the hashing collaborator and the strength policy.
#[derive(Clone)]
pub struct PasswordService {
    hasher: Arc<dyn PasswordHasher>,
    policy: PasswordPolicy,
}

impl std::fmt::Debug for PasswordService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(Arc::new(Argon2Hasher::default()), PasswordPolicy::default())
    }
}

impl PasswordService {
    pub fn new(hasher: Arc<dyn PasswordHasher>, policy: PasswordPolicy) -> Self {
        Self { hasher, policy }
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    pub fn hasher(&self) -> &dyn PasswordHasher {
        self.hasher.as_ref()
    }

    pub fn hash(&self, plain_text: &str) -> DomainResult<Password> {
        Password::new(plain_text, self.hasher())
    }

    pub fn verify(&self, plain_text: &str, password: &Password) -> bool {
        password.verify(plain_text, self.hasher())
    }

    pub fn strength(&self, plain_text: &str) -> PasswordStrength {
        self.policy.strength(plain_text)
    }

    /// Produce a random password that the policy rates at least strong.
    ///
    /// # Errors
    /// Returns a policy error when the thresholds cannot be met.
    pub fn generate_strong_password(&self) -> DomainResult<String> {
        let length = self.policy.generated_length.max(MIN_GENERATED_PASSWORD_LENGTH);
        let pools: [Vec<char>; 3] = [
            PASSWORD_LETTERS.chars().collect(),
            PASSWORD_DIGITS.chars().collect(),
            PASSWORD_SYMBOLS.chars().collect(),
        ];

        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate: String = (0..length)
                .map(|_| {
                    let pool = &pools[random_index(&mut OsRng, pools.len())];
                    pool[random_index(&mut OsRng, pool.len())]
                })
                .collect();

            if !self.policy.is_weak(&candidate) {
                return Ok(candidate);
            }
        }

        Err(DomainError::policy(
            "PasswordService::generate_strong_password",
            PolicyViolation::PasswordTooWeak,
        ))
    }
}

/// Uniform index in `0..len`. Draws above the largest multiple of `len`
/// are rejected so every index is equally likely.
fn random_index<R: RngCore>(rng: &mut R, len: usize) -> usize {
    let len = len as u64;
    let limit = (1u64 << 32) / len * len;
    loop {
        let draw = u64::from(rng.next_u32());
        if draw < limit {
            return (draw % len) as usize;
        }
    }
}
