//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use domain::constants::{
    DEFAULT_GENERATED_PASSWORD_LENGTH, DEFAULT_STRONG_THRESHOLD, DEFAULT_VERY_STRONG_THRESHOLD,
};
use domain::{Argon2Hasher, PasswordPolicy, PasswordService};

use crate::error::{AppError, AppResult};

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Argon2 defaults (argon2 crate recommendations)
pub const DEFAULT_ARGON2_MEMORY_KIB: u32 = 19 * 1024;
pub const DEFAULT_ARGON2_ITERATIONS: u32 = 2;
pub const DEFAULT_ARGON2_PARALLELISM: u32 = 1;

/// Password strength configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PasswordPolicyConfig {
    pub strong_threshold: u32,
    pub very_strong_threshold: u32,
    pub generated_length: usize,
}

impl Default for PasswordPolicyConfig {
    fn default() -> Self {
        Self {
            strong_threshold: DEFAULT_STRONG_THRESHOLD,
            very_strong_threshold: DEFAULT_VERY_STRONG_THRESHOLD,
            generated_length: DEFAULT_GENERATED_PASSWORD_LENGTH,
        }
    }
}

impl From<&PasswordPolicyConfig> for PasswordPolicy {
    fn from(config: &PasswordPolicyConfig) -> Self {
        PasswordPolicy {
            strong_threshold: config.strong_threshold,
            very_strong_threshold: config.very_strong_threshold,
            generated_length: config.generated_length,
        }
    }
}

/// Argon2 cost parameters.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_ARGON2_MEMORY_KIB,
            iterations: DEFAULT_ARGON2_ITERATIONS,
            parallelism: DEFAULT_ARGON2_PARALLELISM,
        }
    }
}

/// Top-level configuration for the identity tooling.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Log filter (tracing `EnvFilter` syntax)
    pub log_level: String,
    pub password: PasswordPolicyConfig,
    pub hashing: HashingConfig,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            password: PasswordPolicyConfig::default(),
            hashing: HashingConfig::default(),
        }
    }
}

impl IdentityConfig {
    /// Load configuration from environment variables (and a `.env` file if present).
    ///
    /// Unparsable values fall back to their defaults with a warning.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            log_level: lookup("IDENTITY_LOG_LEVEL").unwrap_or(defaults.log_level),
            password: PasswordPolicyConfig {
                strong_threshold: parse_or(
                    &lookup,
                    "IDENTITY_PASSWORD_STRONG_THRESHOLD",
                    defaults.password.strong_threshold,
                ),
                very_strong_threshold: parse_or(
                    &lookup,
                    "IDENTITY_PASSWORD_VERY_STRONG_THRESHOLD",
                    defaults.password.very_strong_threshold,
                ),
                generated_length: parse_or(
                    &lookup,
                    "IDENTITY_PASSWORD_GENERATED_LENGTH",
                    defaults.password.generated_length,
                ),
            },
            hashing: HashingConfig {
                memory_kib: parse_or(
                    &lookup,
                    "IDENTITY_ARGON2_MEMORY_KIB",
                    defaults.hashing.memory_kib,
                ),
                iterations: parse_or(
                    &lookup,
                    "IDENTITY_ARGON2_ITERATIONS",
                    defaults.hashing.iterations,
                ),
                parallelism: parse_or(
                    &lookup,
                    "IDENTITY_ARGON2_PARALLELISM",
                    defaults.hashing.parallelism,
                ),
            },
        }
    }

    /// Build the password service described by this configuration.
    ///
    /// # Errors
    /// Returns a config error when the thresholds are inverted or argon2
    /// rejects the cost parameters.
    pub fn password_service(&self) -> AppResult<PasswordService> {
        if self.password.very_strong_threshold < self.password.strong_threshold {
            return Err(AppError::config(format!(
                "very strong threshold {} is below strong threshold {}",
                self.password.very_strong_threshold, self.password.strong_threshold
            )));
        }

        let hasher = Argon2Hasher::with_params(
            self.hashing.memory_kib,
            self.hashing.iterations,
            self.hashing.parallelism,
        )
        .map_err(|e| AppError::config(e.to_string()))?;

        Ok(PasswordService::new(
            Arc::new(hasher),
            PasswordPolicy::from(&self.password),
        ))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{} has invalid value {:?}, using default {}", key, raw, default);
            default
        }),
    }
}
