//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// Identity - build and validate tenants, users and persons
#[derive(Parser, Debug)]
#[command(name = "identity")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Provision a tenant
    Tenant(TenantArgs),

    /// Register a user under a tenant
    User(UserArgs),

    /// Build a person with contact information
    Person(PersonArgs),

    /// Rate or generate passwords
    Password(PasswordArgs),
}

/// Arguments for the tenant command
#[derive(Parser, Debug)]
pub struct TenantArgs {
    /// Tenant name
    #[arg(short, long)]
    pub name: String,

    /// Use this identifier instead of generating one
    #[arg(long)]
    pub id: Option<String>,

    /// Create the tenant inactive
    #[arg(long)]
    pub inactive: bool,
}

/// Arguments for the user command
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// Tenant identifier
    #[arg(short, long, env = "IDENTITY_TENANT_ID")]
    pub tenant_id: String,

    #[arg(short, long)]
    pub username: String,

    /// Plain text password. Visible in the process list and shell history;
    /// prefer IDENTITY_USER_PASSWORD or --password-stdin
    #[arg(
        short,
        long,
        env = "IDENTITY_USER_PASSWORD",
        hide_env_values = true,
        required_unless_present = "password_stdin",
        conflicts_with = "password_stdin"
    )]
    pub password: Option<String>,

    /// Read the password from the first line of stdin
    #[arg(long)]
    pub password_stdin: bool,

    /// Start of the enablement window (RFC 3339)
    #[arg(long, value_parser = parse_timestamp)]
    pub start: Option<DateTime<Utc>>,

    /// End of the enablement window (RFC 3339)
    #[arg(long, value_parser = parse_timestamp)]
    pub end: Option<DateTime<Utc>>,

    /// Register the user disabled
    #[arg(long)]
    pub disabled: bool,
}

/// Arguments for the person command
#[derive(Parser, Debug)]
pub struct PersonArgs {
    /// Tenant identifier
    #[arg(short, long, env = "IDENTITY_TENANT_ID")]
    pub tenant_id: String,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub street: String,

    #[arg(long)]
    pub city: String,

    #[arg(long)]
    pub state: String,

    #[arg(long)]
    pub postal_code: String,

    #[arg(long)]
    pub country: String,

    #[arg(long)]
    pub primary_phone: String,

    #[arg(long)]
    pub secondary_phone: String,
}

/// Arguments for the password command
#[derive(Parser, Debug)]
pub struct PasswordArgs {
    #[command(subcommand)]
    pub action: PasswordAction,
}

/// Password actions
#[derive(Subcommand, Debug)]
pub enum PasswordAction {
    /// Rate a password against the configured policy
    Strength {
        /// Password to rate
        password: String,
    },
    /// Generate a strong password
    Generate,
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp {:?}: {}", raw, e))
}
