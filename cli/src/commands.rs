//! Command implementations.
//!
//! Every command builds domain objects in memory and renders them as JSON.
//! Nothing is persisted between invocations.

use std::io::{self, BufRead};

use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use common::{AppError, AppResult, IdentityConfig};
use domain::{
    Clock, ContactInformation, EmailAddress, Enablement, FullName, Person, PostalAddress,
    SystemClock, Telephone, Tenant, TenantId, User,
};

use crate::args::{Commands, PasswordAction, PasswordArgs, PersonArgs, TenantArgs, UserArgs};

/// Dispatch a parsed command and return what should be printed.
pub fn execute(command: Commands, config: &IdentityConfig) -> AppResult<String> {
    match command {
        Commands::Tenant(args) => tenant(args),
        Commands::User(args) => user(args, config, &SystemClock, &mut io::stdin().lock()),
        Commands::Person(args) => person(args),
        Commands::Password(args) => password(args, config),
    }
}

pub fn tenant(args: TenantArgs) -> AppResult<String> {
    let tenant_id = match args.id.as_deref() {
        Some(raw) => TenantId::new(raw)?,
        None => TenantId::generate(),
    };

    let tenant = Tenant::new(tenant_id, &args.name, !args.inactive)?;
    info!(tenant_id = %tenant.tenant_id(), active = tenant.is_active(), "Tenant provisioned");

    render(&tenant)
}

/// Register a user. With `--password-stdin` the password is the first line of `input`.
pub fn user(
    args: UserArgs,
    config: &IdentityConfig,
    clock: &dyn Clock,
    input: &mut dyn BufRead,
) -> AppResult<String> {
    let tenant_id = TenantId::new(&args.tenant_id)?;
    let enablement = Enablement::new(!args.disabled, args.start, args.end)?;
    let plain_password = read_password(&args, input)?;
    let passwords = config.password_service()?;
    debug!(username = %args.username, "Registering user");

    let user = User::new(
        tenant_id,
        &args.username,
        &plain_password,
        enablement,
        &passwords,
    )?;
    let enabled_now = user.is_enabled(clock);
    info!(tenant_id = %user.tenant_id(), username = %user.username(), enabled_now, "User registered");

    render(&json!({
        "user": user,
        "enabledNow": enabled_now,
    }))
}

pub fn person(args: PersonArgs) -> AppResult<String> {
    let tenant_id = TenantId::new(&args.tenant_id)?;
    let name = FullName::new(&args.first_name, &args.last_name)?;
    let contact_information = ContactInformation::new(
        EmailAddress::new(&args.email)?,
        PostalAddress::new(
            &args.street,
            &args.city,
            &args.state,
            &args.postal_code,
            &args.country,
        )?,
        Telephone::new(&args.primary_phone)?,
        Telephone::new(&args.secondary_phone)?,
    );

    let person = Person::new(tenant_id, name, contact_information);
    info!(tenant_id = %person.tenant_id(), "Person built");

    render(&json!({
        "person": person,
        "formattedName": person.name().as_formatted_name(),
        "formattedAddress": person.contact_information().postal_address().as_formatted_address(),
    }))
}

pub fn password(args: PasswordArgs, config: &IdentityConfig) -> AppResult<String> {
    let passwords = config.password_service()?;

    match args.action {
        PasswordAction::Strength { password } => {
            let policy = passwords.policy();
            render(&json!({
                "score": policy.score(&password),
                "strength": policy.strength(&password).to_string(),
                "strongThreshold": policy.strong_threshold,
            }))
        }
        PasswordAction::Generate => {
            let generated = passwords.generate_strong_password()?;
            debug!("Generated password");
            render(&json!({
                "password": generated,
                "strength": passwords.strength(&generated).to_string(),
            }))
        }
    }
}

fn read_password(args: &UserArgs, input: &mut dyn BufRead) -> AppResult<String> {
    if let Some(password) = &args.password {
        return Ok(password.clone());
    }

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| AppError::internal(format!("Failed to read password from stdin: {}", e)))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn render<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to render output: {}", e)))
}
