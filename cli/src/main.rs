//! Identity CLI - entry point.

use clap::Parser;

use common::{init_tracing, IdentityConfig};
use identity_cli::{commands, Cli};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = IdentityConfig::from_env();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(&config.log_level, cli.verbose);
    tracing::debug!("Configuration loaded: {:?}", config);

    match commands::execute(cli.command, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(code = e.code(), "Command failed: {}", e);
            eprintln!("error: {}", e.user_message());
            std::process::exit(e.exit_code());
        }
    }
}
