//! Rehber - LDAP client toolkit launcher
//!
//! Runs `rehber <tool-name> [tool-args...]`; with no arguments (or
//! `version`) it prints version information.

use std::io::Write;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    let level = std::env::var("REHBER_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let code = rehber_cli::run(
        Some(&mut stdout as &mut dyn Write),
        Some(&mut stderr as &mut dyn Write),
        &args,
    );

    std::process::exit(code.exit_code());
}
