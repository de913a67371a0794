//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `viewdns` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the response body or the error
//!
//! All core functionality is implemented in the library crate.

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use viewdns::cli::{run, Cli};
use viewdns::initialization::init_logger_with;

fn main() -> Result<()> {
    // Load VIEWDNS_API_KEY from a .env file in the current directory, or
    // failing that, next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(&cli) {
        Ok(body) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&body)
                .context("Failed to write response")?;
            if !body.ends_with(b"\n") {
                writeln!(stdout).context("Failed to write response")?;
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("viewdns error: {}", e);
            process::exit(1);
        }
    }
}
