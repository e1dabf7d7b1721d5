//! # Shoplist CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! sets up logging, invokes `cli::run()` and handles process termination.
//!
//! ## Logging
//!
//! The library logs through `tracing`. Output goes to stderr at `warn` unless
//! `SHOPLIST_LOG` holds an `EnvFilter` directive (`SHOPLIST_LOG=debug`,
//! `SHOPLIST_LOG=shoplist::store=debug`). Setting `SHOPLIST_DEBUG_LOG=<path>`
//! appends everything at debug level to that file instead, leaving the
//! terminal untouched.

use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

mod cli;

const LOG_ENV: &str = "SHOPLIST_LOG";
const DEBUG_LOG_ENV: &str = "SHOPLIST_DEBUG_LOG";

fn init_logging() {
    if let Ok(log_path) = std::env::var(DEBUG_LOG_ENV) {
        match OpenOptions::new().create(true).append(true).open(&log_path) {
            Ok(log_file) => {
                tracing_subscriber::fmt()
                    .with_writer(Mutex::new(log_file))
                    .with_max_level(tracing::Level::DEBUG)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .init();
                return;
            }
            Err(e) => eprintln!("Warning: cannot open {}: {}", log_path, e),
        }
    }

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
