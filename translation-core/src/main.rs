#![windows_subsystem = "windows"]
use std::io::{self, BufRead, Write};

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use translation_core::config::{Config, DEFAULT_LOG_DIRECTIVE};
use translation_core::protocol;

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    // stdout carries protocol responses
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            init_tracing(DEFAULT_LOG_DIRECTIVE);
            error!(error = %e, "failed to load configuration");
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_directive);
    info!(base_url = %config.message_base_url, "translation-core started");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().split(b'\n') {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(error = %e, "failed to read request line");
                continue;
            }
        };

        let result = std::panic::catch_unwind(|| protocol::handle_line(&line, &config));

        let response = match result {
            Ok(Some(resp)) => resp,
            Ok(None) => continue,
            Err(_) => {
                error!("request handler panicked");
                serde_json::json!({
                    "status": "error",
                    "message": "internal core error"
                })
                .to_string()
            }
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }

    info!("stdin closed, shutting down");
}
