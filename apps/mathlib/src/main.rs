//! # mathlib - cg.vsu.math on the command line
//!
//! The binary wraps the pure `mathlib-core` engine with file handling,
//! settings and logging.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │             apps/mathlib (THE BINARY)        │
//! │                                              │
//! │  ┌─────────────┐        ┌────────────────┐   │
//! │  │   CLI       │        │   Settings     │   │
//! │  │  (clap)     │        │  (toml)        │   │
//! │  └──────┬──────┘        └───────┬────────┘   │
//! │         └───────────┬───────────┘            │
//! │                     ▼                        │
//! │             ┌───────────────┐                │
//! │             │ mathlib-core  │                │
//! │             │  (THE MATH)   │                │
//! │             └───────────────┘                │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! mathlib vector --op cross --a 1,0,0 --b 0,1,0
//! mathlib matrix --op inverse --a 3,5,-2,1
//! mathlib eval -f ops.json -o results.bin
//! mathlib inspect -i results.bin
//! ```

use clap::Parser;
use mathlib::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // MATHLIB_LOG_FORMAT=json enables machine-parseable logs. Logs go to
    // stderr so stdout carries only results.
    let log_format = std::env::var("MATHLIB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mathlib=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  cg.vsu.math v{}
  vectors • matrices • transforms
"#,
        env!("CARGO_PKG_VERSION")
    );
}
