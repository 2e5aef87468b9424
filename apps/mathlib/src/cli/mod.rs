//! # mathlib CLI Module
//!
//! This module implements the CLI interface for mathlib.
//!
//! ## Available Commands
//!
//! - `eval` - Evaluate a JSON batch of operations
//! - `vector` - Run a single vector operation
//! - `matrix` - Run a single matrix operation
//! - `inspect` - Decode a binary results file

mod commands;

use crate::settings::Settings;
use clap::{Parser, Subcommand};
use mathlib_core::MathError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// mathlib - vectors and matrices for the VSU renderer
///
/// Evaluates vector and matrix operations from the command line or from
/// JSON batch files.
#[derive(Parser, Debug)]
#[command(name = "mathlib")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print each operation next to its result
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Comparison tolerance (overrides the settings file)
    #[arg(long, global = true)]
    pub epsilon: Option<f32>,

    /// Decimals in text output (overrides the settings file)
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a batch of operations from a JSON file
    Eval {
        /// Path to the JSON operations file
        #[arg(short, long)]
        file: PathBuf,

        /// Write the results to a binary file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a single vector operation
    Vector {
        /// Operation (length, length2, normalize, dot, cross, distance, lerp,
        /// limit, clamp, collinear, orthogonal)
        #[arg(long)]
        op: String,

        /// First operand, comma-separated (e.g. 1,2,3)
        #[arg(long, allow_hyphen_values = true)]
        a: String,

        /// Second operand for binary operations
        #[arg(long, allow_hyphen_values = true)]
        b: Option<String>,

        /// Scalar parameter (lerp alpha, limit, clamp minimum)
        #[arg(long, allow_hyphen_values = true)]
        scalar: Option<f32>,

        /// Upper bound for clamp
        #[arg(long)]
        max: Option<f32>,
    },

    /// Run a single matrix operation
    Matrix {
        /// Operation (determinant, inverse, transpose, multiply, transform)
        #[arg(long)]
        op: String,

        /// Matrix values in row-major order (4, 9 or 16 values)
        #[arg(long, allow_hyphen_values = true)]
        a: String,

        /// Second matrix for multiply
        #[arg(long, allow_hyphen_values = true)]
        b: Option<String>,

        /// Vector for transform
        #[arg(long, allow_hyphen_values = true)]
        vector: Option<String>,
    },

    /// Decode and print a binary results file
    Inspect {
        /// Input file path
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Output options shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputMode {
    pub json: bool,
    pub verbose: bool,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Resolve settings from defaults, the optional file and the flags.
pub fn resolve_settings(cli: &Cli) -> Result<Settings, MathError> {
    let base = match &cli.config {
        Some(path) => {
            tracing::debug!("Loading settings from {:?}", path);
            Settings::load(path)?
        }
        None => Settings::default(),
    };
    base.with_overrides(cli.epsilon, cli.precision)
}

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), MathError> {
    let settings = resolve_settings(&cli)?;
    let mode = OutputMode {
        json: cli.json_mode,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Eval { file, output } => cmd_eval(&settings, mode, &file, output.as_deref()),
        Commands::Vector {
            op,
            a,
            b,
            scalar,
            max,
        } => cmd_vector(&settings, mode, &op, &a, b.as_deref(), scalar, max),
        Commands::Matrix { op, a, b, vector } => {
            cmd_matrix(&settings, mode, &op, &a, b.as_deref(), vector.as_deref())
        }
        Commands::Inspect { input } => cmd_inspect(&settings, mode, &input),
    }
}
