//! # mathlib
//!
//! Library half of the `mathlib` binary: the CLI definition, its command
//! implementations and the settings layer. Exposed so integration tests can
//! drive commands without spawning a process.

pub mod cli;
pub mod settings;

pub use settings::Settings;
