//! Output format selection

use clap::ValueEnum;

/// How command results are rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for people
    Human,
    /// One JSON document per command
    Json,
}
