use clap::Subcommand;
use std::error::Error;

pub mod list;
pub mod mangle;

use thiserror::Error;

/// Errors that can occur while running a mangler from the command line.
#[derive(Debug, Error)]
pub enum MangleError {
    /// File read/write error.
    #[error("file error: {0}")]
    File(#[from] std::io::Error),
    /// Symbols input or seed could not be used.
    #[error("input error: {0}")]
    Core(#[from] objmangle_core::Error),
    /// Mangling itself failed.
    #[error("mangling error: {0}")]
    Transform(#[from] objmangle_transform::Error),
    /// No mangler is registered under the given key.
    #[error("unknown mangler: {0}")]
    UnknownMangler(String),
    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// CLI subcommands for objmangle.
#[derive(Subcommand)]
pub enum Cmd {
    /// Compute the symbol mangling map for a symbols JSON document.
    Mangle(mangle::MangleArgs),
    /// List available mangling strategies.
    ListManglers(list::ListArgs),
}

/// Trait for executing CLI subcommands.
pub trait Command {
    /// Executes the subcommand.
    ///
    /// # Returns
    /// A `Result` indicating success or an error if execution fails.
    fn execute(self) -> Result<(), Box<dyn Error>>;
}

impl Command for Cmd {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        match self {
            Cmd::Mangle(args) => args.execute(),
            Cmd::ListManglers(args) => args.execute(),
        }
    }
}
