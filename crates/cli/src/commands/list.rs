//! Module for the `list-manglers` subcommand.

use clap::Args;
use objmangle_transform::MANGLERS;
use std::error::Error;

/// Arguments for the `list-manglers` subcommand.
#[derive(Args)]
pub struct ListArgs {}

impl super::Command for ListArgs {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        for (key, help) in MANGLERS {
            println!("{key:<12} {help}");
        }
        Ok(())
    }
}
