//! Module for the `mangle` subcommand, which computes replacement names for the
//! whitelisted symbols of a scanned binary.
//!
//! The input is a symbols JSON document (blacklist, whitelist and hex-encoded export
//! tries); the output is the mapping consumed by the binary patcher.

use crate::commands::MangleError;
use clap::Args;
use objmangle_core::{ObfuscationSymbols, Seed};
use objmangle_transform::sentence::DEFAULT_MAX_ATTEMPTS;
use objmangle_transform::{ManglerConfig, mangler_for_key};
use std::error::Error;
use std::fs;
use tracing::info;

/// Arguments for the `mangle` subcommand.
#[derive(Args)]
pub struct MangleArgs {
    /// Path to the symbols JSON document.
    pub symbols: String,
    /// Cryptographic seed for deterministic mangling (64 hex chars, optional 0x prefix).
    #[arg(long)]
    seed: Option<String>,
    /// Mangling strategy to run.
    #[arg(long, default_value = "realWords")]
    mangler: String,
    /// Attempts per name length before it counts as exhausted.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
    /// Path to write the mapping JSON to (stdout when omitted).
    #[arg(long)]
    emit: Option<String>,
}

impl super::Command for MangleArgs {
    fn execute(self) -> Result<(), Box<dyn Error>> {
        let MangleArgs {
            symbols,
            seed,
            mangler,
            max_attempts,
            emit,
        } = self;

        let symbols = ObfuscationSymbols::from_file(&symbols).map_err(MangleError::from)?;

        let mut config = match seed {
            Some(seed_hex) => {
                ManglerConfig::with_seed(Seed::from_hex(&seed_hex).map_err(MangleError::from)?)
            }
            None => ManglerConfig::default(),
        };
        config.max_attempts = max_attempts;
        info!("Seed hash: {}", config.seed.hash_hex());

        let mangler = mangler_for_key(&mangler, config)
            .ok_or_else(|| MangleError::UnknownMangler(mangler.clone()))?;
        let map = mangler.mangle_symbols(&symbols).map_err(MangleError::from)?;

        let json = map.to_json_pretty().map_err(MangleError::from)?;
        match emit {
            Some(path) => {
                fs::write(&path, json).map_err(MangleError::from)?;
                info!("Wrote mangling map to {}", path);
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}
