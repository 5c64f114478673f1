use crate::result::Error;
use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

/// A 256-bit cryptographic seed
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    /// The 256-bit seed
    inner: [u8; 32],
}

impl Seed {
    /// Generate a new random 256-bit seed
    pub fn generate() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        Self { inner: seed }
    }

    /// Create from hex string (with or without 0x prefix)
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        if hex.len() != 64 {
            return Err(Error::InvalidSeedLength(hex.len()));
        }

        let bytes = hex::decode(hex).map_err(|_| Error::InvalidSeedHex)?;
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&bytes);
        Ok(Self { inner: seed })
    }

    /// Convert to hex string with 0x prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.inner))
    }

    /// Create a deterministic RNG for the name generators.
    ///
    /// The same seed always yields the same sequence of replacement names for the
    /// same symbol input, which makes a mangling run reproducible.
    pub fn create_deterministic_rng(&self) -> StdRng {
        let mut hasher = Sha3_256::new();
        hasher.update(b"OBJMANGLE_SYMBOL_MANGLING");
        hasher.update(self.inner);
        StdRng::from_seed(hasher.finalize().into())
    }

    /// Get a hash of this seed for integrity/identification purposes
    pub fn hash(&self) -> [u8; 32] {
        let mut hasher = Sha3_256::new();
        hasher.update(self.inner);
        hasher.finalize().into()
    }

    /// Get the hash as hex string
    pub fn hash_hex(&self) -> String {
        format!("0x{}", hex::encode(self.hash()))
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // hash only, the raw seed never reaches logs
        f.debug_struct("Seed").field("hash", &self.hash_hex()).finish()
    }
}
