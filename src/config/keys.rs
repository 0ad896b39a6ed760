//! RSA key material used to sign and verify access tokens.

use std::path::Path;

use jsonwebtoken::{DecodingKey, EncodingKey};

use super::Config;
use crate::errors::{AppError, AppResult};

/// Private/public RSA key pair in the form the JWT library consumes.
#[derive(Clone)]
pub struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

// Never print key material
impl std::fmt::Debug for SigningKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKeys")
            .field("encoding", &"[REDACTED]")
            .field("decoding", &"[REDACTED]")
            .finish()
    }
}

impl SigningKeys {
    /// Build the key pair from PEM-encoded RSA keys (PKCS#1 or PKCS#8).
    pub fn from_pem(private_pem: &[u8], public_pem: &[u8]) -> AppResult<Self> {
        let encoding = EncodingKey::from_rsa_pem(private_pem)
            .map_err(|e| AppError::internal(format!("Invalid RSA private key: {}", e)))?;
        let decoding = DecodingKey::from_rsa_pem(public_pem)
            .map_err(|e| AppError::internal(format!("Invalid RSA public key: {}", e)))?;

        Ok(Self { encoding, decoding })
    }

    /// Read both keys from the paths named in the configuration.
    pub fn load(config: &Config) -> AppResult<Self> {
        let private_pem = read_key(&config.private_key_path)?;
        let public_pem = read_key(&config.public_key_path)?;

        tracing::debug!(
            private_key = %config.private_key_path.display(),
            public_key = %config.public_key_path.display(),
            "Signing keys loaded"
        );

        Self::from_pem(&private_pem, &public_pem)
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

fn read_key(path: &Path) -> AppResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| AppError::internal(format!("Failed to read {}: {}", path.display(), e)))
}
