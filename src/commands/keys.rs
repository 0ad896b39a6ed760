//! Keys command - RSA signing key management.

use std::path::{Path, PathBuf};

use rand::rngs::OsRng;
use rsa::pkcs1::{EncodeRsaPrivateKey, EncodeRsaPublicKey, LineEnding};
use rsa::RsaPrivateKey;

use crate::cli::args::{KeysAction, KeysArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};

const PRIVATE_KEY_FILE: &str = "app.rsa";
const PUBLIC_KEY_FILE: &str = "app.rsa.pub";

/// Execute the keys command
pub async fn execute(args: KeysArgs, config: Config) -> AppResult<()> {
    match args.action {
        KeysAction::Generate { out, bits, force } => {
            let (private_path, public_path) = match out {
                Some(dir) => (dir.join(PRIVATE_KEY_FILE), dir.join(PUBLIC_KEY_FILE)),
                None => (config.private_key_path, config.public_key_path),
            };

            // RSA generation is CPU bound
            tokio::task::spawn_blocking(move || {
                generate_key_pair(&private_path, &public_path, bits, force)
            })
            .await
            .map_err(|e| AppError::internal(format!("Key generation task failed: {}", e)))?
        }
    }
}

/// Write a fresh PKCS#1 PEM key pair to the given paths.
pub fn generate_key_pair(
    private_path: &Path,
    public_path: &Path,
    bits: usize,
    force: bool,
) -> AppResult<()> {
    if !force {
        if let Some(existing) = [private_path, public_path].into_iter().find(|p| p.exists()) {
            return Err(AppError::validation(format!(
                "{} already exists, pass --force to overwrite",
                existing.display()
            )));
        }
    }

    let private_key = RsaPrivateKey::new(&mut OsRng, bits)
        .map_err(|e| AppError::internal(format!("Failed to generate RSA key: {}", e)))?;

    let private_pem = private_key
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| AppError::internal(format!("Failed to encode RSA private key: {}", e)))?;
    let public_pem = private_key
        .to_public_key()
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| AppError::internal(format!("Failed to encode RSA public key: {}", e)))?;

    write_file(private_path, private_pem.as_bytes())?;
    write_file(public_path, public_pem.as_bytes())?;

    tracing::info!(
        bits,
        private_key = %private_path.display(),
        public_key = %public_path.display(),
        "RSA key pair written"
    );

    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error(parent.to_path_buf(), e))?;
    }
    std::fs::write(path, contents).map_err(|e| io_error(path.to_path_buf(), e))
}

fn io_error(path: PathBuf, err: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to write {}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SigningKeys;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("account-service-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_generated_pair_loads_as_signing_keys() {
        let dir = scratch_dir("keys-gen");
        let private_path = dir.join(PRIVATE_KEY_FILE);
        let public_path = dir.join(PUBLIC_KEY_FILE);

        generate_key_pair(&private_path, &public_path, 2048, false).unwrap();

        let private_pem = std::fs::read(&private_path).unwrap();
        let public_pem = std::fs::read(&public_path).unwrap();
        assert!(SigningKeys::from_pem(&private_pem, &public_pem).is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = scratch_dir("keys-exists");
        std::fs::create_dir_all(&dir).unwrap();
        let private_path = dir.join(PRIVATE_KEY_FILE);
        std::fs::write(&private_path, b"keep me").unwrap();

        let err = generate_key_pair(&private_path, &dir.join(PUBLIC_KEY_FILE), 2048, false)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(std::fs::read(&private_path).unwrap(), b"keep me");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
