// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    primitives::FixedBytes,
    signers::local::{LocalSigner, PrivateKeySigner},
};
use eyre::{eyre, Context};
use sphereco_tools::{
    core::{artifact::ArtifactStore, deployment::DeploymentConfig, network::Network},
    manifest::{self, Manifest},
    utils::decode0x,
};

use crate::utils::convert_gwei_to_wei;

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    pub fn build_signer(&self) -> eyre::Result<PrivateKeySigner> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return parse_private_key(key);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return parse_private_key(&key);
        }

        let keystore = self.keystore_path.as_ref().ok_or(eyre!("no keystore"))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        Ok(LocalSigner::decrypt_keystore(keystore, password.trim_end())?)
    }

    pub fn deployment_config(&self) -> eyre::Result<DeploymentConfig> {
        let max_fee_per_gas_wei = self
            .max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| convert_gwei_to_wei(fee_str))
            .transpose()?;
        Ok(DeploymentConfig {
            max_fee_per_gas_wei,
        })
    }
}

fn parse_private_key(key: &str) -> eyre::Result<PrivateKeySigner> {
    let bytes = decode0x(key)?;
    if bytes.len() != 32 {
        return Err(eyre!("private key must be 32 bytes, got {}", bytes.len()));
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&bytes);
    Ok(PrivateKeySigner::from_bytes(&priv_key_bytes)?)
}

#[derive(Debug, clap::Args)]
pub struct ProjectArgs {
    /// Path to the project manifest
    #[arg(long, default_value = manifest::FILENAME)]
    config: PathBuf,
    /// Directory holding compiled contract artifacts [default: from the manifest, or `artifacts`]
    #[arg(long)]
    artifacts: Option<PathBuf>,
}

impl ProjectArgs {
    pub fn manifest(&self) -> eyre::Result<Manifest> {
        Ok(Manifest::load_or_default(&self.config)?)
    }

    pub fn artifacts(&self, manifest: &Manifest) -> ArtifactStore {
        let root = self
            .artifacts
            .clone()
            .unwrap_or_else(|| manifest.paths.artifacts.clone());
        ArtifactStore::new(root)
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint [default: http://localhost:8545]
    #[arg(short, long, conflicts_with = "network")]
    pub endpoint: Option<String>,
    /// Network defined in the manifest
    #[arg(long)]
    pub network: Option<String>,
}

impl ProviderArgs {
    pub fn network(&self, manifest: &Manifest) -> eyre::Result<Network> {
        Ok(Network::resolve(
            self.endpoint.as_deref(),
            self.network.as_deref(),
            manifest,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn auth(private_key: Option<&str>) -> AuthArgs {
        AuthArgs {
            private_key_path: None,
            private_key: private_key.map(str::to_string),
            keystore_path: None,
            keystore_password_path: None,
            max_fee_per_gas_gwei: None,
        }
    }

    #[test]
    fn builds_signer_from_private_key() {
        let signer = auth(Some(KEY)).build_signer().unwrap();
        assert_eq!(
            signer.address().to_string(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
    }

    #[test]
    fn builds_signer_from_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.txt");
        fs::write(&path, format!("{KEY}\n")).unwrap();
        let mut args = auth(None);
        args.private_key_path = Some(path);
        assert!(args.build_signer().is_ok());
    }

    #[test]
    fn rejects_bad_keys() {
        assert!(auth(Some("")).build_signer().is_err());
        assert!(auth(Some("0x1234")).build_signer().is_err());
        assert!(auth(None).build_signer().is_err());
    }

    #[test]
    fn converts_max_fee() {
        let mut args = auth(Some(KEY));
        assert_eq!(args.deployment_config().unwrap().max_fee_per_gas_wei, None);
        args.max_fee_per_gas_gwei = Some("1.5".to_string());
        assert_eq!(
            args.deployment_config().unwrap().max_fee_per_gas_wei,
            Some(1_500_000_000)
        );
    }

    #[test]
    fn artifacts_flag_overrides_manifest() {
        let manifest = Manifest::default();
        let project = ProjectArgs {
            config: PathBuf::from(manifest::FILENAME),
            artifacts: None,
        };
        assert_eq!(project.artifacts(&manifest).root(), PathBuf::from("artifacts"));
        let project = ProjectArgs {
            artifacts: Some(PathBuf::from("out")),
            ..project
        };
        assert_eq!(project.artifacts(&manifest).root(), PathBuf::from("out"));
    }
}
