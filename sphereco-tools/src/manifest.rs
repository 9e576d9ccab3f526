// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploy.toml manifest definitions.
//!
//! ```toml
//! [paths]
//! artifacts = "artifacts"
//!
//! [networks.sepolia]
//! url = "https://rpc.sepolia.org"
//! ```

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::core::artifact::DEFAULT_ARTIFACTS_DIR;

/// Filename of the project manifest.
pub const FILENAME: &str = "Deploy.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    #[serde(default = "default_artifacts_dir")]
    pub artifacts: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            artifacts: default_artifacts_dir(),
        }
    }
}

fn default_artifacts_dir() -> PathBuf {
    DEFAULT_ARTIFACTS_DIR.into()
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    pub url: String,
}

impl Manifest {
    /// Loads the manifest at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ManifestError::Missing(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        let manifest = toml::from_str(&contents)?;
        Ok(manifest)
    }

    /// Loads the manifest at `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(@grey, "no manifest at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), ManifestError> {
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),
    #[error("toml write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("missing manifest {}", .0.display())]
    Missing(PathBuf),
}
