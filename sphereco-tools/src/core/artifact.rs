// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Artifacts are read from a Hardhat-style artifacts directory, where each contract lives at
//! `<root>/<source name>/<contract name>.json`. Contracts can be named either by their bare name
//! (`SphereCo`) or by their fully qualified name (`contracts/SphereCo.sol:SphereCo`).

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;

use crate::utils::decode0x;

/// Default location of compiled artifacts, relative to the project root.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Directory holding compiler inputs and outputs, never contract artifacts.
const BUILD_INFO_DIR: &str = "build-info";

/// A compiled contract: its creation bytecode and ABI.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    #[serde(default)]
    pub source_name: String,
    pub abi: JsonAbi,
    bytecode: String,
    #[serde(default)]
    link_references: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

impl Artifact {
    /// Creates an artifact directly from its parts.
    pub fn new(contract_name: impl Into<String>, abi: JsonAbi, bytecode: &[u8]) -> Self {
        Self {
            contract_name: contract_name.into(),
            source_name: String::new(),
            abi,
            bytecode: format!("0x{}", hex::encode(bytecode)),
            link_references: BTreeMap::new(),
        }
    }

    /// Name in the `<source>:<contract>` form, or the bare contract name if the source is unknown.
    pub fn fully_qualified_name(&self) -> String {
        if self.source_name.is_empty() {
            self.contract_name.clone()
        } else {
            format!("{}:{}", self.source_name, self.contract_name)
        }
    }

    /// Decoded creation bytecode.
    pub fn bytecode(&self) -> Result<Bytes, ArtifactError> {
        if !self.link_references.is_empty() {
            let libraries = self
                .link_references
                .iter()
                .flat_map(|(source, libs)| libs.keys().map(move |lib| format!("{source}:{lib}")))
                .collect::<Vec<_>>();
            return Err(ArtifactError::UnlinkedLibraries {
                contract: self.contract_name.clone(),
                libraries,
            });
        }
        let code = decode0x(&self.bytecode).map_err(|source| ArtifactError::InvalidBytecode {
            contract: self.contract_name.clone(),
            source,
        })?;
        if code.is_empty() {
            return Err(ArtifactError::EmptyBytecode(self.contract_name.clone()));
        }
        Ok(code.into())
    }
}

/// Looks up artifacts under a root directory.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads and parses the artifact for a contract.
    pub fn load(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let path = self.resolve(name)?;
        debug!(@grey, "reading artifact for {name} from {}", path.display());
        let contents = fs::read_to_string(&path).map_err(|source| ArtifactError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ArtifactError::Parse { path, source })
    }

    /// Finds the artifact file for a bare or fully qualified contract name.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, ArtifactError> {
        if let Some((source, contract)) = name.rsplit_once(':') {
            let path = self.root.join(source).join(format!("{contract}.json"));
            return if path.is_file() {
                Ok(path)
            } else {
                Err(ArtifactError::NotFound(name.to_string()))
            };
        }

        let pattern = format!(
            "{}/**/{}.json",
            glob::Pattern::escape(&self.root.to_string_lossy()),
            glob::Pattern::escape(name),
        );
        let mut matches = glob::glob(&pattern)?
            .filter_map(Result::ok)
            .filter(|path| !self.is_build_info(path))
            .collect::<Vec<_>>();

        match matches.len() {
            0 => Err(ArtifactError::NotFound(name.to_string())),
            1 => Ok(matches.remove(0)),
            _ => {
                let candidates = matches
                    .iter()
                    .filter_map(|path| self.fully_qualified_name(path))
                    .collect();
                Err(ArtifactError::Ambiguous {
                    name: name.to_string(),
                    candidates,
                })
            }
        }
    }

    fn is_build_info(&self, path: &Path) -> bool {
        path.strip_prefix(&self.root)
            .map(|rel| rel.starts_with(BUILD_INFO_DIR))
            .unwrap_or(false)
    }

    fn fully_qualified_name(&self, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(&self.root).ok()?;
        let contract = rel.file_stem()?.to_string_lossy();
        let source = rel.parent()?.to_string_lossy().replace('\\', "/");
        Some(format!("{source}:{contract}"))
    }
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACTS_DIR)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact for contract {0} not found")]
    NotFound(String),
    #[error("multiple artifacts match contract {name}, use one of: {}", .candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
    #[error("invalid artifact search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("failed to read artifact {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse artifact {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid bytecode for contract {contract}: {source}")]
    InvalidBytecode {
        contract: String,
        source: hex::FromHexError,
    },
    #[error("contract {0} has no bytecode, is it abstract or an interface?")]
    EmptyBytecode(String),
    #[error("contract {contract} needs linked libraries: {}", .libraries.join(", "))]
    UnlinkedLibraries {
        contract: String,
        libraries: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const SPHERECO_ARTIFACT: &str = r#"{
        "_format": "hh3-artifact-1",
        "contractName": "SphereCo",
        "sourceName": "contracts/SphereCo.sol",
        "abi": [
            {"type": "function", "name": "incBy", "stateMutability": "nonpayable",
             "inputs": [{"name": "by", "type": "uint256", "internalType": "uint256"}], "outputs": []}
        ],
        "bytecode": "0x6080604052",
        "deployedBytecode": "0x6080",
        "linkReferences": {},
        "deployedLinkReferences": {}
    }"#;

    fn write_artifact(root: &Path, source: &str, name: &str, contents: &str) {
        let dir = root.join(source);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{name}.json")), contents).unwrap();
    }

    fn store() -> (TempDir, ArtifactStore) {
        let dir = TempDir::new().unwrap();
        write_artifact(dir.path(), "contracts/SphereCo.sol", "SphereCo", SPHERECO_ARTIFACT);
        let store = ArtifactStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn loads_by_bare_name() {
        let (_dir, store) = store();
        let artifact = store.load("SphereCo").unwrap();
        assert_eq!(artifact.contract_name, "SphereCo");
        assert_eq!(
            artifact.fully_qualified_name(),
            "contracts/SphereCo.sol:SphereCo"
        );
        assert_eq!(artifact.bytecode().unwrap().as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
        assert!(artifact.abi.function("incBy").is_some());
    }

    #[test]
    fn loads_by_fully_qualified_name() {
        let (_dir, store) = store();
        let artifact = store.load("contracts/SphereCo.sol:SphereCo").unwrap();
        assert_eq!(artifact.contract_name, "SphereCo");
    }

    #[test]
    fn missing_contract_is_not_found() {
        let (_dir, store) = store();
        assert!(matches!(
            store.load("DoesNotExist"),
            Err(ArtifactError::NotFound(name)) if name == "DoesNotExist"
        ));
        assert!(matches!(
            store.load("contracts/Other.sol:SphereCo"),
            Err(ArtifactError::NotFound(_))
        ));
    }

    #[test]
    fn ignores_debug_and_build_info_files() {
        let (dir, store) = store();
        write_artifact(dir.path(), "contracts/SphereCo.sol", "SphereCo.dbg", "{}");
        write_artifact(dir.path(), "build-info", "SphereCo", "{}");
        assert!(store.load("SphereCo").is_ok());
    }

    #[test]
    fn duplicate_names_are_ambiguous() {
        let (dir, store) = store();
        write_artifact(dir.path(), "contracts/legacy/SphereCo.sol", "SphereCo", SPHERECO_ARTIFACT);
        let err = store.load("SphereCo").unwrap_err();
        let candidates = match err {
            ArtifactError::Ambiguous { candidates, .. } => candidates,
            other => panic!("expected ambiguity, got {other}"),
        };
        assert_eq!(candidates.len(), 2);
        assert!(candidates.contains(&"contracts/SphereCo.sol:SphereCo".to_string()));
    }

    #[test]
    fn rejects_unlinked_and_empty_bytecode() {
        let mut artifact: Artifact = serde_json::from_str(SPHERECO_ARTIFACT).unwrap();
        artifact.bytecode = "0x".to_string();
        assert!(matches!(artifact.bytecode(), Err(ArtifactError::EmptyBytecode(_))));

        let linked = SPHERECO_ARTIFACT.replace(
            r#""linkReferences": {}"#,
            r#""linkReferences": {"contracts/Math.sol": {"Math": [{"length": 20, "start": 1}]}}"#,
        );
        let artifact: Artifact = serde_json::from_str(&linked).unwrap();
        let err = artifact.bytecode().unwrap_err();
        assert!(err.to_string().contains("contracts/Math.sol:Math"), "{err}");
    }

    #[test]
    fn malformed_artifact_fails_to_parse() {
        let (dir, store) = store();
        write_artifact(dir.path(), "contracts/Broken.sol", "Broken", "{ not json");
        assert!(matches!(store.load("Broken"), Err(ArtifactError::Parse { .. })));
    }
}
