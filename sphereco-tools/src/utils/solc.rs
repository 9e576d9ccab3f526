// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiles Solidity sources into an artifacts directory with `solc`.

use std::{fs, path::Path, process::Command};

use serde::Deserialize;
use serde_json::json;

use super::{color::Color, sys};
use crate::core::artifact::ArtifactStore;

const LINK: &str = "https://docs.soliditylang.org/en/latest/installing-solidity.html";

pub fn check_exists() -> Result<(), SolcError> {
    if sys::command_exists("solc") {
        Ok(())
    } else {
        Err(SolcError::CommandDoesNotExist)
    }
}

#[derive(Debug, Deserialize)]
struct CombinedJson {
    contracts: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CombinedContract {
    abi: serde_json::Value,
    bin: String,
}

/// Compiles `source` and writes one artifact per contract under `out_dir`, in the same layout
/// [`ArtifactStore`] reads.
pub fn compile(source: &Path, out_dir: &Path) -> Result<ArtifactStore, SolcError> {
    check_exists()?;
    let output = Command::new("solc")
        .arg("--combined-json")
        .arg("abi,bin")
        .arg(source)
        .output()?;
    if !output.status.success() {
        return Err(SolcError::Failed(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }

    let combined: CombinedJson = serde_json::from_slice(&output.stdout)?;
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let source_name = format!("contracts/{file_name}");

    for (key, contract) in combined.contracts {
        let contract: CombinedContract = serde_json::from_value(contract)?;
        let contract_name = key.rsplit_once(':').map_or(key.as_str(), |(_, name)| name);
        // Older solc versions emit the ABI as a JSON string.
        let abi = match contract.abi {
            serde_json::Value::String(abi) => serde_json::from_str(&abi)?,
            abi => abi,
        };
        let artifact = json!({
            "contractName": contract_name,
            "sourceName": source_name,
            "abi": abi,
            "bytecode": format!("0x{}", contract.bin),
            "linkReferences": {},
        });
        let dir = out_dir.join(&source_name);
        fs::create_dir_all(&dir)?;
        fs::write(
            dir.join(format!("{contract_name}.json")),
            serde_json::to_string_pretty(&artifact)?,
        )?;
    }

    Ok(ArtifactStore::new(out_dir))
}

#[derive(Debug, thiserror::Error)]
pub enum SolcError {
    #[error("solc not found. Please see\n{link}", link = LINK.red())]
    CommandDoesNotExist,
    #[error("solc failed:\n{0}")]
    Failed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
