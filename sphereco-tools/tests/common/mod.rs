// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use alloy::sol;
use sphereco_tools::{core::artifact::ArtifactStore, utils::solc};
use tempfile::TempDir;

pub const STORE_CONTRACT: &str = "SphereCoStore";

sol! {
    #[sol(rpc)]
    interface ISphereCo {
        function x() external view returns (uint256);
    }

    #[sol(rpc)]
    interface ISphereCoStore {
        function value() external view returns (string memory);
    }
}

/// Compiles the fixture contracts into a fresh artifacts directory.
pub fn compile_fixtures() -> eyre::Result<(TempDir, ArtifactStore)> {
    let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let dir = TempDir::new()?;
    for source in ["SphereCo.sol", "SphereCoStore.sol"] {
        solc::compile(&fixtures.join(source), dir.path())?;
    }
    let store = ArtifactStore::new(dir.path());
    Ok((dir, store))
}
