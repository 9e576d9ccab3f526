// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

#![cfg(feature = "integration-tests")]

use std::path::{Path, PathBuf};

use alloy::primitives::Address;
use assert_cmd::Command;
use eyre::Result;
use sphereco_tools::{
    devnet::{Node, DEVNET_PRIVATE_KEY},
    utils::{checksum, solc},
};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../sphereco-tools/tests/fixtures")
        .join(name)
}

fn sphereco(dir: &TempDir, node: &Node, args: &[&str]) -> Result<std::process::Output> {
    let artifacts = dir.path().join("artifacts");
    let output = Command::cargo_bin("sphereco")?
        .current_dir(dir.path())
        .args(args)
        .arg("--artifacts")
        .arg(&artifacts)
        .args(["--endpoint", node.rpc(), "--private-key", DEVNET_PRIVATE_KEY])
        .output()?;
    Ok(output)
}

fn parse_address(text: &str) -> Address {
    let address: Address = text.parse().unwrap();
    assert_eq!(text, checksum(address), "address must be checksummed");
    assert_ne!(address, Address::ZERO);
    address
}

#[tokio::test]
async fn deploy_prints_checksummed_address() -> Result<()> {
    let dir = TempDir::new()?;
    solc::compile(&fixture("SphereCoStore.sol"), &dir.path().join("artifacts"))?;
    let node = Node::new().await?;

    let output = sphereco(
        &dir,
        &node,
        &["deploy", "--contract", "SphereCoStore", "--named-args", "named"],
    )?;
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(0), "{stderr}");

    let stdout = String::from_utf8(output.stdout)?;
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 1, "{stdout}");
    let address = lines[0]
        .strip_prefix("Contract deployed to: ")
        .unwrap_or_else(|| panic!("unexpected output: {stdout}"));
    assert_eq!(address.len(), 42);
    parse_address(address);
    Ok(())
}

#[tokio::test]
async fn deploy_without_constructor_args() -> Result<()> {
    let dir = TempDir::new()?;
    solc::compile(&fixture("SphereCo.sol"), &dir.path().join("artifacts"))?;
    let node = Node::new().await?;

    let output = sphereco(&dir, &node, &["deploy", "--constructor-args"])?;
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(0), "{stderr}");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("Contract deployed to: 0x"), "{stdout}");
    Ok(())
}

#[tokio::test]
async fn module_run_prints_deployed_addresses() -> Result<()> {
    let dir = TempDir::new()?;
    solc::compile(&fixture("SphereCo.sol"), &dir.path().join("artifacts"))?;
    let node = Node::new().await?;

    let output = sphereco(&dir, &node, &["module", "run"])?;
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(0), "{stderr}");

    let stdout = String::from_utf8(output.stdout)?;
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3, "{stdout}");
    assert_eq!(lines[0], "Deployed Addresses");
    assert_eq!(lines[1], "");
    let address = lines[2]
        .strip_prefix("SphereCoModule#SphereCo - ")
        .unwrap_or_else(|| panic!("unexpected output: {stdout}"));
    parse_address(address);
    Ok(())
}
