// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use alloy::{
    json_abi::JsonAbi,
    primitives::{Address, TxHash, U256},
    providers::{Provider, WalletProvider},
};

use crate::{
    core::artifact::{Artifact, ArtifactError},
    utils::{
        checksum,
        color::{Color, DebugColor},
    },
};
use calldata::EncodingError;
use request::DeploymentRequest;

pub mod calldata;
pub mod request;

#[derive(Clone, Debug, Default)]
pub struct DeploymentConfig {
    pub max_fee_per_gas_wei: Option<u128>,
}

/// A contract instance created on chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deployment {
    pub contract: String,
    pub address: Address,
    pub tx_hash: TxHash,
    pub gas_used: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Encoding(#[from] EncodingError),

    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("failed to get balance")]
    FailedToGetBalance,
    #[error(
        "not enough funds in account {} to pay for the transaction\n\
         balance {} < {} wei",
        .from_address.red(),
        .balance.red(),
        .cost.red(),
    )]
    NotEnoughFunds {
        from_address: Address,
        balance: U256,
        cost: U256,
    },
    #[error("tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt")]
    MissingReceiptAddress,
}

/// Deploys a contract from its compiled artifact.
pub async fn deploy(
    artifact: &Artifact,
    constructor_args: &[String],
    config: &DeploymentConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<Deployment, DeploymentError> {
    let bytecode = artifact.bytecode()?;
    deploy_code(
        &artifact.contract_name,
        &artifact.abi,
        &bytecode,
        constructor_args,
        config,
        provider,
    )
    .await
}

/// Deploys explicit bytecode, encoding `constructor_args` against the constructor in `abi`.
pub async fn deploy_code(
    contract: &str,
    abi: &JsonAbi,
    bytecode: &[u8],
    constructor_args: &[String],
    config: &DeploymentConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<Deployment, DeploymentError> {
    let code = calldata::creation_code(abi, bytecode, constructor_args)?;
    let sender = provider.default_signer_address();
    debug!(@grey, "sender address: {}", sender.debug_lavender());

    let receipt = DeploymentRequest::new(sender, code, config.max_fee_per_gas_wei)
        .exec(provider)
        .await?;
    let address = receipt
        .contract_address
        .ok_or(DeploymentError::MissingReceiptAddress)?;

    info!(@grey, "deployed {contract} at address: {}", checksum(address));
    debug!(@grey, "deployment tx hash: {}", receipt.transaction_hash.debug_lavender());
    debug!(@grey, "gas used: {}", receipt.gas_used);

    Ok(Deployment {
        contract: contract.to_string(),
        address,
        tx_hash: receipt.transaction_hash,
        gas_used: receipt.gas_used,
    })
}

/// Sends a state-changing call to `address`, returning its transaction hash.
pub async fn call(
    address: Address,
    abi: &JsonAbi,
    method: &str,
    args: &[String],
    config: &DeploymentConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<TxHash, DeploymentError> {
    let calldata = calldata::method_calldata(abi, method, args)?;
    let sender = provider.default_signer_address();
    let receipt = DeploymentRequest::new_call(sender, address, calldata, config.max_fee_per_gas_wei)
        .exec(provider)
        .await?;
    info!(@grey, "called {method}({}) on {}", args.join(", "), checksum(address));
    Ok(receipt.transaction_hash)
}
