// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Imperative deployment.
//!
//! The contract is deployed twice, strictly one after the other: first by name (with no
//! constructor arguments unless `named_args` says otherwise), then from its explicit bytecode and
//! ABI with `constructor_args`. Only the second address is reported.

use alloy::{
    primitives::Address,
    providers::{Provider, WalletProvider},
    signers::local::PrivateKeySigner,
};
use typed_builder::TypedBuilder;

use crate::{
    core::{
        artifact::ArtifactStore,
        deployment::{self, Deployment, DeploymentConfig, DeploymentError},
        network::{Network, NetworkError},
    },
    modules::SPHERECO_CONTRACT,
    utils::checksum,
};

/// Constructor argument passed to the explicit deployment.
pub const DEFAULT_CONSTRUCTOR_ARG: &str = "initial value";

#[derive(Clone, Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct ScriptConfig {
    #[builder(default = SPHERECO_CONTRACT.to_owned())]
    pub contract: String,
    /// Constructor arguments of the deployment by name.
    pub named_args: Vec<String>,
    /// Constructor arguments of the deployment from explicit bytecode and ABI.
    #[builder(default = vec![DEFAULT_CONSTRUCTOR_ARG.to_owned()])]
    pub constructor_args: Vec<String>,
    pub artifacts: ArtifactStore,
    pub deployment: DeploymentConfig,
}

/// Both contract instances created by the script.
#[derive(Clone, Debug)]
pub struct ScriptOutcome {
    pub named: Deployment,
    pub explicit: Deployment,
}

impl ScriptOutcome {
    /// Address reported to the user.
    pub fn address(&self) -> Address {
        self.explicit.address
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    NamedDeployment(DeploymentError),
    /// The first instance stays deployed at `orphaned`.
    #[error("{source}")]
    ExplicitDeployment {
        orphaned: Address,
        source: DeploymentError,
    },
}

/// Connects to `network` and runs the deployment.
pub async fn run(
    network: &Network,
    signer: PrivateKeySigner,
    config: &ScriptConfig,
) -> Result<ScriptOutcome, ScriptError> {
    // The artifact must exist before connecting.
    config
        .artifacts
        .resolve(&config.contract)
        .map_err(|err| ScriptError::NamedDeployment(err.into()))?;

    let public = network.public_client().await?;
    let block = public
        .get_block_number()
        .await
        .map_err(NetworkError::from)?;
    debug!(@grey, "chain head at block {block}");

    let wallet = network.wallet_client(signer).await?;
    execute(config, &wallet).await
}

/// Runs both deployments with an already connected client.
pub async fn execute(
    config: &ScriptConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<ScriptOutcome, ScriptError> {
    let named = deploy_named(config, provider)
        .await
        .map_err(ScriptError::NamedDeployment)?;

    let explicit = deploy_explicit(config, provider).await.map_err(|source| {
        warn!(@yellow, "instance at {} was left deployed", checksum(named.address));
        ScriptError::ExplicitDeployment {
            orphaned: named.address,
            source,
        }
    })?;

    debug!(@grey, "total gas used: {}", named.gas_used + explicit.gas_used);
    Ok(ScriptOutcome { named, explicit })
}

async fn deploy_named(
    config: &ScriptConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<Deployment, DeploymentError> {
    let artifact = config.artifacts.load(&config.contract)?;
    deployment::deploy(&artifact, &config.named_args, &config.deployment, provider).await
}

async fn deploy_explicit(
    config: &ScriptConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<Deployment, DeploymentError> {
    let artifact = config.artifacts.load(&config.contract)?;
    let bytecode = artifact.bytecode()?;
    let abi = &artifact.abi;
    deployment::deploy_code(
        &artifact.contract_name,
        abi,
        &bytecode,
        &config.constructor_args,
        &config.deployment,
        provider,
    )
    .await
}
