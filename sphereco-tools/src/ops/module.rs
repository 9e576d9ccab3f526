// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment module planning and execution.

use alloy::signers::local::PrivateKeySigner;

use crate::{
    core::{
        artifact::ArtifactStore,
        deployment::DeploymentConfig,
        module::{self, DeploymentModule, ModuleDeployment},
        network::Network,
    },
    Result,
};

/// Prints the actions of `module` without touching the chain.
pub fn plan(module: &DeploymentModule) {
    greyln!("plan for module {}", module.id().mint());
    print!("{module}");
}

/// Connects to `network` and executes `module`.
pub async fn run(
    module: &DeploymentModule,
    artifacts: &ArtifactStore,
    network: &Network,
    signer: PrivateKeySigner,
    config: &DeploymentConfig,
) -> Result<ModuleDeployment> {
    // The artifact must exist before connecting.
    artifacts.resolve(&module.contract().contract)?;
    let provider = network.wallet_client(signer).await?;
    let deployment = module::execute(module, artifacts, config, &provider).await?;
    info!(@grey, "module {} deployed", deployment.module_id);
    for call in &deployment.calls {
        debug!(@grey, "{} tx hash: {}", call.future_id, call.tx_hash);
    }
    Ok(deployment)
}
