// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;

use alloy::{
    primitives::{Address, TxHash},
    providers::{Provider, WalletProvider},
};

use super::{Action, DeploymentModule, ModuleError};
use crate::{
    core::{
        artifact::ArtifactStore,
        deployment::{self, Deployment, DeploymentConfig, DeploymentError},
    },
    utils::checksum,
};

/// Result of executing a module.
#[derive(Clone, Debug)]
pub struct ModuleDeployment {
    pub module_id: String,
    pub future_id: String,
    pub deployment: Deployment,
    pub calls: Vec<ExecutedCall>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutedCall {
    pub future_id: String,
    pub tx_hash: TxHash,
}

impl ModuleDeployment {
    pub fn address(&self) -> Address {
        self.deployment.address
    }
}

impl fmt::Display for ModuleDeployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deployed Addresses")?;
        writeln!(f)?;
        writeln!(f, "{} - {}", self.future_id, checksum(self.deployment.address))
    }
}

/// Executes every action of `module` in order, stopping at the first failure.
///
/// Nothing is rolled back: if a call fails, the contract deployed before it stays on chain.
pub async fn execute(
    module: &DeploymentModule,
    artifacts: &ArtifactStore,
    config: &DeploymentConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<ModuleDeployment, ModuleError> {
    info!(@grey, "executing module {}", module.id());
    let step = module.contract();
    let fail = |future_id: &str| {
        let future_id = future_id.to_string();
        move |source: DeploymentError| ModuleError::Execution { future_id, source }
    };

    let artifact = artifacts
        .load(&step.contract)
        .map_err(DeploymentError::from)
        .map_err(fail(&step.future_id))?;
    let deployment = deployment::deploy(&artifact, &step.args, config, provider)
        .await
        .map_err(fail(&step.future_id))?;

    let mut calls = Vec::with_capacity(module.calls().len());
    for action in module.plan() {
        let Action::Call(call) = action else {
            continue;
        };
        let tx_hash = deployment::call(
            deployment.address,
            &artifact.abi,
            &call.method,
            &call.args,
            config,
            provider,
        )
        .await
        .map_err(fail(&call.future_id))?;
        calls.push(ExecutedCall {
            future_id: call.future_id.clone(),
            tx_hash,
        });
    }

    Ok(ModuleDeployment {
        module_id: module.id().to_string(),
        future_id: step.future_id.clone(),
        deployment,
        calls,
    })
}
