// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use sphereco_tools::{
    core::module::{DeploymentModule, ModuleError},
    modules::{sphereco_module_for, SPHERECO_CONTRACT},
};

use crate::error::SpherecoResult;

mod plan;
mod run;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the actions of the module without sending any transaction.
    #[command(visible_alias = "p")]
    Plan(plan::Args),
    /// Deploy the contract and make the post-deployment call.
    #[command(visible_alias = "r")]
    Run(run::Args),
}

pub async fn exec(cmd: Command) -> SpherecoResult {
    match cmd {
        Command::Plan(args) => plan::exec(args),
        Command::Run(args) => run::exec(args).await,
    }
}

#[derive(Debug, clap::Args)]
pub struct ModuleArgs {
    /// Name of the contract to deploy.
    #[arg(long, default_value = SPHERECO_CONTRACT)]
    contract: String,
    /// Skip the `incBy(5)` call after deployment.
    #[arg(long)]
    no_call: bool,
}

impl ModuleArgs {
    pub fn module(&self) -> Result<DeploymentModule, ModuleError> {
        sphereco_module_for(&self.contract, !self.no_call)
    }
}
