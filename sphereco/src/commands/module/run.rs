// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use sphereco_tools::ops;

use super::ModuleArgs;
use crate::{
    common_args::{AuthArgs, ProjectArgs, ProviderArgs},
    error::SpherecoResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    module: ModuleArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    project: ProjectArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> SpherecoResult {
    let module = args.module.module()?;
    let manifest = args.project.manifest()?;
    let network = args.provider.network(&manifest)?;
    let artifacts = args.project.artifacts(&manifest);
    let config = args.auth.deployment_config()?;
    let signer = args.auth.build_signer()?;

    let deployment = ops::module::run(&module, &artifacts, &network, signer, &config).await?;
    print!("{deployment}");
    Ok(())
}
