// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use sphereco_tools::ops;

use super::ModuleArgs;
use crate::error::SpherecoResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    module: ModuleArgs,
}

pub fn exec(args: Args) -> SpherecoResult {
    let module = args.module.module()?;
    ops::module::plan(&module);
    Ok(())
}
