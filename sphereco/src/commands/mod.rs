// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::SpherecoResult;

mod deploy;
mod module;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy SphereCo by name, then again from its bytecode and ABI
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Plan or run the SphereCo deployment module
    #[command(subcommand)]
    Module(module::Command),
}

pub async fn exec(cmd: Command) -> SpherecoResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Module(command) => module::exec(command).await,
    }
}
