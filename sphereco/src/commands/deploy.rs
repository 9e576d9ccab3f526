// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use sphereco_tools::{
    modules::SPHERECO_CONTRACT,
    ops::deploy::{self, ScriptConfig, DEFAULT_CONSTRUCTOR_ARG},
    utils::checksum,
};

use crate::{
    common_args::{AuthArgs, ProjectArgs, ProviderArgs},
    error::SpherecoResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the contract to deploy.
    #[arg(long, default_value = SPHERECO_CONTRACT)]
    contract: String,
    /// Constructor arguments of the first deployment, by contract name.
    #[arg(long, num_args(0..), value_name = "ARGS", allow_negative_numbers = true)]
    named_args: Vec<String>,
    /// Constructor arguments of the second deployment, from the artifact's bytecode and ABI.
    /// Give the flag with no values for a contract without a constructor.
    #[arg(
        long,
        num_args(0..),
        value_name = "ARGS",
        allow_negative_numbers = true,
        default_value = DEFAULT_CONSTRUCTOR_ARG,
    )]
    constructor_args: Vec<String>,

    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    project: ProjectArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> SpherecoResult {
    let manifest = args.project.manifest()?;
    let network = args.provider.network(&manifest)?;
    let config = ScriptConfig::builder()
        .contract(args.contract)
        .named_args(args.named_args)
        .constructor_args(args.constructor_args)
        .artifacts(args.project.artifacts(&manifest))
        .deployment(args.auth.deployment_config()?)
        .build();
    let signer = args.auth.build_signer()?;

    let outcome = deploy::run(&network, signer, &config).await?;
    println!("Contract deployed to: {}", checksum(outcome.address()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    const KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        args: Args,
    }

    fn parse(args: &[&str]) -> Args {
        let argv = std::iter::once("deploy").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().args
    }

    #[test]
    fn constructor_args_default_to_initial_value() {
        let args = parse(&["--private-key", KEY]);
        assert!(args.named_args.is_empty());
        assert_eq!(args.constructor_args, vec!["initial value".to_string()]);
    }

    #[test]
    fn empty_constructor_args_stop_at_next_flag() {
        let args = parse(&["--constructor-args", "--private-key", KEY, "--named-args"]);
        assert!(args.constructor_args.is_empty());
        assert!(args.named_args.is_empty());
        assert!(args.auth.build_signer().is_ok());
    }

    #[test]
    fn constructor_args_take_values_and_negative_numbers() {
        let args = parse(&[
            "--constructor-args",
            "initial value",
            "-5",
            "--contract",
            "SphereCoStore",
        ]);
        assert_eq!(args.constructor_args, vec!["initial value".to_string(), "-5".to_string()]);
        assert_eq!(args.contract, "SphereCoStore");
    }
}
