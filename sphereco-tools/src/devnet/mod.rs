// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Local devnet for integration tests.

use alloy::{
    network::EthereumWallet,
    primitives::U256,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::local::PrivateKeySigner,
    sol,
};
use eyre::{Result, WrapErr};
use reqwest::{header::HeaderValue, Method, Response};
use testcontainers::{
    core::{wait::HttpWaitStrategy, IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

use crate::core::network::Network;

/// Prefunded key of the dev node's chain owner.
pub const DEVNET_PRIVATE_KEY: &str =
    "b6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";

const NITRO_IMAGE_NAME: &str = "offchainlabs/nitro-node";
const NITRO_IMAGE_TAG: &str = "v3.5.6-9a29a1e";
const NITRO_PORT: u16 = 8547;

pub mod addresses {
    pub use alloy::primitives::{address, Address};

    pub const OWNER: Address = address!("0x3f1Eae7D46d88F08fc2F8ed27FCb2AB183EB2d0E");
    pub const ARB_DEBUG: Address = address!("0x00000000000000000000000000000000000000FF");
    pub const ARB_OWNER: Address = address!("0x0000000000000000000000000000000000000070");
}

sol! {
    #[sol(rpc)]
    interface ArbDebug {
        function becomeChainOwner() external;
    }

    #[sol(rpc)]
    interface ArbOwner {
        function setL1PricePerUnit(uint256 value) external;
    }
}

/// A fresh dev chain, shut down when dropped.
pub struct Node {
    _container: ContainerAsync<GenericImage>,
    rpc: String,
}

impl Node {
    /// Starts a new Nitro dev node in the background.
    pub async fn new() -> Result<Self> {
        let wait_strategy = HttpWaitStrategy::new("/")
            .with_port(NITRO_PORT.into())
            .with_method(Method::POST)
            .with_header("Content-Type", HeaderValue::from_static("application/json"))
            .with_body(r#"{"jsonrpc":"2.0","method":"net_version","params":[],"id":1}"#)
            .with_response_matcher_async(nitro_response_matcher);
        let container = GenericImage::new(NITRO_IMAGE_NAME, NITRO_IMAGE_TAG)
            .with_exposed_port(NITRO_PORT.tcp())
            .with_wait_for(WaitFor::Http(wait_strategy))
            .with_cmd(vec![
                "--dev",
                "--http.addr",
                "0.0.0.0",
                "--http.api=net,web3,eth,debug",
            ])
            .start()
            .await
            .wrap_err("failed to start Nitro container")?;
        let port = container
            .get_host_port_ipv4(NITRO_PORT)
            .await
            .wrap_err("failed to get Nitro RPC port")?;
        let rpc = format!("http://localhost:{port}");
        let devnode = Node {
            _container: container,
            rpc,
        };
        devnode.setup().await?;
        Ok(devnode)
    }

    pub fn rpc(&self) -> &str {
        &self.rpc
    }

    pub fn network(&self) -> Result<Network> {
        Ok(Network::new(self.rpc())?)
    }

    pub fn signer(&self) -> PrivateKeySigner {
        DEVNET_PRIVATE_KEY
            .parse()
            .expect("failed to parse devnet private key")
    }

    /// Create a provider signing with the chain owner key.
    pub async fn create_provider(&self) -> Result<impl Provider + WalletProvider> {
        let wallet = EthereumWallet::from(self.signer());
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(self.rpc())
            .await?;
        Ok(provider)
    }

    async fn setup(&self) -> Result<()> {
        let provider = self.create_provider().await?;

        // Make the caller chain owner
        ArbDebug::new(addresses::ARB_DEBUG, &provider)
            .becomeChainOwner()
            .send()
            .await?
            .watch()
            .await?;

        // Without an L1 data fee, gas estimates match plain Ethereum.
        ArbOwner::new(addresses::ARB_OWNER, &provider)
            .setL1PricePerUnit(U256::ZERO)
            .send()
            .await?
            .watch()
            .await?;

        Ok(())
    }
}

async fn nitro_response_matcher(response: Response) -> bool {
    let Ok(text) = response.text().await else {
        return false;
    };
    text.contains("result")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn node_funds_owner() -> Result<()> {
        let devnode = Node::new().await?;
        let provider = devnode.create_provider().await?;
        assert_eq!(provider.default_signer_address(), addresses::OWNER);
        let balance = provider.get_balance(addresses::OWNER).await?;
        assert!(balance > U256::ZERO);
        Ok(())
    }
}
