// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Chain connections.
//!
//! A [`Network`] is resolved once, before any deployment, and handed explicitly to every
//! operation that needs to talk to the chain.

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{local::PrivateKeySigner, Signer},
};

use crate::{manifest::Manifest, utils::color::Color};

/// Endpoint used when neither an endpoint nor a named network is given.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8545";

const SUPPORTED_SCHEMES: &[&str] = &["http://", "https://", "ws://", "wss://"];

/// Arbitrum testnet that no longer serves requests.
const RETIRED_TESTNET: &str = "https://stylus-testnet.arbitrum.io/rpc";

/// An RPC endpoint, optionally known by a name from the manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    name: Option<String>,
    endpoint: String,
}

impl Network {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, NetworkError> {
        let endpoint = endpoint.into();
        check_endpoint(&endpoint)?;
        Ok(Self {
            name: None,
            endpoint,
        })
    }

    /// Picks the network to use: an explicit endpoint wins over a named network, which wins over
    /// the default endpoint.
    pub fn resolve(
        endpoint: Option<&str>,
        name: Option<&str>,
        manifest: &Manifest,
    ) -> Result<Self, NetworkError> {
        match (endpoint, name) {
            (Some(endpoint), _) => Self::new(endpoint),
            (None, Some(name)) => {
                let config = manifest
                    .networks
                    .get(name)
                    .ok_or_else(|| NetworkError::UnknownNetwork(name.to_string()))?;
                let mut network = Self::new(&config.url)?;
                network.name = Some(name.to_string());
                Ok(network)
            }
            (None, None) => Self::new(DEFAULT_ENDPOINT),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Client for read-only chain queries.
    pub async fn public_client(&self) -> Result<impl Provider, NetworkError> {
        let provider = ProviderBuilder::new().connect(&self.endpoint).await?;
        Ok(provider)
    }

    /// Client that signs and sends transactions with the given key.
    ///
    /// The chain id is read from the node and bound to the signer so transactions cannot be
    /// replayed on another chain.
    pub async fn wallet_client(
        &self,
        signer: PrivateKeySigner,
    ) -> Result<impl Provider + WalletProvider, NetworkError> {
        let chain_id = self.public_client().await?.get_chain_id().await?;
        debug!(@grey, "connected to {} (chain id {chain_id})", self);
        let wallet = EthereumWallet::new(signer.with_chain_id(Some(chain_id)));
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({})", self.endpoint),
            None => f.write_str(&self.endpoint),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error(
        "unsupported endpoint {}, expected one of: {}",
        .0.red(),
        SUPPORTED_SCHEMES.join(", ")
    )]
    UnsupportedEndpoint(String),
    #[error("network {} is not defined in the manifest", .0.red())]
    UnknownNetwork(String),
    #[error("the old Stylus testnet at {} is no longer served", RETIRED_TESTNET.red())]
    TestnetNotSupported,
}

pub fn check_endpoint(endpoint: &str) -> Result<(), NetworkError> {
    if endpoint == RETIRED_TESTNET {
        Err(NetworkError::TestnetNotSupported)
    } else if SUPPORTED_SCHEMES
        .iter()
        .any(|scheme| endpoint.starts_with(scheme))
    {
        Ok(())
    } else {
        Err(NetworkError::UnsupportedEndpoint(endpoint.to_string()))
    }
}
