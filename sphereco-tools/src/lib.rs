// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for planning and deploying the SphereCo contract.
//!
//! Two entry points deploy the same contract:
//!
//! - [`modules::sphereco_module`] describes the deployment declaratively, and
//!   [`core::module::execute`] evaluates it.
//! - [`ops::deploy`] performs the imperative two-step deployment.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod manifest;
pub mod modules;
pub mod ops;

pub mod utils;

#[cfg(feature = "integration-tests")]
pub mod devnet;

pub use error::{Error, Result};
