// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! High level operations, each connecting to the chain on its own.

pub mod deploy;
pub mod module;
