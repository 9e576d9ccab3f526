// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Built-in deployment modules.

use crate::core::module::{DeploymentModule, ModuleError};

pub const SPHERECO_MODULE_ID: &str = "SphereCoModule";
pub const SPHERECO_CONTRACT: &str = "SphereCo";

/// Method called on SphereCo after deployment, and the amount it is called with.
pub const SPHERECO_SETUP_METHOD: &str = "incBy";
pub const SPHERECO_SETUP_AMOUNT: u64 = 5;

/// Deploys `contract` under the SphereCo module id, calling `incBy(5)` on it iff `with_call`.
pub fn sphereco_module_for(contract: &str, with_call: bool) -> Result<DeploymentModule, ModuleError> {
    let module = DeploymentModule::builder(SPHERECO_MODULE_ID).contract(contract);
    let module = if with_call {
        module.call(SPHERECO_SETUP_METHOD, [SPHERECO_SETUP_AMOUNT])
    } else {
        module
    };
    module.build()
}

/// The SphereCo module.
pub fn sphereco_module(with_call: bool) -> Result<DeploymentModule, ModuleError> {
    sphereco_module_for(SPHERECO_CONTRACT, with_call)
}
