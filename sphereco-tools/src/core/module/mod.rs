// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Declarative deployment modules.
//!
//! A module describes, without touching the chain, which contract to deploy and which calls to
//! make on it afterwards. Every step gets a future id of the form `<module>#<contract>` or
//! `<module>#<contract>.<method>`, unique within its module. Modules are evaluated by
//! [`execute`].

use std::{collections::HashSet, fmt};

pub use executor::{execute, ExecutedCall, ModuleDeployment};

use crate::core::deployment::DeploymentError;

mod executor;

/// Separator between a module id and the local name of a future.
const FUTURE_SEPARATOR: char = '#';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentModule {
    id: String,
    contract: ContractStep,
    calls: Vec<CallStep>,
}

/// Contract creation step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractStep {
    pub future_id: String,
    pub contract: String,
    pub args: Vec<String>,
}

/// Post-deployment call on the contract created by the module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallStep {
    pub future_id: String,
    pub method: String,
    pub args: Vec<String>,
}

/// One entry of a module's plan, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action<'a> {
    Deploy(&'a ContractStep),
    Call(&'a CallStep),
}

impl DeploymentModule {
    pub fn builder(id: impl Into<String>) -> ModuleBuilder {
        ModuleBuilder {
            id: id.into(),
            contract: None,
            calls: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn contract(&self) -> &ContractStep {
        &self.contract
    }

    pub fn calls(&self) -> &[CallStep] {
        &self.calls
    }

    /// Actions in the order they are executed: the deployment, then each call.
    pub fn plan(&self) -> Vec<Action<'_>> {
        std::iter::once(Action::Deploy(&self.contract))
            .chain(self.calls.iter().map(Action::Call))
            .collect()
    }
}

impl fmt::Display for DeploymentModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.id)?;
        for action in self.plan() {
            match action {
                Action::Deploy(step) => writeln!(
                    f,
                    "  {}: deploy {}({})",
                    step.future_id,
                    step.contract,
                    step.args.join(", ")
                )?,
                Action::Call(step) => writeln!(
                    f,
                    "  {}: call {}({})",
                    step.future_id,
                    step.method,
                    step.args.join(", ")
                )?,
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct ModuleBuilder {
    id: String,
    contract: Option<(String, Vec<String>)>,
    calls: Vec<(String, Vec<String>)>,
}

impl ModuleBuilder {
    /// Deploys `contract` with no constructor arguments.
    pub fn contract(self, contract: impl Into<String>) -> Self {
        self.contract_with_args(contract, Vec::<String>::new())
    }

    pub fn contract_with_args<I, S>(mut self, contract: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.contract = Some((contract.into(), args.into_iter().map(|a| a.to_string()).collect()));
        self
    }

    /// Calls `method` on the deployed contract. The method is a bare name or a full signature.
    pub fn call<I, S>(mut self, method: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.calls
            .push((method.into(), args.into_iter().map(|a| a.to_string()).collect()));
        self
    }

    pub fn build(self) -> Result<DeploymentModule, ModuleError> {
        if self.id.is_empty() || self.id.contains(FUTURE_SEPARATOR) {
            return Err(ModuleError::InvalidId(self.id));
        }
        let (contract, args) = self
            .contract
            .ok_or_else(|| ModuleError::MissingContract(self.id.clone()))?;

        let local_name = contract_local_name(&contract);
        let contract = ContractStep {
            future_id: format!("{}{FUTURE_SEPARATOR}{local_name}", self.id),
            contract,
            args,
        };

        let mut seen = HashSet::from([contract.future_id.clone()]);
        let mut calls = Vec::with_capacity(self.calls.len());
        for (method, args) in self.calls {
            let future_id = format!("{}.{}", contract.future_id, method_local_name(&method));
            if !seen.insert(future_id.clone()) {
                return Err(ModuleError::DuplicateFutureId(future_id));
            }
            calls.push(CallStep {
                future_id,
                method,
                args,
            });
        }

        Ok(DeploymentModule {
            id: self.id,
            contract,
            calls,
        })
    }
}

/// `contracts/SphereCo.sol:SphereCo` -> `SphereCo`
fn contract_local_name(contract: &str) -> &str {
    contract
        .rsplit_once(':')
        .map_or(contract, |(_, name)| name)
}

/// `incBy(uint256)` -> `incBy`
fn method_local_name(method: &str) -> &str {
    method.split_once('(').map_or(method, |(name, _)| name)
}

#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("invalid module id {0:?}")]
    InvalidId(String),
    #[error("module {0} does not deploy a contract")]
    MissingContract(String),
    #[error("duplicate future id {0}")]
    DuplicateFutureId(String),
    #[error("{future_id} failed: {source}")]
    Execution {
        future_id: String,
        source: DeploymentError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(with_call: bool) -> DeploymentModule {
        let builder = DeploymentModule::builder("SphereCoModule").contract("SphereCo");
        let builder = if with_call {
            builder.call("incBy", [5u64])
        } else {
            builder
        };
        builder.build().unwrap()
    }

    #[test]
    fn plan_lists_deploy_then_call() {
        let module = module(true);
        let plan = module.plan();
        assert_eq!(plan.len(), 2);
        let Action::Deploy(deploy) = plan[0] else {
            panic!("first action must deploy");
        };
        assert_eq!(deploy.future_id, "SphereCoModule#SphereCo");
        assert!(deploy.args.is_empty());
        let Action::Call(call) = plan[1] else {
            panic!("second action must call");
        };
        assert_eq!(call.future_id, "SphereCoModule#SphereCo.incBy");
        assert_eq!(call.args, vec!["5".to_string()]);
    }

    #[test]
    fn call_step_is_optional() {
        let module = module(false);
        assert_eq!(module.plan(), vec![Action::Deploy(module.contract())]);
        assert!(module.calls().is_empty());
    }

    #[test]
    fn displays_plan() {
        assert_eq!(
            module(true).to_string(),
            "SphereCoModule\n  \
             SphereCoModule#SphereCo: deploy SphereCo()\n  \
             SphereCoModule#SphereCo.incBy: call incBy(5)\n"
        );
    }

    #[test]
    fn future_ids_use_local_names() {
        let module = DeploymentModule::builder("Store")
            .contract_with_args("contracts/Store.sol:Store", ["initial value"])
            .call("set(string)", ["updated"])
            .build()
            .unwrap();
        assert_eq!(module.contract().future_id, "Store#Store");
        assert_eq!(module.contract().args, vec!["initial value".to_string()]);
        assert_eq!(module.calls()[0].future_id, "Store#Store.set");
        assert_eq!(module.calls()[0].method, "set(string)");
    }

    #[test]
    fn rejects_invalid_modules() {
        assert!(matches!(
            DeploymentModule::builder("Empty").build(),
            Err(ModuleError::MissingContract(_))
        ));
        assert!(matches!(
            DeploymentModule::builder("").contract("SphereCo").build(),
            Err(ModuleError::InvalidId(_))
        ));
        assert!(matches!(
            DeploymentModule::builder("Twice")
                .contract("SphereCo")
                .call("incBy", [1])
                .call("incBy", [2])
                .build(),
            Err(ModuleError::DuplicateFutureId(id)) if id == "Twice#SphereCo.incBy"
        ));
    }
}
