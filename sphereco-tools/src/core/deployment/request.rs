// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Transaction requests for contract creation and method calls

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, U256},
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use super::DeploymentError;
use crate::utils::{color::DebugColor, format_gas};

/// Transaction request for a contract creation or a method call
#[derive(Debug)]
pub struct DeploymentRequest {
    sender: Address,
    tx: TransactionRequest,
    max_fee_per_gas_wei: Option<u128>,
}

impl DeploymentRequest {
    /// Contract creation request
    pub fn new(sender: Address, code: Bytes, max_fee_per_gas_wei: Option<u128>) -> Self {
        Self {
            sender,
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(code),
            max_fee_per_gas_wei,
        }
    }

    /// Method call request on an already deployed contract
    pub fn new_call(
        sender: Address,
        to: Address,
        calldata: Bytes,
        max_fee_per_gas_wei: Option<u128>,
    ) -> Self {
        Self {
            sender,
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_to(to)
                .with_input(calldata),
            max_fee_per_gas_wei,
        }
    }

    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<u64, DeploymentError> {
        Ok(provider.estimate_gas(self.tx.clone()).await?)
    }

    /// Sends the transaction and waits for a successful receipt.
    pub async fn exec(
        self,
        provider: &impl Provider,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let gas = self.estimate_gas(provider).await?;
        let max_fee_per_gas = self.fee_per_gas(provider).await?;
        debug!(@grey, "estimated {}", format_gas(gas, max_fee_per_gas));

        // check balance early
        let cost = U256::from(gas) * U256::from(max_fee_per_gas);
        let balance = provider
            .get_balance(self.sender)
            .await
            .map_err(|_| DeploymentError::FailedToGetBalance)?;
        if balance < cost {
            return Err(DeploymentError::NotEnoughFunds {
                from_address: self.sender,
                balance,
                cost,
            });
        }

        let mut tx = self.tx;
        tx.gas = Some(gas);
        tx.max_fee_per_gas = Some(max_fee_per_gas);
        tx.max_priority_fee_per_gas = Some(0);

        let tx = provider.send_transaction(tx).await?;
        let tx_hash = *tx.tx_hash();
        debug!(@grey, "sent tx: {}", tx_hash.debug_lavender());

        let receipt = tx
            .get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }

        Ok(receipt)
    }

    async fn fee_per_gas(&self, provider: &impl Provider) -> Result<u128, DeploymentError> {
        match self.max_fee_per_gas_wei {
            Some(wei) => Ok(wei),
            None => Ok(provider.get_gas_price().await?),
        }
    }
}
