//! Generic call dispatch with gas accounting.
//!
//! Every interaction with a deployed contract funnels through one of two
//! shapes: a read-only call that returns the decoded output, or a
//! state-mutating transaction whose effect is observed through subsequent
//! reads. Both report the gas the call consumed. Errors from the underlying
//! provider are propagated unchanged; there is no retry policy, a single
//! failure aborts the single call.

use alloy::{
    contract::{CallBuilder, CallDecoder},
    providers::Provider,
    rpc::types::TransactionReceipt,
};
use anyhow::{ensure, Result};

/// Dispatch a read-only call and decode its output.
///
/// `eth_call` itself does not meter gas, so the consumption reported here is
/// the node's estimate for the same calldata.
pub async fn call_with_gas<T, P, D>(call: CallBuilder<T, P, D>) -> Result<(D::CallOutput, u64)>
where
    P: Provider,
    D: CallDecoder + Unpin,
{
    let gas = call.estimate_gas().await?;
    let output = call.call().await?;
    Ok((output, gas))
}

/// Send a state-mutating call, wait for it to be mined and report the gas
/// used. A reverted receipt is an error.
pub async fn send_with_gas<T, P, D>(
    call: CallBuilder<T, P, D>,
) -> Result<(TransactionReceipt, u64)>
where
    P: Provider,
    D: CallDecoder,
{
    let receipt = call.send().await?.get_receipt().await?;
    ensure!(
        receipt.status(),
        "transaction {} reverted",
        receipt.transaction_hash
    );
    let gas = receipt.gas_used;
    Ok((receipt, gas))
}
