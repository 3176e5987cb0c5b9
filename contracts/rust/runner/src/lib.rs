//! Deployment and call dispatch for the Autonity protocol contracts.
//!
//! This crate is the host side of the bindings: it deploys the system
//! contracts from their embedded creation code, caches the resulting
//! addresses, and dispatches encoded calls while reporting the gas each one
//! consumed. It performs no validation beyond what the ABI types enforce;
//! reverts and transport failures surface unchanged from the call layer.

use std::{collections::HashMap, io::Write};

use alloy::{
    contract::RawCallBuilder,
    primitives::{Address, U256},
    providers::Provider,
};
use anyhow::{Context, Result};
use autonity_contract_bindings::sol_types::*;
use clap::{builder::OsStr, Parser};
use derive_more::{derive::Deref, Display};

pub mod builder;
pub mod call;
pub mod genesis;
pub mod harness;
pub mod provider;
pub mod test_utils;

pub use provider::{build_provider, build_random_provider, build_signer, HttpProviderWithWallet};

/// Set of predeployed contracts.
#[derive(Clone, Debug, Parser)]
pub struct DeployedContracts {
    /// Use an already-deployed Autonity.sol instead of deploying a new one.
    #[clap(long, env = Contract::Autonity)]
    autonity: Option<Address>,

    /// Use an already-deployed Accountability.sol instead of deploying a new one.
    #[clap(long, env = Contract::Accountability)]
    accountability: Option<Address>,

    /// Use an already-deployed Oracle.sol instead of deploying a new one.
    #[clap(long, env = Contract::Oracle)]
    oracle: Option<Address>,

    /// Use an already-deployed ACU.sol instead of deploying a new one.
    #[clap(long, env = Contract::Acu)]
    acu: Option<Address>,

    /// Use an already-deployed SupplyControl.sol instead of deploying a new one.
    #[clap(long, env = Contract::SupplyControl)]
    supply_control: Option<Address>,

    /// Use an already-deployed Stabilization.sol instead of deploying a new one.
    #[clap(long, env = Contract::Stabilization)]
    stabilization: Option<Address>,

    /// Use an already-deployed Liquid.sol instead of deploying a new one.
    #[clap(long, env = Contract::Liquid)]
    liquid: Option<Address>,

    /// Use an already-deployed UpgradeManager.sol instead of deploying a new one.
    #[clap(long, env = Contract::UpgradeManager)]
    upgrade_manager: Option<Address>,
}

/// An identifier for a particular contract.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Contract {
    #[display("AUTONITY_CONTRACT_ADDRESS")]
    Autonity,
    #[display("AUTONITY_ACCOUNTABILITY_CONTRACT_ADDRESS")]
    Accountability,
    #[display("AUTONITY_ORACLE_CONTRACT_ADDRESS")]
    Oracle,
    #[display("AUTONITY_ACU_CONTRACT_ADDRESS")]
    Acu,
    #[display("AUTONITY_SUPPLY_CONTROL_CONTRACT_ADDRESS")]
    SupplyControl,
    #[display("AUTONITY_STABILIZATION_CONTRACT_ADDRESS")]
    Stabilization,
    #[display("AUTONITY_LIQUID_CONTRACT_ADDRESS")]
    Liquid,
    #[display("AUTONITY_UPGRADE_MANAGER_CONTRACT_ADDRESS")]
    UpgradeManager,
}

impl From<Contract> for OsStr {
    fn from(c: Contract) -> OsStr {
        c.to_string().into()
    }
}

/// Cache of contracts predeployed or deployed during this current run.
#[derive(Deref, Debug, Clone, Default)]
pub struct Contracts(HashMap<Contract, Address>);

impl From<DeployedContracts> for Contracts {
    fn from(deployed: DeployedContracts) -> Self {
        let mut m = HashMap::new();
        if let Some(addr) = deployed.autonity {
            m.insert(Contract::Autonity, addr);
        }
        if let Some(addr) = deployed.accountability {
            m.insert(Contract::Accountability, addr);
        }
        if let Some(addr) = deployed.oracle {
            m.insert(Contract::Oracle, addr);
        }
        if let Some(addr) = deployed.acu {
            m.insert(Contract::Acu, addr);
        }
        if let Some(addr) = deployed.supply_control {
            m.insert(Contract::SupplyControl, addr);
        }
        if let Some(addr) = deployed.stabilization {
            m.insert(Contract::Stabilization, addr);
        }
        if let Some(addr) = deployed.liquid {
            m.insert(Contract::Liquid, addr);
        }
        if let Some(addr) = deployed.upgrade_manager {
            m.insert(Contract::UpgradeManager, addr);
        }
        Self(m)
    }
}

impl Contracts {
    pub fn new() -> Self {
        Contracts(HashMap::new())
    }

    pub fn address(&self, contract: Contract) -> Option<Address> {
        self.0.get(&contract).copied()
    }

    /// Deploy a contract (with logging and cached deployments)
    ///
    /// The deployment `tx` will be sent only if contract `name` is not already deployed;
    /// otherwise this function will just return the predeployed address.
    pub async fn deploy<T, P>(
        &mut self,
        name: Contract,
        tx: RawCallBuilder<T, P>,
    ) -> Result<Address>
    where
        P: Provider,
    {
        if let Some(addr) = self.0.get(&name) {
            tracing::info!("skipping deployment of {name}, already deployed at {addr:#x}");
            return Ok(*addr);
        }
        tracing::info!("deploying {name}");
        let pending_tx = tx.send().await?;
        let tx_hash = *pending_tx.tx_hash();
        tracing::info!(%tx_hash, "waiting for tx to be mined");
        let receipt = pending_tx.get_receipt().await?;
        tracing::info!(%receipt.gas_used, %tx_hash, "tx mined");
        let addr = receipt
            .contract_address
            .ok_or(alloy::contract::Error::ContractNotDeployed)?;

        tracing::info!("deployed {name} at {addr:#x}");

        self.0.insert(name, addr);
        Ok(addr)
    }

    /// Write a .env file.
    pub fn write(&self, mut w: impl Write) -> Result<()> {
        for (contract, address) in &self.0 {
            writeln!(w, "{contract}={address:#x}")?;
        }
        Ok(())
    }
}

pub async fn is_contract(provider: impl Provider, address: Address) -> Result<bool> {
    if address == Address::ZERO {
        return Ok(false);
    }

    let code = provider.get_code_at(address).await?;
    if code.is_empty() {
        return Ok(false);
    }

    Ok(true)
}

/// Deploy `Autonity.sol` with the genesis validator set and protocol config.
///
/// The protocol-contract addresses inside `config.contracts` may be zero at
/// this point; they are wired afterwards through the setters, see
/// [`wire_protocol_contracts()`].
pub async fn deploy_autonity_contract(
    provider: impl Provider,
    contracts: &mut Contracts,
    validators: Vec<ValidatorSol>,
    config: ConfigSol,
) -> Result<Address> {
    let addr = contracts
        .deploy(
            Contract::Autonity,
            Autonity::deploy_builder(&provider, validators, config),
        )
        .await?;
    assert!(is_contract(&provider, addr).await?);
    Ok(addr)
}

pub async fn deploy_accountability_contract(
    provider: impl Provider,
    contracts: &mut Contracts,
    autonity: Address,
    config: AccountabilityConfigSol,
) -> Result<Address> {
    contracts
        .deploy(
            Contract::Accountability,
            Accountability::deploy_builder(&provider, autonity, config),
        )
        .await
}

pub async fn deploy_oracle_contract(
    provider: impl Provider,
    contracts: &mut Contracts,
    voters: Vec<Address>,
    autonity: Address,
    operator: Address,
    symbols: Vec<String>,
    vote_period: U256,
) -> Result<Address> {
    contracts
        .deploy(
            Contract::Oracle,
            Oracle::deploy_builder(&provider, voters, autonity, operator, symbols, vote_period),
        )
        .await
}

pub async fn deploy_acu_contract(
    provider: impl Provider,
    contracts: &mut Contracts,
    symbols: Vec<String>,
    quantities: Vec<U256>,
    scale: U256,
    autonity: Address,
    operator: Address,
    oracle: Address,
) -> Result<Address> {
    contracts
        .deploy(
            Contract::Acu,
            ACU::deploy_builder(
                &provider, symbols, quantities, scale, autonity, operator, oracle,
            ),
        )
        .await
}

/// Deploy `SupplyControl.sol`, endowing it with the uncirculated ATN supply.
///
/// The stabilizer is usually not deployed yet at this point, so a placeholder
/// address is accepted here and corrected later with `setStabilizer()`.
pub async fn deploy_supply_control_contract(
    provider: impl Provider,
    contracts: &mut Contracts,
    autonity: Address,
    operator: Address,
    stabilizer: Address,
    supply: U256,
) -> Result<Address> {
    contracts
        .deploy(
            Contract::SupplyControl,
            SupplyControl::deploy_builder(&provider, autonity, operator, stabilizer).value(supply),
        )
        .await
}

pub async fn deploy_stabilization_contract(
    provider: impl Provider,
    contracts: &mut Contracts,
    config: StabilizationConfigSol,
    autonity: Address,
    operator: Address,
    oracle: Address,
    supply_control: Address,
    collateral_token: Address,
) -> Result<Address> {
    contracts
        .deploy(
            Contract::Stabilization,
            Stabilization::deploy_builder(
                &provider,
                config,
                autonity,
                operator,
                oracle,
                supply_control,
                collateral_token,
            ),
        )
        .await
}

/// Deploy a standalone `Liquid.sol` instance.
///
/// On a live network every Liquid contract is created by the Autonity
/// contract during validator registration; a standalone instance is only
/// useful to exercise the LNTN surface directly.
pub async fn deploy_liquid_contract(
    provider: impl Provider,
    contracts: &mut Contracts,
    validator: Address,
    treasury: Address,
    commission_rate: U256,
    index: String,
) -> Result<Address> {
    contracts
        .deploy(
            Contract::Liquid,
            Liquid::deploy_builder(&provider, validator, treasury, commission_rate, index),
        )
        .await
}

pub async fn deploy_upgrade_manager_contract(
    provider: impl Provider,
    contracts: &mut Contracts,
    autonity: Address,
    operator: Address,
) -> Result<Address> {
    contracts
        .deploy(
            Contract::UpgradeManager,
            UpgradeManager::deploy_builder(&provider, autonity, operator),
        )
        .await
}

/// Point the deployed Autonity contract at the other protocol members and
/// complete genesis initialization. Run once, after every member of the
/// system is deployed.
pub async fn wire_protocol_contracts(
    provider: impl Provider,
    contracts: &Contracts,
) -> Result<()> {
    let autonity_addr = contracts
        .address(Contract::Autonity)
        .context("Autonity contract not deployed")?;
    let autonity = Autonity::new(autonity_addr, &provider);

    let accountability = contracts
        .address(Contract::Accountability)
        .context("Accountability contract not deployed")?;
    let oracle = contracts
        .address(Contract::Oracle)
        .context("Oracle contract not deployed")?;
    let acu = contracts
        .address(Contract::Acu)
        .context("ACU contract not deployed")?;
    let supply_control = contracts
        .address(Contract::SupplyControl)
        .context("SupplyControl contract not deployed")?;
    let stabilization = contracts
        .address(Contract::Stabilization)
        .context("Stabilization contract not deployed")?;
    let upgrade_manager = contracts
        .address(Contract::UpgradeManager)
        .context("UpgradeManager contract not deployed")?;

    let (_, gas) = call::send_with_gas(autonity.setAccountabilityContract(accountability)).await?;
    tracing::info!(%gas, "wired Accountability at {accountability:#x}");
    let (_, gas) = call::send_with_gas(autonity.setOracleContract(oracle)).await?;
    tracing::info!(%gas, "wired Oracle at {oracle:#x}");
    let (_, gas) = call::send_with_gas(autonity.setAcuContract(acu)).await?;
    tracing::info!(%gas, "wired ACU at {acu:#x}");
    let (_, gas) = call::send_with_gas(autonity.setSupplyControlContract(supply_control)).await?;
    tracing::info!(%gas, "wired SupplyControl at {supply_control:#x}");
    let (_, gas) = call::send_with_gas(autonity.setStabilizationContract(stabilization)).await?;
    tracing::info!(%gas, "wired Stabilization at {stabilization:#x}");
    let (_, gas) = call::send_with_gas(autonity.setUpgradeManagerContract(upgrade_manager)).await?;
    tracing::info!(%gas, "wired UpgradeManager at {upgrade_manager:#x}");

    let (_, gas) = call::send_with_gas(autonity.finalizeInitialization()).await?;
    tracing::info!(%gas, "finalized genesis initialization");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{harness::DEV_MNEMONIC, test_utils::setup_test};

    #[test]
    fn contract_cache_roundtrip() {
        setup_test();
        let deployed = DeployedContracts::parse_from([
            "runner",
            "--autonity",
            "0x1111111111111111111111111111111111111111",
            "--oracle",
            "0x2222222222222222222222222222222222222222",
        ]);
        let contracts = Contracts::from(deployed);
        assert_eq!(
            contracts.address(Contract::Autonity),
            Some(Address::repeat_byte(0x11))
        );
        assert_eq!(
            contracts.address(Contract::Oracle),
            Some(Address::repeat_byte(0x22))
        );
        assert_eq!(contracts.address(Contract::Stabilization), None);
    }

    #[test]
    fn env_file_rendering() {
        let deployed = DeployedContracts::parse_from([
            "runner",
            "--supply-control",
            "0x3333333333333333333333333333333333333333",
        ]);
        let contracts = Contracts::from(deployed);
        let mut out = Vec::new();
        contracts.write(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "AUTONITY_SUPPLY_CONTROL_CONTRACT_ADDRESS=\
             0x3333333333333333333333333333333333333333\n"
        );
    }

    #[test]
    fn contract_env_names_are_unique() {
        let all = [
            Contract::Autonity,
            Contract::Accountability,
            Contract::Oracle,
            Contract::Acu,
            Contract::SupplyControl,
            Contract::Stabilization,
            Contract::Liquid,
            Contract::UpgradeManager,
        ];
        let names: std::collections::HashSet<_> = all.iter().map(|c| c.to_string()).collect();
        assert_eq!(names.len(), all.len());
    }

    // The cache must short-circuit before anything touches the network: a
    // provider pointed at a dead endpoint still resolves predeployed names.
    #[tokio::test]
    async fn deploy_skips_predeployed_contracts() {
        setup_test();
        let provider = build_random_provider("http://localhost:1".parse().unwrap());
        let predeployed = Address::repeat_byte(0x44);
        let mut contracts = Contracts::new();
        contracts.0.insert(Contract::Liquid, predeployed);
        let tx = Liquid::deploy_builder(
            &provider,
            Address::ZERO,
            Address::ZERO,
            U256::ZERO,
            "1".to_string(),
        );
        let addr = contracts.deploy(Contract::Liquid, tx).await.unwrap();
        assert_eq!(addr, predeployed);
    }

    // Account 0 of the dev mnemonic is fixed; a mismatch here means the
    // derivation path changed under us.
    #[test]
    fn dev_mnemonic_derivation() {
        let signer = build_signer(DEV_MNEMONIC.to_string(), 0);
        assert_eq!(
            signer.address(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
                .parse::<Address>()
                .unwrap()
        );
    }
}
