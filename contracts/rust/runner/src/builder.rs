//! builder pattern for assembling a full system deployment

use alloy::{
    primitives::{Address, U256},
    providers::{Provider, WalletProvider},
};
use anyhow::Result;
use autonity_contract_bindings::sol_types::*;
use derive_builder::Builder;

use crate::{
    call, deploy_accountability_contract, deploy_acu_contract, deploy_autonity_contract,
    deploy_oracle_contract, deploy_stabilization_contract, deploy_supply_control_contract,
    deploy_upgrade_manager_contract, genesis::GenesisConfig, wire_protocol_contracts, Contracts,
};

/// Convenient handler that builds all the input arguments ready to be deployed.
/// - `deployer`: deployer's wallet provider
/// - `genesis`: protocol parameters applied at deployment
/// - `validators`: genesis validator set (may be empty for bare deployments)
/// - `operator`: governance operator account, deployer if None
/// - `treasury`: protocol treasury account, deployer if None
/// - `initial_atn_supply`: ATN endowment of the supply control contract
#[derive(Builder, Clone)]
#[builder(setter(strip_option))]
pub struct DeployerArgs<P: Provider + WalletProvider> {
    deployer: P,
    #[builder(default)]
    genesis: GenesisConfig,
    #[builder(default)]
    validators: Vec<ValidatorSol>,
    #[builder(default)]
    operator: Option<Address>,
    #[builder(default)]
    treasury: Option<Address>,
    #[builder(default)]
    initial_atn_supply: Option<U256>,
}

impl<P: Provider + WalletProvider> DeployerArgs<P> {
    /// Deploy the whole contract set in dependency order, then wire the
    /// protocol-contract addresses through the Autonity setters.
    pub async fn deploy_all(&self, contracts: &mut Contracts) -> Result<()> {
        let provider = &self.deployer;
        let admin = provider.default_signer_address();
        let operator = self.operator.unwrap_or(admin);
        let treasury = self.treasury.unwrap_or(admin);
        let genesis = &self.genesis;

        let autonity = deploy_autonity_contract(
            provider,
            contracts,
            self.validators.clone(),
            protocol_config(genesis, operator, treasury),
        )
        .await?;

        deploy_accountability_contract(provider, contracts, autonity, slashing_config(genesis))
            .await?;

        let voters = if self.validators.is_empty() {
            vec![admin]
        } else {
            self.validators.iter().map(|v| v.oracleAddress).collect()
        };
        let oracle = deploy_oracle_contract(
            provider,
            contracts,
            voters,
            autonity,
            operator,
            genesis.symbols.clone(),
            U256::from(genesis.vote_period),
        )
        .await?;

        // 100M ATN unless the caller endows a different amount
        let supply = self
            .initial_atn_supply
            .unwrap_or_else(|| U256::from(100_000_000u64) * U256::from(10u64).pow(U256::from(18)));
        // the stabilization contract does not exist yet, deploy with the
        // operator as stabilizer and correct it below
        let supply_control = deploy_supply_control_contract(
            provider, contracts, autonity, operator, operator, supply,
        )
        .await?;

        deploy_acu_contract(
            provider,
            contracts,
            genesis.basket_symbols.clone(),
            genesis.basket_quantities.iter().map(|&q| U256::from(q)).collect(),
            U256::from(genesis.basket_scale),
            autonity,
            operator,
            oracle,
        )
        .await?;

        // NTN is the collateral token of the stabilization mechanism
        let stabilization = deploy_stabilization_contract(
            provider,
            contracts,
            cdp_config(genesis),
            autonity,
            operator,
            oracle,
            supply_control,
            autonity,
        )
        .await?;

        let (_, gas) = call::send_with_gas(
            SupplyControl::new(supply_control, provider).setStabilizer(stabilization),
        )
        .await?;
        tracing::info!(%gas, "set stabilizer to {stabilization:#x}");

        deploy_upgrade_manager_contract(provider, contracts, autonity, operator).await?;

        wire_protocol_contracts(provider, contracts).await?;
        Ok(())
    }
}

fn protocol_config(genesis: &GenesisConfig, operator: Address, treasury: Address) -> ConfigSol {
    ConfigSol {
        policy: PolicySol {
            treasuryFee: U256::from(genesis.treasury_fee),
            minBaseFee: U256::from(genesis.min_base_fee),
            delegationRate: U256::from(genesis.delegation_rate),
            unbondingPeriod: U256::from(genesis.unbonding_period),
            treasuryAccount: treasury,
        },
        // wired post-deployment, see `wire_protocol_contracts()`
        contracts: ProtocolContractsSol {
            accountabilityContract: Address::ZERO,
            oracleContract: Address::ZERO,
            acuContract: Address::ZERO,
            supplyControlContract: Address::ZERO,
            stabilizationContract: Address::ZERO,
            upgradeManagerContract: Address::ZERO,
        },
        protocol: ProtocolSol {
            operatorAccount: operator,
            epochPeriod: U256::from(genesis.epoch_period),
            blockPeriod: U256::from(genesis.block_period),
            committeeSize: U256::from(genesis.committee_size),
        },
        contractVersion: U256::from(1),
    }
}

fn slashing_config(genesis: &GenesisConfig) -> AccountabilityConfigSol {
    AccountabilityConfigSol {
        innocenceProofSubmissionWindow: U256::from(genesis.innocence_proof_submission_window),
        baseSlashingRateLow: U256::from(genesis.base_slashing_rate_low),
        baseSlashingRateMid: U256::from(genesis.base_slashing_rate_mid),
        collusionFactor: U256::from(genesis.collusion_factor),
        historyFactor: U256::from(genesis.history_factor),
        jailFactor: U256::from(genesis.jail_factor),
        slashingRatePrecision: U256::from(genesis.slashing_rate_precision),
    }
}

fn cdp_config(genesis: &GenesisConfig) -> StabilizationConfigSol {
    StabilizationConfigSol {
        borrowInterestRate: U256::from(genesis.borrow_interest_rate),
        liquidationRatio: U256::from(genesis.liquidation_ratio),
        minCollateralizationRatio: U256::from(genesis.min_collateralization_ratio),
        minDebtRequirement: U256::from(genesis.min_debt_requirement),
        targetPrice: U256::from(genesis.target_price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_assembly_from_genesis_defaults() {
        let genesis = GenesisConfig::default();
        let operator = Address::repeat_byte(0x0f);
        let treasury = Address::repeat_byte(0xf0);

        let config = protocol_config(&genesis, operator, treasury);
        assert_eq!(config.protocol.operatorAccount, operator);
        assert_eq!(config.policy.treasuryAccount, treasury);
        assert_eq!(config.policy.delegationRate, U256::from(1_000));
        assert_eq!(config.contracts.oracleContract, Address::ZERO);
        assert_eq!(config.contractVersion, U256::from(1));

        let slashing = slashing_config(&genesis);
        assert_eq!(slashing.slashingRatePrecision, U256::from(10_000));

        let cdp = cdp_config(&genesis);
        assert_eq!(
            cdp.targetPrice,
            U256::from(10u64).pow(U256::from(18))
        );
    }
}
