//! One-shot protocol deployments for the internal test harness.
//!
//! [`TestSystem`] spawns a throwaway anvil node, deploys the full contract
//! set and exposes the handful of operations the harness drives. Every
//! state-mutating helper reports the gas its transaction consumed; state is
//! observed back through the read helpers.

use alloy::{
    network::{Ethereum, EthereumWallet, TransactionBuilder as _},
    primitives::{Address, Bytes, U256},
    providers::{
        ext::AnvilApi as _,
        fillers::{FillProvider, JoinFill, WalletFiller},
        layers::AnvilProvider,
        utils::JoinedRecommendedFillers,
        Provider as _, ProviderBuilder, RootProvider, WalletProvider,
    },
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use anyhow::Result;
use autonity_contract_bindings::sol_types::*;
use rand::{rngs::StdRng, CryptoRng, RngCore, SeedableRng as _};
use url::Url;

use crate::{
    build_signer, builder::DeployerArgsBuilder, call, genesis::GenesisConfig, Contract, Contracts,
};

/// Mnemonic of the prefunded anvil developer accounts.
pub const DEV_MNEMONIC: &str = "test test test test test test test test test test test junk";

type TestProvider = FillProvider<
    JoinFill<JoinedRecommendedFillers, WalletFiller<EthereumWallet>>,
    AnvilProvider<RootProvider>,
    Ethereum,
>;

/// A fully deployed protocol instance on a one-off dev node.
#[derive(Debug, Clone)]
pub struct TestSystem {
    pub provider: TestProvider,
    pub signer: PrivateKeySigner,
    pub deployer_address: Address,
    pub autonity: Address,
    pub accountability: Address,
    pub oracle: Address,
    pub acu: Address,
    pub supply_control: Address,
    pub stabilization: Address,
    pub upgrade_manager: Address,
    pub genesis: GenesisConfig,
    pub rpc_url: Url,
}

impl TestSystem {
    pub async fn deploy() -> Result<Self> {
        Self::deploy_with_genesis(GenesisConfig::default()).await
    }

    pub async fn deploy_with_genesis(genesis: GenesisConfig) -> Result<Self> {
        let port = portpicker::pick_unused_port().unwrap();
        // Spawn anvil
        let provider = ProviderBuilder::new().on_anvil_with_wallet_and_config(|anvil| {
            anvil.port(port).arg("--accounts").arg("20")
        })?;
        let rpc_url = format!("http://localhost:{port}").parse()?;
        let deployer_address = provider.default_signer_address();
        // anvil uses the dev mnemonic, the default signer is the first account
        let signer = build_signer(DEV_MNEMONIC.to_string(), 0);
        assert_eq!(
            signer.address(),
            deployer_address,
            "Signer address mismatch"
        );

        // A single self-bonded genesis validator run by the deployer.
        let mut rng = StdRng::from_seed([42u8; 32]);
        let validator = genesis_validator(deployer_address, deployer_address, &mut rng);

        let mut contracts = Contracts::new();
        let args = DeployerArgsBuilder::default()
            .deployer(provider.clone())
            .genesis(genesis.clone())
            .validators(vec![validator])
            .build()
            .unwrap();
        args.deploy_all(&mut contracts).await?;

        let address = |c| contracts.address(c).expect("deployed");
        Ok(Self {
            autonity: address(Contract::Autonity),
            accountability: address(Contract::Accountability),
            oracle: address(Contract::Oracle),
            acu: address(Contract::Acu),
            supply_control: address(Contract::SupplyControl),
            stabilization: address(Contract::Stabilization),
            upgrade_manager: address(Contract::UpgradeManager),
            provider,
            signer,
            deployer_address,
            genesis,
            rpc_url,
        })
    }

    /// Transfer native ATN.
    pub async fn transfer_atn(&self, to: Address, amount: U256) -> Result<()> {
        let tx = TransactionRequest::default().with_to(to).with_value(amount);
        let receipt = self
            .provider
            .send_transaction(tx)
            .await?
            .get_receipt()
            .await?;
        assert!(receipt.status());
        Ok(())
    }

    pub async fn ntn_balance(&self, account: Address) -> Result<U256> {
        let autonity = Autonity::new(self.autonity, &self.provider);
        Ok(autonity.balanceOf(account).call().await?._0)
    }

    pub async fn transfer_ntn(&self, to: Address, amount: U256) -> Result<u64> {
        let autonity = Autonity::new(self.autonity, &self.provider);
        let (_, gas) = call::send_with_gas(autonity.transfer(to, amount)).await?;
        Ok(gas)
    }

    /// Mint NTN to `account`; the deployer is the governance operator.
    pub async fn mint_ntn(&self, account: Address, amount: U256) -> Result<u64> {
        let autonity = Autonity::new(self.autonity, &self.provider);
        let (_, gas) = call::send_with_gas(autonity.mint(account, amount)).await?;
        Ok(gas)
    }

    pub async fn bond(&self, validator: Address, amount: U256) -> Result<u64> {
        let autonity = Autonity::new(self.autonity, &self.provider);
        let (_, gas) = call::send_with_gas(autonity.bond(validator, amount)).await?;
        Ok(gas)
    }

    pub async fn unbond(&self, validator: Address, amount: U256) -> Result<u64> {
        let autonity = Autonity::new(self.autonity, &self.provider);
        let (_, gas) = call::send_with_gas(autonity.unbond(validator, amount)).await?;
        Ok(gas)
    }

    pub async fn register_validator(
        &self,
        enode: String,
        oracle: Address,
        consensus_key: Bytes,
        signatures: Bytes,
    ) -> Result<u64> {
        let autonity = Autonity::new(self.autonity, &self.provider);
        let (_, gas) = call::send_with_gas(
            autonity.registerValidator(enode, oracle, consensus_key, signatures),
        )
        .await?;
        Ok(gas)
    }

    pub async fn get_validator(&self, validator: Address) -> Result<ValidatorSol> {
        let autonity = Autonity::new(self.autonity, &self.provider);
        Ok(autonity.getValidator(validator).call().await?._0)
    }

    /// Address of a validator's liquid newton contract.
    pub async fn liquid(&self, validator: Address) -> Result<Address> {
        Ok(self.get_validator(validator).await?.liquidContract)
    }

    pub async fn committee(&self) -> Result<(Vec<CommitteeMemberSol>, u64)> {
        let autonity = Autonity::new(self.autonity, &self.provider);
        let (output, gas) = call::call_with_gas(autonity.getCommittee()).await?;
        Ok((output._0, gas))
    }

    /// Submit a commit-reveal oracle vote for the current round.
    pub async fn oracle_vote(
        &self,
        commit: U256,
        reports: Vec<alloy::primitives::I256>,
        salt: U256,
    ) -> Result<u64> {
        let oracle = Oracle::new(self.oracle, &self.provider);
        let (_, gas) = call::send_with_gas(oracle.vote(commit, reports, salt)).await?;
        Ok(gas)
    }

    /// Mint ATN from the uncirculated supply to `recipient`. Authorized for
    /// the stabilizer only, so this reverts unless the caller holds that role.
    pub async fn mint_atn(&self, recipient: Address, amount: U256) -> Result<u64> {
        let supply_control = SupplyControl::new(self.supply_control, &self.provider);
        let (_, gas) = call::send_with_gas(supply_control.mint(recipient, amount)).await?;
        Ok(gas)
    }

    /// Return ATN to the uncirculated supply; the burnt amount is the native
    /// value attached to the call.
    pub async fn burn_atn(&self, amount: U256) -> Result<u64> {
        let supply_control = SupplyControl::new(self.supply_control, &self.provider);
        let (_, gas) = call::send_with_gas(supply_control.burn().value(amount)).await?;
        Ok(gas)
    }

    /// Open or extend a CDP by borrowing ATN against deposited collateral.
    pub async fn borrow(&self, amount: U256) -> Result<u64> {
        let stabilization = Stabilization::new(self.stabilization, &self.provider);
        let (_, gas) = call::send_with_gas(stabilization.borrow(amount)).await?;
        Ok(gas)
    }

    pub async fn deposit_collateral(&self, amount: U256) -> Result<u64> {
        let stabilization = Stabilization::new(self.stabilization, &self.provider);
        let (_, gas) = call::send_with_gas(stabilization.deposit(amount)).await?;
        Ok(gas)
    }

    /// Repay CDP debt; the amount is the native value attached to the call.
    pub async fn repay(&self, amount: U256) -> Result<u64> {
        let stabilization = Stabilization::new(self.stabilization, &self.provider);
        let (_, gas) = call::send_with_gas(stabilization.repay().value(amount)).await?;
        Ok(gas)
    }

    /// Advance the dev node's clock, e.g. past the unbonding period.
    pub async fn warp(&self, seconds: u64) -> Result<()> {
        self.provider.anvil_increase_time(seconds).await?;
        Ok(())
    }
}

/// A self-bonded genesis validator record owned by `treasury`.
pub fn genesis_validator(
    treasury: Address,
    node: Address,
    rng: &mut (impl RngCore + CryptoRng),
) -> ValidatorSol {
    let stake = U256::from(10_000u64) * U256::from(10u64).pow(U256::from(18));
    ValidatorSol {
        treasury,
        nodeAddress: node,
        oracleAddress: treasury,
        enode: random_enode(rng),
        commissionRate: U256::from(1_000),
        bondedStake: stake,
        unbondingStake: U256::ZERO,
        unbondingShares: U256::ZERO,
        selfBondedStake: stake,
        selfUnbondingStake: U256::ZERO,
        selfUnbondingShares: U256::ZERO,
        selfUnbondingStakeLocked: U256::ZERO,
        liquidContract: Address::ZERO,
        liquidSupply: U256::ZERO,
        registrationBlock: U256::ZERO,
        totalSlashed: U256::ZERO,
        jailReleaseBlock: U256::ZERO,
        provableFaultCount: U256::ZERO,
        consensusKey: random_consensus_key(rng),
        state: ValidatorStateSol::active,
    }
}

/// A devp2p enode URL with a random 64-byte node id.
pub fn random_enode(rng: &mut (impl RngCore + CryptoRng)) -> String {
    let mut id = [0u8; 64];
    rng.fill_bytes(&mut id);
    format!("enode://{}@127.0.0.1:30303", hex::encode(id))
}

/// A random placeholder for a 48-byte BLS public key.
pub fn random_consensus_key(rng: &mut (impl RngCore + CryptoRng)) -> Bytes {
    let mut key = [0u8; 48];
    rng.fill_bytes(&mut key);
    key.to_vec().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enode_shape() {
        let mut rng = StdRng::from_seed([7u8; 32]);
        let enode = random_enode(&mut rng);
        let id = enode
            .strip_prefix("enode://")
            .and_then(|rest| rest.split('@').next())
            .unwrap();
        assert_eq!(id.len(), 128);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(enode.ends_with("@127.0.0.1:30303"));
    }

    #[test]
    fn supply_operation_calldata_layout() {
        use alloy::sol_types::SolCall;

        let mint = SupplyControl::mintCall {
            _recipient: Address::repeat_byte(0x11),
            _amount: U256::from(5),
        };
        let data = mint.abi_encode();
        // selector + two static words
        assert_eq!(data.len(), 4 + 32 + 32);
        assert_eq!(&data[..4], SupplyControl::mintCall::SELECTOR);

        // burn takes no arguments, the amount rides as call value
        let burn = SupplyControl::burnCall {};
        assert_eq!(burn.abi_encode().len(), 4);
        assert_eq!(&burn.abi_encode()[..4], SupplyControl::burnCall::SELECTOR);
    }

    #[test]
    fn genesis_validator_is_self_bonded_and_active() {
        let mut rng = StdRng::from_seed([7u8; 32]);
        let treasury = Address::repeat_byte(0xaa);
        let validator = genesis_validator(treasury, treasury, &mut rng);
        assert_eq!(validator.state, ValidatorStateSol::active);
        assert_eq!(validator.bondedStake, validator.selfBondedStake);
        assert!(validator.bondedStake > U256::ZERO);
        assert_eq!(validator.consensusKey.len(), 48);
    }
}
