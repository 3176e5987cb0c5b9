//! Derived index from 4-byte function selectors to human-readable
//! signatures, one map per contract plus a merged one for the whole system.
//!
//! The maps are rebuilt from the generated `SolCall` constants, so they can
//! never drift from the bindings. The embedded JSON ABIs are checked against
//! them in the artifact tests.

use std::collections::BTreeMap;

use alloy::sol_types::SolCall;

use crate::sol_types::*;

/// Map from a function's 4-byte selector to its canonical signature.
pub type SelectorMap = BTreeMap<[u8; 4], &'static str>;

fn entry<C: SolCall>() -> ([u8; 4], &'static str) {
    (C::SELECTOR, C::SIGNATURE)
}


pub fn autonity() -> SelectorMap {
    [
        entry::<Autonity::nameCall>(),
        entry::<Autonity::symbolCall>(),
        entry::<Autonity::decimalsCall>(),
        entry::<Autonity::totalSupplyCall>(),
        entry::<Autonity::balanceOfCall>(),
        entry::<Autonity::allowanceCall>(),
        entry::<Autonity::transferCall>(),
        entry::<Autonity::approveCall>(),
        entry::<Autonity::transferFromCall>(),
        entry::<Autonity::mintCall>(),
        entry::<Autonity::burnCall>(),
        entry::<Autonity::bondCall>(),
        entry::<Autonity::unbondCall>(),
        entry::<Autonity::registerValidatorCall>(),
        entry::<Autonity::pauseValidatorCall>(),
        entry::<Autonity::activateValidatorCall>(),
        entry::<Autonity::updateEnodeCall>(),
        entry::<Autonity::changeCommissionRateCall>(),
        entry::<Autonity::getValidatorCall>(),
        entry::<Autonity::getValidatorsCall>(),
        entry::<Autonity::getCommitteeCall>(),
        entry::<Autonity::getCommitteeEnodesCall>(),
        entry::<Autonity::getTreasuryAccountCall>(),
        entry::<Autonity::getTreasuryFeeCall>(),
        entry::<Autonity::getMinimumBaseFeeCall>(),
        entry::<Autonity::getOperatorCall>(),
        entry::<Autonity::getOracleCall>(),
        entry::<Autonity::getEpochPeriodCall>(),
        entry::<Autonity::getBlockPeriodCall>(),
        entry::<Autonity::getUnbondingPeriodCall>(),
        entry::<Autonity::getMaxCommitteeSizeCall>(),
        entry::<Autonity::getVersionCall>(),
        entry::<Autonity::getNewContractCall>(),
        entry::<Autonity::getLastEpochBlockCall>(),
        entry::<Autonity::getEpochFromBlockCall>(),
        entry::<Autonity::configCall>(),
        entry::<Autonity::epochIDCall>(),
        entry::<Autonity::epochTotalBondedStakeCall>(),
        entry::<Autonity::totalRedistributedCall>(),
        entry::<Autonity::deployerCall>(),
        entry::<Autonity::setMinimumBaseFeeCall>(),
        entry::<Autonity::setCommitteeSizeCall>(),
        entry::<Autonity::setEpochPeriodCall>(),
        entry::<Autonity::setUnbondingPeriodCall>(),
        entry::<Autonity::setTreasuryAccountCall>(),
        entry::<Autonity::setTreasuryFeeCall>(),
        entry::<Autonity::setOperatorAccountCall>(),
        entry::<Autonity::setAccountabilityContractCall>(),
        entry::<Autonity::setOracleContractCall>(),
        entry::<Autonity::setAcuContractCall>(),
        entry::<Autonity::setSupplyControlContractCall>(),
        entry::<Autonity::setStabilizationContractCall>(),
        entry::<Autonity::setUpgradeManagerContractCall>(),
        entry::<Autonity::finalizeCall>(),
        entry::<Autonity::finalizeInitializationCall>(),
        entry::<Autonity::computeCommitteeCall>(),
        entry::<Autonity::upgradeContractCall>(),
        entry::<Autonity::completeContractUpgradeCall>(),
        entry::<Autonity::resetContractUpgradeCall>(),
    ]
    .into_iter()
    .collect()
}

pub fn accountability() -> SelectorMap {
    [
        entry::<Accountability::handleEventCall>(),
        entry::<Accountability::canSlashCall>(),
        entry::<Accountability::canAccuseCall>(),
        entry::<Accountability::getValidatorAccusationCall>(),
        entry::<Accountability::getValidatorFaultsCall>(),
        entry::<Accountability::slashingHistoryCall>(),
        entry::<Accountability::eventsCall>(),
        entry::<Accountability::epochPeriodCall>(),
        entry::<Accountability::configCall>(),
        entry::<Accountability::distributeRewardsCall>(),
        entry::<Accountability::finalizeCall>(),
        entry::<Accountability::setEpochPeriodCall>(),
    ]
    .into_iter()
    .collect()
}

pub fn oracle() -> SelectorMap {
    [
        entry::<Oracle::voteCall>(),
        entry::<Oracle::finalizeCall>(),
        entry::<Oracle::getRoundCall>(),
        entry::<Oracle::getRoundDataCall>(),
        entry::<Oracle::latestRoundDataCall>(),
        entry::<Oracle::getSymbolsCall>(),
        entry::<Oracle::getVotePeriodCall>(),
        entry::<Oracle::getVotersCall>(),
        entry::<Oracle::getPrecisionCall>(),
        entry::<Oracle::setSymbolsCall>(),
        entry::<Oracle::setVotersCall>(),
        entry::<Oracle::setOperatorCall>(),
    ]
    .into_iter()
    .collect()
}

pub fn acu() -> SelectorMap {
    [
        entry::<ACU::valueCall>(),
        entry::<ACU::roundCall>(),
        entry::<ACU::scaleCall>(),
        entry::<ACU::scaleFactorCall>(),
        entry::<ACU::symbolsCall>(),
        entry::<ACU::quantitiesCall>(),
        entry::<ACU::updateCall>(),
        entry::<ACU::modifyBasketCall>(),
        entry::<ACU::setOperatorCall>(),
        entry::<ACU::setOracleCall>(),
    ]
    .into_iter()
    .collect()
}

pub fn stabilization() -> SelectorMap {
    [
        entry::<Stabilization::depositCall>(),
        entry::<Stabilization::withdrawCall>(),
        entry::<Stabilization::borrowCall>(),
        entry::<Stabilization::repayCall>(),
        entry::<Stabilization::liquidateCall>(),
        entry::<Stabilization::collateralPriceCall>(),
        entry::<Stabilization::accountsCall>(),
        entry::<Stabilization::cdpsCall>(),
        entry::<Stabilization::debtAmountCall>(),
        entry::<Stabilization::underCollateralizedCall>(),
        entry::<Stabilization::isLiquidatableCall>(),
        entry::<Stabilization::borrowLimitCall>(),
        entry::<Stabilization::minimumCollateralCall>(),
        entry::<Stabilization::interestDueCall>(),
        entry::<Stabilization::configCall>(),
        entry::<Stabilization::setOperatorCall>(),
        entry::<Stabilization::setOracleCall>(),
    ]
    .into_iter()
    .collect()
}

pub fn supply_control() -> SelectorMap {
    [
        entry::<SupplyControl::mintCall>(),
        entry::<SupplyControl::burnCall>(),
        entry::<SupplyControl::setOperatorCall>(),
        entry::<SupplyControl::setStabilizerCall>(),
        entry::<SupplyControl::stabilizerCall>(),
        entry::<SupplyControl::availableSupplyCall>(),
        entry::<SupplyControl::totalSupplyCall>(),
    ]
    .into_iter()
    .collect()
}

pub fn liquid() -> SelectorMap {
    [
        entry::<Liquid::nameCall>(),
        entry::<Liquid::symbolCall>(),
        entry::<Liquid::decimalsCall>(),
        entry::<Liquid::totalSupplyCall>(),
        entry::<Liquid::balanceOfCall>(),
        entry::<Liquid::allowanceCall>(),
        entry::<Liquid::transferCall>(),
        entry::<Liquid::approveCall>(),
        entry::<Liquid::transferFromCall>(),
        entry::<Liquid::mintCall>(),
        entry::<Liquid::burnCall>(),
        entry::<Liquid::claimRewardsCall>(),
        entry::<Liquid::unclaimedRewardsCall>(),
        entry::<Liquid::redistributeCall>(),
        entry::<Liquid::lockCall>(),
        entry::<Liquid::unlockCall>(),
        entry::<Liquid::lockedBalanceOfCall>(),
        entry::<Liquid::unlockedBalanceOfCall>(),
        entry::<Liquid::setCommissionRateCall>(),
        entry::<Liquid::treasuryCall>(),
        entry::<Liquid::validatorCall>(),
        entry::<Liquid::COMMISSION_RATE_PRECISIONCall>(),
    ]
    .into_iter()
    .collect()
}

pub fn upgrade_manager() -> SelectorMap {
    [
        entry::<UpgradeManager::upgradeCall>(),
        entry::<UpgradeManager::setOperatorCall>(),
        entry::<UpgradeManager::autonityCall>(),
        entry::<UpgradeManager::operatorCall>(),
    ]
    .into_iter()
    .collect()
}

/// Selector index over every system contract. Shared ERC-20 selectors
/// (Autonity and Liquid) collapse to the same signature.
pub fn system() -> SelectorMap {
    let mut map = SelectorMap::new();
    for contract in [
        autonity(),
        accountability(),
        oracle(),
        acu(),
        stabilization(),
        supply_control(),
        liquid(),
        upgrade_manager(),
    ] {
        for (selector, signature) in contract {
            if let Some(existing) = map.insert(selector, signature) {
                debug_assert_eq!(existing, signature);
            }
        }
    }
    map
}
#[cfg(test)]
mod tests {
    use super::*;

    // Well-known ERC-20 selectors, as a guard against signature drift.
    #[test]
    fn erc20_selectors_match_the_standard() {
        let map = autonity();
        assert_eq!(
            map.get(&[0xa9, 0x05, 0x9c, 0xbb]),
            Some(&"transfer(address,uint256)")
        );
        assert_eq!(
            map.get(&[0x09, 0x5e, 0xa7, 0xb3]),
            Some(&"approve(address,uint256)")
        );
        assert_eq!(
            map.get(&[0x23, 0xb8, 0x72, 0xdd]),
            Some(&"transferFrom(address,address,uint256)")
        );
        assert_eq!(map.get(&[0x70, 0xa0, 0x82, 0x31]), Some(&"balanceOf(address)"));
        assert_eq!(map.get(&[0x18, 0x16, 0x0d, 0xdd]), Some(&"totalSupply()"));
    }

    #[test]
    fn per_contract_maps_have_no_collisions() {
        // BTreeMap::insert dedupes, so a collision would show up as a
        // shorter map than the number of declared functions.
        assert_eq!(autonity().len(), 59);
        assert_eq!(accountability().len(), 12);
        assert_eq!(oracle().len(), 12);
        assert_eq!(acu().len(), 10);
        assert_eq!(stabilization().len(), 17);
        assert_eq!(supply_control().len(), 7);
        assert_eq!(liquid().len(), 22);
        assert_eq!(upgrade_manager().len(), 4);
    }

    #[test]
    fn merged_map_agrees_on_shared_selectors() {
        let merged = system();
        for (selector, signature) in autonity().into_iter().chain(liquid()) {
            assert_eq!(merged.get(&selector), Some(&signature));
        }
    }
}
