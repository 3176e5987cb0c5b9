//! Rust bindings for the Autonity protocol system contracts.
//!
//! The contract surfaces are declared once with [`alloy::sol!`]; everything
//! else in this crate (selector index, embedded artifacts, version handling)
//! is derived from those declarations. Event filtering is intentionally not
//! part of the binding surface: the harness observes contract state through
//! reads, not logs.

pub mod artifacts;
pub mod bindings;
mod copy;
pub mod selectors;
pub mod sol_types;
pub mod version;

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{Address, Bytes, U256},
        sol_types::{SolCall, SolValue},
    };

    use crate::sol_types::*;

    #[test]
    fn bond_calldata_layout() {
        let call = Autonity::bondCall {
            _validator: Address::repeat_byte(0x11),
            _amount: U256::from(1000),
        };
        let data = call.abi_encode();
        // selector + two static words
        assert_eq!(data.len(), 4 + 32 + 32);
        assert_eq!(&data[..4], Autonity::bondCall::SELECTOR);
    }

    #[test]
    fn validator_struct_decodes_to_an_equal_copy() {
        let validator = ValidatorSol {
            treasury: Address::repeat_byte(0x01),
            nodeAddress: Address::repeat_byte(0x02),
            oracleAddress: Address::repeat_byte(0x03),
            enode: "enode://deadbeef@127.0.0.1:30303".to_string(),
            commissionRate: U256::from(1000),
            bondedStake: U256::from(10_000),
            unbondingStake: U256::ZERO,
            unbondingShares: U256::ZERO,
            selfBondedStake: U256::from(10_000),
            selfUnbondingStake: U256::ZERO,
            selfUnbondingShares: U256::ZERO,
            selfUnbondingStakeLocked: U256::ZERO,
            liquidContract: Address::ZERO,
            liquidSupply: U256::ZERO,
            registrationBlock: U256::ZERO,
            totalSlashed: U256::ZERO,
            jailReleaseBlock: U256::ZERO,
            provableFaultCount: U256::ZERO,
            consensusKey: Bytes::from_static(&[0xab; 48]),
            state: ValidatorStateSol::active,
        };
        let encoded = validator.abi_encode();
        let decoded = ValidatorSol::abi_decode(&encoded, true).unwrap();
        assert_eq!(
            validator.abi_encode_params(),
            decoded.abi_encode_params()
        );
        assert_eq!(decoded.enode, validator.enode);
    }

    #[test]
    fn accountability_event_round_trips_raw_proof() {
        let event = AccountabilityEventSol {
            eventType: Accountability::EventType::Accusation,
            rule: Accountability::Rule::PVN,
            reporter: Address::repeat_byte(0x0a),
            offender: Address::repeat_byte(0x0b),
            rawProof: Bytes::from(vec![0x42; 512]),
            id: U256::from(7),
            block: U256::from(1024),
            epoch: U256::from(34),
            reportingBlock: U256::from(1030),
            messageHash: Default::default(),
        };
        let decoded =
            AccountabilityEventSol::abi_decode(&event.abi_encode(), true).unwrap();
        assert_eq!(decoded.rawProof, event.rawProof);
        assert_eq!(decoded.rule, Accountability::Rule::PVN);
    }
}
