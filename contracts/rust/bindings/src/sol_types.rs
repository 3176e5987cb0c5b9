//! Flat re-exports of the generated binding types, plus `*Sol` aliases for
//! the structs that cross crate boundaries.

pub use crate::bindings::{
    accountability::{self, Accountability},
    acu::{self, ACU},
    autonity::{self, Autonity},
    interfaces::{IAccountability, IERC20, IOracle},
    liquid::{self, Liquid},
    oracle::{self, Oracle},
    stabilization::{self, Stabilization},
    supply_control::{self, SupplyControl},
    upgrade_manager::{self, UpgradeManager},
};

pub type ValidatorSol = Autonity::Validator;
pub type ValidatorStateSol = Autonity::ValidatorState;
pub type CommitteeMemberSol = Autonity::CommitteeMember;
pub type PolicySol = Autonity::Policy;
pub type ProtocolContractsSol = Autonity::Contracts;
pub type ProtocolSol = Autonity::Protocol;
pub type ConfigSol = Autonity::Config;
pub type AccountabilityConfigSol = Accountability::Config;
pub type AccountabilityEventSol = Accountability::Event;
pub type RoundDataSol = Oracle::RoundData;
pub type StabilizationConfigSol = Stabilization::Config;
