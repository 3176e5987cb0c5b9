// The bindings types are small and pure data, there is no reason they
// shouldn't be Copy. However some of them do have a bytes or string field
// which cannot be Copy.
impl Copy for crate::sol_types::PolicySol {}
impl Copy for crate::sol_types::ProtocolContractsSol {}
impl Copy for crate::sol_types::ProtocolSol {}
impl Copy for crate::sol_types::ConfigSol {}
// Validator and CommitteeMember carry enode/consensus key bytes, cannot be Copy
impl Copy for crate::sol_types::AccountabilityConfigSol {}
impl Copy for crate::sol_types::RoundDataSol {}
impl Copy for crate::sol_types::StabilizationConfigSol {}
