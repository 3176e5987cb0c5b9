//! Embedded build artifacts for the system contracts.
//!
//! Each deployable contract carries two portable artifacts: the JSON ABI it
//! was generated from and the creation bytecode submitted on deployment.
//! Both are compiled into the binary so the runner needs no build-tree
//! access at deploy time.

use alloy::primitives::Bytes;

use crate::sol_types::*;

pub const AUTONITY_ABI: &str = include_str!("../artifacts/Autonity.json");
pub const ACCOUNTABILITY_ABI: &str = include_str!("../artifacts/Accountability.json");
pub const ORACLE_ABI: &str = include_str!("../artifacts/Oracle.json");
pub const ACU_ABI: &str = include_str!("../artifacts/ACU.json");
pub const STABILIZATION_ABI: &str = include_str!("../artifacts/Stabilization.json");
pub const SUPPLY_CONTROL_ABI: &str = include_str!("../artifacts/SupplyControl.json");
pub const LIQUID_ABI: &str = include_str!("../artifacts/Liquid.json");
pub const UPGRADE_MANAGER_ABI: &str = include_str!("../artifacts/UpgradeManager.json");

/// ABI and creation code of one deployable system contract.
#[derive(Clone, Copy, Debug)]
pub struct ContractArtifact {
    pub name: &'static str,
    pub abi: &'static str,
    pub bytecode: &'static Bytes,
}

/// The full deployable contract set, in genesis deployment order.
pub fn all() -> [ContractArtifact; 8] {
    [
        ContractArtifact {
            name: "Autonity",
            abi: AUTONITY_ABI,
            bytecode: &Autonity::BYTECODE,
        },
        ContractArtifact {
            name: "Accountability",
            abi: ACCOUNTABILITY_ABI,
            bytecode: &Accountability::BYTECODE,
        },
        ContractArtifact {
            name: "Oracle",
            abi: ORACLE_ABI,
            bytecode: &Oracle::BYTECODE,
        },
        ContractArtifact {
            name: "ACU",
            abi: ACU_ABI,
            bytecode: &ACU::BYTECODE,
        },
        ContractArtifact {
            name: "SupplyControl",
            abi: SUPPLY_CONTROL_ABI,
            bytecode: &SupplyControl::BYTECODE,
        },
        ContractArtifact {
            name: "Stabilization",
            abi: STABILIZATION_ABI,
            bytecode: &Stabilization::BYTECODE,
        },
        ContractArtifact {
            name: "Liquid",
            abi: LIQUID_ABI,
            bytecode: &Liquid::BYTECODE,
        },
        ContractArtifact {
            name: "UpgradeManager",
            abi: UPGRADE_MANAGER_ABI,
            bytecode: &UpgradeManager::BYTECODE,
        },
    ]
}

#[cfg(test)]
mod tests {
    use alloy::json_abi::JsonAbi;

    use super::*;
    use crate::selectors;

    #[test]
    fn abi_artifacts_parse() {
        for artifact in all() {
            let abi: JsonAbi = serde_json::from_str(artifact.abi)
                .unwrap_or_else(|e| panic!("{} ABI is malformed: {e}", artifact.name));
            assert!(
                abi.functions().count() > 0,
                "{} ABI has no functions",
                artifact.name
            );
        }
    }

    // Every function in the embedded ABI must be present in the selector
    // index with the identical canonical signature, i.e. the JSON artifacts
    // and the macro-generated bindings describe the same contracts.
    #[test]
    fn abi_artifacts_match_generated_selectors() {
        let index = selectors::system();
        for artifact in all() {
            let abi: JsonAbi = serde_json::from_str(artifact.abi).unwrap();
            for function in abi.functions() {
                let selector: [u8; 4] = function.selector().into();
                let signature = function.signature();
                assert_eq!(
                    index.get(&selector).copied(),
                    Some(signature.as_str()),
                    "{}: {signature} missing or mismatched in selector index",
                    artifact.name
                );
            }
        }
    }

    #[test]
    fn bytecode_is_deployable_init_code() {
        // solc init-code prologue: free memory pointer setup plus the
        // callvalue guard for non-payable constructors.
        let prologue = [0x60, 0x80, 0x60, 0x40, 0x52];
        for artifact in all() {
            assert!(
                artifact.bytecode.len() > 500,
                "{} bytecode suspiciously small",
                artifact.name
            );
            assert!(
                artifact.bytecode.starts_with(&prologue),
                "{} bytecode missing solc prologue",
                artifact.name
            );
        }
    }
}
