//! Version handling for the deployed Autonity contract.

use crate::sol_types::Autonity::getVersionReturn;

/// Version of the deployed Autonity contract, as reported by `getVersion()`.
/// The version is bumped by one on every completed contract upgrade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AutonityContractVersion {
    #[default]
    V1,
    V2,
}

impl TryFrom<getVersionReturn> for AutonityContractVersion {
    type Error = anyhow::Error;

    fn try_from(value: getVersionReturn) -> anyhow::Result<Self> {
        match u64::try_from(value._0) {
            Ok(1) => Ok(AutonityContractVersion::V1),
            Ok(2) => Ok(AutonityContractVersion::V2),
            _ => anyhow::bail!("Unsupported Autonity contract version: {:?}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use super::*;

    #[test]
    fn version_decoding() {
        let v1 = getVersionReturn { _0: U256::from(1) };
        assert_eq!(AutonityContractVersion::try_from(v1).unwrap(), AutonityContractVersion::V1);
        let v2 = getVersionReturn { _0: U256::from(2) };
        assert_eq!(AutonityContractVersion::try_from(v2).unwrap(), AutonityContractVersion::V2);
        let unknown = getVersionReturn { _0: U256::from(42) };
        assert!(AutonityContractVersion::try_from(unknown).is_err());
    }
}
