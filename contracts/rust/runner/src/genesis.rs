//! Genesis parameters for a freshly deployed system.
//!
//! Mirrors the protocol section of an Autonity genesis file. The defaults
//! are the ones used by local devnets; production deployments load the real
//! values from a JSON file with [`GenesisConfig::from_file`].

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Protocol parameters applied at deployment.
///
/// Rates are expressed in basis points against `RATE_PRECISION` unless noted
/// otherwise; monetary amounts in the stabilization section are 18-decimal
/// fixed point.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GenesisConfig {
    /// Share of epoch rewards diverted to the protocol treasury.
    pub treasury_fee: u64,
    /// Floor for the EIP-1559 base fee, in wei.
    pub min_base_fee: u64,
    /// Default commission rate applied to newly registered validators.
    pub delegation_rate: u64,
    /// Unbonding period in blocks.
    pub unbonding_period: u64,
    /// Epoch length in blocks.
    pub epoch_period: u64,
    /// Minimum block interval in seconds.
    pub block_period: u64,
    /// Maximum consensus committee size.
    pub committee_size: u64,

    /// Oracle voting round length in blocks.
    pub vote_period: u64,
    /// Currency pairs the oracle network reports on.
    pub symbols: Vec<String>,

    /// Currency-basket definition for the ACU index.
    pub basket_symbols: Vec<String>,
    pub basket_quantities: Vec<u64>,
    pub basket_scale: u64,

    /// Accountability slashing parameters.
    pub innocence_proof_submission_window: u64,
    pub base_slashing_rate_low: u64,
    pub base_slashing_rate_mid: u64,
    pub collusion_factor: u64,
    pub history_factor: u64,
    pub jail_factor: u64,
    pub slashing_rate_precision: u64,

    /// Stabilization (CDP) parameters, 18-decimal fixed point.
    pub borrow_interest_rate: u64,
    pub liquidation_ratio: u64,
    pub min_collateralization_ratio: u64,
    pub min_debt_requirement: u64,
    pub target_price: u64,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            treasury_fee: 150,
            min_base_fee: 500_000_000,
            delegation_rate: 1_000,
            unbonding_period: 120,
            epoch_period: 30,
            block_period: 1,
            committee_size: 7,
            vote_period: 10,
            symbols: [
                "AUD-USD", "CAD-USD", "EUR-USD", "GBP-USD", "JPY-USD", "SEK-USD", "ATN-USD",
                "NTN-USD",
            ]
            .map(String::from)
            .to_vec(),
            basket_symbols: [
                "AUD-USD", "CAD-USD", "EUR-USD", "GBP-USD", "JPY-USD", "SEK-USD", "USD-USD",
            ]
            .map(String::from)
            .to_vec(),
            basket_quantities: vec![21_300, 18_700, 14_300, 10_400, 1_760_000, 51_000, 18_000],
            basket_scale: 5,
            innocence_proof_submission_window: 100,
            base_slashing_rate_low: 500,
            base_slashing_rate_mid: 1_000,
            collusion_factor: 550,
            history_factor: 750,
            jail_factor: 60,
            slashing_rate_precision: 10_000,
            borrow_interest_rate: 50_000_000_000_000_000,
            liquidation_ratio: 1_800_000_000_000_000_000,
            min_collateralization_ratio: 2_000_000_000_000_000_000,
            min_debt_requirement: 1_000_000,
            target_price: 1_000_000_000_000_000_000,
        }
    }
}

impl GenesisConfig {
    /// Load genesis parameters from a JSON file. Missing fields fall back to
    /// the devnet defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading genesis config {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("parsing genesis config {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_survive_a_json_roundtrip() {
        let config = GenesisConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: GenesisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let parsed: GenesisConfig =
            serde_json::from_str(r#"{ "epoch_period": 1800, "committee_size": 100 }"#).unwrap();
        assert_eq!(parsed.epoch_period, 1800);
        assert_eq!(parsed.committee_size, 100);
        assert_eq!(parsed.block_period, GenesisConfig::default().block_period);
    }

    #[test]
    fn from_file_reports_the_path_on_malformed_input() {
        let path = std::env::temp_dir().join("autonity-genesis-malformed.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = GenesisConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("autonity-genesis-malformed.json"));
        std::fs::remove_file(&path).ok();
    }
}
