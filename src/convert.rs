//! Bridge TOML/CLI values into library crate configurations.

use anyhow::{Result, bail};

use msm_estimate::{DegenerateRowPolicy, EstimateConfig};
use msm_traj::ReaderConfig;

use crate::config::InputToml;

/// Builds a trajectory reader configuration from the `[input]` section.
pub fn build_reader_config(input: &InputToml) -> ReaderConfig {
    match (input.min_label, input.max_label) {
        (Some(min), Some(max)) => ReaderConfig::new().with_label_range(min, max),
        _ => ReaderConfig::new(),
    }
}

/// Parses a degenerate-row policy name.
pub fn parse_policy(name: &str) -> Result<DegenerateRowPolicy> {
    match name {
        "zero-fill" => Ok(DegenerateRowPolicy::ZeroFill),
        "drop-states" => Ok(DegenerateRowPolicy::DropStates),
        other => bail!("unknown degenerate-row policy '{other}' (expected zero-fill or drop-states)"),
    }
}

/// Builds an estimator configuration from a policy name.
pub fn build_estimate_config(policy: &str) -> Result<EstimateConfig> {
    Ok(EstimateConfig::new().with_policy(parse_policy(policy)?))
}
