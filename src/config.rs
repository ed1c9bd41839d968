use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level msm configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MsmConfig {
    /// Input settings.
    #[serde(default)]
    pub input: InputToml,

    /// Estimator settings.
    #[serde(default)]
    pub estimate: EstimateToml,

    /// Single-lag analysis settings.
    #[serde(default)]
    pub analyze: AnalyzeToml,

    /// Lag scan settings.
    #[serde(default)]
    pub scan: ScanToml,
}

impl MsmConfig {
    /// Loads configuration from a TOML file, or defaults when `path` is None.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let text = fs::read_to_string(p)
                    .with_context(|| format!("failed to read config: {}", p.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("failed to parse config: {}", p.display()))
            }
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputToml {
    pub path: Option<PathBuf>,
    /// Inclusive label bounds; both must be set to take effect.
    pub min_label: Option<u32>,
    pub max_label: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EstimateToml {
    #[serde(default = "default_policy")]
    pub policy: String,
}

impl Default for EstimateToml {
    fn default() -> Self {
        Self {
            policy: default_policy(),
        }
    }
}

fn default_policy() -> String {
    "zero-fill".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzeToml {
    #[serde(default = "default_lag")]
    pub lag: usize,
}

impl Default for AnalyzeToml {
    fn default() -> Self {
        Self { lag: default_lag() }
    }
}

fn default_lag() -> usize {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanToml {
    #[serde(default = "default_lags")]
    pub lags: Vec<usize>,
    #[serde(default = "default_n_modes")]
    pub n_modes: usize,
}

impl Default for ScanToml {
    fn default() -> Self {
        Self {
            lags: default_lags(),
            n_modes: default_n_modes(),
        }
    }
}

fn default_lags() -> Vec<usize> {
    vec![1, 2, 5, 10, 20, 50, 100]
}

fn default_n_modes() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let config = MsmConfig::load(None).unwrap();
        assert_eq!(config.estimate.policy, "zero-fill");
        assert_eq!(config.analyze.lag, 1);
        assert_eq!(config.scan.n_modes, 5);
        assert!(config.input.path.is_none());
    }

    #[test]
    fn parses_partial_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("msm.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            "[input]\npath = \"traj.csv.gz\"\nmin_label = 1\nmax_label = 100\n\n[scan]\nlags = [1, 10, 100]\n"
        )
        .unwrap();

        let config = MsmConfig::load(Some(&path)).unwrap();
        assert_eq!(config.input.path, Some(PathBuf::from("traj.csv.gz")));
        assert_eq!(config.input.min_label, Some(1));
        assert_eq!(config.scan.lags, vec![1, 10, 100]);
        // Untouched sections keep their defaults.
        assert_eq!(config.scan.n_modes, 5);
        assert_eq!(config.estimate.policy, "zero-fill");
    }

    #[test]
    fn rejects_unknown_fields() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[estimate]\npolicyy = \"zero-fill\"\n").unwrap();
        assert!(MsmConfig::load(Some(&path)).is_err());
    }
}
