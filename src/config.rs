use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::model::Stability;
use crate::error::ScoutError;

/// Environment variable naming an optional JSON generator config for the dashboard.
pub const CONFIG_ENV_VAR: &str = "CRYSTAL_SCOUT_CONFIG";

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_SIZE: i64 = 500;
pub const DEFAULT_FORMULAS: [&str; 7] = ["LiCoO2", "FePO4", "SiC", "GaN", "TiO2", "MAPbI3", "CsSnI3"];

// ---------------------------------------------------------------------------
// Generator configuration
// ---------------------------------------------------------------------------

/// Parameters of the synthetic dataset. Missing JSON fields fall back to
/// the defaults (seed 42, 500 rows, seven formulas, weights 0.2/0.5/0.3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    /// Signed so that a negative size can be reported rather than unrepresentable.
    pub size: i64,
    pub formula_set: Vec<String>,
    pub stability_weights: BTreeMap<Stability, f64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            size: DEFAULT_SIZE,
            formula_set: DEFAULT_FORMULAS.iter().map(|f| f.to_string()).collect(),
            stability_weights: BTreeMap::from([
                (Stability::Stable, 0.2),
                (Stability::MetaStable, 0.5),
                (Stability::Unstable, 0.3),
            ]),
        }
    }
}

impl GeneratorConfig {
    /// Default config with a different seed and size.
    pub fn with_seed_and_size(seed: u64, size: i64) -> Self {
        Self {
            seed,
            size,
            ..Self::default()
        }
    }

    /// Reject configs the generator cannot draw from.
    pub fn validate(&self) -> std::result::Result<(), ScoutError> {
        if self.size < 0 {
            return Err(ScoutError::InvalidParameter(format!(
                "dataset size must be non-negative, got {}",
                self.size
            )));
        }
        if self.size > 0 && self.formula_set.is_empty() {
            return Err(ScoutError::InvalidParameter(
                "formula_set must not be empty".into(),
            ));
        }
        for (tier, weight) in &self.stability_weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ScoutError::InvalidParameter(format!(
                    "weight for {tier} must be a finite non-negative number, got {weight}"
                )));
            }
        }
        let total: f64 = self.stability_weights.values().sum();
        if !total.is_finite() {
            return Err(ScoutError::InvalidParameter(format!(
                "stability_weights total must be finite, got {total}"
            )));
        }
        if self.size > 0 && total <= 0.0 {
            return Err(ScoutError::InvalidParameter(
                "stability_weights must have a positive total".into(),
            ));
        }
        Ok(())
    }

    /// Load a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: GeneratorConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        log::info!("Loaded generator config from {}", path.display());
        Ok(config)
    }

    /// Config named by [`CONFIG_ENV_VAR`], or the default when the variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_json_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
