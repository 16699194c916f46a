use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

use super::model::{Candidate, Dataset, Stability};
use crate::config::GeneratorConfig;
use crate::error::{Result, ScoutError};

const ID_RANGE: std::ops::Range<u32> = 1000..9999;
const BAND_GAP_MEAN: f64 = 1.8;
const BAND_GAP_STD_DEV: f64 = 0.8;
const COST_RANGE: std::ops::Range<u32> = 50..800;

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Seeded synthetic dataset generator. Validates its config up front so
/// [`Generator::generate`] only fails on nothing it could have checked earlier.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    tiers: Vec<Stability>,
    weights: Option<WeightedIndex<f64>>,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let tiers: Vec<Stability> = config.stability_weights.keys().copied().collect();
        // An empty dataset never samples, so it may come with no weights at all.
        let weights = if config.size > 0 {
            let index = WeightedIndex::new(config.stability_weights.values().copied())
                .map_err(|e| ScoutError::InvalidParameter(format!("stability_weights: {e}")))?;
            Some(index)
        } else {
            None
        };
        Ok(Generator {
            config,
            tiers,
            weights,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draw the dataset. Each column is filled for every row before the next
    /// column starts (id, formula, band gap, stability, cost), so a given seed
    /// always reproduces the same values in the same order.
    pub fn generate(&self) -> Result<Dataset> {
        let size = usize::try_from(self.config.size).map_err(|_| {
            ScoutError::InvalidParameter(format!(
                "dataset size must be non-negative, got {}",
                self.config.size
            ))
        })?;
        let Some(weights) = &self.weights else {
            return Ok(Dataset::new(Vec::new()));
        };

        let band_gap = Normal::new(BAND_GAP_MEAN, BAND_GAP_STD_DEV)
            .map_err(|e| ScoutError::InvalidParameter(format!("band gap distribution: {e}")))?;
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let formulas = &self.config.formula_set;

        let ids: Vec<String> = (0..size)
            .map(|_| format!("mp-{}", rng.gen_range(ID_RANGE)))
            .collect();
        let picked_formulas: Vec<String> = (0..size)
            .map(|_| formulas[rng.gen_range(0..formulas.len())].clone())
            .collect();
        let band_gaps: Vec<f64> = (0..size)
            .map(|_| round2(band_gap.sample(&mut rng)))
            .collect();
        let stabilities: Vec<Stability> = (0..size)
            .map(|_| self.tiers[weights.sample(&mut rng)])
            .collect();
        let costs: Vec<u32> = (0..size).map(|_| rng.gen_range(COST_RANGE)).collect();

        let candidates: Vec<Candidate> = ids
            .into_iter()
            .zip(picked_formulas)
            .zip(band_gaps)
            .zip(stabilities)
            .zip(costs)
            .map(
                |((((material_id, formula), band_gap_ev), predicted_stability), synthesis_cost)| {
                    Candidate {
                        material_id,
                        formula,
                        band_gap_ev,
                        predicted_stability,
                        synthesis_cost,
                    }
                },
            )
            .collect();

        log::info!(
            "Generated {} candidates (seed {})",
            candidates.len(),
            self.config.seed
        );
        Ok(Dataset::new(candidates))
    }
}

/// Generate a dataset with the default formula set and weights.
pub fn generate(seed: u64, size: i64) -> Result<Dataset> {
    Generator::new(GeneratorConfig::with_seed_and_size(seed, size))?.generate()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
