use serde::{Deserialize, Serialize};

use super::model::{Candidate, Dataset, Stability};
use crate::error::{Result, ScoutError};

/// Slider bounds for the filter controls.
pub const BAND_GAP_BOUNDS: (f64, f64) = (0.0, 5.0);
pub const MAX_COST_BOUND: u32 = 1000;

// ---------------------------------------------------------------------------
// Filter criteria: the user's current control values
// ---------------------------------------------------------------------------

/// The three filter controls, replaced wholesale whenever one changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub band_gap_min: f64,
    pub band_gap_max: f64,
    pub max_cost: u32,
    pub min_stability: Stability,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            band_gap_min: 1.0,
            band_gap_max: 2.0,
            max_cost: 200,
            min_stability: Stability::MetaStable,
        }
    }
}

impl FilterCriteria {
    /// Build criteria, rejecting an inverted band-gap range.
    pub fn new(
        band_gap_min: f64,
        band_gap_max: f64,
        max_cost: u32,
        min_stability: Stability,
    ) -> Result<Self> {
        let criteria = Self {
            band_gap_min,
            band_gap_max,
            max_cost,
            min_stability,
        };
        criteria.validate()?;
        Ok(criteria)
    }

    pub fn validate(&self) -> Result<()> {
        // `!(a <= b)` also catches NaN bounds.
        if !(self.band_gap_min <= self.band_gap_max) {
            return Err(ScoutError::InvalidParameter(format!(
                "band_gap_min ({}) must not exceed band_gap_max ({})",
                self.band_gap_min, self.band_gap_max
            )));
        }
        Ok(())
    }

    /// Whether a candidate passes all three predicates. Bounds are inclusive.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        (self.band_gap_min..=self.band_gap_max).contains(&candidate.band_gap_ev)
            && candidate.synthesis_cost <= self.max_cost
            && tier_admits(self.min_stability, candidate.predicted_stability)
    }
}

/// Stability predicate. `Stable` is an exact match, `Meta-Stable` is a
/// minimum threshold and `Unstable` applies no filtering at all.
pub fn tier_admits(tier: Stability, value: Stability) -> bool {
    match tier {
        Stability::Stable => value == Stability::Stable,
        Stability::MetaStable => matches!(value, Stability::Stable | Stability::MetaStable),
        Stability::Unstable => true,
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// Rows of a dataset that pass a set of criteria, in dataset order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// Indices into the source dataset, strictly increasing.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Candidate> + '_ {
        let rows = self.dataset.candidates();
        self.indices.iter().map(move |&i| &rows[i])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Return indices of candidates that pass all predicates.
pub fn filtered_indices(dataset: &Dataset, criteria: &FilterCriteria) -> Result<Vec<usize>> {
    criteria.validate()?;
    let indices: Vec<usize> = dataset
        .candidates()
        .iter()
        .enumerate()
        .filter(|(_, c)| criteria.matches(c))
        .map(|(i, _)| i)
        .collect();
    log::debug!(
        "Filter {:?} kept {} of {} candidates",
        criteria,
        indices.len(),
        dataset.len()
    );
    Ok(indices)
}

/// Apply the criteria to a dataset.
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Result<FilteredView<'a>> {
    let indices = filtered_indices(dataset, criteria)?;
    Ok(FilteredView { dataset, indices })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, band_gap_ev: f64, cost: u32, stability: Stability) -> Candidate {
        Candidate {
            material_id: id.to_string(),
            formula: "GaN".to_string(),
            band_gap_ev,
            predicted_stability: stability,
            synthesis_cost: cost,
        }
    }

    fn one_per_tier() -> Dataset {
        Dataset::new(vec![
            candidate("mp-1001", 1.5, 100, Stability::Stable),
            candidate("mp-1002", 1.5, 100, Stability::MetaStable),
            candidate("mp-1003", 1.5, 100, Stability::Unstable),
        ])
    }

    fn ids(view: &FilteredView<'_>) -> Vec<String> {
        view.iter().map(|c| c.material_id.clone()).collect()
    }

    #[test]
    fn stable_tier_is_exact_match() {
        let ds = one_per_tier();
        let criteria = FilterCriteria::new(0.0, 5.0, 1000, Stability::Stable).unwrap();
        assert_eq!(ids(&filter(&ds, &criteria).unwrap()), ["mp-1001"]);
    }

    #[test]
    fn meta_stable_tier_is_threshold() {
        let ds = one_per_tier();
        let criteria = FilterCriteria::new(0.0, 5.0, 1000, Stability::MetaStable).unwrap();
        assert_eq!(ids(&filter(&ds, &criteria).unwrap()), ["mp-1001", "mp-1002"]);
    }

    #[test]
    fn unstable_tier_keeps_everything() {
        let ds = one_per_tier();
        let criteria = FilterCriteria::new(0.0, 5.0, 1000, Stability::Unstable).unwrap();
        assert_eq!(filter(&ds, &criteria).unwrap().len(), 3);
    }

    #[test]
    fn bounds_are_inclusive() {
        let ds = Dataset::new(vec![
            candidate("low", 1.0, 150, Stability::Unstable),
            candidate("high", 2.0, 200, Stability::Unstable),
            candidate("over_cost", 1.5, 201, Stability::Unstable),
            candidate("under_gap", 0.99, 50, Stability::Unstable),
            candidate("over_gap", 2.01, 50, Stability::Unstable),
        ]);
        let criteria = FilterCriteria::new(1.0, 2.0, 200, Stability::Unstable).unwrap();
        assert_eq!(ids(&filter(&ds, &criteria).unwrap()), ["low", "high"]);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let ds = Dataset::new(vec![
            candidate("all_pass", 1.5, 100, Stability::Stable),
            candidate("bad_gap", 3.5, 100, Stability::Stable),
            candidate("bad_cost", 1.5, 900, Stability::Stable),
            candidate("bad_tier", 1.5, 100, Stability::Unstable),
        ]);
        let criteria = FilterCriteria::new(1.0, 2.0, 500, Stability::MetaStable).unwrap();
        assert_eq!(ids(&filter(&ds, &criteria).unwrap()), ["all_pass"]);
    }

    #[test]
    fn negative_band_gap_is_kept_when_in_range() {
        let ds = Dataset::new(vec![candidate("neg", -0.4, 60, Stability::Stable)]);
        let criteria = FilterCriteria::new(-1.0, 0.0, 100, Stability::Stable).unwrap();
        assert_eq!(filter(&ds, &criteria).unwrap().len(), 1);
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(FilterCriteria::new(2.0, 1.0, 200, Stability::Stable).is_err());

        // Fields are public, so the engine checks again.
        let criteria = FilterCriteria {
            band_gap_min: 3.0,
            band_gap_max: 1.0,
            ..FilterCriteria::default()
        };
        assert!(matches!(
            filter(&one_per_tier(), &criteria),
            Err(ScoutError::InvalidParameter(_))
        ));
    }

    #[test]
    fn nan_bound_is_rejected() {
        assert!(FilterCriteria::new(f64::NAN, 1.0, 200, Stability::Stable).is_err());
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let ds = one_per_tier();
        let criteria = FilterCriteria::new(4.0, 5.0, 1000, Stability::Unstable).unwrap();
        let view = filter(&ds, &criteria).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn equal_bounds_select_exact_value() {
        let criteria = FilterCriteria::new(1.5, 1.5, 100, Stability::Unstable).unwrap();
        assert_eq!(filter(&one_per_tier(), &criteria).unwrap().len(), 3);
    }
}
