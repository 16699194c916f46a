use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoutError;

// ---------------------------------------------------------------------------
// Stability – ordinal stability rating of a candidate
// ---------------------------------------------------------------------------

/// Predicted stability tier. Variant order is the ordinal order
/// `Unstable < MetaStable < Stable`, so the derived `Ord` is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stability {
    Unstable,
    #[serde(rename = "Meta-Stable")]
    MetaStable,
    Stable,
}

impl Stability {
    /// All tiers, lowest first.
    pub const ALL: [Stability; 3] = [Stability::Unstable, Stability::MetaStable, Stability::Stable];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stability::Unstable => "Unstable",
            Stability::MetaStable => "Meta-Stable",
            Stability::Stable => "Stable",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stability {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Unstable" | "unstable" => Ok(Stability::Unstable),
            "Meta-Stable" | "meta-stable" | "MetaStable" | "metastable" => Ok(Stability::MetaStable),
            "Stable" | "stable" => Ok(Stability::Stable),
            other => Err(ScoutError::InvalidParameter(format!(
                "unknown stability tier '{other}' (expected Unstable, Meta-Stable or Stable)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Candidate – one row of the dataset
// ---------------------------------------------------------------------------

/// A single hypothetical material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// `mp-NNNN`; not unique across the dataset.
    pub material_id: String,
    pub formula: String,
    /// Electronvolts, two decimals. Not clamped, may be negative.
    pub band_gap_ev: f64,
    pub predicted_stability: Stability,
    pub synthesis_cost: u32,
}

// ---------------------------------------------------------------------------
// Dataset – the generated table
// ---------------------------------------------------------------------------

/// Column headers in display order.
pub const COLUMN_NAMES: [&str; 5] = [
    "Material_ID",
    "Formula",
    "Band_Gap_eV",
    "Predicted_Stability",
    "Synthesis_Cost",
];

/// An immutable, ordered set of candidates produced by one generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    candidates: Vec<Candidate>,
}

impl Dataset {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Dataset { candidates }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
