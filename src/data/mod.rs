/// Data layer: core types, generation, filtering and presentation.
///
/// Architecture:
/// ```text
///   GeneratorConfig (seed, size, formulas, weights)
///        │
///        ▼
///   ┌───────────┐
///   │ generator │  seeded draw → Dataset
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │  filter   │  FilterCriteria → FilteredView (indices, dataset order)
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │  present  │  Listing + ScatterProjection + count
///   └───────────┘
/// ```

pub mod filter;
pub mod generator;
pub mod model;
pub mod present;
