use std::collections::BTreeMap;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use serde::Serialize;

use super::filter::FilteredView;
use super::model::{COLUMN_NAMES, Candidate, Stability};
use crate::error::Result;

/// Height in points of both the listing and the chart.
pub const VIEWPORT_HEIGHT: f32 = 400.0;
/// Marker size shared by every scatter point.
pub const POINT_SIZE: f32 = 50.0;

// ---------------------------------------------------------------------------
// Listing – tabular rendering of the filtered view
// ---------------------------------------------------------------------------

/// All five columns of the filtered rows, in dataset order. The viewport
/// height only bounds the widget; every row is kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub columns: [&'static str; 5],
    pub rows: Vec<Candidate>,
    pub viewport_height: f32,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Typed Arrow schema matching [`Listing::columns`].
    pub fn schema() -> Schema {
        Schema::new(vec![
            Field::new(COLUMN_NAMES[0], DataType::Utf8, false),
            Field::new(COLUMN_NAMES[1], DataType::Utf8, false),
            Field::new(COLUMN_NAMES[2], DataType::Float64, false),
            Field::new(COLUMN_NAMES[3], DataType::Utf8, false),
            Field::new(COLUMN_NAMES[4], DataType::Int64, false),
        ])
    }

    /// The listing as a single record batch (rows × 5 typed columns).
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let ids = StringArray::from_iter_values(self.rows.iter().map(|c| c.material_id.as_str()));
        let formulas = StringArray::from_iter_values(self.rows.iter().map(|c| c.formula.as_str()));
        let band_gaps = Float64Array::from_iter_values(self.rows.iter().map(|c| c.band_gap_ev));
        let stabilities =
            StringArray::from_iter_values(self.rows.iter().map(|c| c.predicted_stability.as_str()));
        let costs = Int64Array::from_iter_values(self.rows.iter().map(|c| c.synthesis_cost as i64));

        let columns: Vec<ArrayRef> = vec![
            Arc::new(ids),
            Arc::new(formulas),
            Arc::new(band_gaps),
            Arc::new(stabilities),
            Arc::new(costs),
        ];
        Ok(RecordBatch::try_new(Arc::new(Self::schema()), columns)?)
    }

    /// Render as a bordered text table.
    pub fn to_pretty_table(&self) -> Result<String> {
        let batch = self.to_record_batch()?;
        Ok(pretty_format_batches(&[batch])?.to_string())
    }
}

// ---------------------------------------------------------------------------
// ScatterProjection – band gap vs cost, coloured by stability
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Band gap (eV).
    pub x: f64,
    /// Synthesis cost.
    pub y: f64,
    pub category: Stability,
}

/// One point per filtered row; no binning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterProjection {
    pub points: Vec<ScatterPoint>,
    pub point_size: f32,
}

impl ScatterProjection {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points split per stability category, keeping row order inside each
    /// series. Categories without points are omitted.
    pub fn series(&self) -> BTreeMap<Stability, Vec<[f64; 2]>> {
        let mut series: BTreeMap<Stability, Vec<[f64; 2]>> = BTreeMap::new();
        for p in &self.points {
            series.entry(p.category).or_default().push([p.x, p.y]);
        }
        series
    }
}

// ---------------------------------------------------------------------------
// Presentation – everything the dashboard draws for one filter pass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub listing: Listing,
    pub scatter: ScatterProjection,
    /// Headline metric: number of rows in the filtered view.
    pub count: usize,
}

/// Project a filtered view into the listing, the scatter chart and the count.
pub fn present(view: &FilteredView<'_>) -> Presentation {
    let rows: Vec<Candidate> = view.iter().cloned().collect();
    let points: Vec<ScatterPoint> = rows
        .iter()
        .map(|c| ScatterPoint {
            x: c.band_gap_ev,
            y: c.synthesis_cost as f64,
            category: c.predicted_stability,
        })
        .collect();

    Presentation {
        count: rows.len(),
        listing: Listing {
            columns: COLUMN_NAMES,
            rows,
            viewport_height: VIEWPORT_HEIGHT,
        },
        scatter: ScatterProjection {
            points,
            point_size: POINT_SIZE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{FilterCriteria, filter};
    use crate::data::model::Dataset;

    fn sample() -> Dataset {
        let row = |id: &str, gap: f64, cost: u32, tier| Candidate {
            material_id: id.to_string(),
            formula: "TiO2".to_string(),
            band_gap_ev: gap,
            predicted_stability: tier,
            synthesis_cost: cost,
        };
        Dataset::new(vec![
            row("mp-2001", 1.2, 120, Stability::Stable),
            row("mp-2002", 1.9, 80, Stability::Unstable),
            row("mp-2003", 1.4, 190, Stability::MetaStable),
            row("mp-2004", 1.1, 60, Stability::Stable),
        ])
    }

    fn presentation_for(criteria: FilterCriteria) -> Presentation {
        let ds = sample();
        let view = filter(&ds, &criteria).unwrap();
        present(&view)
    }

    #[test]
    fn counts_agree() {
        let p = presentation_for(FilterCriteria {
            min_stability: Stability::Unstable,
            ..FilterCriteria::default()
        });
        assert_eq!(p.count, 4);
        assert_eq!(p.listing.len(), p.count);
        assert_eq!(p.scatter.len(), p.count);
    }

    #[test]
    fn points_follow_rows() {
        let p = presentation_for(FilterCriteria::default());
        let ids: Vec<&str> = p.listing.rows.iter().map(|c| c.material_id.as_str()).collect();
        assert_eq!(ids, ["mp-2001", "mp-2003", "mp-2004"]);
        assert_eq!(
            p.scatter.points[1],
            ScatterPoint {
                x: 1.4,
                y: 190.0,
                category: Stability::MetaStable
            }
        );
        assert_eq!(p.scatter.point_size, POINT_SIZE);
    }

    #[test]
    fn series_groups_by_category_in_row_order() {
        let p = presentation_for(FilterCriteria {
            min_stability: Stability::Unstable,
            ..FilterCriteria::default()
        });
        let series = p.scatter.series();
        assert_eq!(series[&Stability::Stable], vec![[1.2, 120.0], [1.1, 60.0]]);
        assert_eq!(series[&Stability::Unstable], vec![[1.9, 80.0]]);
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn empty_view_presents_empty() {
        let p = presentation_for(FilterCriteria::new(4.9, 5.0, 1000, Stability::Unstable).unwrap());
        assert_eq!(p.count, 0);
        assert!(p.listing.is_empty());
        assert!(p.scatter.series().is_empty());
        assert_eq!(p.listing.to_record_batch().unwrap().num_rows(), 0);
    }

    #[test]
    fn record_batch_has_typed_columns() {
        let p = presentation_for(FilterCriteria::default());
        let batch = p.listing.to_record_batch().unwrap();
        assert_eq!(batch.num_rows(), 3);
        assert_eq!(batch.num_columns(), 5);
        assert_eq!(batch.schema().field(2).data_type(), &DataType::Float64);
        let costs = batch
            .column(4)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(costs.value(1), 190);
    }

    #[test]
    fn pretty_table_lists_headers_and_rows() {
        let p = presentation_for(FilterCriteria::default());
        let table = p.listing.to_pretty_table().unwrap();
        for name in COLUMN_NAMES {
            assert!(table.contains(name), "missing header {name}");
        }
        assert!(table.contains("mp-2003"));
        assert!(table.contains("Meta-Stable"));
    }

    #[test]
    fn presenting_does_not_consume_view() {
        let ds = sample();
        let view = filter(&ds, &FilterCriteria::default()).unwrap();
        let before = view.indices().to_vec();
        let _ = present(&view);
        assert_eq!(view.indices(), before.as_slice());
    }
}
