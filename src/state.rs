use crate::color::StabilityColors;
use crate::config::GeneratorConfig;
use crate::data::filter::FilterCriteria;
use crate::data::present::Presentation;
use crate::error::Result;
use crate::pipeline::Pipeline;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Generator plus memoized dataset.
    pub pipeline: Pipeline,

    /// Current control values. Only replaced through [`AppState::set_criteria`].
    criteria: FilterCriteria,

    /// Output of the last successful pipeline run.
    pub presentation: Option<Presentation>,

    /// Category colours.
    pub colors: StabilityColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state and run the first pass with the default controls.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let mut state = Self {
            pipeline: Pipeline::new(config)?,
            criteria: FilterCriteria::default(),
            presentation: None,
            colors: StabilityColors::default(),
            status_message: None,
        };
        state.refilter();
        Ok(state)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the criteria wholesale and rerun filter + present when they changed.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.refilter();
        }
    }

    /// Recompute the presentation for the current criteria. On failure the
    /// previous presentation stays on screen and the error is shown.
    pub fn refilter(&mut self) {
        match self.pipeline.run(&self.criteria) {
            Ok(presentation) => {
                self.presentation = Some(presentation);
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("Rejected filter criteria {:?}: {e}", self.criteria);
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Headline count of the last successful run.
    pub fn candidates_found(&self) -> usize {
        self.presentation.as_ref().map_or(0, |p| p.count)
    }
}
