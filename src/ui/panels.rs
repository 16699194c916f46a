use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::data::filter::{BAND_GAP_BOUNDS, MAX_COST_BOUND};
use crate::data::model::Stability;
use crate::state::AppState;

const TITLE: &str = "CrystalScout: AI-Powered Materials Discovery";
const OBJECTIVE: &str =
    "Autonomous screening of inorganic semiconductors for photovoltaic applications.";
const CAPTION: &str = "Data Source: Simulated inference from Random Forest & VAE models.";

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui, state: &AppState) {
    ui.add_space(4.0);
    ui.heading(RichText::new(TITLE).strong());
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.strong("Objective:");
        ui.label(RichText::new(OBJECTIVE).italics());
    });
    let config = state.pipeline.config();
    ui.label(
        RichText::new(format!(
            "{} synthetic candidates, seed {}",
            config.size, config.seed
        ))
        .weak(),
    );
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter controls. Edits go to a copy of the criteria, which
/// then replaces the state's criteria in one step.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Parameters");
    ui.separator();
    ui.label(RichText::new("Adjust the sliders to filter the AI-predicted candidates.").italics());
    ui.add_space(8.0);

    let mut criteria = *state.criteria();
    let (lo, hi) = BAND_GAP_BOUNDS;

    ui.strong("Band Gap Range (eV)");
    let min_changed = ui
        .add(
            Slider::new(&mut criteria.band_gap_min, lo..=hi)
                .step_by(0.01)
                .fixed_decimals(2)
                .text("min"),
        )
        .changed();
    ui.add(
        Slider::new(&mut criteria.band_gap_max, lo..=hi)
            .step_by(0.01)
            .fixed_decimals(2)
            .text("max"),
    );
    // Keep the range ordered; the handle being dragged pushes the other one.
    if criteria.band_gap_min > criteria.band_gap_max {
        if min_changed {
            criteria.band_gap_max = criteria.band_gap_min;
        } else {
            criteria.band_gap_min = criteria.band_gap_max;
        }
    }
    ui.add_space(8.0);

    ui.strong("Max Synthesis Cost ($/kg)");
    ui.add(Slider::new(&mut criteria.max_cost, 0..=MAX_COST_BOUND));
    ui.add_space(8.0);

    ui.strong("Stability Level");
    ui.horizontal(|ui: &mut Ui| {
        for tier in Stability::ALL {
            let text = RichText::new(tier.as_str()).color(state.colors.color_for(tier));
            ui.selectable_value(&mut criteria.min_stability, tier, text);
        }
    });

    state.set_criteria(criteria);

    if let Some(msg) = &state.status_message {
        ui.separator();
        ui.label(RichText::new(msg).color(Color32::RED));
    }
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub fn caption(ui: &mut Ui) {
    ui.with_layout(
        egui::Layout::left_to_right(egui::Align::Center),
        |ui: &mut Ui| {
            ui.small(CAPTION);
        },
    );
}
