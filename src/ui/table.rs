use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Candidate listing (left column)
// ---------------------------------------------------------------------------

/// Headline count plus the scrollable candidate table.
pub fn candidates_table(ui: &mut Ui, state: &AppState) {
    let Some(presentation) = &state.presentation else {
        ui.heading("Candidates Found: –");
        return;
    };
    ui.heading(format!("Candidates Found: {}", presentation.count));
    ui.separator();

    let listing = &presentation.listing;
    if listing.is_empty() {
        ui.label("No candidates match the current filters.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(60.0), listing.columns.len())
        .max_scroll_height(listing.viewport_height)
        .header(20.0, |mut header| {
            for name in listing.columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, listing.len(), |mut row| {
                let c = &listing.rows[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(c.material_id.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(c.formula.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.2}", c.band_gap_ev));
                });
                row.col(|ui: &mut Ui| {
                    let tier = c.predicted_stability;
                    ui.label(RichText::new(tier.as_str()).color(state.colors.color_for(tier)));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(c.synthesis_cost.to_string());
                });
            });
        });
}
