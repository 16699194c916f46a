use eframe::egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Property distribution scatter (right column)
// ---------------------------------------------------------------------------

/// Band gap against synthesis cost, one series per stability tier.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    ui.heading("Property Distribution");
    ui.separator();

    let Some(presentation) = &state.presentation else {
        return;
    };
    let scatter = &presentation.scatter;
    // Marker size is an area; egui wants a radius.
    let radius = (scatter.point_size / std::f32::consts::PI).sqrt();

    Plot::new("property_distribution")
        .legend(Legend::default())
        .height(presentation.listing.viewport_height)
        .x_axis_label("Band_Gap_eV")
        .y_axis_label("Synthesis_Cost")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (tier, series) in scatter.series() {
                let points: PlotPoints = series.into_iter().collect();
                let markers = Points::new(points)
                    .name(tier.as_str())
                    .color(state.colors.color_for(tier))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(radius);
                plot_ui.points(markers);
            }
        });
}
