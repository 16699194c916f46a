use eframe::egui;
use egui_extras::{Size, StripBuilder};

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CrystalScoutApp {
    pub state: AppState,
}

impl CrystalScoutApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for CrystalScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + objective ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui, &self.state);
        });

        // ---- Bottom panel: data source caption ----
        egui::TopBottomPanel::bottom("caption").show(ctx, |ui| {
            panels::caption(ui);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: listing (1/3) and chart (2/3) ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let state = &self.state;
            StripBuilder::new(ui)
                .size(Size::relative(1.0 / 3.0))
                .size(Size::remainder())
                .horizontal(|mut strip| {
                    strip.cell(|ui| table::candidates_table(ui, state));
                    strip.cell(|ui| plot::scatter_plot(ui, state));
                });
        });
    }
}
