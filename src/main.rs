use crystal_scout::app::CrystalScoutApp;
use crystal_scout::config::GeneratorConfig;
use crystal_scout::state::AppState;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = GeneratorConfig::from_env().unwrap_or_else(|e| {
        log::error!("Failed to load generator config, using defaults: {e:#}");
        GeneratorConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 850.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CrystalScout AI",
        options,
        Box::new(move |_cc| {
            let state = AppState::new(config)?;
            Ok(Box::new(CrystalScoutApp::new(state)))
        }),
    )
}
