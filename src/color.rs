use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Stability;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: stability tier → Color32
// ---------------------------------------------------------------------------

/// Fixed category colours for the scatter chart and the table.
#[derive(Debug, Clone)]
pub struct StabilityColors {
    mapping: BTreeMap<Stability, Color32>,
}

impl Default for StabilityColors {
    fn default() -> Self {
        let palette = generate_palette(Stability::ALL.len());
        let mapping = Stability::ALL.into_iter().zip(palette).collect();
        StabilityColors { mapping }
    }
}

impl StabilityColors {
    pub fn color_for(&self, tier: Stability) -> Color32 {
        self.mapping.get(&tier).copied().unwrap_or(Color32::GRAY)
    }
}
