use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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
            let hsl = Hsl::new(hue, 0.65, 0.55);
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
// Label → Color32
// ---------------------------------------------------------------------------

/// Assigns each category (or payment mode) of the loaded dataset a fixed
/// colour, so a label keeps its colour while filters change.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    pub fn new<'a>(labels: impl ExactSizeIterator<Item = &'a String>) -> Self {
        let palette = generate_palette(labels.len());
        let mapping = labels.cloned().zip(palette).collect();
        ColorMap { mapping }
    }

    /// Unknown labels fall back to grey.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping.get(label).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let colours = generate_palette(6);
        assert_eq!(colours.len(), 6);
        let unique: BTreeSet<[u8; 4]> = colours.iter().map(|c| c.to_array()).collect();
        assert_eq!(unique.len(), 6);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn every_label_gets_its_own_colour() {
        let labels: BTreeSet<String> = ["Bills", "Food", "Travel"].map(String::from).into();
        let map = ColorMap::new(labels.iter());
        assert_ne!(map.color_for("Bills"), map.color_for("Food"));
        assert_ne!(map.color_for("Food"), map.color_for("Travel"));
        assert_eq!(map.color_for("Rent"), Color32::GRAY);
    }
}
