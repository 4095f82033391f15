// Settings module
// User-tunable heatmap appearance, loaded from TOML

use serde::{Deserialize, Serialize};

use crate::models::color_scale::{ColorScale, NEUTRAL_COLOR};
use crate::models::range::HeatmapView;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapSettings {
    pub view: HeatmapView,
    pub color_scheme: ColorScale,
    pub out_of_range_color: String,
    pub empty_scale_color: String,
}

impl Default for HeatmapSettings {
    fn default() -> Self {
        Self {
            view: HeatmapView::Month,
            color_scheme: ColorScale::default(),
            out_of_range_color: NEUTRAL_COLOR.to_string(),
            empty_scale_color: NEUTRAL_COLOR.to_string(),
        }
    }
}

impl HeatmapSettings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if let Some(pos) = self
            .color_scheme
            .tokens()
            .iter()
            .position(|token| token.trim().is_empty())
        {
            return Err(format!("Color scheme entry {} cannot be empty", pos));
        }

        for (name, color) in [
            ("out_of_range_color", &self.out_of_range_color),
            ("empty_scale_color", &self.empty_scale_color),
        ] {
            if !is_hex_color(color) {
                return Err(format!(
                    "{} must be in hex format (#RRGGBB or #RGB), got '{}'",
                    name, color
                ));
            }
        }

        Ok(())
    }
}

fn is_hex_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 6 || digits.len() == 3) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
