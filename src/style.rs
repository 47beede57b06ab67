//! Style tokens handed to a presentation layer.
//!
//! Each token mirrors one of the chord element's CSS custom properties. Unset
//! tokens fall back the same way the stylesheet does: text and marker
//! colors inherit the base color, which itself defaults to `currentColor`.

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_COLOR: &str = "currentColor";
pub const DEFAULT_FONT_FAMILY: &str = "system-ui, sans-serif";
pub const DEFAULT_ASPECT_RATIO: f64 = 1.0;

// ── CSS custom property names ───────────────────────────────────────
pub const PROP_COLOR: &str = "--guitarChord-color";
pub const PROP_TEXT_COLOR: &str = "--guitarChord-text-color";
pub const PROP_MARKER_COLOR: &str = "--guitarChord-marker-color";
pub const PROP_ASPECT_RATIO: &str = "--guitarChord-aspectRatio";
pub const PROP_FONT_FAMILY: &str = "--guitarChord-fontFamily";

/// Named aspect ratios offered for the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectPreset {
    Default,
    Stretch,
    Squash,
}

impl AspectPreset {
    pub const ALL: [AspectPreset; 3] = [Self::Default, Self::Stretch, Self::Squash];

    /// Token value, in CSS `aspect-ratio` syntax.
    pub fn value(self) -> &'static str {
        match self {
            Self::Default => "1",
            Self::Stretch => "2/3",
            Self::Squash => "5/4",
        }
    }
}

/// Parse a CSS-style ratio (`"5/4"`, `"1.5"`) as width over height.
pub fn parse_ratio(raw: &str) -> Option<f64> {
    let ratio = match raw.split_once('/') {
        Some((w, h)) => w.trim().parse::<f64>().ok()? / h.trim().parse::<f64>().ok()?,
        None => raw.trim().parse::<f64>().ok()?,
    };
    (ratio.is_finite() && ratio > 0.0).then_some(ratio)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleTokens {
    pub color: Option<String>,
    pub text_color: Option<String>,
    pub marker_color: Option<String>,
    pub aspect_ratio: Option<String>,
    pub font_family: Option<String>,
}

impl StyleTokens {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_aspect(mut self, preset: AspectPreset) -> Self {
        self.aspect_ratio = Some(preset.value().to_string());
        self
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_COLOR)
    }

    pub fn text_color(&self) -> &str {
        self.text_color.as_deref().unwrap_or_else(|| self.color())
    }

    pub fn marker_color(&self) -> &str {
        self.marker_color.as_deref().unwrap_or_else(|| self.color())
    }

    /// Chart width over height; unparsable values fall back to square.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
            .as_deref()
            .and_then(parse_ratio)
            .unwrap_or(DEFAULT_ASPECT_RATIO)
    }

    pub fn font_family(&self) -> &str {
        self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }

    /// The tokens that are set, as CSS custom property declarations
    /// (`--guitarChord-color:#f00;`). Empty when nothing is set.
    pub fn to_css(&self) -> String {
        let entries = [
            (PROP_ASPECT_RATIO, &self.aspect_ratio),
            (PROP_COLOR, &self.color),
            (PROP_TEXT_COLOR, &self.text_color),
            (PROP_MARKER_COLOR, &self.marker_color),
            (PROP_FONT_FAMILY, &self.font_family),
        ];
        let declarations: Vec<String> = entries
            .iter()
            .filter_map(|&(prop, value)| value.as_ref().map(|v| format!("{prop}:{v}")))
            .collect();
        if declarations.is_empty() {
            return String::new();
        }
        format!("{};", declarations.join(";"))
    }
}
