//! Diagram geometry: where strings, frets and marker rows land.
//!
//! Everything is relative to the diagram's own top-left corner so the same
//! layout serves a standalone SVG and a cell in a chord sheet.

use crate::model::{DiagramModel, DEFAULT_FRET_ROWS, STRING_COUNT};
use crate::style::StyleTokens;

use super::constants::*;

#[derive(Debug, Clone, PartialEq)]
pub(super) struct DiagramLayout {
    pub(super) width: f64,
    pub(super) height: f64,
    /// Horizontal distance between neighbouring strings
    pub(super) string_pitch: f64,
    /// Vertical distance between neighbouring frets
    pub(super) fret_spacing: f64,
    pub(super) fret_rows: u8,
    pub(super) grid_left: f64,
    pub(super) grid_top: f64,
    pub(super) grid_bottom: f64,
    /// Centre line of open and mute markers, above the nut
    pub(super) nut_row_y: f64,
    pub(super) marker_radius: f64,
    pub(super) finger_baseline: f64,
}

impl DiagramLayout {
    pub(super) fn compute(model: &DiagramModel, style: &StyleTokens) -> Self {
        let chart_width = DIAGRAM_WIDTH - 2.0 * PADDING_X;
        let string_pitch = chart_width / STRING_COUNT as f64;
        // The aspect ratio shapes the default five-fret chart; taller
        // charts keep the same fret spacing.
        let fret_spacing = chart_width / style.aspect_ratio() / f64::from(DEFAULT_FRET_ROWS);
        let fret_rows = model.fret_rows.max(1);
        let marker_radius = (string_pitch * MARKER_RADIUS_RATIO).min(fret_spacing * 0.4);

        let nut_row_height = string_pitch.min(fret_spacing).max(marker_radius * 2.5);
        let top = PADDING_TOP + NAME_HEIGHT;
        let nut_row_y = top + nut_row_height / 2.0;
        let grid_top = top + nut_row_height;
        let grid_bottom = grid_top + fret_spacing * f64::from(fret_rows);
        let finger_baseline = grid_bottom + FINGER_ROW_HEIGHT * 0.8;
        let height = grid_bottom + FINGER_ROW_HEIGHT + PADDING_BOTTOM;

        Self {
            width: DIAGRAM_WIDTH,
            height,
            string_pitch,
            fret_spacing,
            fret_rows,
            grid_left: PADDING_X,
            grid_top,
            grid_bottom,
            nut_row_y,
            marker_radius,
            finger_baseline,
        }
    }

    /// X of the string at `column`.
    pub(super) fn string_x(&self, column: usize) -> f64 {
        self.grid_left + (column as f64 + 0.5) * self.string_pitch
    }

    /// X of the leftmost and rightmost string lines.
    pub(super) fn grid_span(&self) -> (f64, f64) {
        (self.string_x(0), self.string_x(STRING_COUNT - 1))
    }

    /// Y of a fret line; fret 0 is the nut.
    pub(super) fn fret_line_y(&self, fret: u8) -> f64 {
        self.grid_top + f64::from(fret) * self.fret_spacing
    }

    /// Y centre of a marker on `row`. Row 0 sits above the nut; row `n`
    /// sits midway between fret lines `n - 2` and `n - 1`.
    pub(super) fn row_y(&self, row: u8) -> f64 {
        if row == 0 {
            return self.nut_row_y;
        }
        let fret = f64::from(row - 1);
        self.grid_top + (fret - 0.5) * self.fret_spacing
    }
}
