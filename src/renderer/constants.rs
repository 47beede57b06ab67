//! Shared constants for the chord renderer (all in SVG user units).

// ── Diagram box ─────────────────────────────────────────────────────
pub(super) const DIAGRAM_WIDTH: f64 = 120.0;
pub(super) const PADDING_X: f64 = 16.0;
pub(super) const PADDING_TOP: f64 = 6.0;
pub(super) const PADDING_BOTTOM: f64 = 6.0;

// ── Text rows ───────────────────────────────────────────────────────
pub(super) const NAME_HEIGHT: f64 = 26.0; // space for the chord name
pub(super) const NAME_FONT_SIZE: f64 = 18.0;
pub(super) const FINGER_ROW_HEIGHT: f64 = 16.0; // finger digits under the grid
pub(super) const FINGER_FONT_SIZE: f64 = 11.0;
pub(super) const BARRE_FONT_SIZE: f64 = 10.0;
pub(super) const BARRE_LABEL_GAP: f64 = 3.0; // space between barre end and its fret label

// ── Grid ────────────────────────────────────────────────────────────
pub(super) const STRING_WIDTH: f64 = 1.2;
pub(super) const FRET_WIDTH: f64 = 1.0;
pub(super) const NUT_WIDTH: f64 = 3.5;
pub(super) const MARKER_RADIUS_RATIO: f64 = 0.32; // of the string pitch
pub(super) const OPEN_RING_WIDTH: f64 = 1.2;
pub(super) const MUTE_STROKE_WIDTH: f64 = 1.4;
pub(super) const BARRE_HEIGHT_RATIO: f64 = 1.6; // of the marker radius

// ── Sheet ───────────────────────────────────────────────────────────
pub(super) const DEFAULT_SHEET_COLUMNS: usize = 4;
pub(super) const SHEET_GAP: f64 = 12.0;
pub(super) const SHEET_MARGIN: f64 = 10.0;
