//! Data model for chord input and the derived diagram.
//!
//! `ChordSpec` is what a host hands in; `DiagramModel` is what a renderer
//! draws. Both serialize with serde so they can cross FFI boundaries as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of strings on the fretboard.
pub const STRING_COUNT: usize = 6;

/// Fret rows drawn when no pressed fret needs more.
pub const DEFAULT_FRET_ROWS: u8 = 5;

/// Pattern symbol for a muted string.
pub const MUTE_SYMBOL: char = 'x';

/// Names for finger digits 1 through 4.
pub const FINGER_NAMES: [&str; 4] = ["index", "middle", "ring", "pinky"];

// ═══════════════════════════════════════════════════════════════════════
// Input
// ═══════════════════════════════════════════════════════════════════════

/// One position of a fret pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternSymbol {
    /// String is not played
    Mute,
    /// Fret number, 0 for an open string
    Fret(u8),
}

impl PatternSymbol {
    /// Decode one pattern character. Only digits and the mute marker are legal.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            MUTE_SYMBOL => Some(Self::Mute),
            d => d.to_digit(10).map(|v| Self::Fret(v as u8)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Mute => MUTE_SYMBOL,
            Self::Fret(f) => char::from_digit(u32::from(f.min(9)), 10).unwrap_or('0'),
        }
    }

    /// The fret number, or `None` for a muted string.
    pub fn fret(self) -> Option<u8> {
        match self {
            Self::Mute => None,
            Self::Fret(f) => Some(f),
        }
    }

    /// A fret above the nut, i.e. a string a finger actually holds down.
    pub fn pressed_fret(self) -> Option<u8> {
        self.fret().filter(|&f| f > 0)
    }

    pub fn action(self) -> MarkerAction {
        match self {
            Self::Mute => MarkerAction::Mute,
            Self::Fret(0) => MarkerAction::Open,
            Self::Fret(_) => MarkerAction::Press,
        }
    }

    /// Grid row: 0 is the nut row (open and muted strings), a pressed
    /// fret sits on row `fret + 1`.
    pub fn row(self) -> u8 {
        match self.pressed_fret() {
            Some(f) => f.saturating_add(1),
            None => 0,
        }
    }
}

/// A finger digit from the `fingers` attribute: 0 = unused, 1–4 = index
/// to pinky, 5 = a finger without a name in the instruction text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FingerDigit(u8);

impl FingerDigit {
    pub const UNUSED: Self = Self(0);
    pub const MAX: u8 = 5;

    /// Decode one fingers character; anything outside `0`–`5` is rejected.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10)
            .filter(|&d| d <= u32::from(Self::MAX))
            .map(|d| Self(d as u8))
    }

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_unused(self) -> bool {
        self.0 == 0
    }

    /// Finger name for digits 1–4.
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            1..=4 => Some(FINGER_NAMES[usize::from(self.0) - 1]),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        char::from_digit(u32::from(self.0), 10).unwrap_or('0')
    }
}

impl TryFrom<u8> for FingerDigit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("finger digit {value} is outside 0-{}", Self::MAX))
    }
}

impl From<FingerDigit> for u8 {
    fn from(digit: FingerDigit) -> Self {
        digit.0
    }
}

/// Encoded description of one chord, as supplied by the embedding page.
///
/// Positions in `pattern` and `fingers` run from the lowest string index
/// (string 6, low E) to the highest (string 1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordSpec {
    /// Short name shown above the diagram (e.g. "C")
    pub display_name: Option<String>,
    /// Long name for screen readers (e.g. "C major")
    pub readable_name: Option<String>,
    /// One symbol per string
    pub pattern: Vec<PatternSymbol>,
    /// One finger digit per string, aligned with `pattern`
    pub fingers: Vec<FingerDigit>,
    /// Fret the barre sits on, if the chord is barred
    pub barre_fret: Option<u8>,
}

// ═══════════════════════════════════════════════════════════════════════
// Output
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerAction {
    Open,
    Mute,
    Press,
}

impl MarkerAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Mute => "mute",
            Self::Press => "press",
        }
    }
}

impl fmt::Display for MarkerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One mark drawn on the fretboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// String position (0 = lowest string index)
    pub column: usize,
    /// Grid row, see [`PatternSymbol::row`]
    pub row: u8,
    pub action: MarkerAction,
    /// Whether this marker is the merged barre span
    pub barre: bool,
    /// Last column the marker covers; equals `column` except for the barre
    pub span_end: usize,
    /// Fret number to print beside the marker (barre only, fret ≥ 2)
    pub fret_label: Option<u8>,
}

/// Strings covered by a single barre finger, merged into one marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarreGroup {
    /// Fret value the barre covers in the pattern
    pub value: u8,
    /// Fret number declared by the `barre` attribute
    pub declared_fret: u8,
    /// Every string position holding the barre value
    pub strings: Vec<usize>,
    pub first_column: usize,
    pub last_column: usize,
    pub show_fret_label: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerLabel {
    pub column: usize,
    pub digit: FingerDigit,
    /// Digit as text, empty for an unused finger
    pub text: String,
}

/// Play instruction for one string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Guitar string number, 6 (lowest) down to 1
    pub string: u8,
    pub text: String,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "String {}: {}", self.string, self.text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordName {
    pub display: Option<String>,
    pub readable: Option<String>,
}

impl ChordName {
    /// The name a screen reader should announce.
    pub fn accessible_label(&self) -> Option<&str> {
        self.readable.as_deref().or(self.display.as_deref())
    }

    /// Whether the visible name should be hidden from assistive technology
    /// because a separate readable name is present.
    pub fn display_is_decorative(&self) -> bool {
        self.readable.is_some()
    }
}

/// Renderer-agnostic representation of one chord diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramModel {
    pub name: ChordName,
    pub markers: Vec<Marker>,
    pub barre: Option<BarreGroup>,
    pub fingers: Vec<FingerLabel>,
    pub instructions: Vec<Instruction>,
    /// Fret rows below the nut a renderer should draw
    pub fret_rows: u8,
}

impl DiagramModel {
    /// The marker drawn at a string position, if any. Strings merged into
    /// the barre have none of their own.
    pub fn marker_at(&self, column: usize) -> Option<&Marker> {
        self.markers.iter().find(|m| m.column == column)
    }

    pub fn barre_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.barre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_symbol_actions_and_rows() {
        assert_eq!(PatternSymbol::from_char('x'), Some(PatternSymbol::Mute));
        assert_eq!(PatternSymbol::from_char('X'), Some(PatternSymbol::Mute));
        assert_eq!(PatternSymbol::from_char('3'), Some(PatternSymbol::Fret(3)));
        assert_eq!(PatternSymbol::from_char('a'), None);

        assert_eq!(PatternSymbol::Mute.action(), MarkerAction::Mute);
        assert_eq!(PatternSymbol::Fret(0).action(), MarkerAction::Open);
        assert_eq!(PatternSymbol::Fret(2).action(), MarkerAction::Press);

        assert_eq!(PatternSymbol::Mute.row(), 0);
        assert_eq!(PatternSymbol::Fret(0).row(), 0);
        assert_eq!(PatternSymbol::Fret(2).row(), 3);
    }

    #[test]
    fn finger_digit_names() {
        assert_eq!(FingerDigit::from_char('1').and_then(FingerDigit::name), Some("index"));
        assert_eq!(FingerDigit::from_char('4').and_then(FingerDigit::name), Some("pinky"));
        assert_eq!(FingerDigit::from_char('5').and_then(FingerDigit::name), None);
        assert_eq!(FingerDigit::from_char('0').map(FingerDigit::is_unused), Some(true));
        assert_eq!(FingerDigit::from_char('6'), None);
        assert_eq!(FingerDigit::new(3).map(FingerDigit::to_char), Some('3'));
    }

    #[test]
    fn finger_digits_out_of_range_are_rejected_from_json() {
        let json = r#"{"display_name":null,"readable_name":null,"pattern":[{"fret":3}],"fingers":[250],"barre_fret":null}"#;
        assert!(serde_json::from_str::<ChordSpec>(json).is_err());

        let json = r#"{"display_name":null,"readable_name":null,"pattern":[{"fret":3}],"fingers":[3],"barre_fret":null}"#;
        let spec: ChordSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.fingers, vec![FingerDigit::new(3).unwrap()]);
        assert_eq!(serde_json::to_value(spec.fingers[0]).unwrap(), serde_json::json!(3));
    }

    #[test]
    fn instruction_display_prefixes_string_number() {
        let ins = Instruction { string: 6, text: "mute".into() };
        assert_eq!(ins.to_string(), "String 6: mute");
    }

    #[test]
    fn accessible_label_prefers_readable_name() {
        let name = ChordName {
            display: Some("C".into()),
            readable: Some("C major".into()),
        };
        assert_eq!(name.accessible_label(), Some("C major"));
        assert!(name.display_is_decorative());

        let short = ChordName { display: Some("C".into()), readable: None };
        assert_eq!(short.accessible_label(), Some("C"));
        assert!(!short.display_is_decorative());
    }
}
