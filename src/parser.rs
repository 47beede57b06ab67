//! Attribute parser — turns the string-encoded chord attributes into a
//! [`ChordSpec`].
//!
//! Parsing never fails. Each field keeps only its legal symbols and drops
//! everything else, so arbitrary input degrades to an empty facet.

use crate::model::*;

// ── Attribute names ─────────────────────────────────────────────────
pub const ATTR_DISPLAY_NAME: &str = "display-name";
pub const ATTR_READABLE_NAME: &str = "readable-name";
pub const ATTR_BARRE: &str = "barre";
pub const ATTR_FINGERS: &str = "fingers";
pub const ATTR_PATTERN: &str = "pattern";

/// Every attribute a chord reacts to.
pub const OBSERVED_ATTRIBUTES: [&str; 5] = [
    ATTR_DISPLAY_NAME,
    ATTR_READABLE_NAME,
    ATTR_BARRE,
    ATTR_FINGERS,
    ATTR_PATTERN,
];

/// Keep digits and the mute marker (case-insensitive), at most one symbol
/// per string.
pub fn sanitize_pattern(raw: &str) -> Vec<PatternSymbol> {
    raw.chars()
        .filter_map(PatternSymbol::from_char)
        .take(STRING_COUNT)
        .collect()
}

/// Keep finger digits `0`–`5`, at most one per string.
pub fn sanitize_fingers(raw: &str) -> Vec<FingerDigit> {
    raw.chars()
        .filter_map(FingerDigit::from_char)
        .take(STRING_COUNT)
        .collect()
}

/// Read the digits of a `barre` value as a fret number.
///
/// Returns `None` when no digit is present. Numbers too large for a fret
/// saturate at `u8::MAX`.
pub fn parse_barre(raw: &str) -> Option<u8> {
    let mut digits = raw.chars().filter_map(|c| c.to_digit(10)).peekable();
    digits.peek()?;
    let value = digits.fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(d));
    Some(u8::try_from(value).unwrap_or(u8::MAX))
}

/// Build a spec from optional raw field values. Empty strings count as absent.
pub fn parse_chord(
    pattern: Option<&str>,
    fingers: Option<&str>,
    barre: Option<&str>,
    display_name: Option<&str>,
    readable_name: Option<&str>,
) -> ChordSpec {
    let mut spec = ChordSpec::default();
    spec.set_attribute(ATTR_PATTERN, pattern);
    spec.set_attribute(ATTR_FINGERS, fingers);
    spec.set_attribute(ATTR_BARRE, barre);
    spec.set_attribute(ATTR_DISPLAY_NAME, display_name);
    spec.set_attribute(ATTR_READABLE_NAME, readable_name);
    spec
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl ChordSpec {
    /// Build a spec from `(name, value)` attribute pairs. Unknown names are
    /// ignored; a later pair for the same name replaces an earlier one.
    pub fn from_attributes<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut spec = Self::default();
        for (name, value) in attributes {
            spec.set_attribute(name.as_ref(), Some(value.as_ref()));
        }
        spec
    }

    /// Replace the field behind one attribute. `None` or an empty value
    /// clears it. Returns `false` if the attribute is not one a chord
    /// observes.
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) -> bool {
        let value = non_empty(value);
        match name {
            ATTR_DISPLAY_NAME => self.display_name = value.map(str::to_owned),
            ATTR_READABLE_NAME => self.readable_name = value.map(str::to_owned),
            ATTR_BARRE => self.barre_fret = value.and_then(parse_barre),
            ATTR_FINGERS => self.fingers = value.map(sanitize_fingers).unwrap_or_default(),
            ATTR_PATTERN => self.pattern = value.map(sanitize_pattern).unwrap_or_default(),
            _ => return false,
        }
        true
    }

    /// Encode the spec back into attribute pairs, skipping empty fields.
    pub fn to_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        if let Some(ref name) = self.display_name {
            attrs.push((ATTR_DISPLAY_NAME, name.clone()));
        }
        if let Some(ref name) = self.readable_name {
            attrs.push((ATTR_READABLE_NAME, name.clone()));
        }
        if !self.pattern.is_empty() {
            attrs.push((ATTR_PATTERN, self.pattern.iter().map(|s| s.to_char()).collect()));
        }
        if !self.fingers.is_empty() {
            attrs.push((ATTR_FINGERS, self.fingers.iter().map(|f| f.to_char()).collect()));
        }
        if let Some(fret) = self.barre_fret {
            attrs.push((ATTR_BARRE, fret.to_string()));
        }
        attrs
    }
}
