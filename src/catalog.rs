//! Chord catalog — a JSON list of named chords.
//!
//! Each entry carries the same string fields a chord element takes as
//! attributes. A default set of common open and barre chords is bundled
//! with the library.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChordError, Result};
use crate::log::warn;
use crate::model::ChordSpec;
use crate::parser::parse_chord;

const DEFAULT_CATALOG: &str = include_str!("../chords/default.json");

/// Label used for entries without a display name.
pub const UNKNOWN_CHORD: &str = "unknown chord";

/// Barre fret as written in the catalog: either `2` or `"2"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BarreValue {
    Number(u64),
    Text(String),
}

impl BarreValue {
    fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogEntry {
    pub display_name: Option<String>,
    pub readable_name: Option<String>,
    pub pattern: Option<String>,
    pub fingers: Option<String>,
    pub barre: Option<BarreValue>,
}

impl CatalogEntry {
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(UNKNOWN_CHORD)
    }

    pub fn to_spec(&self) -> ChordSpec {
        let barre = self.barre.as_ref().map(BarreValue::as_text);
        parse_chord(
            self.pattern.as_deref(),
            self.fingers.as_deref(),
            barre.as_deref(),
            self.display_name.as_deref(),
            self.readable_name.as_deref(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub chords: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.chords.iter().map(CatalogEntry::label).collect()
    }

    /// First entry whose display name matches exactly.
    pub fn find(&self, display_name: &str) -> Option<&CatalogEntry> {
        self.chords
            .iter()
            .find(|c| c.display_name.as_deref() == Some(display_name))
    }

    pub fn specs(&self) -> Vec<ChordSpec> {
        self.chords.iter().map(CatalogEntry::to_spec).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn parse_catalog(json: &str) -> Result<Catalog> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_catalog_bytes(data: &[u8]) -> Result<Catalog> {
    parse_catalog(std::str::from_utf8(data)?)
}

/// Read a catalog JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| ChordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog_bytes(&data)
}

/// The bundled set of common chords.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn default_catalog() -> Catalog {
    parse_catalog(DEFAULT_CATALOG).unwrap_or_else(|e| {
        warn!(error = %e, "bundled chord catalog is invalid");
        Catalog::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PatternSymbol;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_catalog_parses() {
        let catalog = default_catalog();
        assert!(catalog.len() >= 10);
        assert!(catalog.labels().contains(&"C"));
        assert!(catalog.specs().iter().all(|s| s.pattern.len() == 6));
    }

    #[test]
    fn barre_accepts_number_or_string() {
        let catalog = parse_catalog(
            r#"[{"displayName":"F","pattern":"133211","barre":1},
                {"displayName":"Bm","pattern":"x24432","barre":"2"},
                {"displayName":"C","pattern":"x32010","barre":null}]"#,
        )
        .unwrap();
        let barres: Vec<Option<u8>> = catalog.specs().iter().map(|s| s.barre_fret).collect();
        assert_eq!(barres, vec![Some(1), Some(2), None]);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let catalog = parse_catalog(r#"[{}, {"displayName":""}]"#).unwrap();
        assert_eq!(catalog.labels(), vec![UNKNOWN_CHORD, UNKNOWN_CHORD]);
        let spec = catalog.chords[0].to_spec();
        assert_eq!(spec, ChordSpec::default());
    }

    #[test]
    fn find_by_display_name() {
        let catalog = default_catalog();
        let bm = catalog.find("Bm").expect("Bm in catalog").to_spec();
        assert_eq!(bm.pattern[0], PatternSymbol::Mute);
        assert_eq!(bm.barre_fret, Some(2));
        assert!(catalog.find("H#").is_none());
    }

    #[test]
    fn catalog_json_reloads_to_same_specs() {
        let catalog = default_catalog();
        let reloaded = parse_catalog(&catalog.to_json().unwrap()).unwrap();
        assert_eq!(reloaded, catalog);
        assert_eq!(reloaded.specs(), catalog.specs());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(parse_catalog("{not json"), Err(ChordError::Json(_))));
        assert!(matches!(parse_catalog_bytes(&[0xff, 0xfe]), Err(ChordError::InvalidUtf8(_))));
        assert!(matches!(
            load_catalog("/nonexistent/chords.json"),
            Err(ChordError::Io { .. })
        ));
    }
}
