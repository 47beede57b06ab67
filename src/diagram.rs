//! Chord renderer — derives a [`DiagramModel`] from a [`ChordSpec`].
//!
//! `render` is pure: the same spec always yields the same model, nothing
//! is cached, and no input makes it fail. Hosts call it again whenever
//! any attribute changes and drop the previous model.

use crate::log::debug;
use crate::model::*;

/// A pattern entry kept after barre collapsing, with its original string position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetainedSymbol {
    pub column: usize,
    pub symbol: PatternSymbol,
}

/// Result of collapsing a pattern around its barre value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsedPattern {
    pub entries: Vec<RetainedSymbol>,
    /// Fret the barre covers; `None` when no string is pressed
    pub barre_value: Option<u8>,
    /// Positions holding the barre value, including the merged ones
    pub barre_strings: Vec<usize>,
}

impl CollapsedPattern {
    pub fn symbols(&self) -> Vec<PatternSymbol> {
        self.entries.iter().map(|e| e.symbol).collect()
    }
}

/// Lowest pressed fret in the pattern, the fret a barre would cover.
///
/// Muted and open strings cannot carry a barre, so a pattern without a
/// pressed string has no barre value.
pub fn barre_value(pattern: &[PatternSymbol]) -> Option<u8> {
    pattern.iter().filter_map(|s| s.pressed_fret()).min()
}

/// Merge every occurrence of the barre value into the first one.
///
/// Entries that differ from the barre value are kept in order; of the
/// entries equal to it only the first survives.
pub fn collapse_barre(pattern: &[PatternSymbol]) -> CollapsedPattern {
    let pattern = &pattern[..pattern.len().min(STRING_COUNT)];
    let Some(value) = barre_value(pattern) else {
        return CollapsedPattern {
            entries: retain_all(pattern),
            barre_value: None,
            barre_strings: Vec::new(),
        };
    };

    let barre = PatternSymbol::Fret(value);
    let barre_strings: Vec<usize> = pattern
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s == barre)
        .map(|(i, _)| i)
        .collect();

    let mut seen = false;
    let entries = retain_all(pattern)
        .into_iter()
        .filter(|e| {
            if e.symbol != barre {
                return true;
            }
            !std::mem::replace(&mut seen, true)
        })
        .collect();

    CollapsedPattern {
        entries,
        barre_value: Some(value),
        barre_strings,
    }
}

fn retain_all(pattern: &[PatternSymbol]) -> Vec<RetainedSymbol> {
    pattern
        .iter()
        .enumerate()
        .map(|(column, &symbol)| RetainedSymbol { column, symbol })
        .collect()
}

/// Derive the full diagram for a chord.
pub fn render(spec: &ChordSpec) -> DiagramModel {
    let pattern = &spec.pattern[..spec.pattern.len().min(STRING_COUNT)];
    let fingers = &spec.fingers[..spec.fingers.len().min(STRING_COUNT)];

    let (entries, barre) = match spec.barre_fret {
        Some(declared) => {
            let collapsed = collapse_barre(pattern);
            let group = barre_group(&collapsed, declared);
            if group.is_none() {
                debug!(declared, "barre declared without a pressed string; drawing without barre");
            }
            (collapsed.entries, group)
        }
        None => (retain_all(pattern), None),
    };

    let markers = entries
        .iter()
        .map(|e| marker_for(e, barre.as_ref()))
        .collect();

    let instructions = if pattern.is_empty() {
        Vec::new()
    } else {
        build_instructions(pattern, fingers, barre.as_ref())
    };

    DiagramModel {
        name: ChordName {
            display: spec.display_name.clone(),
            readable: spec.readable_name.clone(),
        },
        markers,
        barre,
        fingers: finger_labels(fingers),
        instructions,
        fret_rows: fret_rows(pattern),
    }
}

fn barre_group(collapsed: &CollapsedPattern, declared: u8) -> Option<BarreGroup> {
    let value = collapsed.barre_value?;
    let first_column = *collapsed.barre_strings.first()?;
    let last_column = *collapsed.barre_strings.last()?;
    Some(BarreGroup {
        value,
        declared_fret: declared,
        strings: collapsed.barre_strings.clone(),
        first_column,
        last_column,
        show_fret_label: declared >= 2,
    })
}

fn marker_for(entry: &RetainedSymbol, barre: Option<&BarreGroup>) -> Marker {
    let barre = barre.filter(|g| entry.symbol == PatternSymbol::Fret(g.value));
    // Only the first barre-value entry survives collapsing.
    let (span_end, fret_label) = match barre {
        Some(g) => (g.last_column, g.show_fret_label.then_some(g.declared_fret)),
        None => (entry.column, None),
    };
    Marker {
        column: entry.column,
        row: entry.symbol.row(),
        action: entry.symbol.action(),
        barre: barre.is_some(),
        span_end,
        fret_label,
    }
}

fn finger_labels(fingers: &[FingerDigit]) -> Vec<FingerLabel> {
    fingers
        .iter()
        .enumerate()
        .map(|(column, &digit)| FingerLabel {
            column,
            digit,
            text: if digit.is_unused() {
                String::new()
            } else {
                digit.value().to_string()
            },
        })
        .collect()
}

fn fret_rows(pattern: &[PatternSymbol]) -> u8 {
    pattern
        .iter()
        .filter_map(|s| s.pressed_fret())
        .max()
        .unwrap_or(0)
        .max(DEFAULT_FRET_ROWS)
}

// ═══════════════════════════════════════════════════════════════════════
// Instructions
// ═══════════════════════════════════════════════════════════════════════

fn build_instructions(
    pattern: &[PatternSymbol],
    fingers: &[FingerDigit],
    barre: Option<&BarreGroup>,
) -> Vec<Instruction> {
    (0..STRING_COUNT)
        .filter_map(|i| {
            let text = instruction_text(pattern.get(i).copied(), fingers.get(i).copied(), barre)?;
            Some(Instruction {
                string: (STRING_COUNT - i) as u8,
                text,
            })
        })
        .collect()
}

/// Text for one string. `None` means the string has no symbol and no
/// barre covers it, so there is nothing to say.
pub fn instruction_text(
    symbol: Option<PatternSymbol>,
    finger: Option<FingerDigit>,
    barre: Option<&BarreGroup>,
) -> Option<String> {
    let text = match (symbol, barre) {
        (Some(PatternSymbol::Mute), _) => "mute".to_string(),
        (Some(PatternSymbol::Fret(0)), _) => "open".to_string(),
        (Some(PatternSymbol::Fret(f)), Some(g)) if f == g.value => barre_text(g),
        (None, Some(g)) => barre_text(g),
        (None, None) => return None,
        (Some(PatternSymbol::Fret(f)), _) => match finger.and_then(FingerDigit::name) {
            Some(name) => format!("place {name} finger on fret {f}"),
            None => format!("place finger on fret {f}"),
        },
    };
    Some(text)
}

fn barre_text(group: &BarreGroup) -> String {
    format!("barre fret {} with {} finger", group.declared_fret, FINGER_NAMES[0])
}
