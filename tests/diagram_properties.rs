//! Diagram model tests — marker, barre, finger and instruction facets.

use chordlib::{
    collapse_barre, diagram_to_json, parse_chord, render, ChordSpec, MarkerAction, PatternSymbol,
};
use pretty_assertions::assert_eq;

fn chord(pattern: Option<&str>, fingers: Option<&str>, barre: Option<&str>) -> ChordSpec {
    parse_chord(pattern, fingers, barre, None, None)
}

#[test]
fn one_marker_per_symbol_without_barre() {
    let patterns = ["x32010", "022100", "xx0232", "320003", "x02220", "000000", "xxxxxx", "x79987"];
    for pattern in patterns {
        let spec = chord(Some(pattern), None, None);
        let model = render(&spec);
        assert_eq!(model.markers.len(), 6, "pattern {pattern}");

        for (marker, symbol) in model.markers.iter().zip(pattern.chars()) {
            let expected = match symbol {
                'x' => MarkerAction::Mute,
                '0' => MarkerAction::Open,
                _ => MarkerAction::Press,
            };
            assert_eq!(marker.action, expected, "pattern {pattern} symbol {symbol}");
            assert!(!marker.barre);
            assert_eq!(marker.span_end, marker.column);
        }
    }
}

#[test]
fn rows_follow_frets() {
    let model = render(&chord(Some("x32010"), None, None));
    let rows: Vec<u8> = model.markers.iter().map(|m| m.row).collect();
    assert_eq!(rows, vec![0, 4, 3, 0, 2, 0]);
}

#[test]
fn barre_on_first_fret_merges_outer_strings() {
    let model = render(&chord(Some("110121"), Some("110121"), Some("1")));

    let barre = model.barre.as_ref().expect("barre group");
    assert_eq!(barre.value, 1);
    assert_eq!(barre.declared_fret, 1);
    assert_eq!(barre.strings, vec![0, 1, 3, 5]);
    assert!(!barre.show_fret_label);

    let summary: Vec<(usize, MarkerAction, bool)> =
        model.markers.iter().map(|m| (m.column, m.action, m.barre)).collect();
    assert_eq!(
        summary,
        vec![
            (0, MarkerAction::Press, true),
            (2, MarkerAction::Open, false),
            (4, MarkerAction::Press, false),
        ]
    );
    assert!(model.markers.iter().all(|m| m.fret_label.is_none()));
}

#[test]
fn barre_label_shown_from_second_fret() {
    let model = render(&chord(Some("x35553"), Some("013331"), Some("3")));
    let labels: Vec<Option<u8>> = model.markers.iter().map(|m| m.fret_label).collect();
    assert_eq!(labels.iter().filter(|l| l.is_some()).count(), 1);
    assert_eq!(model.barre_marker().and_then(|m| m.fret_label), Some(3));
}

#[test]
fn collapsing_twice_changes_nothing() {
    for pattern in ["133211", "x24432", "110121", "x32010", "xxxxxx"] {
        let symbols = chordlib::parser::sanitize_pattern(pattern);
        let once = collapse_barre(&symbols);
        let twice = collapse_barre(&once.symbols());
        assert_eq!(once.symbols(), twice.symbols(), "pattern {pattern}");
        assert_eq!(once.barre_value, twice.barre_value, "pattern {pattern}");
    }
}

#[test]
fn missing_fingers_leave_markers_alone() {
    let with = render(&chord(Some("x32010"), Some("032010"), None));
    let without = render(&chord(Some("x32010"), None, None));

    assert!(without.fingers.is_empty());
    assert_eq!(with.fingers.len(), 6);
    assert_eq!(with.markers, without.markers);
    assert_eq!(with.fingers[0].text, "");
    assert_eq!(with.fingers[1].text, "3");
}

#[test]
fn extra_fingers_are_ignored() {
    let model = render(&chord(Some("133211"), Some("13421123"), Some("1")));
    assert_eq!(model.fingers.len(), 6);
    let texts: Vec<&str> = model.fingers.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(texts, vec!["1", "3", "4", "2", "1", "1"]);
    assert_eq!(model.fingers[5].column, 5);
}

#[test]
fn missing_pattern_leaves_fingers_alone() {
    let model = render(&chord(None, Some("032010"), Some("2")));
    assert!(model.markers.is_empty());
    assert!(model.instructions.is_empty());
    assert!(model.barre.is_none());
    assert_eq!(model.fingers.len(), 6);
}

#[test]
fn instruction_texts() {
    let model = render(&chord(Some("x03000"), Some("002000"), None));
    let texts: Vec<&str> = model.instructions.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts[0], "mute");
    assert_eq!(texts[1], "open");
    assert_eq!(texts[2], "place middle finger on fret 3");

    let numbers: Vec<u8> = model.instructions.iter().map(|i| i.string).collect();
    assert_eq!(numbers, vec![6, 5, 4, 3, 2, 1]);
}

#[test]
fn garbage_input_never_panics() {
    let inputs = [
        "",
        "🎸🎸🎸",
        "XxXxXxXxXx",
        "9999999999",
        "barre me",
        "-1-2-3",
        "\0\u{202e}abc",
        "x x x 0 0 0 1 2 3",
    ];
    for pattern in inputs {
        for fingers in inputs {
            for barre in inputs {
                let spec = parse_chord(Some(pattern), Some(fingers), Some(barre), Some(pattern), Some(fingers));
                let model = render(&spec);
                assert!(model.markers.len() <= 6);
                assert!(model.fingers.len() <= 6);
                assert!(model.instructions.len() <= 6);
                let _ = chordlib::render_diagram_to_svg(&model, &Default::default());
            }
        }
    }
}

#[test]
fn illegal_pattern_characters_are_stripped() {
    let spec = chord(Some("x-3-2-0-1-0"), None, None);
    assert_eq!(
        spec.pattern,
        vec![
            PatternSymbol::Mute,
            PatternSymbol::Fret(3),
            PatternSymbol::Fret(2),
            PatternSymbol::Fret(0),
            PatternSymbol::Fret(1),
            PatternSymbol::Fret(0),
        ]
    );
    assert_eq!(render(&spec), render(&chord(Some("x32010"), None, None)));
}

#[test]
fn rerender_after_attribute_change() {
    let mut spec = chord(Some("022000"), Some("023000"), None);
    let before = render(&spec);
    assert_eq!(before.instructions[3].text, "open");

    spec.set_attribute("pattern", Some("022100"));
    spec.set_attribute("fingers", Some("023100"));
    let after = render(&spec);
    assert_eq!(after.instructions[3].text, "place index finger on fret 1");
    assert_eq!(render(&spec), after);
}

#[test]
fn model_serializes_for_hosts() {
    let model = render(&parse_chord(Some("133211"), Some("134211"), Some("1"), Some("F"), Some("F major")));
    let json = diagram_to_json(&model).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["name"]["readable"], "F major");
    assert_eq!(value["markers"][0]["action"], "press");
    assert_eq!(value["markers"][0]["barre"], true);
    assert_eq!(value["barre"]["strings"], serde_json::json!([0, 4, 5]));
    assert_eq!(value["instructions"][0]["text"], "barre fret 1 with index finger");
}
