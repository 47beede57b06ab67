//! Rendering tests — load the bundled chord catalog and render to SVG.

use chordlib::{load_catalog, render_catalog_to_svg, render_chord_to_svg, AspectPreset, StyleTokens};
use std::path::PathBuf;

fn chords_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("chords")
}

fn output_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    std::fs::create_dir_all(&dir).ok();
    dir
}

#[test]
fn render_every_catalog_chord() {
    let catalog = load_catalog(chords_dir().join("default.json")).expect("Failed to load catalog");
    let style = StyleTokens::default();

    for entry in &catalog.chords {
        let svg = render_chord_to_svg(&entry.to_spec(), &style);
        assert!(svg.starts_with("<svg"), "{} should render SVG", entry.label());
        assert!(svg.contains("</svg>"), "{} SVG should be closed", entry.label());
        assert!(svg.contains(entry.label()), "{} SVG should contain its name", entry.label());
        assert!(svg.contains("<desc>String 6: "), "{} SVG should describe strings", entry.label());
    }
}

#[test]
fn render_catalog_sheet() {
    let catalog = load_catalog(chords_dir().join("default.json")).unwrap();
    let svg = render_catalog_to_svg(&catalog, &StyleTokens::default(), Some(4));

    assert!(svg.starts_with("<svg"));
    assert_eq!(
        svg.matches(r#"<g class="guitar-chord""#).count(),
        catalog.len(),
        "Sheet should hold one group per chord"
    );
    assert_eq!(svg.matches("<title>").count(), catalog.len(), "Every chord should be titled");
    for label in catalog.labels() {
        assert!(svg.contains(label), "Sheet should contain {label}");
    }

    let out = output_dir().join("default-catalog.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
    println!("✓ Rendered default-catalog.svg ({} bytes)", svg.len());
    println!("  Output: {}", out.display());
}

#[test]
fn style_tokens_reach_the_svg() {
    let catalog = load_catalog(chords_dir().join("default.json")).unwrap();
    let f = catalog.find("F").expect("F in catalog").to_spec();
    let style = StyleTokens {
        color: Some("#222222".into()),
        marker_color: Some("#c0392b".into()),
        font_family: Some("Georgia".into()),
        ..Default::default()
    };
    let svg = render_chord_to_svg(&f, &style);

    assert!(svg.contains(r#"font-family="Georgia""#));
    assert!(svg.contains(r##"class="barre" "##));
    assert!(svg.contains(r##"fill="#c0392b""##), "Markers should use the marker color");
    assert!(svg.contains(r##"stroke="#222222""##), "Grid should use the base color");
}

#[test]
fn aspect_presets_change_height_only() {
    let catalog = load_catalog(chords_dir().join("default.json")).unwrap();
    let spec = catalog.find("G").unwrap().to_spec();

    let heights: Vec<f64> = AspectPreset::ALL
        .iter()
        .map(|&preset| {
            let svg = render_chord_to_svg(&spec, &StyleTokens::default().with_aspect(preset));
            svg_height(&svg)
        })
        .collect();

    // Stretch (2/3) is taller than Default (1), which is taller than Squash (5/4).
    assert!(heights[1] > heights[0], "Stretch should be taller: {heights:?}");
    assert!(heights[0] > heights[2], "Squash should be shorter: {heights:?}");
}

fn svg_height(svg: &str) -> f64 {
    let start = svg.find("height=\"").expect("height attribute") + "height=\"".len();
    let end = svg[start..].find('"').unwrap() + start;
    svg[start..end].parse().unwrap()
}
