//! Chord renderer — draws a [`DiagramModel`] as SVG.
//!
//! This is one presentation layer for the model; it only reads the
//! structured model and the style tokens, so any other renderer can be
//! built the same way.

mod constants;
mod layout;
mod svg_builder;

use crate::diagram::render;
use crate::log::debug;
use crate::model::*;
use crate::style::StyleTokens;
use constants::*;
use layout::DiagramLayout;
use svg_builder::{empty_svg, SvgBuilder};

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a diagram model into a complete SVG string.
pub fn render_diagram_to_svg(model: &DiagramModel, style: &StyleTokens) -> String {
    let layout = DiagramLayout::compute(model, style);
    let mut svg = SvgBuilder::new(layout.width, layout.height, style.font_family());
    draw_diagram(&mut svg, model, &layout, style);
    svg.build()
}

/// Derive the diagram for a chord and render it to SVG.
pub fn render_chord_to_svg(spec: &ChordSpec, style: &StyleTokens) -> String {
    render_diagram_to_svg(&render(spec), style)
}

/// Lay out several chords in a grid, `columns` per row (default 4).
pub fn render_sheet_to_svg(specs: &[ChordSpec], style: &StyleTokens, columns: Option<usize>) -> String {
    if specs.is_empty() {
        return empty_svg("No chords");
    }
    let columns = match columns {
        Some(c) if c > 0 => c,
        _ => DEFAULT_SHEET_COLUMNS,
    };

    let cells: Vec<(DiagramModel, DiagramLayout)> = specs
        .iter()
        .map(|spec| {
            let model = render(spec);
            let layout = DiagramLayout::compute(&model, style);
            (model, layout)
        })
        .collect();

    // Every row is as tall as its tallest diagram.
    let row_heights: Vec<f64> = cells
        .chunks(columns)
        .map(|row| row.iter().map(|(_, l)| l.height).fold(0.0, f64::max))
        .collect();

    let used_columns = columns.min(cells.len()) as f64;
    let width = 2.0 * SHEET_MARGIN + used_columns * DIAGRAM_WIDTH + (used_columns - 1.0) * SHEET_GAP;
    let height = 2.0 * SHEET_MARGIN
        + row_heights.iter().sum::<f64>()
        + (row_heights.len() as f64 - 1.0) * SHEET_GAP;

    debug!(chords = cells.len(), columns, "rendering chord sheet");

    let mut svg = SvgBuilder::new(width, height, style.font_family());
    let mut y = SHEET_MARGIN;
    for (row, row_height) in cells.chunks(columns).zip(&row_heights) {
        for (i, (model, layout)) in row.iter().enumerate() {
            let x = SHEET_MARGIN + i as f64 * (DIAGRAM_WIDTH + SHEET_GAP);
            svg.begin_group(x, y, "guitar-chord");
            draw_diagram(&mut svg, model, layout, style);
            svg.end_group();
        }
        y += row_height + SHEET_GAP;
    }
    svg.build()
}

// ═══════════════════════════════════════════════════════════════════════
// Drawing
// ═══════════════════════════════════════════════════════════════════════

fn draw_diagram(svg: &mut SvgBuilder, model: &DiagramModel, layout: &DiagramLayout, style: &StyleTokens) {
    if let Some(label) = model.name.accessible_label() {
        svg.title(label);
    }
    if !model.instructions.is_empty() {
        let lines: Vec<String> = model.instructions.iter().map(|i| i.to_string()).collect();
        svg.desc(&lines.join("; "));
    }

    draw_name(svg, &model.name, layout, style);
    draw_grid(svg, layout, style);
    for marker in &model.markers {
        draw_marker(svg, marker, layout, style);
    }
    draw_fingers(svg, &model.fingers, layout, style);
}

fn draw_name(svg: &mut SvgBuilder, name: &ChordName, layout: &DiagramLayout, style: &StyleTokens) {
    let Some(ref display) = name.display else {
        return;
    };
    let x = layout.width / 2.0;
    let y = PADDING_TOP + NAME_FONT_SIZE;
    // The readable name is already the <title>; hide the short glyph form.
    if name.display_is_decorative() {
        svg.hidden_text(x, y, display, NAME_FONT_SIZE, "normal", style.text_color(), "middle");
    } else {
        svg.text(x, y, display, NAME_FONT_SIZE, "normal", style.text_color(), "middle");
    }
}

fn draw_grid(svg: &mut SvgBuilder, layout: &DiagramLayout, style: &StyleTokens) {
    let color = style.color();
    let (left, right) = layout.grid_span();

    for column in 0..STRING_COUNT {
        let x = layout.string_x(column);
        svg.line(x, layout.grid_top, x, layout.grid_bottom, color, STRING_WIDTH);
    }
    for fret in 1..=layout.fret_rows {
        let y = layout.fret_line_y(fret);
        svg.line(left, y, right, y, color, FRET_WIDTH);
    }
    svg.line(left, layout.grid_top, right, layout.grid_top, color, NUT_WIDTH);
}

fn draw_marker(svg: &mut SvgBuilder, marker: &Marker, layout: &DiagramLayout, style: &StyleTokens) {
    let color = style.marker_color();
    let r = layout.marker_radius;
    let x = layout.string_x(marker.column);
    let y = layout.row_y(marker.row);

    match marker.action {
        MarkerAction::Open => svg.ring(x, y, r, color, OPEN_RING_WIDTH, "open"),
        MarkerAction::Mute => svg.cross(x, y, r * 0.9, color, MUTE_STROKE_WIDTH),
        MarkerAction::Press if marker.barre => {
            let end_x = layout.string_x(marker.span_end);
            let h = r * BARRE_HEIGHT_RATIO;
            svg.pill(x - r, y - h / 2.0, end_x - x + 2.0 * r, h, color, "barre");
            if let Some(fret) = marker.fret_label {
                svg.text(
                    end_x + r + BARRE_LABEL_GAP,
                    y + BARRE_FONT_SIZE * 0.35,
                    &fret.to_string(),
                    BARRE_FONT_SIZE,
                    "600",
                    style.text_color(),
                    "start",
                );
            }
        }
        MarkerAction::Press => svg.circle(x, y, r, color, "press"),
    }
}

fn draw_fingers(svg: &mut SvgBuilder, fingers: &[FingerLabel], layout: &DiagramLayout, style: &StyleTokens) {
    for label in fingers.iter().filter(|l| !l.text.is_empty()) {
        svg.text(
            layout.string_x(label.column),
            layout.finger_baseline,
            &label.text,
            FINGER_FONT_SIZE,
            "normal",
            style.text_color(),
            "middle",
        );
    }
}
