//! SVG builder — accumulates SVG elements and produces the final string.

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    pub(super) elements: Vec<String>,
    width: f64,
    height: f64,
    font_family: String,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64, font_family: &str) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            font_family: font_family.to_string(),
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" role="img" viewBox="0 0 {:.1} {:.1}" width="{:.1}" height="{:.1}" font-family="{}">"#,
            self.width,
            self.height,
            self.width,
            self.height,
            escape_attr(&self.font_family)
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn title(&mut self, content: &str) {
        self.elements.push(format!("<title>{}</title>", escape_text(content)));
    }

    pub(super) fn desc(&mut self, content: &str) {
        self.elements.push(format!("<desc>{}</desc>", escape_text(content)));
    }

    /// Open a translated group; every element until `end_group` is drawn
    /// relative to `(x, y)`.
    pub(super) fn begin_group(&mut self, x: f64, y: f64, class: &str) {
        self.elements.push(format!(
            r#"<g class="{}" transform="translate({:.1},{:.1})">"#,
            escape_attr(class),
            x,
            y
        ));
    }

    pub(super) fn end_group(&mut self) {
        self.elements.push("</g>".to_string());
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
            x1, y1, x2, y2, escape_attr(color), width
        ));
    }

    /// Filled rectangle with fully rounded ends (`rx` of half the height).
    pub(super) fn pill(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, class: &str) {
        self.elements.push(format!(
            r#"<rect class="{}" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="{:.1}" fill="{}"/>"#,
            escape_attr(class), x, y, w, h, h / 2.0, escape_attr(fill)
        ));
    }

    pub(super) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, class: &str) {
        self.elements.push(format!(
            r#"<circle class="{}" cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            escape_attr(class), cx, cy, r, escape_attr(fill)
        ));
    }

    /// Unfilled circle, drawn inside radius `r`.
    pub(super) fn ring(&mut self, cx: f64, cy: f64, r: f64, stroke: &str, width: f64, class: &str) {
        self.elements.push(format!(
            r#"<circle class="{}" cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
            escape_attr(class), cx, cy, r - width / 2.0, escape_attr(stroke), width
        ));
    }

    /// Two crossed strokes centred on `(cx, cy)`.
    pub(super) fn cross(&mut self, cx: f64, cy: f64, r: f64, stroke: &str, width: f64) {
        let d = r * std::f64::consts::FRAC_1_SQRT_2;
        self.elements.push(format!(
            r#"<path class="mute" d="M{:.1},{:.1} L{:.1},{:.1} M{:.1},{:.1} L{:.1},{:.1}" stroke="{}" stroke-width="{:.1}" stroke-linecap="round" fill="none"/>"#,
            cx - d, cy - d, cx + d, cy + d,
            cx - d, cy + d, cx + d, cy - d,
            escape_attr(stroke), width
        ));
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn text(&mut self, x: f64, y: f64, content: &str, size: f64, weight: &str, fill: &str, anchor: &str) {
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" font-weight="{}" fill="{}" text-anchor="{}">{}</text>"#,
            x, y, size, weight, escape_attr(fill), anchor, escape_text(content)
        ));
    }

    /// Text kept out of the accessibility tree.
    #[allow(clippy::too_many_arguments)]
    pub(super) fn hidden_text(&mut self, x: f64, y: f64, content: &str, size: f64, weight: &str, fill: &str, anchor: &str) {
        self.elements.push(format!(
            r#"<text aria-hidden="true" x="{:.1}" y="{:.1}" font-size="{:.0}" font-weight="{}" fill="{}" text-anchor="{}">{}</text>"#,
            x, y, size, weight, escape_attr(fill), anchor, escape_text(content)
        ));
    }
}

pub(super) fn escape_text(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub(super) fn escape_attr(content: &str) -> String {
    escape_text(content).replace('"', "&quot;")
}

// ═══════════════════════════════════════════════════════════════════════
// Empty SVG fallback
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn empty_svg(message: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 400 100\">\
         <text x=\"200\" y=\"50\" text-anchor=\"middle\" font-size=\"14\" fill=\"gray\">{}</text>\
         </svg>",
        escape_text(message)
    )
}
