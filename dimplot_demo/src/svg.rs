// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG rendering of a [`Canvas`] for `dimplot_demo`.

use dimplot::plot2d::{
    ArrowMark, BoxStyle, Canvas, HeuristicTextMeasurer, MarkPayload, PathMark, StrokeStyle,
    TextAnchor, TextBaseline, TextMark, arrow_geometry, text_bounds,
};
use kurbo::{Affine, Rect};
use peniko::Brush;
use peniko::color::palette::css;

/// Room around the plot area for tick labels.
const MARGIN: f64 = 48.0;
const TICK_COUNT: usize = 6;
const TICK_LENGTH: f64 = 5.0;
const TICK_FONT_PX: f64 = 11.0;

pub(crate) fn render(canvas: &Canvas) -> String {
    let config = canvas.config();
    let to_px = canvas.data_to_pixel();
    let mut out = String::new();

    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        -MARGIN,
        -MARGIN,
        config.width + 2.0 * MARGIN,
        config.height + 2.0 * MARGIN,
        config.width + 2.0 * MARGIN,
        config.height + 2.0 * MARGIN,
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"<clipPath id="plot-area"><rect x="0" y="0" width="{}" height="{}"/></clipPath>"#,
        config.width, config.height
    ));
    out.push('\n');
    out.push_str("<g clip-path=\"url(#plot-area)\">\n");

    let mut marks: Vec<_> = canvas.marks().iter().collect();
    marks.sort_by_key(|m| (m.z_index, m.id));
    for mark in marks {
        match &mark.payload {
            MarkPayload::Path(p) => write_path(&mut out, canvas, to_px, p),
            MarkPayload::Arrow(a) => write_arrow(&mut out, canvas, to_px, a),
            MarkPayload::Text(t) => write_text(&mut out, canvas, to_px, t),
        }
    }
    out.push_str("</g>\n");

    if canvas.axis_visible() {
        write_axes(&mut out, canvas);
    }

    out.push_str("</svg>\n");
    out
}

fn write_path(out: &mut String, canvas: &Canvas, to_px: Affine, p: &PathMark) {
    let d = (to_px * p.path.clone()).to_svg();
    out.push_str(&format!(r#"<path d="{d}""#));
    match &p.fill {
        Some(fill) => write_paint_attr(out, "fill", fill),
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = &p.stroke {
        write_stroke(out, canvas, stroke);
    }
    out.push_str("/>\n");
}

fn write_arrow(out: &mut String, canvas: &Canvas, to_px: Affine, a: &ArrowMark) {
    let geometry = arrow_geometry(
        to_px * a.start,
        to_px * a.end,
        a.style.head,
        canvas.points_to_pixels(a.style.head_length),
        canvas.points_to_pixels(a.style.head_width),
    );
    let shaft = geometry.shaft;
    out.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
        shaft.p0.x, shaft.p0.y, shaft.p1.x, shaft.p1.y
    ));
    write_stroke(out, canvas, &a.style.stroke);
    out.push_str("/>\n");

    if let Some(head) = geometry.head_path() {
        out.push_str(&format!(r#"<path d="{}""#, head.to_svg()));
        if geometry.head_filled {
            write_paint_attr(out, "fill", &a.style.stroke.brush);
        } else {
            out.push_str(r#" fill="none""#);
            write_stroke(out, canvas, &a.style.stroke);
        }
        out.push_str("/>\n");
    }
}

fn write_text(out: &mut String, canvas: &Canvas, to_px: Affine, t: &TextMark) {
    let pos = to_px * t.pos;
    let font_px = canvas.points_to_pixels(t.font_size);

    if let Some(text_box) = &t.text_box {
        let pad = text_box.pad * font_px;
        let r = text_bounds(
            &HeuristicTextMeasurer,
            &t.text,
            pos,
            font_px,
            t.anchor,
            t.baseline,
        )
        .inflate(pad, pad);
        let radius = match text_box.style {
            BoxStyle::Square => 0.0,
            BoxStyle::Round => pad,
        };
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{radius}""#,
            r.x0,
            r.y0,
            r.width(),
            r.height()
        ));
        write_paint_attr(out, "fill", &text_box.fill);
        if let Some(edge) = &text_box.edge {
            write_stroke(out, canvas, edge);
        }
        out.push_str("/>\n");
    }

    out.push_str(&format!(
        r#"<text x="{}" y="{}" font-size="{font_px}" font-family="sans-serif" dominant-baseline="{}" text-anchor="{}""#,
        pos.x,
        pos.y,
        baseline_attr(t.baseline),
        anchor_attr(t.anchor),
    ));
    write_paint_attr(out, "fill", &Brush::Solid(t.color));
    out.push_str(&format!(">{}</text>\n", escape_xml(&t.text)));
}

fn write_axes(out: &mut String, canvas: &Canvas) {
    let config = canvas.config();
    let frame = Rect::new(0.0, 0.0, config.width, config.height);
    out.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="none" stroke="black" stroke-width="1"/>"#,
        frame.width(),
        frame.height()
    ));
    out.push('\n');

    let x_scale = canvas.x_scale();
    for (value, label) in x_scale.tick_labels(TICK_COUNT) {
        let x = x_scale.map(value);
        let y = frame.y1;
        out.push_str(&format!(
            r#"<line x1="{x}" y1="{y}" x2="{x}" y2="{}" stroke="black"/>"#,
            y + TICK_LENGTH
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<text x="{x}" y="{}" font-size="{TICK_FONT_PX}" font-family="sans-serif" text-anchor="middle" dominant-baseline="hanging">{label}</text>"#,
            y + TICK_LENGTH + 2.0
        ));
        out.push('\n');
    }

    let y_scale = canvas.y_scale();
    for (value, label) in y_scale.tick_labels(TICK_COUNT) {
        let y = y_scale.map(value);
        out.push_str(&format!(
            r#"<line x1="0" y1="{y}" x2="{}" y2="{y}" stroke="black"/>"#,
            -TICK_LENGTH
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<text x="{}" y="{y}" font-size="{TICK_FONT_PX}" font-family="sans-serif" text-anchor="end" dominant-baseline="middle">{label}</text>"#,
            -TICK_LENGTH - 2.0
        ));
        out.push('\n');
    }
}

fn write_stroke(out: &mut String, canvas: &Canvas, stroke: &StrokeStyle) {
    write_paint_attr(out, "stroke", &stroke.brush);
    out.push_str(&format!(
        r#" stroke-width="{}""#,
        canvas.points_to_pixels(stroke.width)
    ));
}

fn baseline_attr(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Top => "hanging",
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Bottom => "text-after-edge",
    }
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
        }
        // Gradients and images are not written; fall back to a neutral paint.
        _ => (svg_paint(&Brush::Solid(css::GRAY)).0, None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use dimplot::plot2d::{
        Aabb2, AxesHelper, AxesOptions, CanvasConfig, Length2, LengthAnnotation, TextStyle,
    };
    use kurbo::Point;

    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
    }

    #[test]
    fn renders_annotation_pieces() {
        let mut canvas = Canvas::new(CanvasConfig::new(400.0, 300.0));
        let mut helper = AxesHelper::new(&mut canvas, AxesOptions::default().with_hide_axes(true));
        helper.annotate_length(
            &Length2::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), None),
            &LengthAnnotation::default(),
        );
        let svg = render(&canvas);
        assert_eq!(svg.matches("<line").count(), 2, "two arrow shafts");
        assert!(svg.contains(">10.000</text>"), "{svg}");
        assert!(svg.contains(" rx="), "label box");
        assert!(!svg.contains("text-anchor=\"end\""), "hidden axes draw no tick labels");
    }

    #[test]
    fn every_element_gets_its_own_line() {
        let mut canvas = Canvas::new(CanvasConfig::new(200.0, 100.0));
        let mut helper = AxesHelper::new(&mut canvas, AxesOptions::default());
        helper.set_bounds(&Aabb2::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
        helper.annotate_text_only("R5 <typ>", Point::new(1.0, 1.0), &TextStyle::default());
        let svg = render(&canvas);
        assert!(svg.ends_with("</svg>\n"), "{svg}");
        for line in svg.lines() {
            assert!(line.starts_with('<'), "line {line:?} does not start an element");
        }
        assert!(svg.contains(">R5 &lt;typ&gt;</text>\n"), "{svg}");
        assert!(svg.contains("text-anchor=\"end\""), "visible axes draw y tick labels");
    }
}
