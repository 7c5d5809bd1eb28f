//! Stroke-level drawing helpers shared by the guide's illustrations.
//!
//! The `genpdf` drawing surface exposes stroked polylines and positioned text
//! sections.  Everything richer that the guide's diagrams need -- filled
//! rounded rectangles, ellipses, dashed tunnel lines, arrowheads -- is built
//! here from those two primitives.  All geometry is specified in PDF points
//! (the unit the original artwork was designed in) and converted to `Mm` at
//! the draw call.

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::FontCache;
use genpdf::render::Area;
use genpdf::style::{Color, Style, StyledString};
use genpdf::{Context, Element, Mm, Position, RenderResult, Size};

const PT_TO_MM: f64 = 25.4 / 72.0;

/// Spacing between hatch strokes used to emulate filled shapes.
const HATCH_STEP_PT: f64 = 0.9;

/// Number of segments used to approximate a full ellipse outline.
const ELLIPSE_SEGMENTS: usize = 24;

/// Converts a length in PDF points to the `Mm` unit used by `genpdf`.
pub fn pt(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value * PT_TO_MM))
}

/// Converts a `genpdf` length back into PDF points.
pub fn mm_to_pt(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0 / PT_TO_MM
}

fn pos(x: f64, y: f64) -> Position {
    Position::new(pt(x), pt(y))
}

fn line_style(color: Color) -> Style {
    Style::new().with_color(color)
}

/// Strokes an open polyline through the given points (in points, local origin
/// at the area's top-left corner, y growing downwards).
pub fn stroke_polyline(area: &Area<'_>, points: &[(f64, f64)], color: Color) {
    area.draw_line(
        points.iter().map(|&(x, y)| pos(x, y)).collect(),
        line_style(color),
    );
}

/// Strokes a single straight line segment.
pub fn stroke_line(area: &Area<'_>, from: (f64, f64), to: (f64, f64), color: Color) {
    stroke_polyline(area, &[from, to], color);
}

/// Strokes a dashed line by emitting alternating dash segments.
pub fn dashed_line(
    area: &Area<'_>,
    from: (f64, f64),
    to: (f64, f64),
    dash_pt: f64,
    gap_pt: f64,
    color: Color,
) {
    for (start, end) in dash_segments(from, to, dash_pt, gap_pt) {
        stroke_line(area, start, end, color);
    }
}

/// Computes the dash segments for a dashed line; exposed for tests.
pub(crate) fn dash_segments(
    from: (f64, f64),
    to: (f64, f64),
    dash_pt: f64,
    gap_pt: f64,
) -> Vec<((f64, f64), (f64, f64))> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = (dx * dx + dy * dy).sqrt();
    if length <= f64::EPSILON || dash_pt <= 0.0 {
        return Vec::new();
    }
    let (ux, uy) = (dx / length, dy / length);
    let mut segments = Vec::new();
    let mut cursor = 0.0;
    while cursor < length {
        let end = (cursor + dash_pt).min(length);
        segments.push((
            (from.0 + ux * cursor, from.1 + uy * cursor),
            (from.0 + ux * end, from.1 + uy * end),
        ));
        cursor = end + gap_pt;
    }
    segments
}

/// Strokes a rectangle outline.
pub fn stroke_rect(area: &Area<'_>, x: f64, y: f64, width: f64, height: f64, color: Color) {
    stroke_polyline(
        area,
        &[
            (x, y),
            (x + width, y),
            (x + width, y + height),
            (x, y + height),
            (x, y),
        ],
        color,
    );
}

/// Emulates a filled rectangle with a dense horizontal hatch.
pub fn fill_rect(area: &Area<'_>, x: f64, y: f64, width: f64, height: f64, color: Color) {
    let mut scan = y;
    while scan <= y + height {
        stroke_line(area, (x, scan), (x + width, scan), color);
        scan += HATCH_STEP_PT;
    }
}

fn corner_arc(cx: f64, cy: f64, radius: f64, start_deg: f64) -> Vec<(f64, f64)> {
    (0..=4)
        .map(|step| {
            let angle = (start_deg + 22.5 * step as f64).to_radians();
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

/// Strokes a rounded rectangle outline with polyline corner arcs.
pub fn stroke_rounded_rect(
    area: &Area<'_>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
    color: Color,
) {
    let r = radius.min(width / 2.0).min(height / 2.0);
    let mut points = Vec::new();
    points.extend(corner_arc(x + r, y + r, r, 180.0));
    points.extend(corner_arc(x + width - r, y + r, r, 270.0));
    points.extend(corner_arc(x + width - r, y + height - r, r, 0.0));
    points.extend(corner_arc(x + r, y + height - r, r, 90.0));
    points.push((x, y + r));
    stroke_polyline(area, &points, color);
}

/// Emulates a filled rounded rectangle: each hatch scanline is shortened near
/// the top and bottom corners to stay inside the rounded outline.
pub fn fill_rounded_rect(
    area: &Area<'_>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
    color: Color,
) {
    let r = radius.min(width / 2.0).min(height / 2.0);
    let mut scan = y;
    while scan <= y + height {
        let from_top = scan - y;
        let from_bottom = y + height - scan;
        let edge = from_top.min(from_bottom);
        let inset = if edge < r {
            let d = r - edge;
            r - (r * r - d * d).max(0.0).sqrt()
        } else {
            0.0
        };
        stroke_line(
            area,
            (x + inset, scan),
            (x + width - inset, scan),
            color,
        );
        scan += HATCH_STEP_PT;
    }
}

/// Points approximating an ellipse outline; exposed for tests.
pub(crate) fn ellipse_points(cx: f64, cy: f64, rx: f64, ry: f64) -> Vec<(f64, f64)> {
    (0..=ELLIPSE_SEGMENTS)
        .map(|step| {
            let angle = std::f64::consts::TAU * step as f64 / ELLIPSE_SEGMENTS as f64;
            (cx + rx * angle.cos(), cy + ry * angle.sin())
        })
        .collect()
}

/// Strokes an ellipse outline centered at (`cx`, `cy`).
pub fn stroke_ellipse(area: &Area<'_>, cx: f64, cy: f64, rx: f64, ry: f64, color: Color) {
    stroke_polyline(area, &ellipse_points(cx, cy, rx, ry), color);
}

/// Emulates a filled ellipse with horizontal chords.
pub fn fill_ellipse(area: &Area<'_>, cx: f64, cy: f64, rx: f64, ry: f64, color: Color) {
    let mut offset = -ry;
    while offset <= ry {
        let ratio = offset / ry;
        let half = rx * (1.0 - ratio * ratio).max(0.0).sqrt();
        stroke_line(area, (cx - half, cy + offset), (cx + half, cy + offset), color);
        offset += HATCH_STEP_PT;
    }
}

/// Emulates a filled circle.
pub fn fill_circle(area: &Area<'_>, cx: f64, cy: f64, radius: f64, color: Color) {
    fill_ellipse(area, cx, cy, radius, radius, color);
}

/// Draws a rightwards arrowhead whose tip sits at (`x`, `y`).
pub fn arrowhead_right(area: &Area<'_>, x: f64, y: f64, color: Color) {
    stroke_line(area, (x, y), (x - 5.0, y - 5.0), color);
    stroke_line(area, (x, y), (x - 5.0, y + 5.0), color);
}

/// Horizontal anchor for positioned text.
#[derive(Clone, Copy, Debug)]
pub enum TextAnchor {
    Left,
    Center,
    Right,
}

/// Places a single line of text at an absolute position inside the area.
///
/// The anchor point (`x`, `y`) is interpreted in points from the area's
/// top-left corner; `y` addresses the top of the text line.
pub fn draw_text(
    area: &Area<'_>,
    font_cache: &FontCache,
    anchor: TextAnchor,
    x: f64,
    y: f64,
    text: &str,
    style: Style,
) -> Result<(), Error> {
    let width = mm_to_pt(StyledString::new(text.to_owned(), style).width(font_cache));
    let left = match anchor {
        TextAnchor::Left => x,
        TextAnchor::Center => x - width / 2.0,
        TextAnchor::Right => x - width,
    };
    let mut section = area
        .text_section(font_cache, pos(left, y), style)
        .ok_or_else(|| {
            Error::new(
                "Text placed outside the drawable area",
                ErrorKind::PageSizeExceeded,
            )
        })?;
    section.print_str(text, style)?;
    Ok(())
}

/// A thin horizontal rule, optionally narrower than the available width and
/// then centered, used for the cover accent line and the closing separator.
pub struct HorizontalRule {
    width_pt: Option<f64>,
    color: Color,
    passes: usize,
}

impl HorizontalRule {
    /// A rule spanning the full content width.
    pub fn full_width(color: Color) -> Self {
        Self {
            width_pt: None,
            color,
            passes: 2,
        }
    }

    /// A centered rule with a fixed width in points.
    pub fn with_width_pt(width_pt: f64, color: Color) -> Self {
        Self {
            width_pt: Some(width_pt),
            color,
            passes: 2,
        }
    }
}

const RULE_HEIGHT_PT: f64 = 6.0;

impl Element for HorizontalRule {
    fn render(
        &mut self,
        _context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        if area.size().height < pt(RULE_HEIGHT_PT) {
            result.has_more = true;
            return Ok(result);
        }

        let available = mm_to_pt(area.size().width);
        let width = self.width_pt.unwrap_or(available).min(available);
        let left = (available - width) / 2.0;
        for pass in 0..self.passes {
            let y = 2.0 + 0.5 * pass as f64;
            stroke_line(&area, (left, y), (left + width, y), self.color);
        }

        result.size = Size::new(area.size().width, pt(RULE_HEIGHT_PT));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_segments_cover_the_span() {
        let segments = dash_segments((0.0, 0.0), (90.0, 0.0), 6.0, 3.0);
        assert_eq!(segments.len(), 10);
        assert_eq!(segments[0], ((0.0, 0.0), (6.0, 0.0)));
        let (_, last_end) = segments[segments.len() - 1];
        assert!(last_end.0 <= 90.0);
    }

    #[test]
    fn dash_segments_empty_for_degenerate_input() {
        assert!(dash_segments((5.0, 5.0), (5.0, 5.0), 6.0, 3.0).is_empty());
    }

    #[test]
    fn ellipse_outline_is_closed() {
        let points = ellipse_points(10.0, 10.0, 4.0, 2.0);
        assert_eq!(points.len(), 25);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first.0 - last.0).abs() < 1e-9);
        assert!((first.1 - last.1).abs() < 1e-9);
    }
}
