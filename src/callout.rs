//! Colored, icon-tagged callout boxes used to highlight notes in the guide.

use genpdf::error::Error;
use genpdf::render::Area;
use genpdf::style::{Color, Style};
use genpdf::{Context, Element, RenderResult, Size};

use crate::palette;
use crate::shapes::{self, TextAnchor};

/// Maximum number of characters accumulated on a wrapped line.
pub const WRAP_COLUMNS: usize = 65;
/// Hard cap on wrapped lines; content past the cap is dropped silently.
pub const MAX_LINES: usize = 6;

/// Default box width in points, matching the guide's illustration width.
pub const DEFAULT_WIDTH_PT: f64 = 450.0;

const MIN_HEIGHT_PT: f64 = 50.0;
const BASE_HEIGHT_PT: f64 = 25.0;
const LINE_STEP_PT: f64 = 14.0;
const ACCENT_BAR_WIDTH_PT: f64 = 5.0;
const CORNER_RADIUS_PT: f64 = 5.0;

/// Callout category selecting the accent color and icon glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CalloutKind {
    #[default]
    Info,
    Warning,
    Tip,
    Danger,
    Note,
}

impl CalloutKind {
    /// Resolves a textual category tag; unknown tags fall back to `Info`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "info" => Self::Info,
            "warning" => Self::Warning,
            "tip" => Self::Tip,
            "danger" => Self::Danger,
            "note" => Self::Note,
            _ => Self::Info,
        }
    }

    /// Accent color for the border, bar and icon badge.
    pub fn color(self) -> Color {
        match self {
            Self::Info => palette::BLUE,
            Self::Warning => palette::ORANGE,
            Self::Tip => palette::GREEN,
            Self::Danger => palette::RED,
            Self::Note => palette::PURPLE,
        }
    }

    /// Icon glyph drawn inside the badge circle.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Warning => "!",
            Self::Tip => "\u{2713}",
            Self::Danger => "\u{2717}",
            Self::Note => "\u{2605}",
        }
    }
}

/// Greedy character-count word wrap used for callout sizing.
///
/// Words accumulate while the line stays under [`WRAP_COLUMNS`] characters;
/// the overflowing word starts the next line.  A single word at or above the
/// threshold is kept unsplit on its own line.  At most [`MAX_LINES`] lines are
/// returned; the rest of the message is discarded.  The heuristic counts
/// characters rather than glyph widths on purpose -- the rendered output is
/// meant to match the original guide, wide glyphs and all.
pub fn wrap_message(message: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in message.split_whitespace() {
        let candidate_len = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if candidate_len < WRAP_COLUMNS {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_owned();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.truncate(MAX_LINES);
    lines
}

/// Box height in points for the given number of wrapped lines.
pub fn box_height_pt(line_count: usize) -> f64 {
    (BASE_HEIGHT_PT + line_count as f64 * LINE_STEP_PT).max(MIN_HEIGHT_PT)
}

/// A highlighted text block with a category badge, rendered as a rounded
/// outline with an accent bar on the left edge.
///
/// The wrapped lines are computed once and cached, so the height reported to
/// the layout pass and the lines painted by the draw pass always agree.
pub struct CalloutBox {
    message: String,
    kind: CalloutKind,
    width_pt: f64,
    lines: Option<Vec<String>>,
}

impl CalloutBox {
    pub fn new(message: impl Into<String>, kind: CalloutKind) -> Self {
        Self {
            message: message.into(),
            kind,
            width_pt: DEFAULT_WIDTH_PT,
            lines: None,
        }
    }

    /// Overrides the box width (points) and returns the updated box.
    pub fn with_width_pt(mut self, width_pt: f64) -> Self {
        self.width_pt = width_pt;
        self
    }

    pub fn kind(&self) -> CalloutKind {
        self.kind
    }

    fn wrapped(&mut self) -> &[String] {
        if self.lines.is_none() {
            self.lines = Some(wrap_message(&self.message));
        }
        self.lines.as_deref().unwrap_or_default()
    }

    /// Height of the rendered box in points.
    pub fn height_pt(&mut self) -> f64 {
        box_height_pt(self.wrapped().len())
    }
}

impl Element for CalloutBox {
    fn render(
        &mut self,
        context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let height = self.height_pt();
        let width = self.width_pt.min(shapes::mm_to_pt(area.size().width));
        let mut result = RenderResult::default();
        if area.size().height < shapes::pt(height) {
            result.has_more = true;
            return Ok(result);
        }

        let accent = self.kind.color();
        let icon = self.kind.icon();

        shapes::stroke_rounded_rect(&area, 0.0, 0.0, width, height, CORNER_RADIUS_PT, accent);
        let mut bar = 0.0;
        while bar <= ACCENT_BAR_WIDTH_PT {
            shapes::stroke_line(&area, (bar, 0.0), (bar, height), accent);
            bar += 0.9;
        }
        shapes::fill_circle(&area, 25.0, 20.0, 10.0, accent);

        let mut badge_style = Style::new().with_font_size(12).with_color(palette::WHITE);
        badge_style.set_bold();
        shapes::draw_text(
            &area,
            &context.font_cache,
            TextAnchor::Center,
            25.0,
            14.0,
            icon,
            badge_style,
        )?;

        let text_style = Style::new().with_font_size(10).with_color(palette::DARK);
        let lines = self.wrapped().to_vec();
        let mut y = 13.0;
        for line in &lines {
            shapes::draw_text(
                &area,
                &context.font_cache,
                TextAnchor::Left,
                45.0,
                y,
                line,
                text_style,
            )?;
            y += LINE_STEP_PT;
        }

        result.size = Size::new(shapes::pt(width), shapes::pt(height));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_never_exceeds_line_cap() {
        let message = "word ".repeat(400);
        let lines = wrap_message(&message);
        assert_eq!(lines.len(), MAX_LINES);
    }

    #[test]
    fn wrapped_lines_stay_under_the_threshold() {
        let message = "The firewall inspects packets, maintains connection states, and \
                       applies rules to permit or deny traffic across every interface.";
        for line in wrap_message(message) {
            assert!(line.chars().count() < WRAP_COLUMNS, "line too long: {line}");
        }
    }

    #[test]
    fn oversized_word_is_kept_unsplit() {
        let long_word = "x".repeat(80);
        let message = format!("prefix {long_word} suffix");
        let lines = wrap_message(&message);
        assert!(lines.iter().any(|line| line == &long_word));
    }

    #[test]
    fn height_is_deterministic_and_matches_line_count() {
        let message = "Start with IDS mode to tune rules and eliminate false positives \
                       before enabling IPS blocking. Aggressive IPS rules can break \
                       legitimate applications.";
        let mut a = CalloutBox::new(message, CalloutKind::Warning);
        let first = a.height_pt();
        let second = a.height_pt();
        assert_eq!(first, second);
        assert_eq!(first, box_height_pt(wrap_message(message).len()));
    }

    #[test]
    fn short_message_uses_minimum_height() {
        let mut callout = CalloutBox::new("Short note.", CalloutKind::Tip);
        assert_eq!(callout.height_pt(), 50.0);
    }

    #[test]
    fn unknown_tag_falls_back_to_info_appearance() {
        let unknown = CalloutKind::from_tag("critical");
        assert_eq!(unknown, CalloutKind::Info);
        assert_eq!(unknown.color(), CalloutKind::Info.color());
        assert_eq!(unknown.icon(), CalloutKind::Info.icon());
    }

    #[test]
    fn known_tags_resolve_to_their_kind() {
        assert_eq!(CalloutKind::from_tag("danger"), CalloutKind::Danger);
        assert_eq!(CalloutKind::from_tag("note"), CalloutKind::Note);
        assert_eq!(CalloutKind::from_tag("tip"), CalloutKind::Tip);
    }
}
