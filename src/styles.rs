//! Named paragraph styles used throughout the guide.
//!
//! The registry is fixed at construction time; content code refers to styles
//! by name and an unknown name is a hard error rather than a silent default.

use std::collections::HashMap;

use genpdf::elements::Paragraph;
use genpdf::error::{Error, ErrorKind};
use genpdf::style::Style;
use genpdf::{Alignment, Element, Margins};

use crate::palette;
use crate::shapes::pt;

/// A paragraph style: character style plus block-level spacing in points.
#[derive(Clone, Copy, Debug)]
pub struct ParagraphStyle {
    pub style: Style,
    pub alignment: Alignment,
    pub space_before_pt: f64,
    pub space_after_pt: f64,
    pub indent_pt: f64,
}

impl ParagraphStyle {
    fn new(style: Style) -> Self {
        Self {
            style,
            alignment: Alignment::Left,
            space_before_pt: 0.0,
            space_after_pt: 0.0,
            indent_pt: 0.0,
        }
    }

    fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn spaced(mut self, before_pt: f64, after_pt: f64) -> Self {
        self.space_before_pt = before_pt;
        self.space_after_pt = after_pt;
        self
    }

    fn indented(mut self, indent_pt: f64) -> Self {
        self.indent_pt = indent_pt;
        self
    }

    /// Margins expressing the style's spacing and indent.
    pub fn margins(&self) -> Margins {
        Margins::trbl(
            pt(self.space_before_pt),
            0,
            pt(self.space_after_pt),
            pt(self.indent_pt),
        )
    }
}

fn bold(size: u8, color: genpdf::style::Color) -> Style {
    let mut style = Style::new().with_font_size(size).with_color(color);
    style.set_bold();
    style
}

fn regular(size: u8, color: genpdf::style::Color) -> Style {
    Style::new().with_font_size(size).with_color(color)
}

fn italic(size: u8, color: genpdf::style::Color) -> Style {
    let mut style = Style::new().with_font_size(size).with_color(color);
    style.set_italic();
    style
}

/// The guide's style registry, keyed by style name.
pub struct StyleSheet {
    styles: HashMap<&'static str, ParagraphStyle>,
}

impl StyleSheet {
    /// Builds the fixed set of guide styles.
    pub fn new() -> Self {
        let mut styles = HashMap::new();

        styles.insert(
            "CoverTitle",
            ParagraphStyle::new(bold(36, palette::DARK))
                .aligned(Alignment::Center)
                .spaced(0.0, 20.0),
        );
        styles.insert(
            "ChapterTitle",
            ParagraphStyle::new(bold(24, palette::DARK)).spaced(30.0, 20.0),
        );
        styles.insert(
            "SectionTitle",
            ParagraphStyle::new(bold(16, palette::ORANGE)).spaced(20.0, 10.0),
        );
        styles.insert(
            "SubSection",
            ParagraphStyle::new(bold(13, palette::BLUE)).spaced(15.0, 8.0),
        );
        styles.insert(
            "BodyText",
            ParagraphStyle::new(regular(11, palette::DARK).with_line_spacing(14.0 / 11.0))
                .spaced(6.0, 6.0),
        );
        styles.insert(
            "BulletText",
            ParagraphStyle::new(regular(10, palette::DARK))
                .spaced(3.0, 3.0)
                .indented(20.0),
        );
        // The bundled family has no monospaced face; code snippets use the
        // italic face at the original size instead.
        styles.insert(
            "CodeText",
            ParagraphStyle::new(italic(9, palette::DARK))
                .spaced(5.0, 5.0)
                .indented(10.0),
        );
        styles.insert(
            "TableHeader",
            ParagraphStyle::new(bold(10, palette::ORANGE)).aligned(Alignment::Center),
        );
        styles.insert(
            "TableCell",
            ParagraphStyle::new(regular(9, palette::DARK)),
        );
        styles.insert(
            "TOCChapter",
            ParagraphStyle::new(bold(14, palette::ORANGE)).spaced(15.0, 5.0),
        );
        styles.insert(
            "TOCEntry",
            ParagraphStyle::new(regular(12, palette::DARK))
                .spaced(8.0, 0.0)
                .indented(20.0),
        );

        Self { styles }
    }

    /// Looks up a style by name.
    pub fn get(&self, name: &str) -> Result<&ParagraphStyle, Error> {
        self.styles.get(name).ok_or_else(|| {
            Error::new(
                format!("Unknown paragraph style: {name}"),
                ErrorKind::InvalidData,
            )
        })
    }

    /// Builds a styled, aligned, spaced paragraph element for the given
    /// style name.
    pub fn paragraph(
        &self,
        name: &str,
        text: impl Into<String>,
    ) -> Result<impl Element + 'static, Error> {
        let spec = self.get(name)?;
        Ok(Paragraph::new(text.into())
            .aligned(spec.alignment)
            .styled(spec.style)
            .padded(spec.margins()))
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_guide_styles_are_registered() {
        let sheet = StyleSheet::new();
        for name in [
            "CoverTitle",
            "ChapterTitle",
            "SectionTitle",
            "SubSection",
            "BodyText",
            "BulletText",
            "CodeText",
            "TableHeader",
            "TableCell",
            "TOCChapter",
            "TOCEntry",
        ] {
            assert!(sheet.get(name).is_ok(), "missing style {name}");
        }
    }

    #[test]
    fn unknown_style_name_is_an_error() {
        let sheet = StyleSheet::new();
        let err = sheet.get("Heading9").unwrap_err();
        assert!(err.to_string().contains("Heading9"));
    }

    #[test]
    fn bullet_text_is_indented() {
        let sheet = StyleSheet::new();
        let bullet = sheet.get("BulletText").unwrap();
        assert_eq!(bullet.indent_pt, 20.0);
    }
}
