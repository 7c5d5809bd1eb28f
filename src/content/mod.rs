//! The guide's fixed content, assembled in a single linear pass.
//!
//! Content is hardcoded; there is no branching on input.  Chapters and
//! appendices each live in their own function and push elements onto the
//! document in reading order.

mod appendices;
mod chapters;
pub mod toc;

use genpdf::elements::{Break, PageBreak};
use genpdf::error::Error;
use genpdf::{Document, Element};

use crate::callout::{CalloutBox, CalloutKind};
use crate::config::GuideConfig;
use crate::decor;
use crate::diagrams::ChapterHeading;
use crate::palette;
use crate::shapes::HorizontalRule;
use crate::styles::StyleSheet;
use crate::tables::GuideTable;

/// Points of vertical space expressed as body-text line breaks.
const LINE_HEIGHT_PT: f64 = 14.0;

pub(crate) fn gap(document: &mut Document, points: f64) {
    document.push(Break::new(points / LINE_HEIGHT_PT));
}

pub(crate) fn paragraph(
    document: &mut Document,
    styles: &StyleSheet,
    style: &str,
    text: &str,
) -> Result<(), Error> {
    document.push(styles.paragraph(style, text)?);
    Ok(())
}

pub(crate) fn bullets(
    document: &mut Document,
    styles: &StyleSheet,
    items: &[&str],
) -> Result<(), Error> {
    for item in items {
        document.push(styles.paragraph("BulletText", format!("\u{2022} {item}"))?);
    }
    Ok(())
}

pub(crate) fn callout(document: &mut Document, message: &str, kind: CalloutKind) {
    document.push(CalloutBox::new(message, kind));
}

pub(crate) fn table(
    document: &mut Document,
    styles: &StyleSheet,
    grid: &[&[&str]],
    weights: &[usize],
) -> Result<(), Error> {
    let table = GuideTable::from_grid(grid, Some(weights))?;
    document.push(table.into_element(styles)?);
    Ok(())
}

pub(crate) fn chapter(document: &mut Document, label: &str, title: &str) {
    document.push(PageBreak::new());
    document.push(ChapterHeading::new(label, title));
    gap(document, 20.0);
}

/// Pushes the entire guide onto the document: cover, table of contents, all
/// chapters and appendices, and the closing colophon.
pub fn assemble(
    document: &mut Document,
    config: &GuideConfig,
    styles: &StyleSheet,
) -> Result<(), Error> {
    document.push(decor::cover(config, styles)?);

    document.push(PageBreak::new());
    toc::push(document, styles)?;

    chapters::push_all(document, styles)?;
    appendices::push_all(document, styles)?;

    gap(document, 30.0);
    document.push(HorizontalRule::full_width(palette::ORANGE));
    gap(document, 15.0);
    let mut colophon = *styles.get("BodyText")?;
    colophon.style.set_italic();
    document.push(
        genpdf::elements::Paragraph::new(genpdf::style::StyledString::new(
            "This guide is optimized for LLM/AI agent reference. Based on OPNsense 24.x \
             documentation. For latest info: docs.opnsense.org | MCP Server: \
             github.com/vespo92/opnsense-mcp-server"
                .to_owned(),
            colophon.style,
        ))
        .aligned(colophon.alignment)
        .padded(colophon.margins()),
    );

    Ok(())
}
