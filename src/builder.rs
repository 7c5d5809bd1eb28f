//! Document construction and rendering for the guide.

use std::fs;
use std::io;
use std::path::PathBuf;

use genpdf::error::Error;
use genpdf::{Document, Size};

use crate::config::GuideConfig;
use crate::content;
use crate::decor::GuidePageDecorator;
use crate::fonts;
use crate::styles::StyleSheet;

/// Assembles the complete guide document with fonts, page decorator and all
/// content, ready to render.
pub fn build_document(config: &GuideConfig) -> Result<Document, Error> {
    let font_family = fonts::guide_font_family(config)?;
    let mut document = Document::new(font_family);
    document.set_title("OPNsense User Guide");
    // US Letter.
    document.set_paper_size(Size::new(215.9, 279.4));
    document.set_page_decorator(GuidePageDecorator::new(config));

    let styles = StyleSheet::new();
    content::assemble(&mut document, config, &styles)?;

    Ok(document)
}

/// Builds the guide and writes it to the configured output path, creating the
/// output directory if needed.  Returns the path of the written file.
pub fn render_guide(config: &GuideConfig) -> Result<PathBuf, Error> {
    let output = config.output_path();
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            Error::new(
                format!("Failed to create output directory {}", parent.display()),
                io::Error::new(err.kind(), err.to_string()),
            )
        })?;
    }

    let document = build_document(config)?;
    document.render_to_file(&output)?;
    log::info!("Rendered guide to {}", output.display());
    Ok(output)
}
