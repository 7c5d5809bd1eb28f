//! Bundled font loading for the guide.

use std::io;
use std::path::Path;

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};

use crate::config::GuideConfig;

/// Name of the bundled font family.
pub const GUIDE_FONT_FAMILY_NAME: &str = "LiberationSans";

const FONT_FILES: &[&str] = &[
    "LiberationSans-Regular.ttf",
    "LiberationSans-Bold.ttf",
    "LiberationSans-Italic.ttf",
    "LiberationSans-BoldItalic.ttf",
];

fn ensure_directory_exists(path: &Path) -> Result<(), Error> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::new(
            format!(
                "Bundled font directory missing at {}. See assets/fonts/README.md for setup.",
                path.display()
            ),
            io::Error::new(io::ErrorKind::NotFound, "bundled fonts directory not found"),
        ))
    }
}

fn ensure_required_fonts_present(path: &Path) -> Result<(), Error> {
    let missing: Vec<_> = FONT_FILES
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        let display_list = missing
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        Err(Error::new(
            format!(
                "Missing bundled font files: {}. See assets/fonts/README.md for instructions.",
                display_list
            ),
            io::Error::new(io::ErrorKind::NotFound, "bundled fonts missing"),
        ))
    }
}

/// Returns the bundled Liberation Sans family as a `genpdf` font family
/// definition, loaded from the configured fonts directory.
pub fn guide_font_family(config: &GuideConfig) -> Result<FontFamily<FontData>, Error> {
    let directory = config.fonts_dir();
    ensure_directory_exists(&directory)?;
    ensure_required_fonts_present(&directory)?;

    fonts::from_files(&directory, GUIDE_FONT_FAMILY_NAME, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                GUIDE_FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

/// Indicates whether all bundled font files are present on disk.  Used by
/// tests to skip rendering on checkouts without the fonts.
pub fn fonts_available(config: &GuideConfig) -> bool {
    let directory = config.fonts_dir();
    directory.exists()
        && FONT_FILES
            .iter()
            .map(|name| directory.join(name))
            .all(|path| path.is_file())
}
