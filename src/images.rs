//! Logo loading with a text fallback.
//!
//! The OPNsense logo asset is optional.  When the file is missing or cannot
//! be decoded, every place that shows the logo degrades to a bold orange text
//! label instead; a missing asset never fails a render.

use std::path::Path;

use image::GenericImageView;

use genpdf::elements::{Image, Paragraph};
use genpdf::error::{Context as _, Error};
use genpdf::style::{Style, StyledString};
use genpdf::{render, Alignment, Element, Mm, RenderResult, Scale, Size};

use crate::palette;
use crate::shapes;

const DEFAULT_IMAGE_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;

fn estimated_image_size(image: &image::DynamicImage, dpi: f64) -> Size {
    let (px_width, px_height) = image.dimensions();
    let width_mm = MM_PER_INCH * (px_width as f64) / dpi;
    let height_mm = MM_PER_INCH * (px_height as f64) / dpi;
    Size::new(
        Mm::from(printpdf::Mm(width_mm)),
        Mm::from(printpdf::Mm(height_mm)),
    )
}

/// Loads an image from the given path using the [`image`] crate with
/// descriptive errors.
pub fn decode_image_from_path(path: impl AsRef<Path>) -> Result<image::DynamicImage, Error> {
    let path = path.as_ref();
    let reader = image::io::Reader::open(path)
        .with_context(|| format!("Failed to open image file {}", path.display()))?;
    reader
        .with_guessed_format()
        .context("Unable to determine image format")?
        .decode()
        .with_context(|| format!("Failed to decode image file {}", path.display()))
}

/// Converts the image at `path` into a `genpdf` image together with its
/// estimated natural size.
pub fn image_from_path(path: impl AsRef<Path>) -> Result<(Image, Size), Error> {
    let dynamic = decode_image_from_path(path)?;
    let size = estimated_image_size(&dynamic, DEFAULT_IMAGE_DPI);
    let image = Image::from_dynamic_image(dynamic)?;
    Ok((image, size))
}

enum LogoInner {
    Image(Image),
    Text(Paragraph),
}

/// The OPNsense logo scaled to a target width, or its text fallback.
pub struct Logo {
    inner: LogoInner,
}

impl Logo {
    /// Loads the logo asset and scales it to `width_pt`.  On any load or
    /// decode failure the element falls back to a bold orange "OPNsense®"
    /// label at `fallback_font_size`, and the failure is logged.
    pub fn from_asset(
        path: impl AsRef<Path>,
        width_pt: f64,
        fallback_font_size: u8,
        alignment: Alignment,
    ) -> Self {
        let path = path.as_ref();
        let inner = match image_from_path(path) {
            Ok((mut image, natural_size)) => {
                let natural_width = shapes::mm_to_pt(natural_size.width);
                if natural_width > 0.0 {
                    let factor = width_pt / natural_width;
                    image.set_scale(Scale::new(factor, factor));
                }
                image.set_alignment(alignment);
                LogoInner::Image(image)
            }
            Err(err) => {
                log::warn!(
                    "Logo asset {} unavailable, using text fallback: {}",
                    path.display(),
                    err
                );
                let mut style = Style::new()
                    .with_font_size(fallback_font_size)
                    .with_color(palette::ORANGE);
                style.set_bold();
                let label = StyledString::new("OPNsense\u{ae}".to_owned(), style);
                LogoInner::Text(Paragraph::new(label).aligned(alignment))
            }
        };
        Self { inner }
    }

    /// True when the element renders the text fallback instead of the asset.
    pub fn is_fallback(&self) -> bool {
        matches!(self.inner, LogoInner::Text(_))
    }
}

impl Element for Logo {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        match &mut self.inner {
            LogoInner::Image(image) => image.render(context, area, style),
            LogoInner::Text(text) => text.render(context, area, style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_asset_falls_back_to_text() {
        let logo = Logo::from_asset(
            "assets/definitely-not-here.png",
            90.0,
            14,
            Alignment::Left,
        );
        assert!(logo.is_fallback());
    }

    #[test]
    fn undecodable_asset_falls_back_to_text() {
        let dir = std::env::temp_dir().join("opnsense-guide-logo-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        let logo = Logo::from_asset(&path, 90.0, 14, Alignment::Center);
        assert!(logo.is_fallback());
    }
}
