//! Page chrome: margins, running header and footer, and the cover page.
//!
//! The decorator keeps its own page counter.  Page 1 is the cover and gets
//! margins only; every later page carries the running header and footer.  The
//! cover artwork itself is ordinary flow content produced by [`cover`].

use std::path::PathBuf;

use genpdf::elements::{Break, LinearLayout, Paragraph};
use genpdf::error::{Error, ErrorKind};
use genpdf::render::Area;
use genpdf::style::{Style, StyledString};
use genpdf::{
    Alignment, Context, Element, Margins, PageDecorator, Position, RenderResult, Size,
};

use crate::config::GuideConfig;
use crate::images::Logo;
use crate::palette;
use crate::shapes::{self, pt, TextAnchor};
use crate::styles::StyleSheet;

const SIDE_MARGIN_PT: f64 = 50.0;
const COVER_MARGIN_PT: f64 = 60.0;
const CHROME_MARGIN_PT: f64 = 30.0;
const HEADER_HEIGHT_PT: f64 = 30.0;
const FOOTER_HEIGHT_PT: f64 = 30.0;

const HEADER_LOGO_WIDTH_PT: f64 = 90.0;
const COVER_LOGO_WIDTH_PT: f64 = 280.0;

/// Running header: logo at the left, "User Guide" at the right, closed off by
/// a double orange rule.
struct HeaderBar {
    logo: Logo,
}

impl Element for HeaderBar {
    fn render(
        &mut self,
        context: &Context,
        area: Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        self.logo.render(context, area.clone(), style)?;

        let width = shapes::mm_to_pt(area.size().width);
        let label = Style::new().with_font_size(10).with_color(palette::DARK);
        shapes::draw_text(
            &area,
            &context.font_cache,
            TextAnchor::Right,
            width,
            5.0,
            "User Guide",
            label,
        )?;
        shapes::stroke_line(&area, (0.0, 24.0), (width, 24.0), palette::ORANGE);
        shapes::stroke_line(&area, (0.0, 24.8), (width, 24.8), palette::ORANGE);

        let mut result = RenderResult::default();
        result.size = Size::new(area.size().width, pt(HEADER_HEIGHT_PT));
        Ok(result)
    }
}

/// Running footer: grey rule, site address at the left, page number at the
/// right.
struct FooterBar {
    page: usize,
}

impl Element for FooterBar {
    fn render(
        &mut self,
        context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let width = shapes::mm_to_pt(area.size().width);
        shapes::stroke_line(&area, (0.0, 6.0), (width, 6.0), palette::LIGHT_GREY);

        let muted = Style::new().with_font_size(9).with_color(palette::DARK_GREY);
        shapes::draw_text(
            &area,
            &context.font_cache,
            TextAnchor::Left,
            0.0,
            12.0,
            "docs.opnsense.org",
            muted,
        )?;
        let dark = Style::new().with_font_size(9).with_color(palette::DARK);
        shapes::draw_text(
            &area,
            &context.font_cache,
            TextAnchor::Right,
            width,
            12.0,
            &format!("Page {}", self.page),
            dark,
        )?;

        let mut result = RenderResult::default();
        result.size = Size::new(area.size().width, pt(FOOTER_HEIGHT_PT));
        Ok(result)
    }
}

/// Page decorator for the guide.
pub struct GuidePageDecorator {
    page: usize,
    logo_path: PathBuf,
}

impl GuidePageDecorator {
    pub fn new(config: &GuideConfig) -> Self {
        Self {
            page: 0,
            logo_path: config.logo_path(),
        }
    }
}

impl PageDecorator for GuidePageDecorator {
    fn decorate_page<'a>(
        &mut self,
        context: &Context,
        mut area: Area<'a>,
        style: Style,
    ) -> Result<Area<'a>, Error> {
        self.page += 1;

        if self.page == 1 {
            area.add_margins(Margins::trbl(
                pt(COVER_MARGIN_PT),
                pt(SIDE_MARGIN_PT),
                pt(COVER_MARGIN_PT),
                pt(SIDE_MARGIN_PT),
            ));
            return Ok(area);
        }

        area.add_margins(Margins::trbl(
            pt(CHROME_MARGIN_PT),
            pt(SIDE_MARGIN_PT),
            pt(CHROME_MARGIN_PT),
            pt(SIDE_MARGIN_PT),
        ));

        let mut header = HeaderBar {
            logo: Logo::from_asset(
                &self.logo_path,
                HEADER_LOGO_WIDTH_PT,
                10,
                Alignment::Left,
            ),
        };
        let result = header.render(context, area.clone(), style)?;
        area.add_offset(Position::new(0, result.size.height));

        let available = area.size().height;
        let footer_height = pt(FOOTER_HEIGHT_PT);
        if footer_height > available {
            return Err(Error::new(
                "Footer height exceeds available space",
                ErrorKind::InvalidData,
            ));
        }
        let mut footer_area = area.clone();
        footer_area.add_offset(Position::new(0, available - footer_height));
        let mut footer = FooterBar { page: self.page };
        let result = footer.render(context, footer_area, style)?;
        if result.has_more {
            return Err(Error::new(
                "Footer element does not fit into the reserved space",
                ErrorKind::PageSizeExceeded,
            ));
        }
        area.set_height(available - footer_height);

        Ok(area)
    }
}

fn centered_text(text: &str, style: Style) -> Paragraph {
    Paragraph::new(StyledString::new(text.to_owned(), style)).aligned(Alignment::Center)
}

/// Builds the cover page content: centered logo, title, accent rule,
/// subtitle, and version lines.  Ends with a page break pushed by the caller.
pub fn cover(config: &GuideConfig, styles: &StyleSheet) -> Result<LinearLayout, Error> {
    let mut layout = LinearLayout::vertical();
    layout.push(Break::new(6.0));

    let logo = Logo::from_asset(
        config.logo_path(),
        COVER_LOGO_WIDTH_PT,
        42,
        Alignment::Center,
    );
    layout.push(logo);
    layout.push(Break::new(3.0));

    let title = styles.get("CoverTitle")?;
    layout.push(
        Paragraph::new(StyledString::new("User Guide".to_owned(), title.style))
            .aligned(title.alignment),
    );
    layout.push(Break::new(1.0));
    layout.push(shapes::HorizontalRule::with_width_pt(152.0, palette::ORANGE));
    layout.push(Break::new(1.5));

    let muted = Style::new().with_font_size(12).with_color(palette::DARK_GREY);
    layout.push(centered_text("LLM-Optimized Reference", muted));

    layout.push(Break::new(14.0));
    let version = Style::new().with_font_size(10).with_color(palette::DARK_GREY);
    layout.push(centered_text("OPNsense 24.x", version));
    layout.push(centered_text("February 2026", version));

    Ok(layout)
}
