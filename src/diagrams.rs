//! Fixed vector illustrations embedded in the guide.
//!
//! Each diagram is a `genpdf` element drawing a fixed visual template with
//! absolute coordinates (points, y growing downwards from the element's own
//! top-left corner).  The templates are parameterized only by small inputs
//! such as a chapter label or title; everything else is baked in.

use genpdf::error::Error;
use genpdf::render::Area;
use genpdf::style::Style;
use genpdf::{Context, Element, RenderResult, Size};

use crate::palette;
use crate::shapes::{self, TextAnchor};

fn bold(size: u8, color: genpdf::style::Color) -> Style {
    let mut style = Style::new().with_font_size(size).with_color(color);
    style.set_bold();
    style
}

fn regular(size: u8, color: genpdf::style::Color) -> Style {
    Style::new().with_font_size(size).with_color(color)
}

fn panel(area: &Area<'_>, width: f64, height: f64) {
    shapes::fill_rounded_rect(area, 0.0, 0.0, width, height, 10.0, palette::PANEL);
}

fn fits(area: &Area<'_>, height_pt: f64, result: &mut RenderResult) -> bool {
    if area.size().height < shapes::pt(height_pt) {
        result.has_more = true;
        false
    } else {
        true
    }
}

/// Typical deployment topology: internet, firewall, and three local segments.
#[derive(Default)]
pub struct NetworkDiagram;

impl NetworkDiagram {
    pub const WIDTH_PT: f64 = 450.0;
    pub const HEIGHT_PT: f64 = 200.0;

    pub fn new() -> Self {
        Self
    }
}

impl Element for NetworkDiagram {
    fn render(
        &mut self,
        context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        if !fits(&area, Self::HEIGHT_PT, &mut result) {
            return Ok(result);
        }
        let fonts = &context.font_cache;

        panel(&area, Self::WIDTH_PT, Self::HEIGHT_PT);

        shapes::fill_ellipse(&area, 225.0, 30.0, 45.0, 20.0, palette::BLUE);
        shapes::draw_text(
            &area,
            fonts,
            TextAnchor::Center,
            225.0,
            25.0,
            "INTERNET",
            bold(10, palette::WHITE),
        )?;

        // WAN drop between the cloud and the firewall.
        shapes::stroke_line(&area, (225.0, 50.0), (225.0, 70.0), palette::DARK);
        shapes::draw_text(
            &area,
            fonts,
            TextAnchor::Center,
            240.0,
            55.0,
            "WAN",
            regular(8, palette::DARK),
        )?;

        shapes::fill_rounded_rect(&area, 175.0, 70.0, 100.0, 50.0, 5.0, palette::ORANGE);
        shapes::draw_text(
            &area,
            fonts,
            TextAnchor::Center,
            225.0,
            89.0,
            "OPNsense",
            bold(11, palette::WHITE),
        )?;

        let segments = [
            ("LAN", palette::GREEN, 50.0, 90.0),
            ("DMZ", palette::PURPLE, 185.0, 225.0),
            ("GUEST", palette::TEAL, 320.0, 360.0),
        ];
        for (label, color, x, cx) in segments {
            shapes::fill_rounded_rect(&area, x, 150.0, 80.0, 40.0, 5.0, color);
            shapes::draw_text(
                &area,
                fonts,
                TextAnchor::Center,
                cx,
                165.0,
                label,
                bold(9, palette::WHITE),
            )?;
            shapes::stroke_line(&area, (225.0, 120.0), (cx, 150.0), palette::DARK_GREY);
        }

        result.size = Size::new(shapes::pt(Self::WIDTH_PT), shapes::pt(Self::HEIGHT_PT));
        Ok(result)
    }
}

/// Firewall rule processing order: floating, group, interface, default deny.
#[derive(Default)]
pub struct RuleOrderDiagram;

impl RuleOrderDiagram {
    pub const WIDTH_PT: f64 = 450.0;
    pub const HEIGHT_PT: f64 = 180.0;

    pub fn new() -> Self {
        Self
    }
}

impl Element for RuleOrderDiagram {
    fn render(
        &mut self,
        context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        if !fits(&area, Self::HEIGHT_PT, &mut result) {
            return Ok(result);
        }
        let fonts = &context.font_cache;

        panel(&area, Self::WIDTH_PT, Self::HEIGHT_PT);
        shapes::draw_text(
            &area,
            fonts,
            TextAnchor::Center,
            225.0,
            12.0,
            "Firewall Rule Processing Order",
            bold(12, palette::DARK),
        )?;

        let stages = [
            ("Floating", "Rules", palette::ORANGE, 30.0),
            ("Group", "Rules", palette::BLUE, 130.0),
            ("Interface", "Rules", palette::GREEN, 230.0),
            ("Default", "Deny", palette::RED, 330.0),
        ];
        for (first, second, color, x) in stages {
            shapes::fill_rounded_rect(&area, x, 70.0, 90.0, 50.0, 5.0, color);
            let center = x + 45.0;
            shapes::draw_text(
                &area,
                fonts,
                TextAnchor::Center,
                center,
                80.0,
                first,
                bold(9, palette::WHITE),
            )?;
            shapes::draw_text(
                &area,
                fonts,
                TextAnchor::Center,
                center,
                92.0,
                second,
                bold(9, palette::WHITE),
            )?;
        }

        for x in [120.0, 220.0, 320.0] {
            shapes::stroke_line(&area, (x, 95.0), (x + 10.0, 95.0), palette::DARK);
            shapes::arrowhead_right(&area, x + 10.0, 95.0, palette::DARK);
        }

        let labels = [
            ("Priority: 200000", 75.0),
            ("Priority: 300000", 175.0),
            ("Priority: 400000", 275.0),
            ("Last Match", 375.0),
        ];
        for (label, cx) in labels {
            shapes::draw_text(
                &area,
                fonts,
                TextAnchor::Center,
                cx,
                128.0,
                label,
                regular(8, palette::DARK_GREY),
            )?;
        }

        result.size = Size::new(shapes::pt(Self::WIDTH_PT), shapes::pt(Self::HEIGHT_PT));
        Ok(result)
    }
}

/// Site-to-site VPN tunnel between two protected networks.
#[derive(Default)]
pub struct VpnTunnelDiagram;

impl VpnTunnelDiagram {
    pub const WIDTH_PT: f64 = 450.0;
    pub const HEIGHT_PT: f64 = 150.0;

    pub fn new() -> Self {
        Self
    }
}

impl Element for VpnTunnelDiagram {
    fn render(
        &mut self,
        context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        if !fits(&area, Self::HEIGHT_PT, &mut result) {
            return Ok(result);
        }
        let fonts = &context.font_cache;

        panel(&area, Self::WIDTH_PT, Self::HEIGHT_PT);

        let sites = [
            ("Site A", "192.168.1.0/24", palette::BLUE, 20.0, 70.0),
            ("Site B", "192.168.2.0/24", palette::GREEN, 330.0, 380.0),
        ];
        for (name, subnet, color, x, cx) in sites {
            shapes::fill_rounded_rect(&area, x, 40.0, 100.0, 60.0, 5.0, color);
            shapes::draw_text(
                &area,
                fonts,
                TextAnchor::Center,
                cx,
                56.0,
                name,
                bold(10, palette::WHITE),
            )?;
            shapes::draw_text(
                &area,
                fonts,
                TextAnchor::Center,
                cx,
                72.0,
                subnet,
                regular(8, palette::WHITE),
            )?;
        }

        shapes::dashed_line(&area, (120.0, 70.0), (330.0, 70.0), 6.0, 3.0, palette::ORANGE);
        shapes::fill_rounded_rect(&area, 210.0, 55.0, 30.0, 25.0, 3.0, palette::ORANGE);
        shapes::draw_text(
            &area,
            fonts,
            TextAnchor::Center,
            225.0,
            61.0,
            "VPN",
            bold(12, palette::WHITE),
        )?;

        shapes::fill_ellipse(&area, 225.0, 25.0, 45.0, 15.0, palette::GRID_GREY);
        shapes::draw_text(
            &area,
            fonts,
            TextAnchor::Center,
            225.0,
            20.0,
            "Internet",
            regular(9, palette::DARK),
        )?;

        shapes::draw_text(
            &area,
            fonts,
            TextAnchor::Center,
            225.0,
            122.0,
            "Site-to-Site VPN Tunnel",
            bold(11, palette::DARK),
        )?;

        result.size = Size::new(shapes::pt(Self::WIDTH_PT), shapes::pt(Self::HEIGHT_PT));
        Ok(result)
    }
}

/// Chapter banner: numbered badge circle, title, and an accent rule.
pub struct ChapterHeading {
    label: String,
    title: String,
}

impl ChapterHeading {
    pub const WIDTH_PT: f64 = 450.0;
    pub const HEIGHT_PT: f64 = 60.0;

    /// Creates a banner; `label` is the chapter number or appendix letter.
    pub fn new(label: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
        }
    }
}

impl Element for ChapterHeading {
    fn render(
        &mut self,
        context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        if !fits(&area, Self::HEIGHT_PT, &mut result) {
            return Ok(result);
        }
        let fonts = &context.font_cache;

        shapes::fill_circle(&area, 30.0, 30.0, 25.0, palette::ORANGE);
        shapes::draw_text(
            &area,
            fonts,
            TextAnchor::Center,
            30.0,
            20.0,
            &self.label,
            bold(20, palette::WHITE),
        )?;
        shapes::draw_text(
            &area,
            fonts,
            TextAnchor::Left,
            65.0,
            18.0,
            &self.title,
            bold(22, palette::DARK),
        )?;
        shapes::stroke_line(&area, (65.0, 50.0), (Self::WIDTH_PT, 50.0), palette::ORANGE);
        shapes::stroke_line(&area, (65.0, 50.8), (Self::WIDTH_PT, 50.8), palette::ORANGE);

        result.size = Size::new(shapes::pt(Self::WIDTH_PT), shapes::pt(Self::HEIGHT_PT));
        Ok(result)
    }
}
