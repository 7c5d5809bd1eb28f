//! OPNsense brand colors used throughout the guide.

use genpdf::style::Color;

/// Official OPNsense brand orange (#FF6900).
pub const ORANGE: Color = Color::Rgb(0xFF, 0x69, 0x00);
/// Primary text color (#2C3E50).
pub const DARK: Color = Color::Rgb(0x2C, 0x3E, 0x50);
pub const BLUE: Color = Color::Rgb(0x34, 0x98, 0xDB);
pub const GREEN: Color = Color::Rgb(0x27, 0xAE, 0x60);
pub const RED: Color = Color::Rgb(0xE7, 0x4C, 0x3C);
pub const PURPLE: Color = Color::Rgb(0x9B, 0x59, 0xB6);
pub const TEAL: Color = Color::Rgb(0x1A, 0xBC, 0x9C);
pub const LIGHT_GREY: Color = Color::Rgb(0xEC, 0xF0, 0xF1);
pub const DARK_GREY: Color = Color::Rgb(0x7F, 0x8C, 0x8D);
/// Neutral grid lines in tables (#BDC3C7).
pub const GRID_GREY: Color = Color::Rgb(0xBD, 0xC3, 0xC7);
/// Near-white panel background used behind diagrams (#F8F9FA).
pub const PANEL: Color = Color::Rgb(0xF8, 0xF9, 0xFA);
pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
