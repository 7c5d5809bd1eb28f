//! Generator for the OPNsense User Guide PDF.
//!
//! The crate assembles a fixed-content reference document with `genpdf`:
//! custom diagram elements, styled tables, callout boxes, a cover page and
//! running page chrome, rendered to `docs/OPNsense_User_Guide.pdf`.

pub mod builder;
pub mod callout;
pub mod config;
pub mod content;
pub mod decor;
pub mod diagrams;
pub mod fonts;
pub mod images;
pub mod palette;
pub mod shapes;
pub mod styles;
pub mod tables;
