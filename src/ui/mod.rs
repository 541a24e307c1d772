//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - The navigation bar, disclosure menu and footer
//! - Theme management
//! - Page rendering (static copy, catalog listings and overlays, contact form)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::render;
pub use theme::{ColorSpec, Theme};
