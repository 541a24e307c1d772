//! Event handling module.
//!
//! This module contains the handler for terminal events: key presses routed
//! to the navigation bar and the mounted page.

pub mod terminal;
