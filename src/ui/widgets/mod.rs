//! Reusable widget helpers: shared styles and popup geometry.

pub mod styling;
