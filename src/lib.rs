//! A terminal rendition of the atelier site: static pages, browsable
//! portfolio and journal catalogs, and an inquiry form with cancellable
//! submission.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod pages;
pub mod state;
pub mod submission;
pub mod ui;
