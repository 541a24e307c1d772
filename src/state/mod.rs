//! Application state management module.
//!
//! This module contains the view-state machines and the `State` that ties
//! them to the mounted page:
//! - Navigation types (Route, NavigationState)
//! - Catalog items and the selection/filter containers
//! - Contact form types (FormField, FormState, SubmissionPhase)
//! - State error handling

mod catalog;
mod error;
mod form;
mod navigation;
mod selection;

pub use catalog::{
    category_badge, journal_catalog, journal_categories, paragraphs, portfolio_catalog,
    portfolio_categories, CatalogItem, CategoryOption, JournalPost, PortfolioItem, ALL_CATEGORIES,
};
pub use error::StateError;
pub use form::{
    is_valid_email, validate, ContactFields, FailurePolicy, FormErrors, FormField, FormState,
    SelectOption, SubmissionPhase, SubmitOutcome, BUDGET_RANGES, EMAIL_PATTERN, INQUIRY_TYPES,
    TIMELINES,
};
pub use navigation::{NavBarStyle, NavigationState, Route, SCROLL_THRESHOLD};
pub use selection::{FilterState, OverlayTarget, SelectionState};

// State struct, methods and tests are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
