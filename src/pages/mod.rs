//! Page instances.
//!
//! Each route mounts a fresh page that exclusively owns its view state:
//! - Catalog pages (portfolio, journal): filter and selection
//! - Contact page: the inquiry form and its pending submission
//! - Everything else is static copy

mod catalog;
mod contact;

pub use catalog::CatalogPage;
pub use contact::ContactPage;

use crate::state::{
    journal_catalog, journal_categories, portfolio_catalog, portfolio_categories, FailurePolicy,
    Route,
};
use crate::submission::{CompletionSender, Submitter, SubmissionTicket};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Collaborators handed to every mounted page.
///
#[derive(Clone)]
pub struct PageContext {
    pub submitter: Arc<dyn Submitter>,
    pub failure_policy: FailurePolicy,
    pub completion_sender: CompletionSender,
    tickets: Arc<AtomicU64>,
}

impl PageContext {
    pub fn new(
        submitter: Arc<dyn Submitter>,
        failure_policy: FailurePolicy,
        completion_sender: CompletionSender,
    ) -> Self {
        PageContext {
            submitter,
            failure_policy,
            completion_sender,
            tickets: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Return a ticket no earlier submission of any page has used.
    ///
    pub fn next_ticket(&self) -> SubmissionTicket {
        SubmissionTicket(self.tickets.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

/// The page mounted for the active route.
///
pub enum Page {
    Static(Route),
    Portfolio(CatalogPage),
    Journal(CatalogPage),
    Contact(ContactPage),
}

impl Page {
    /// Build a fresh page for the route.
    ///
    pub fn mount(route: Route, context: &PageContext) -> Page {
        match route {
            Route::Portfolio => {
                Page::Portfolio(CatalogPage::new(portfolio_catalog(), portfolio_categories()))
            }
            Route::Journal => {
                Page::Journal(CatalogPage::new(journal_catalog(), journal_categories()))
            }
            Route::Contact => Page::Contact(ContactPage::new(context.clone())),
            other => Page::Static(other),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Page::Static(route) => *route,
            Page::Portfolio(_) => Route::Portfolio,
            Page::Journal(_) => Route::Journal,
            Page::Contact(_) => Route::Contact,
        }
    }

    pub fn as_catalog_mut(&mut self) -> Option<&mut CatalogPage> {
        match self {
            Page::Portfolio(page) | Page::Journal(page) => Some(page),
            _ => None,
        }
    }

    pub fn as_contact_mut(&mut self) -> Option<&mut ContactPage> {
        match self {
            Page::Contact(page) => Some(page),
            _ => None,
        }
    }
}
