use crate::logger::LogBuffer;
use crate::pages::{Page, PageContext};
use crate::submission::{CompletionReceiver, SubmissionCompleted};
use crate::ui::Theme;
use log::*;
use ratatui::layout::Rect;

use super::navigation::{NavigationState, Route};

/// Lines scrolled per key press.
///
const SCROLL_STEP: u16 = 10;

/// Houses data representative of application state.
///
pub struct State {
    route: Route,
    navigation: NavigationState,
    page: Page,
    scroll_offset: u16,
    context: PageContext,
    terminal_size: Rect,
    log_visible: bool,
    log_buffer: LogBuffer,
    theme: Theme,
}

impl State {
    /// Return a new state with the home page mounted.
    ///
    pub fn new(context: PageContext, log_buffer: LogBuffer, theme: Theme) -> Self {
        let page = Page::mount(Route::Home, &context);
        State {
            route: Route::Home,
            navigation: NavigationState::default(),
            page,
            scroll_offset: 0,
            context,
            terminal_size: Rect::default(),
            log_visible: false,
            log_buffer,
            theme,
        }
    }

    pub fn current_route(&self) -> Route {
        self.route
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Activate a route. The menu always closes; a different route tears
    /// down the mounted page, cancelling anything it was waiting on, and
    /// mounts a fresh one.
    ///
    pub fn navigate(&mut self, route: Route) -> &mut Self {
        self.navigation.on_route_change(route);
        if route != self.route {
            info!("Navigating to {}...", route.path());
            self.route = route;
            self.page = Page::mount(route, &self.context);
        }
        self
    }

    /// Activate a route from a navigation link.
    ///
    pub fn navigate_from_menu(&mut self, route: Route) -> &mut Self {
        self.navigation.close_menu();
        self.navigate(route)
    }

    pub fn next_route(&mut self) -> &mut Self {
        let route = self.route.next();
        self.navigate(route)
    }

    pub fn previous_route(&mut self) -> &mut Self {
        let route = self.route.previous();
        self.navigate(route)
    }

    pub fn toggle_menu(&mut self) -> &mut Self {
        self.navigation.toggle_menu();
        self
    }

    pub fn close_menu(&mut self) -> &mut Self {
        self.navigation.close_menu();
        self
    }

    pub fn set_scroll_offset(&mut self, offset: u16) -> &mut Self {
        self.scroll_offset = offset;
        self.navigation.on_scroll(offset);
        self
    }

    pub fn scroll_down(&mut self) -> &mut Self {
        let offset = self.scroll_offset.saturating_add(SCROLL_STEP);
        self.set_scroll_offset(offset)
    }

    pub fn scroll_up(&mut self) -> &mut Self {
        let offset = self.scroll_offset.saturating_sub(SCROLL_STEP);
        self.set_scroll_offset(offset)
    }

    /// Hand a settled submission to the contact page. Completions arriving
    /// after that page was torn down are discarded.
    ///
    pub fn apply_completion(&mut self, completed: SubmissionCompleted) -> &mut Self {
        match self.page.as_contact_mut() {
            Some(page) => {
                page.apply_completion(completed);
            }
            None => warn!(
                "Discarding completion for {:?}, contact page is not mounted.",
                completed.ticket
            ),
        }
        self
    }

    /// Apply every completion waiting on the channel.
    ///
    pub fn drain_completions(&mut self, receiver: &CompletionReceiver) -> &mut Self {
        while let Ok(completed) = receiver.try_recv() {
            self.apply_completion(completed);
        }
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    pub fn get_log_entries(&self) -> Vec<String> {
        self.log_buffer.entries()
    }
}
