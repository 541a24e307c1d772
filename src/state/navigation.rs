//! Navigation disclosure state.
//!
//! This module contains the site routes and the menu/scroll flags that govern
//! the navigation bar.

/// Vertical offset past which the navigation bar is considered scrolled.
///
pub const SCROLL_THRESHOLD: u16 = 50;

/// Specifying the different site routes, in navigation order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Route {
    Home,
    About,
    Portfolio,
    Bridal,
    MadeToMeasure,
    Journal,
    Studio,
    Contact,
}

impl Route {
    /// Return every route in the order the navigation bar lists them.
    ///
    pub fn all() -> [Route; 8] {
        [
            Route::Home,
            Route::About,
            Route::Portfolio,
            Route::Bridal,
            Route::MadeToMeasure,
            Route::Journal,
            Route::Studio,
            Route::Contact,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Portfolio => "/portfolio",
            Route::Bridal => "/bridal",
            Route::MadeToMeasure => "/made-to-measure",
            Route::Journal => "/journal",
            Route::Studio => "/studio",
            Route::Contact => "/contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Portfolio => "Portfolio",
            Route::Bridal => "Bridal",
            Route::MadeToMeasure => "Made-to-Measure",
            Route::Journal => "Journal",
            Route::Studio => "Studio",
            Route::Contact => "Contact",
        }
    }

    /// Return the route following this one, wrapping around.
    ///
    pub fn next(&self) -> Route {
        let routes = Route::all();
        let index = self.index();
        routes[(index + 1) % routes.len()]
    }

    /// Return the route preceding this one, wrapping around.
    ///
    pub fn previous(&self) -> Route {
        let routes = Route::all();
        let index = self.index();
        routes[(index + routes.len() - 1) % routes.len()]
    }

    fn index(&self) -> usize {
        Route::all()
            .iter()
            .position(|route| route == self)
            .unwrap_or(0)
    }
}

/// Background treatment of the navigation bar, derived from the scroll flag.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavBarStyle {
    Transparent,
    Opaque,
}

/// Menu disclosure and scroll-threshold flags.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct NavigationState {
    menu_open: bool,
    scrolled: bool,
}

impl NavigationState {
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recompute the scroll flag from the current vertical offset.
    ///
    pub fn on_scroll(&mut self, offset: u16) -> &mut Self {
        self.scrolled = offset > SCROLL_THRESHOLD;
        self
    }

    /// Close the menu whenever the active route changes.
    ///
    pub fn on_route_change(&mut self, route: Route) -> &mut Self {
        log::debug!("Route changed to '{}', closing menu.", route.path());
        self.menu_open = false;
        self
    }

    pub fn toggle_menu(&mut self) -> &mut Self {
        self.menu_open = !self.menu_open;
        self
    }

    /// Close the menu after a navigation link was activated.
    ///
    pub fn close_menu(&mut self) -> &mut Self {
        self.menu_open = false;
        self
    }

    pub fn bar_style(&self) -> NavBarStyle {
        if self.scrolled {
            NavBarStyle::Opaque
        } else {
            NavBarStyle::Transparent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_closed_and_unscrolled() {
        let nav = NavigationState::default();
        assert!(!nav.is_menu_open());
        assert!(!nav.is_scrolled());
        assert_eq!(nav.bar_style(), NavBarStyle::Transparent);
    }

    #[test]
    fn on_scroll_recomputes_from_offset() {
        let mut nav = NavigationState::default();
        nav.on_scroll(50);
        assert!(!nav.is_scrolled());
        nav.on_scroll(51);
        assert!(nav.is_scrolled());
        assert_eq!(nav.bar_style(), NavBarStyle::Opaque);
        nav.on_scroll(51);
        assert!(nav.is_scrolled());
        nav.on_scroll(0);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn toggle_menu() {
        let mut nav = NavigationState::default();
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn route_change_closes_menu() {
        let mut nav = NavigationState::default();
        nav.toggle_menu();
        nav.on_route_change(Route::Journal);
        assert!(!nav.is_menu_open());
        nav.on_route_change(Route::Journal);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn close_menu_leaves_scroll_alone() {
        let mut nav = NavigationState::default();
        nav.on_scroll(120).toggle_menu();
        nav.close_menu();
        assert!(!nav.is_menu_open());
        assert!(nav.is_scrolled());
    }

    #[test]
    fn route_paths_and_labels() {
        assert_eq!(Route::MadeToMeasure.path(), "/made-to-measure");
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::MadeToMeasure.label(), "Made-to-Measure");
    }

    #[test]
    fn route_cycling_wraps() {
        assert_eq!(Route::Home.next(), Route::About);
        assert_eq!(Route::Contact.next(), Route::Home);
        assert_eq!(Route::Home.previous(), Route::Contact);
    }
}
