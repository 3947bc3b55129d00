//! Application state for the terminal front-end.
//!
//! `App` owns the two stores and the navigation/UI state around them. Views
//! only ever receive `&App` (and through it `&ThemeStore`), so every render
//! reads the same theme snapshot.

use super::contact::ContactForm;
use super::product_feed::ProductFeed;
use super::theme_store::ThemeStore;
use crate::domain::{ThemeId, ThemeSelection, content};
use crossbeam_channel::Receiver;
use std::collections::VecDeque;
use std::time::Instant;

/// Most pages remembered for "Go Back".
pub const MAX_HISTORY: usize = 50;

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Contact,
    /// Unknown path, kept for display.
    NotFound(String),
}

impl Route {
    /// Pages reachable from the navigation menu, in menu order.
    pub const NAV: [Route; 3] = [Route::Home, Route::About, Route::Contact];

    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" => Route::Home,
            "/about" => Route::About,
            "/contact" => Route::Contact,
            _ if trimmed.starts_with('/') => Route::NotFound(trimmed.to_string()),
            _ => Route::NotFound(format!("/{trimmed}")),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::NotFound(path) => path,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Contact => "Contact",
            Route::NotFound(_) => "Not Found",
        }
    }

    pub fn nav_index(&self) -> Option<usize> {
        Self::NAV.iter().position(|r| r == self)
    }
}

/// Represents the current input mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Navigation and shortcuts
    Normal,
    /// Theme selector popup is open
    ThemePicker,
    /// User is typing a path to visit
    GoTo,
    /// Keys go to the contact form
    ContactForm,
    /// Help popup is open
    Help,
}

pub struct App {
    pub theme: ThemeStore,
    pub feed: ProductFeed,
    pub route: Route,
    pub mode: AppMode,
    /// Highlighted entry in the theme selector
    pub picker_index: usize,
    /// Input buffer for the go-to prompt
    pub path_input: String,
    /// Cursor position within `path_input`
    pub cursor_position: usize,
    pub contact: ContactForm,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Vertical scroll of the current page
    pub scroll: u16,
    pub help_scroll: usize,
    history: VecDeque<Route>,
    theme_events: Receiver<ThemeSelection>,
}

impl App {
    /// Builds the application on the Home page, which activates the feed.
    pub fn new(mut theme: ThemeStore, feed: ProductFeed) -> Self {
        let theme_events = theme.subscribe();
        let mut app = Self {
            theme,
            feed,
            route: Route::Home,
            mode: AppMode::Normal,
            picker_index: 0,
            path_input: String::new(),
            cursor_position: 0,
            contact: ContactForm::default(),
            status_message: None,
            scroll: 0,
            help_scroll: 0,
            history: VecDeque::new(),
            theme_events,
        };
        app.mount();
        app
    }

    pub fn theme_selection(&self) -> ThemeSelection {
        self.theme.get_current()
    }

    /// Switches page. Visiting the current page again does nothing.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        let previous = std::mem::replace(&mut self.route, route);
        self.history.push_back(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }
        self.mount();
    }

    /// Returns to the previous page, if any.
    pub fn go_back(&mut self) {
        if let Some(previous) = self.history.pop_back() {
            self.route = previous;
            self.mount();
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    fn mount(&mut self) {
        self.scroll = 0;
        if self.mode == AppMode::ContactForm {
            self.mode = AppMode::Normal;
        }
        match &self.route {
            Route::Home => self.feed.activate(),
            Route::NotFound(path) => {
                tracing::warn!(route = %path, "404: attempted to access non-existent route");
            }
            Route::About | Route::Contact => {}
        }
    }

    pub fn nav_next(&mut self) {
        let next = match self.route.nav_index() {
            Some(i) => (i + 1) % Route::NAV.len(),
            None => 0,
        };
        self.navigate(Route::NAV[next].clone());
    }

    pub fn nav_previous(&mut self) {
        let len = Route::NAV.len();
        let prev = match self.route.nav_index() {
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.navigate(Route::NAV[prev].clone());
    }

    /// Advances timers and collects background results. Returns true if
    /// anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.theme.tick(now);
        changed |= self.feed.poll();

        if self.contact.tick(now) {
            self.status_message = Some(content::CONTACT_SENT_TOAST.to_string());
            changed = true;
        }

        while let Ok(selection) = self.theme_events.try_recv() {
            if !selection.transitioning {
                self.status_message = Some(format!("Theme: {}", selection.id.variant().name));
            }
            changed = true;
        }
        changed
    }

    /// Earliest scheduled timer across the stores.
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.theme.next_deadline(), self.contact.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    pub fn open_theme_picker(&mut self) {
        self.mode = AppMode::ThemePicker;
        self.picker_index = self.theme.target().index();
        self.status_message = None;
    }

    pub fn picker_up(&mut self) {
        self.picker_index = self.picker_index.saturating_sub(1);
    }

    pub fn picker_down(&mut self) {
        self.picker_index = (self.picker_index + 1).min(ThemeId::ALL.len() - 1);
    }

    pub fn confirm_theme_picker(&mut self, now: Instant) {
        if let Some(id) = ThemeId::ALL.get(self.picker_index) {
            self.theme.set_theme(*id, now);
        }
        self.mode = AppMode::Normal;
    }

    pub fn close_popup(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn cycle_theme(&mut self, now: Instant) {
        let next = self.theme.target().next();
        self.theme.set_theme(next, now);
    }

    pub fn start_goto(&mut self) {
        self.mode = AppMode::GoTo;
        self.path_input = self.route.path().to_string();
        self.cursor_position = self.path_input.len();
        self.status_message = None;
    }

    pub fn finish_goto(&mut self) {
        let route = Route::from_path(&self.path_input);
        self.cancel_goto();
        self.navigate(route);
    }

    pub fn cancel_goto(&mut self) {
        self.mode = AppMode::Normal;
        self.path_input.clear();
        self.cursor_position = 0;
    }

    /// Re-activates the feed after a failure ("Try Again").
    pub fn retry_feed(&mut self) {
        if self.route == Route::Home && self.feed.get_state().error.is_some() {
            tracing::info!("retrying product catalog fetch");
            self.feed.activate();
        }
    }

    pub fn start_contact_form(&mut self) {
        if self.route == Route::Contact {
            self.mode = AppMode::ContactForm;
            self.status_message = None;
        }
    }

    pub fn submit_contact(&mut self, now: Instant) {
        self.status_message = Some(match self.contact.submit(now) {
            Ok(()) => "Sending...".to_string(),
            Err(e) => e.to_string(),
        });
    }

    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
