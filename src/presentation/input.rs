use super::ui::help_line_count;
use crate::application::{App, AppMode, ContactField, Route};
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Instant;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers, now: Instant) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, now),
            AppMode::ThemePicker => Self::handle_theme_picker_mode(app, key, now),
            AppMode::GoTo => Self::handle_goto_mode(app, key),
            AppMode::ContactForm => Self::handle_contact_mode(app, key, modifiers, now),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, now: Instant) {
        app.status_message = None;

        match key {
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                app.navigate(Route::NAV[index].clone());
            }
            KeyCode::Left => app.nav_previous(),
            KeyCode::Right => app.nav_next(),
            KeyCode::Char('t') => app.open_theme_picker(),
            KeyCode::Char('T') => app.cycle_theme(now),
            KeyCode::Char('g') => app.start_goto(),
            KeyCode::Char('r') => app.retry_feed(),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
            KeyCode::Enter | KeyCode::Char('e') => app.start_contact_form(),
            KeyCode::Char('h') if matches!(app.route, Route::NotFound(_)) => {
                app.navigate(Route::Home);
            }
            KeyCode::Char('b') if matches!(app.route, Route::NotFound(_)) => app.go_back(),
            KeyCode::F(1) | KeyCode::Char('?') => app.open_help(),
            _ => {}
        }
    }

    fn handle_theme_picker_mode(app: &mut App, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.picker_up(),
            KeyCode::Down | KeyCode::Char('j') => app.picker_down(),
            KeyCode::Enter => app.confirm_theme_picker(now),
            KeyCode::Esc | KeyCode::Char('t') => app.close_popup(),
            _ => {}
        }
    }

    fn handle_goto_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.finish_goto(),
            KeyCode::Esc => app.cancel_goto(),
            KeyCode::Backspace => {
                if let Some(start) = previous_boundary(&app.path_input, app.cursor_position) {
                    app.path_input.remove(start);
                    app.cursor_position = start;
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.path_input.len() {
                    app.path_input.remove(app.cursor_position);
                }
            }
            KeyCode::Left => {
                if let Some(start) = previous_boundary(&app.path_input, app.cursor_position) {
                    app.cursor_position = start;
                }
            }
            KeyCode::Right => {
                if let Some(c) = app.path_input[app.cursor_position..].chars().next() {
                    app.cursor_position += c.len_utf8();
                }
            }
            KeyCode::Home => app.cursor_position = 0,
            KeyCode::End => app.cursor_position = app.path_input.len(),
            KeyCode::Char(c) => {
                app.path_input.insert(app.cursor_position, c);
                app.cursor_position += c.len_utf8();
            }
            _ => {}
        }
    }

    fn handle_contact_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers, now: Instant) {
        match key {
            KeyCode::Esc => app.close_popup(),
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => app.contact.focus_previous(),
            KeyCode::Tab | KeyCode::Down => app.contact.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.contact.focus_previous(),
            KeyCode::Enter => {
                if app.contact.focus == ContactField::Submit {
                    app.submit_contact(now);
                } else {
                    app.contact.focus_next();
                }
            }
            KeyCode::Backspace => app.contact.backspace(),
            KeyCode::Char(c) => app.contact.insert_char(c),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        let last_line = help_line_count().saturating_sub(1);
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll = (app.help_scroll + 1).min(last_line);
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll = (app.help_scroll + 5).min(last_line);
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

/// Byte offset of the character before `cursor`, if there is one.
fn previous_boundary(text: &str, cursor: usize) -> Option<usize> {
    text[..cursor].char_indices().next_back().map(|(i, _)| i)
}
