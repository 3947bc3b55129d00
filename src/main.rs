//! ThemeMorph - Multi-Theme Terminal Showcase
//!
//! Renders a three-page site in the terminal with switchable themes, a
//! remembered theme preference and a product grid fed from a remote catalog.

use std::io;
use std::sync::Arc;
use std::time::Instant;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use thememorph::application::{App, AppMode, ProductFeed, ThemeStore};
use thememorph::infrastructure::{
    init_logging, AppConfig, FilePreferences, HttpCatalogClient, PreferenceStore,
};
use thememorph::presentation::{render_ui, InputHandler};

/// Entry point for the ThemeMorph terminal application.
///
/// Loads configuration and logging before touching the terminal, so that
/// setup errors are printed normally, then runs the event loop until the
/// user quits.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the log file cannot be
/// opened, or terminal setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_logging(&config.log_file, &config.log_filter)?;
    let file_preferences = FilePreferences::open(&config.preferences_path);
    let catalog = Arc::new(HttpCatalogClient::new(config.catalog_url.clone()));
    tracing::info!(
        catalog = %catalog.url(),
        preferences = %file_preferences.path().display(),
        "starting thememorph"
    );

    let preferences: Box<dyn PreferenceStore> = Box::new(file_preferences);
    let theme = ThemeStore::initialize(preferences);
    let feed = ProductFeed::new(catalog);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(theme, feed);
    let res = run_app(&mut terminal, &mut app, &config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal error");
        println!("{err:?}");
    }

    tracing::info!("thememorph stopped");
    Ok(())
}

/// Main application event loop.
///
/// Waits for input no longer than the configured tick rate or the next
/// scheduled theme/contact timer, whichever is sooner, and advances the
/// stores after every wake-up. Exits when the user presses 'q' in normal
/// mode.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, config: &AppConfig) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        let now = Instant::now();
        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now).min(config.tick_rate))
            .unwrap_or(config.tick_rate);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                        _ => InputHandler::handle_key_event(app, key.code, key.modifiers, Instant::now()),
                    }
                }
            }
        }

        app.tick(Instant::now());
    }
}
