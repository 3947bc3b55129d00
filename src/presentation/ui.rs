use super::pages::{centered_rect, render_page};
use super::palette::ThemeContext;
use crate::application::{App, AppMode, Route};
use crate::domain::{ThemeId, content};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 26;

pub fn render_ui(f: &mut Frame, app: &App) {
    let ctx = ThemeContext::from_store(&app.theme);
    let area = f.area();
    f.render_widget(Block::default().style(ctx.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(f, app, &ctx, chunks[0]);

    let main = if ctx.variant.has_custom_layout {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);
        render_sidebar(f, app, &ctx, body[0]);
        body[1]
    } else {
        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(chunks[1]);
        render_nav_bar(f, app, &ctx, body[0]);
        body[1]
    };

    render_page(f, app, &ctx, main);
    render_status_bar(f, app, &ctx, chunks[2]);

    match app.mode {
        AppMode::ThemePicker => render_theme_picker(f, app, &ctx),
        AppMode::GoTo => render_goto_prompt(f, app, &ctx),
        AppMode::Help => render_help_popup(f, app.help_scroll, &ctx),
        AppMode::Normal | AppMode::ContactForm => {}
    }
}

fn render_header(f: &mut Frame, app: &App, ctx: &ThemeContext, area: Rect) {
    let header_style = ctx.base().bg(ctx.palette.header_background);
    let selection = app.theme_selection();
    let morph = if selection.transitioning { " ~" } else { "" };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(44)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(" ◆ ", ctx.chip(ctx.palette.primary)),
            Span::styled(format!(" {}", content::APP_TITLE), ctx.heading()),
        ]),
        Line::from(Span::styled(format!("    {}", content::APP_SUBTITLE), ctx.muted())),
    ])
    .style(header_style);
    f.render_widget(title, chunks[0]);

    let selector = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Choose Theme: ", ctx.muted()),
            Span::styled(
                format!("[ {} ▾ ]{morph}", selection.id.variant().name),
                ctx.primary(),
            ),
        ]),
        Line::from(Span::styled("t: select  T: next", ctx.muted())),
    ])
    .style(header_style);
    f.render_widget(selector, chunks[1]);
}

fn nav_item_style(ctx: &ThemeContext, active: bool) -> Style {
    if active {
        ctx.chip(ctx.palette.primary)
    } else {
        ctx.muted()
    }
}

fn render_nav_bar(f: &mut Frame, app: &App, ctx: &ThemeContext, area: Rect) {
    let mut spans = Vec::new();
    for (i, route) in Route::NAV.iter().enumerate() {
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, route.label()),
            nav_item_style(ctx, *route == app.route),
        ));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).style(ctx.base()), area);
}

fn render_sidebar(f: &mut Frame, app: &App, ctx: &ThemeContext, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled("Navigation", ctx.heading())),
        Line::from(Span::styled("Explore the app sections", ctx.muted())),
        Line::from(""),
    ];
    for (i, route) in Route::NAV.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!(" {}  {:<18}", i + 1, route.label()),
            nav_item_style(ctx, *route == app.route),
        )));
    }
    let sidebar = Paragraph::new(lines)
        .style(ctx.base().bg(ctx.palette.sidebar_background))
        .block(ctx.block(""));
    f.render_widget(sidebar, area);
}

fn render_status_bar(f: &mut Frame, app: &App, ctx: &ThemeContext, area: Rect) {
    let text = match app.mode {
        AppMode::Normal => match &app.status_message {
            Some(status) => status.clone(),
            None => format!(
                "{} | 1-3/←→: pages | t: theme | g: go to | r: retry | ?: help | q: quit",
                app.route.path()
            ),
        },
        AppMode::ThemePicker => "↑↓: choose theme | Enter: apply | Esc: cancel".to_string(),
        AppMode::GoTo => format!("Go to: {} (Enter to visit, Esc to cancel)", app.path_input),
        AppMode::ContactForm => match &app.status_message {
            Some(status) => status.clone(),
            None => "Tab/↓: next field | Shift+Tab/↑: previous | Enter on Send: submit | Esc: done".to_string(),
        },
        AppMode::Help => "↑↓/jk: scroll | Esc/q/?: close help".to_string(),
    };
    let status = Paragraph::new(text).style(ctx.card()).block(ctx.block("Status"));
    f.render_widget(status, area);
}

fn render_theme_picker(f: &mut Frame, app: &App, ctx: &ThemeContext) {
    let area = centered_rect(40, ThemeId::ALL.len() as u16 + 2, f.area());
    f.render_widget(Clear, area);

    let current = app.theme.target();
    let lines: Vec<Line> = ThemeId::ALL
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let marker = if *id == current { "●" } else { " " };
            let text = format!(" {marker} {}", id.variant().name);
            if i == app.picker_index {
                Line::from(Span::styled(text, ctx.card().add_modifier(Modifier::REVERSED)))
            } else {
                Line::from(Span::styled(text, ctx.card()))
            }
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(ctx.focused_block("Select theme")), area);
}

fn render_goto_prompt(f: &mut Frame, app: &App, ctx: &ThemeContext) {
    let area = centered_rect(50, 3, f.area());
    f.render_widget(Clear, area);
    let prompt = Paragraph::new(format!("{}▏", app.path_input))
        .style(ctx.card())
        .block(ctx.focused_block("Go to path"));
    f.render_widget(prompt, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize, ctx: &ThemeContext) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };
    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;
    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let help = Paragraph::new(help_lines[start_line..end_line].join("\n"))
        .style(ctx.card())
        .block(ctx.focused_block(&format!(
            "Help (Line {}/{})",
            start_line + 1,
            help_lines.len()
        )));
    f.render_widget(help, popup_area);
}

/// Number of lines in the help text, used to bound scrolling.
pub fn help_line_count() -> usize {
    HELP_TEXT.lines().count()
}

const HELP_TEXT: &str = r#"THEMEMORPH KEY REFERENCE

=== PAGES ===
1 / 2 / 3       Home / About / Contact
← →             Previous / next page
g               Go to a path (e.g. /about, anything else shows 404)

=== THEMES ===
t               Open the theme selector
T               Switch to the next theme
                Minimalist        light, standard navigation
                Dark Professional dark, sidebar navigation
                Colorful Playful  vivid, roomy cards
                Your choice is saved and restored next time.

=== HOME ===
j / k, ↓ / ↑    Scroll the product grid
r               Retry loading products after an error

=== ABOUT / CONTACT ===
j / k, ↓ / ↑    Scroll the page
e / Enter       Write a message (Contact)
Tab / Shift+Tab Move between form fields
Enter           Next field, or send when on the button
Esc             Leave the form

=== 404 ===
h               Go home
b               Go back

=== GENERAL ===
F1 or ?         Show this help
q               Quit"#;
