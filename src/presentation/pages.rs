//! Page bodies. Each renderer draws into the main content area only; the
//! header, navigation and status bar are handled by `ui`.

use super::palette::ThemeContext;
use super::products::render_product_grid;
use crate::application::{App, AppMode, ContactField, Route};
use crate::domain::{THEMES, content};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_page(f: &mut Frame, app: &App, ctx: &ThemeContext, area: Rect) {
    match &app.route {
        Route::Home => render_home(f, app, ctx, area),
        Route::About => render_about(f, app, ctx, area),
        Route::Contact => render_contact(f, app, ctx, area),
        Route::NotFound(path) => render_not_found(f, app, ctx, path, area),
    }
}

fn render_home(f: &mut Frame, app: &App, ctx: &ThemeContext, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Welcome to ", ctx.heading()),
            Span::styled(content::APP_TITLE, ctx.primary()),
        ]),
        Line::from(Span::styled(content::HOME_TAGLINE, ctx.muted())),
        Line::from(vec![
            ctx.button("Explore Products →"),
            Span::raw("  "),
            Span::styled(" Learn More ", ctx.chip(ctx.palette.secondary)),
        ]),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(hero, chunks[0]);

    let feature_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .spacing(ctx.gap())
        .split(chunks[1]);
    for (feature, cell) in content::HOME_FEATURES.iter().zip(feature_areas.iter()) {
        let card = Paragraph::new(Span::styled(feature.body, ctx.muted()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(ctx.block(feature.title));
        f.render_widget(card, *cell);
    }

    render_current_theme_card(f, ctx, chunks[2]);
    render_product_grid(f, app.feed.get_state(), ctx, chunks[3], app.scroll);
}

fn render_current_theme_card(f: &mut Frame, ctx: &ThemeContext, area: Rect) {
    let variant = ctx.variant;
    let palette = ctx.palette;
    let lines = vec![
        Line::from(Span::styled(variant.description, ctx.muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", variant.typography), ctx.chip(palette.primary)),
            Span::raw(" "),
            Span::styled(format!(" {} ", variant.layout_label), ctx.chip(palette.secondary)),
            Span::raw(" "),
            Span::styled(format!(" {} ", variant.mode_label), ctx.chip(palette.accent)),
        ]),
    ];
    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(ctx.block(&format!("Current Theme: {}", variant.name)));
    f.render_widget(card, area);
}

fn section(lines: &mut Vec<Line<'static>>, ctx: &ThemeContext, title: &str) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(title.to_string(), ctx.primary())));
}

fn render_about(f: &mut Frame, app: &App, ctx: &ThemeContext, area: Rect) {
    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled("About ThemeSwitcher", ctx.heading())),
        Line::from(Span::styled(content::ABOUT_INTRO, ctx.muted())),
    ];

    section(&mut lines, ctx, "Our Mission");
    lines.push(Line::from(Span::styled(content::ABOUT_MISSION, ctx.muted())));

    section(&mut lines, ctx, "Technical Features");
    for feature in content::ABOUT_FEATURES.iter() {
        lines.push(Line::from(Span::styled(format!("▸ {}", feature.title), ctx.heading())));
        lines.push(Line::from(Span::styled(format!("  {}", feature.body), ctx.muted())));
    }

    section(&mut lines, ctx, "Technologies Used");
    let mut badges = Vec::new();
    for tech in content::TECHNOLOGIES {
        badges.push(Span::styled(format!(" {tech} "), ctx.chip(ctx.palette.secondary)));
        badges.push(Span::raw(" "));
    }
    lines.push(Line::from(badges));

    section(&mut lines, ctx, "Implementation Highlights");
    for (number, variant) in THEMES.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("Theme {}: {}", number + 1, variant.name),
            ctx.heading(),
        )));
        for highlight in variant.highlights {
            lines.push(Line::from(Span::styled(format!("  • {highlight}"), ctx.muted())));
        }
    }

    let page = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(ctx.block("About"));
    f.render_widget(page, area);
}

fn render_contact(f: &mut Frame, app: &App, ctx: &ThemeContext, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(18), Constraint::Length(8)])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled("Get In Touch", ctx.heading())),
        Line::from(Span::styled(content::CONTACT_INTRO, ctx.muted())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(intro, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .spacing(ctx.gap())
        .split(rows[1]);

    let mut info = Vec::new();
    for (blurb, hint) in content::CONTACT_INFO.iter() {
        info.push(Line::from(Span::styled(blurb.title, ctx.heading())));
        info.push(Line::from(Span::styled(blurb.body, ctx.primary())));
        info.push(Line::from(Span::styled(*hint, ctx.muted())));
        info.push(Line::from(""));
    }
    info.push(Line::from(Span::styled("Follow Us", ctx.heading())));
    let socials: Vec<Span> = content::SOCIAL_LINKS
        .iter()
        .flat_map(|name| [Span::styled(format!("[{name}]"), ctx.muted()), Span::raw(" ")])
        .collect();
    info.push(Line::from(socials));
    f.render_widget(
        Paragraph::new(info)
            .wrap(Wrap { trim: true })
            .block(ctx.block("Contact Information")),
        columns[0],
    );

    render_contact_form(f, app, ctx, columns[1]);

    let mut faq = Vec::new();
    for entry in content::FAQ.iter() {
        faq.push(Line::from(Span::styled(entry.title, ctx.heading())));
        faq.push(Line::from(Span::styled(entry.body, ctx.muted())));
    }
    f.render_widget(
        Paragraph::new(faq)
            .wrap(Wrap { trim: true })
            .scroll((app.scroll, 0))
            .block(ctx.block("Frequently Asked Questions")),
        rows[2],
    );
}

fn render_contact_form(f: &mut Frame, app: &App, ctx: &ThemeContext, area: Rect) {
    let editing = app.mode == AppMode::ContactForm;
    let outer = if editing {
        ctx.focused_block("Send us a Message")
    } else {
        ctx.block("Send us a Message (press e to write)")
    };
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    for (field, slot) in ContactField::ALL.iter().zip(fields.iter()) {
        let focused = editing && app.contact.focus == *field;
        if *field == ContactField::Submit {
            let label = if app.contact.is_sending() { "Sending..." } else { field.label() };
            let mut button = ctx.button(label);
            if focused {
                button = button.patch_style(Style::default().add_modifier(Modifier::REVERSED));
            }
            f.render_widget(Paragraph::new(Line::from(button)).alignment(Alignment::Center), *slot);
            continue;
        }

        let value = app.contact.value(*field);
        let text = if value.is_empty() {
            Span::styled(field.placeholder(), ctx.muted())
        } else if focused {
            Span::raw(format!("{value}▏"))
        } else {
            Span::raw(value.to_string())
        };
        let block = if focused { ctx.focused_block(field.label()) } else { ctx.block(field.label()) };
        f.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }).block(block), *slot);
    }
}

fn render_not_found(f: &mut Frame, app: &App, ctx: &ThemeContext, path: &str, area: Rect) {
    let card_area = centered_rect(50, 11, area);
    f.render_widget(Clear, card_area);

    let mut actions = vec![ctx.button("h  Go Home")];
    if app.can_go_back() {
        actions.push(Span::raw("  "));
        actions.push(Span::styled(" b  Go Back ", ctx.chip(ctx.palette.secondary)));
    }

    let lines = vec![
        Line::from(Span::styled("404", ctx.destructive())),
        Line::from(Span::styled("Page Not Found", ctx.heading())),
        Line::from(""),
        Line::from(Span::styled(content::NOT_FOUND_MESSAGE, ctx.muted())),
        Line::from(vec![Span::styled("Route: ", ctx.muted()), Span::raw(path.to_string())]),
        Line::from(""),
        Line::from(actions),
    ];
    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(ctx.block(""));
    f.render_widget(card, card_area);
}

/// A rectangle `percent_x` wide and `height` tall, centred in `area`.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * percent_x as u32 / 100) as u16;
    let width = width.max(area.width.min(40));
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect, Rect::new(25, 10, 50, 10));

        let small = Rect::new(0, 0, 30, 5);
        let rect = centered_rect(50, 10, small);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 5);
    }
}
