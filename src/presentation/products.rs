use super::palette::ThemeContext;
use crate::application::{DISPLAY_LIMIT, SKELETON_COUNT};
use crate::domain::{FeedState, ProductSummary, content};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const CARD_HEIGHT: u16 = 8;

/// Grid columns for a given width, mirroring the 1/2/3/4 column breakpoints.
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=43 => 1,
        44..=83 => 2,
        84..=123 => 3,
        _ => 4,
    }
}

/// Products the grid shows: the feed's batch capped at the display limit.
pub fn visible_products(state: &FeedState) -> &[ProductSummary] {
    let end = state.items.len().min(DISPLAY_LIMIT);
    &state.items[..end]
}

enum CardContent<'a> {
    Product(&'a ProductSummary),
    Skeleton,
}

pub fn render_product_grid(f: &mut Frame, state: &FeedState, ctx: &ThemeContext, area: Rect, row_offset: u16) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(content::PRODUCTS_HEADING, ctx.heading())),
        Line::from(Span::styled(content::PRODUCTS_INTRO, ctx.muted())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(heading, chunks[0]);

    if let Some(error) = &state.error {
        render_error(f, error, ctx, chunks[1]);
        return;
    }

    let cards: Vec<CardContent> = if state.loading {
        (0..SKELETON_COUNT).map(|_| CardContent::Skeleton).collect()
    } else {
        visible_products(state).iter().map(CardContent::Product).collect()
    };
    render_cards(f, &cards, ctx, chunks[1], row_offset);
}

fn render_error(f: &mut Frame, error: &str, ctx: &ThemeContext, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("⚠ {error}"), ctx.destructive())),
        Line::from(""),
        Line::from(vec![ctx.button("Try Again"), Span::styled("  press r", ctx.muted())]),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_cards(f: &mut Frame, cards: &[CardContent], ctx: &ThemeContext, area: Rect, row_offset: u16) {
    if cards.is_empty() || area.height == 0 {
        return;
    }

    let columns = grid_columns(area.width);
    let total_rows = cards.len().div_ceil(columns);
    let visible_rows = ((area.height / CARD_HEIGHT).max(1)) as usize;
    let first_row = (row_offset as usize).min(total_rows.saturating_sub(visible_rows));

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (slot, row_area) in row_areas.iter().enumerate() {
        let row = first_row + slot;
        if row >= total_rows {
            break;
        }
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .spacing(ctx.gap())
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            match cards.get(row * columns + col) {
                Some(CardContent::Product(product)) => render_product_card(f, product, ctx, *cell),
                Some(CardContent::Skeleton) => render_skeleton_card(f, ctx, *cell),
                None => {}
            }
        }
    }
}

fn render_product_card(f: &mut Frame, product: &ProductSummary, ctx: &ThemeContext, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(format!("[{}]", product.category), ctx.chip(ctx.palette.secondary))),
        Line::from(Span::styled(product.description.clone(), ctx.muted())),
        Line::from(vec![
            Span::styled(format!("${:.2}", product.price), ctx.primary()),
            Span::styled(
                format!("  ★ {} ({})", product.rating.score, product.rating.count),
                ctx.muted(),
            ),
        ]),
        Line::from(ctx.button("🛒 Add to Cart")),
    ];

    let block = ctx.block(&product.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Keep price and button visible; the description absorbs any shortfall.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);
    for (line, chunk) in lines.into_iter().zip(chunks.iter()) {
        f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), *chunk);
    }
}

fn render_skeleton_card(f: &mut Frame, ctx: &ThemeContext, area: Rect) {
    let bar = |width: usize| Line::from(Span::styled("░".repeat(width), ctx.muted()));
    let inner_width = area.width.saturating_sub(2) as usize;
    let lines = vec![
        bar(inner_width),
        bar(inner_width * 2 / 3),
        Line::from(""),
        bar(inner_width / 3),
        bar(inner_width),
    ];
    f.render_widget(Paragraph::new(lines).block(ctx.block("")), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ThemeStore;
    use crate::domain::Rating;
    use crate::infrastructure::MemoryPreferences;
    use ratatui::{backend::TestBackend, Terminal};

    fn product(id: u64) -> ProductSummary {
        ProductSummary {
            id,
            title: format!("Widget {id}"),
            description: "Useful".to_string(),
            price: 5.5,
            category: "tools".to_string(),
            image: String::new(),
            rating: Rating { score: 3.5, count: 2 },
        }
    }

    fn render(state: &FeedState) -> String {
        let store = ThemeStore::initialize(MemoryPreferences::new());
        let ctx = ThemeContext::from_store(&store);
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| render_product_grid(f, state, &ctx, f.area(), 0))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_grid_columns_breakpoints() {
        assert_eq!(grid_columns(30), 1);
        assert_eq!(grid_columns(60), 2);
        assert_eq!(grid_columns(100), 3);
        assert_eq!(grid_columns(200), 4);
    }

    #[test]
    fn test_visible_products_capped() {
        let state = FeedState::loaded((1..=20).map(product).collect());
        let visible = visible_products(&state);
        assert_eq!(visible.len(), DISPLAY_LIMIT);
        assert_eq!(visible[0].id, 1);
        assert_eq!(state.items.len(), 20);

        let few = FeedState::loaded(vec![product(1)]);
        assert_eq!(visible_products(&few).len(), 1);
    }

    #[test]
    fn test_renders_error_with_retry_hint() {
        let text = render(&FeedState::failed("Failed to load products: boom"));
        assert!(text.contains("Failed to load products: boom"));
        assert!(text.contains("Try Again"));
    }

    #[test]
    fn test_renders_skeletons_while_loading() {
        let text = render(&FeedState::loading());
        assert!(text.contains("░░░"));
        assert!(!text.contains("Widget"));
    }

    #[test]
    fn test_renders_product_cards() {
        let text = render(&FeedState::loaded(vec![product(1), product(2)]));
        assert!(text.contains("Widget 1"));
        assert!(text.contains("Widget 2"));
        assert!(text.contains("$5.50"));
    }
}
