use crate::application::ThemeStore;
use crate::domain::{ThemeId, ThemeVariant};
use crate::infrastructure::PreferenceStore;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

/// Colour scheme and decoration for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub primary: Color,
    pub primary_foreground: Color,
    pub secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub header_background: Color,
    pub sidebar_background: Color,
    pub card_background: Color,
    pub destructive: Color,
    pub border_type: BorderType,
    /// Wraps block titles; the terminal's stand-in for typography.
    pub title_marks: (&'static str, &'static str),
}

impl Palette {
    pub fn for_theme(id: ThemeId) -> Palette {
        match id {
            ThemeId::Theme1 => Palette {
                background: Color::Rgb(250, 250, 250),
                foreground: Color::Rgb(24, 24, 27),
                muted: Color::Rgb(113, 113, 122),
                primary: Color::Rgb(37, 99, 235),
                primary_foreground: Color::Rgb(255, 255, 255),
                secondary: Color::Rgb(228, 228, 231),
                accent: Color::Rgb(14, 165, 233),
                border: Color::Rgb(212, 212, 216),
                header_background: Color::Rgb(255, 255, 255),
                sidebar_background: Color::Rgb(244, 244, 245),
                card_background: Color::Rgb(255, 255, 255),
                destructive: Color::Rgb(220, 38, 38),
                border_type: BorderType::Plain,
                title_marks: (" ", " "),
            },
            ThemeId::Theme2 => Palette {
                background: Color::Rgb(15, 23, 42),
                foreground: Color::Rgb(226, 232, 240),
                muted: Color::Rgb(148, 163, 184),
                primary: Color::Rgb(212, 175, 55),
                primary_foreground: Color::Rgb(15, 23, 42),
                secondary: Color::Rgb(51, 65, 85),
                accent: Color::Rgb(234, 179, 8),
                border: Color::Rgb(71, 85, 105),
                header_background: Color::Rgb(2, 6, 23),
                sidebar_background: Color::Rgb(30, 41, 59),
                card_background: Color::Rgb(30, 41, 59),
                destructive: Color::Rgb(248, 113, 113),
                border_type: BorderType::Double,
                title_marks: (" ❧ ", " "),
            },
            ThemeId::Theme3 => Palette {
                background: Color::Rgb(253, 242, 248),
                foreground: Color::Rgb(76, 29, 149),
                muted: Color::Rgb(157, 23, 77),
                primary: Color::Rgb(236, 72, 153),
                primary_foreground: Color::Rgb(255, 255, 255),
                secondary: Color::Rgb(16, 185, 129),
                accent: Color::Rgb(139, 92, 246),
                border: Color::Rgb(244, 114, 182),
                header_background: Color::Rgb(250, 232, 255),
                sidebar_background: Color::Rgb(250, 232, 255),
                card_background: Color::Rgb(255, 251, 235),
                destructive: Color::Rgb(225, 29, 72),
                border_type: BorderType::Rounded,
                title_marks: (" ✿ ", " ✿ "),
            },
        }
    }
}

/// Everything a view needs to style itself, read from the theme store once
/// per frame.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub variant: &'static ThemeVariant,
    pub palette: Palette,
    pub transitioning: bool,
}

impl ThemeContext {
    pub fn from_store<P: PreferenceStore>(store: &ThemeStore<P>) -> Self {
        let selection = store.get_current();
        Self {
            variant: selection.id.variant(),
            palette: Palette::for_theme(selection.id),
            transitioning: selection.transitioning,
        }
    }

    fn morph(&self, style: Style) -> Style {
        if self.transitioning {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    pub fn base(&self) -> Style {
        self.morph(Style::default().fg(self.palette.foreground).bg(self.palette.background))
    }

    pub fn card(&self) -> Style {
        self.morph(Style::default().fg(self.palette.foreground).bg(self.palette.card_background))
    }

    pub fn muted(&self) -> Style {
        self.morph(Style::default().fg(self.palette.muted))
    }

    pub fn heading(&self) -> Style {
        self.morph(Style::default().fg(self.palette.foreground).add_modifier(Modifier::BOLD))
    }

    pub fn primary(&self) -> Style {
        self.morph(Style::default().fg(self.palette.primary).add_modifier(Modifier::BOLD))
    }

    pub fn destructive(&self) -> Style {
        self.morph(Style::default().fg(self.palette.destructive))
    }

    /// A filled "button" or "badge" style.
    pub fn chip(&self, background: Color) -> Style {
        let fg = if background == self.palette.primary {
            self.palette.primary_foreground
        } else {
            self.palette.foreground
        };
        self.morph(Style::default().fg(fg).bg(background))
    }

    pub fn button(&self, label: &str) -> Span<'static> {
        Span::styled(format!(" {label} "), self.chip(self.palette.primary))
    }

    pub fn block(&self, title: &str) -> Block<'static> {
        self.block_with_border(title, self.palette.border)
    }

    pub fn focused_block(&self, title: &str) -> Block<'static> {
        self.block_with_border(title, self.palette.primary)
    }

    fn block_with_border(&self, title: &str, border: Color) -> Block<'static> {
        let (open, close) = self.palette.title_marks;
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.palette.border_type)
            .border_style(self.morph(Style::default().fg(border)))
            .style(self.card());
        if !title.is_empty() {
            block = block.title(Span::styled(format!("{open}{title}{close}"), self.primary()));
        }
        block
    }

    /// Horizontal spacing between cards; the playful theme spreads out.
    pub fn gap(&self) -> u16 {
        if self.variant.id == ThemeId::Theme3 { 2 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryPreferences;
    use std::time::Instant;

    #[test]
    fn test_palettes_are_distinct() {
        let palettes: Vec<Palette> = ThemeId::ALL.iter().map(|id| Palette::for_theme(*id)).collect();
        assert_ne!(palettes[0].background, palettes[1].background);
        assert_ne!(palettes[1].border_type, palettes[2].border_type);
        assert_ne!(palettes[0].primary, palettes[2].primary);
    }

    #[test]
    fn test_context_dims_while_transitioning() {
        let mut store = ThemeStore::initialize(MemoryPreferences::new());
        let idle = ThemeContext::from_store(&store);
        assert!(!idle.base().add_modifier.contains(Modifier::DIM));

        store.set_theme(ThemeId::Theme2, Instant::now());
        let morphing = ThemeContext::from_store(&store);
        assert!(morphing.transitioning);
        assert!(morphing.base().add_modifier.contains(Modifier::DIM));
        // Still showing the old theme until the enter delay passes.
        assert_eq!(morphing.variant.id, ThemeId::Theme1);
    }

    #[test]
    fn test_gap_depends_on_theme() {
        let store = ThemeStore::initialize(MemoryPreferences::with_value(
            crate::application::STORAGE_KEY,
            "theme3",
        ));
        assert_eq!(ThemeContext::from_store(&store).gap(), 2);
    }
}
