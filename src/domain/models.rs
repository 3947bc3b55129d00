use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one of the known theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Theme1,
    Theme2,
    Theme3,
}

impl ThemeId {
    /// Every known theme, in selector order. The first entry is the default.
    pub const ALL: [ThemeId; 3] = [ThemeId::Theme1, ThemeId::Theme2, ThemeId::Theme3];

    /// Parses a persisted or user-supplied id. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<ThemeId> {
        match raw.trim() {
            "theme1" => Some(ThemeId::Theme1),
            "theme2" => Some(ThemeId::Theme2),
            "theme3" => Some(ThemeId::Theme3),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Theme1 => "theme1",
            ThemeId::Theme2 => "theme2",
            ThemeId::Theme3 => "theme3",
        }
    }

    pub fn variant(&self) -> &'static ThemeVariant {
        match self {
            ThemeId::Theme1 => &THEMES[0],
            ThemeId::Theme2 => &THEMES[1],
            ThemeId::Theme3 => &THEMES[2],
        }
    }

    /// Position of this theme in `ALL`.
    pub fn index(&self) -> usize {
        match self {
            ThemeId::Theme1 => 0,
            ThemeId::Theme2 => 1,
            ThemeId::Theme3 => 2,
        }
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> ThemeId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl Default for ThemeId {
    fn default() -> Self {
        ThemeId::ALL[0]
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a theme variant.
#[derive(Debug, PartialEq)]
pub struct ThemeVariant {
    pub id: ThemeId,
    pub name: &'static str,
    /// Whether the variant swaps the top navigation bar for a sidebar.
    pub has_custom_layout: bool,
    pub typography: &'static str,
    pub layout_label: &'static str,
    pub mode_label: &'static str,
    pub description: &'static str,
    pub highlights: [&'static str; 5],
}

pub static THEMES: [ThemeVariant; 3] = [
    ThemeVariant {
        id: ThemeId::Theme1,
        name: "Minimalist",
        has_custom_layout: false,
        typography: "Sans-serif",
        layout_label: "Standard Layout",
        mode_label: "Light Mode",
        description: "You're experiencing our clean, minimalist theme with light colors and crisp typography.",
        highlights: [
            "Clean, light color palette",
            "Inter sans-serif typography",
            "Standard horizontal navigation",
            "Subtle shadows and borders",
            "Optimal for productivity",
        ],
    },
    ThemeVariant {
        id: ThemeId::Theme2,
        name: "Dark Professional",
        has_custom_layout: true,
        typography: "Serif",
        layout_label: "Sidebar Layout",
        mode_label: "Dark Mode",
        description: "You're in our professional dark theme with sidebar navigation and elegant serif fonts.",
        highlights: [
            "Rich dark color scheme",
            "Playfair Display serif fonts",
            "Sidebar navigation layout",
            "Gold accent highlights",
            "Professional aesthetic",
        ],
    },
    ThemeVariant {
        id: ThemeId::Theme3,
        name: "Colorful Playful",
        has_custom_layout: false,
        typography: "Playful",
        layout_label: "Standard Layout",
        mode_label: "Colorful Mode",
        description: "You're enjoying our vibrant, playful theme with colorful gradients and fun typography!",
        highlights: [
            "Vibrant gradient backgrounds",
            "Pacifico playful typography",
            "Card-based grid layouts",
            "Enhanced hover animations",
            "Fun, energetic vibe",
        ],
    },
];

/// Snapshot of the theme store handed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeSelection {
    pub id: ThemeId,
    /// True only inside the transition window.
    pub transitioning: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "rate")]
    pub score: f64,
    pub count: u32,
}

/// One catalog item as returned by the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

/// Tri-state view of the product feed.
///
/// `loading` is only true before the first settle of an activation. Once
/// settled, either `error` is set and `items` is empty, or `items` holds the
/// fetched batch in server order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    pub items: Vec<ProductSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FeedState {
    pub fn loading() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn loaded(items: Vec<ProductSummary>) -> Self {
        Self {
            items,
            loading: false,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: Some(message.into()),
        }
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        assert_eq!(ThemeId::parse("theme1"), Some(ThemeId::Theme1));
        assert_eq!(ThemeId::parse("theme2"), Some(ThemeId::Theme2));
        assert_eq!(ThemeId::parse(" theme3\n"), Some(ThemeId::Theme3));
    }

    #[test]
    fn test_parse_unknown_ids() {
        assert_eq!(ThemeId::parse(""), None);
        assert_eq!(ThemeId::parse("theme4"), None);
        assert_eq!(ThemeId::parse("Theme1"), None);
    }

    #[test]
    fn test_variant_table_matches_ids() {
        for id in ThemeId::ALL {
            assert_eq!(id.variant().id, id);
            assert_eq!(ThemeId::parse(id.as_str()), Some(id));
        }
        assert_eq!(ThemeId::default(), ThemeId::Theme1);
    }

    #[test]
    fn test_only_dark_professional_has_custom_layout() {
        let custom: Vec<_> = THEMES.iter().filter(|t| t.has_custom_layout).map(|t| t.id).collect();
        assert_eq!(custom, vec![ThemeId::Theme2]);
        assert_eq!(ThemeId::Theme2.variant().name, "Dark Professional");
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(ThemeId::Theme1.next(), ThemeId::Theme2);
        assert_eq!(ThemeId::Theme3.next(), ThemeId::Theme1);
    }

    #[test]
    fn test_product_deserializes_catalog_shape() {
        let json = r#"{
            "id": 1,
            "title": "Backpack",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "category": "men's clothing",
            "image": "https://example.com/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;
        let product: ProductSummary = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.rating.score, 3.9);
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn test_feed_state_constructors() {
        let state = FeedState::default();
        assert!(state.loading && state.error.is_none() && state.items.is_empty());

        let failed = FeedState::failed("boom");
        assert!(!failed.loading);
        assert_eq!(failed.error.as_deref(), Some("boom"));
        assert!(failed.items.is_empty());

        let loaded = FeedState::loaded(Vec::new());
        assert!(!loaded.loading);
        assert!(loaded.error.is_none());
    }
}
