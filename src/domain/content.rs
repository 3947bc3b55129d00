//! Static copy rendered by the marketing pages.

/// A titled blurb, used for feature cards, contact details and FAQ entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blurb {
    pub title: &'static str,
    pub body: &'static str,
}

pub const APP_TITLE: &str = "ThemeChanger";
pub const APP_SUBTITLE: &str = "Multi-Theme Switcher";

pub const HOME_TAGLINE: &str = "Experience the power of dynamic theming with three completely different design systems. \
Watch as the entire application transforms with each theme switch.";

pub const HOME_FEATURES: [Blurb; 3] = [
    Blurb {
        title: "Dynamic Themes",
        body: "Switch between three distinct design systems with complete layout transformations.",
    },
    Blurb {
        title: "Smooth Transitions",
        body: "Experience seamless animations and transitions between different theme modes.",
    },
    Blurb {
        title: "Responsive Design",
        body: "Perfect experience across all devices with theme-aware responsive layouts.",
    },
];

pub const PRODUCTS_HEADING: &str = "Featured Products";
pub const PRODUCTS_INTRO: &str = "Discover our amazing collection of products from the Fake Store API. \
Each theme presents these products in a unique and beautiful way.";

pub const ABOUT_INTRO: &str = "A revolutionary approach to theme switching that goes beyond just changing colors. \
ThemeChanger demonstrates how entire user experiences can transform with thoughtful design systems.";

pub const ABOUT_MISSION: &str = "To showcase the power of dynamic theming in modern applications. We believe that \
great design isn't just about aesthetics, it's about creating experiences that adapt to user preferences \
and contexts while maintaining functionality and accessibility.";

pub const ABOUT_FEATURES: [Blurb; 4] = [
    Blurb {
        title: "Complete Design Systems",
        body: "Each theme is a fully-fledged design system with its own color palette, typography, spacing, and component styles.",
    },
    Blurb {
        title: "Palette Swapping",
        body: "Every widget reads its colors from the active palette, so a switch restyles the whole screen on the next frame.",
    },
    Blurb {
        title: "Responsive Layouts",
        body: "Every theme adapts to different terminal sizes while maintaining its unique character and usability.",
    },
    Blurb {
        title: "Smooth Animations",
        body: "A two-phase transition dims the screen while the theme changes so switching feels deliberate.",
    },
];

pub const TECHNOLOGIES: [&str; 8] = [
    "Rust",
    "ratatui",
    "crossterm",
    "reqwest",
    "serde",
    "tracing",
    "crossbeam-channel",
    "Responsive Design",
];

pub const CONTACT_INTRO: &str = "Have questions about ThemeMorph? Want to collaborate or provide feedback? \
We'd love to hear from you!";

/// Contact details: `title` is the channel, `body` the value, `hint` below it.
pub const CONTACT_INFO: [(Blurb, &str); 3] = [
    (Blurb { title: "Email", body: "hello@Hispter.dev" }, "Send us an email anytime"),
    (Blurb { title: "Phone", body: "9325378590" }, "Call us during business hours"),
    (Blurb { title: "Location", body: "Mahrashtra, India" }, "Visit our office"),
];

pub const SOCIAL_LINKS: [&str; 3] = ["GitHub", "LinkedIn", "Twitter"];

pub const FAQ: [Blurb; 4] = [
    Blurb {
        title: "How does theme switching work?",
        body: "ThemeMorph keeps the active theme in a single store and every view redraws from it, \
so the whole application changes appearance without a restart.",
    },
    Blurb {
        title: "Are themes persistent?",
        body: "Yes! Your theme preference is saved to a local preferences file and restored \
when you return to the application.",
    },
    Blurb {
        title: "Does it work in small terminals?",
        body: "Absolutely! The product grid and page layouts shrink to fit narrow terminals.",
    },
    Blurb {
        title: "Can I add more themes?",
        body: "Adding new themes is as simple as defining a new palette and theme configuration.",
    },
];

pub const NOT_FOUND_MESSAGE: &str = "The page you're looking for doesn't exist or has been moved.";

pub const CONTACT_SENT_TOAST: &str = "Message sent successfully! We'll get back to you as soon as possible.";
