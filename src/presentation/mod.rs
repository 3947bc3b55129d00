//! Presentation layer handling terminal UI and user input.
//!
//! Views read the theme through a `ThemeContext` built from the store each
//! frame; input handlers translate key presses into `App` operations.

pub mod input;
pub mod pages;
pub mod palette;
pub mod products;
pub mod ui;

pub use input::*;
pub use palette::*;
pub use ui::*;
