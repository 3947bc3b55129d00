//! ThemeMorph - Multi-Theme Terminal Showcase
//!
//! A small site rendered in the terminal whose whole look (palette, borders,
//! layout) switches between three themes with a short morph transition. The
//! chosen theme is remembered across runs, and the home page lists products
//! fetched from a remote catalog.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
