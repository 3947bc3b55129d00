//! Application layer managing state and workflows.
//!
//! This module holds the theme and product stores and the application
//! state that coordinates them with the presentation layer.

pub mod contact;
pub mod product_feed;
pub mod state;
pub mod theme_store;

pub use contact::*;
pub use product_feed::*;
pub use state::*;
pub use theme_store::*;
