pub mod models;
pub mod errors;
pub mod content;

pub use models::*;
pub use errors::*;
