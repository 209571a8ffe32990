pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod share;
pub mod state;

pub use catalog::Catalog;
pub use error::{OrryxError, Result};
pub use models::{Mood, Restaurant, UserPreferences};
