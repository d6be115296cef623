pub mod classify;
pub mod config;
pub mod prompt;
pub mod reorganizer;

pub use reorganizer::{reorganize, SortMode};
