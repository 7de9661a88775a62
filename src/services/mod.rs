pub mod categorizer;

pub use categorizer::{Categorizer, CategoryStats};
