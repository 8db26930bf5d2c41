//! Data module - CSV loading and wage normalization

mod loader;
mod wage;

pub use loader::{DataLoader, LoaderError, PlayerTable, DEFAULT_ROW_LIMIT};
pub use loader::{CLUB, NAME, NATIONALITY, OVERALL, WAGE};
pub use wage::{normalize_wage, normalize_with_policy, Normalized, WageError, WagePolicy};
