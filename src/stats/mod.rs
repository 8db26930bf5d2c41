//! Stats module - club and country aggregates

mod calculator;

pub use calculator::{Aggregates, StatsCalculator, StatsError, WageSummary};
