//! Player Stats - club and country aggregates over a football-player CSV
//!
//! Loads the first rows of a player CSV with Polars and computes the players
//! shared by a club and a country, the country's mean overall rating and the
//! club's mean wage.

pub mod cli;
pub mod data;
pub mod logging;
pub mod report;
pub mod stats;
