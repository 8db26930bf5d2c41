//! Statistics Calculator Module
//! Club and country aggregates over the player table.

use crate::data::{
    normalize_with_policy, Normalized, PlayerTable, WageError, WagePolicy, CLUB, NAME,
    NATIONALITY, OVERALL, WAGE,
};
use polars::prelude::*;
use thiserror::Error;

const CLUB_ROW: &str = "__club_row";
const COUNTRY_ROW: &str = "__country_row";

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error(transparent)]
    WageError(#[from] WageError),
}

/// Mean wage of a club plus how many wages were replaced by 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WageSummary {
    /// `None` when the club has no players.
    pub mean: Option<f64>,
    pub coerced: usize,
}

/// The three aggregates for one (country, club) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub common_players: Vec<String>,
    pub country_mean: Option<f64>,
    pub club_wage: WageSummary,
}

/// Stateless aggregate computations; the table is never modified.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Mean `Overall` of players whose nationality is `country`.
    pub fn mean_overall_country(
        table: &PlayerTable,
        country: &str,
    ) -> Result<Option<f64>, StatsError> {
        let players = table.filter_eq(NATIONALITY, country)?;
        let overall = players.column(OVERALL)?.cast(&DataType::Float64)?;
        Ok(overall.f64()?.mean())
    }

    /// Mean normalized wage of players at `club`.
    pub fn mean_wage_club(
        table: &PlayerTable,
        club: &str,
        policy: WagePolicy,
    ) -> Result<WageSummary, StatsError> {
        let players = table.filter_eq(CLUB, club)?;
        let wages = players.column(WAGE)?.cast(&DataType::String)?;

        let mut values: Vec<f64> = Vec::with_capacity(players.height());
        let mut coerced = 0;
        for raw in wages.as_materialized_series().str()?.into_iter() {
            let normalized = normalize_with_policy(raw.unwrap_or_default(), policy)?;
            if normalized == Normalized::Coerced {
                coerced += 1;
            }
            values.push(normalized.value());
        }

        if coerced > 0 {
            tracing::warn!(club, coerced, ?policy, "malformed wages replaced by 0");
        }

        let mean = if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        };

        Ok(WageSummary { mean, coerced })
    }

    /// Names present in both the club and the country subsets.
    ///
    /// This is an inner join on `Name`: a name repeated in either subset is
    /// emitted once per matching pair. Results follow the club subset's row
    /// order, then the country subset's.
    pub fn common_players(
        table: &PlayerTable,
        club: &str,
        country: &str,
    ) -> Result<Vec<String>, StatsError> {
        let club_players = table
            .lazy_filter_eq(CLUB, club)
            .select([col(NAME)])
            .with_row_index(CLUB_ROW, None);
        let country_players = table
            .lazy_filter_eq(NATIONALITY, country)
            .select([col(NAME)])
            .with_row_index(COUNTRY_ROW, None);

        let joined = club_players
            .join(
                country_players,
                [col(NAME)],
                [col(NAME)],
                JoinArgs::new(JoinType::Inner),
            )
            .sort_by_exprs(
                [col(CLUB_ROW), col(COUNTRY_ROW)],
                SortMultipleOptions::default(),
            )
            .select([col(NAME)])
            .collect()?;

        let names = joined
            .column(NAME)?
            .as_materialized_series()
            .str()?
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect();

        Ok(names)
    }

    /// Compute all three aggregates.
    pub fn compute_all(
        table: &PlayerTable,
        country: &str,
        club: &str,
        policy: WagePolicy,
    ) -> Result<Aggregates, StatsError> {
        let common_players = Self::common_players(table, club, country)?;
        let country_mean = Self::mean_overall_country(table, country)?;
        let club_wage = Self::mean_wage_club(table, club, policy)?;

        tracing::debug!(
            country,
            club,
            common = common_players.len(),
            "computed aggregates"
        );

        Ok(Aggregates {
            common_players,
            country_mean,
            club_wage,
        })
    }
}
