//! Report Module
//! Rounds the aggregates and renders them as one line of output.

use crate::stats::Aggregates;
use clap::ValueEnum;
use serde::Serialize;

/// Output rendering for the report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `['A, B', 80.0, 13333.33]`, with `nan` for an empty mean
    #[default]
    List,
    /// `["A, B",80.0,13333.33]`, with `null` for an empty mean
    Json,
}

/// Final (names, country mean, club mean wage) triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report(pub String, pub Option<f64>, pub Option<f64>);

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::List => Ok(format!(
                "[{}, {}, {}]",
                quote(&self.0),
                format_mean(self.1),
                format_mean(self.2)
            )),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}

impl From<&Aggregates> for Report {
    fn from(agg: &Aggregates) -> Self {
        Report(
            agg.common_players.join(", "),
            agg.country_mean.map(round2),
            agg.club_wage.mean.map(round2),
        )
    }
}

/// Round to two decimal places, halves to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn format_mean(mean: Option<f64>) -> String {
    match mean {
        // Debug keeps the trailing `.0` on whole numbers
        Some(v) => format!("{v:?}"),
        None => "nan".to_string(),
    }
}

fn quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\");
    if s.contains('\'') && !s.contains('"') {
        format!("\"{escaped}\"")
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}
