//! Wage Normalizer Module
//! Converts wage strings such as `€1.5M` into plain amounts.

use clap::ValueEnum;
use std::num::ParseFloatError;
use thiserror::Error;

/// Symbols removed before parsing.
const CURRENCY_SYMBOLS: &[char] = &['€', '£', '$'];

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

#[derive(Error, Debug, PartialEq)]
pub enum WageError {
    #[error("Empty wage value: {0:?}")]
    Empty(String),
    #[error("Invalid amount before scale suffix in {raw:?}: {source}")]
    InvalidScaled {
        raw: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("Invalid wage value {raw:?}: {source}")]
    Invalid {
        raw: String,
        #[source]
        source: ParseFloatError,
    },
}

/// How malformed wage strings are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WagePolicy {
    /// Suffix-less garbage becomes 0, a bad `K`/`M` prefix or an empty value aborts
    #[default]
    Legacy,
    /// Every malformed value becomes 0 and is counted
    Coerce,
    /// Every malformed value aborts
    Strict,
}

/// Outcome of normalizing a single wage under a policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalized {
    Parsed(f64),
    /// Malformed input replaced by 0.
    Coerced,
}

impl Normalized {
    pub fn value(self) -> f64 {
        match self {
            Normalized::Parsed(v) => v,
            Normalized::Coerced => 0.0,
        }
    }
}

/// Normalize a wage string using the default (legacy) policy.
///
/// `"€200K"` is 200000, `"€1.5M"` is 1500000, `"€250"` is 250 and `"garbage"` is 0.
/// An empty value or a non-numeric prefix before `K`/`M` is an error.
pub fn normalize_wage(raw: &str) -> Result<f64, WageError> {
    normalize_with_policy(raw, WagePolicy::Legacy).map(Normalized::value)
}

pub fn normalize_with_policy(raw: &str, policy: WagePolicy) -> Result<Normalized, WageError> {
    match (parse_wage(raw), policy) {
        (Ok(v), _) => Ok(Normalized::Parsed(v)),
        (Err(_), WagePolicy::Coerce) => Ok(Normalized::Coerced),
        (Err(WageError::Invalid { .. }), WagePolicy::Legacy) => Ok(Normalized::Coerced),
        (Err(e), _) => Err(e),
    }
}

/// Strict parse: every malformed form is reported with its own error kind.
fn parse_wage(raw: &str) -> Result<f64, WageError> {
    let stripped: String = raw.chars().filter(|c| !CURRENCY_SYMBOLS.contains(c)).collect();
    let stripped = stripped.trim();

    let Some(last) = stripped.chars().last() else {
        return Err(WageError::Empty(raw.to_string()));
    };

    let scale = match last {
        'K' => Some(THOUSAND),
        'M' => Some(MILLION),
        _ => None,
    };

    match scale {
        Some(factor) => {
            let prefix = stripped[..stripped.len() - last.len_utf8()].trim();
            prefix
                .parse::<f64>()
                .map(|v| v * factor)
                .map_err(|source| WageError::InvalidScaled {
                    raw: raw.to_string(),
                    source,
                })
        }
        None => stripped.parse::<f64>().map_err(|source| WageError::Invalid {
            raw: raw.to_string(),
            source,
        }),
    }
}
