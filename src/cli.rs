//! Command line arguments and the end-to-end run.

use crate::data::{DataLoader, WagePolicy, DEFAULT_ROW_LIMIT};
use crate::report::{OutputFormat, Report};
use crate::stats::StatsCalculator;
use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

const USAGE_HINT: &str = "Please provide both a country and a club name as arguments.";

/// Club and country aggregates over a football-player CSV.
///
/// Prints the players common to COUNTRY and CLUB, the mean overall rating of
/// COUNTRY and the mean wage of CLUB.
#[derive(Parser, Debug, Clone)]
#[command(name = "player_stats", version)]
pub struct Args {
    /// Nationality to filter on (exact, case-sensitive)
    pub country: String,

    /// Club to filter on (exact, case-sensitive)
    pub club: String,

    /// Path to the player CSV file
    #[arg(long, default_value = "data.csv", env = "PLAYER_STATS_DATA")]
    pub data: PathBuf,

    /// Number of rows read from the start of the file
    #[arg(long, default_value_t = DEFAULT_ROW_LIMIT, env = "PLAYER_STATS_ROWS")]
    pub rows: usize,

    /// Handling of malformed wage values
    #[arg(long, value_enum, default_value_t, env = "PLAYER_STATS_WAGE_POLICY")]
    pub wage_policy: WagePolicy,

    /// Output format of the result line
    #[arg(long, value_enum, default_value_t, env = "PLAYER_STATS_FORMAT")]
    pub format: OutputFormat,

    /// Positional arguments after COUNTRY and CLUB are ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,
}

/// Print a parse failure and exit. Help and version requests exit 0, anything
/// else (including missing country or club) exits 1.
pub fn exit_on_parse_error(err: clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        kind => {
            if kind == ErrorKind::MissingRequiredArgument {
                eprintln!("{USAGE_HINT}");
            }
            let _ = err.print();
            std::process::exit(1)
        }
    }
}

/// Load the table, compute the aggregates and render the report line.
pub fn execute(args: &Args) -> anyhow::Result<String> {
    if !args.ignored.is_empty() {
        tracing::debug!(ignored = ?args.ignored, "extra arguments ignored");
    }

    let table = DataLoader::load_csv(&args.data, args.rows)
        .with_context(|| format!("loading {}", args.data.display()))?;
    tracing::info!(rows = table.row_count(), "player table loaded");

    let aggregates =
        StatsCalculator::compute_all(&table, &args.country, &args.club, args.wage_policy)
            .with_context(|| format!("aggregating {} / {}", args.country, args.club))?;

    let report = Report::from(&aggregates);
    Ok(report.render(args.format)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PLAYERS: &str = "Name,Nationality,Club,Overall,Wage\n\
                           A,X,P,80,€10K\n\
                           A,X,P,80,€10K\n\
                           B,Y,P,90,€20K\n";

    fn players_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn parse_args(file: &NamedTempFile, extra: &[&str]) -> Args {
        let path = file.path().to_str().unwrap();
        let mut argv = vec!["player_stats", "X", "P", "--data", path];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_missing_club_is_rejected() {
        let err = Args::try_parse_from(["player_stats", "Spain"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_positionals_are_ignored() {
        let args = Args::try_parse_from(["player_stats", "Spain", "Real Madrid", "extra"]).unwrap();
        assert_eq!(args.country, "Spain");
        assert_eq!(args.club, "Real Madrid");
        assert_eq!(args.ignored, vec!["extra"]);
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["player_stats", "Spain", "Real Madrid"]).unwrap();
        assert_eq!(args.country, "Spain");
        assert_eq!(args.club, "Real Madrid");
        assert_eq!(args.rows, DEFAULT_ROW_LIMIT);
        assert_eq!(args.wage_policy, WagePolicy::Legacy);
        assert_eq!(args.format, OutputFormat::List);
        assert!(args.ignored.is_empty());
    }

    #[test]
    fn test_execute() {
        let file = players_file(PLAYERS);
        let output = execute(&parse_args(&file, &[])).unwrap();
        assert_eq!(output, "['A, A', 80.0, 13333.33]");
    }

    #[test]
    fn test_execute_json_no_match() {
        let file = players_file(PLAYERS);
        let mut args = parse_args(&file, &["--format", "json"]);
        args.country = "Nowhere".to_string();
        args.club = "Nowhere".to_string();

        assert_eq!(execute(&args).unwrap(), r#"["",null,null]"#);
    }

    #[test]
    fn test_execute_bad_scaled_wage_fails() {
        let file = players_file("Name,Nationality,Club,Overall,Wage\nA,X,P,80,€xK\n");
        assert!(execute(&parse_args(&file, &[])).is_err());

        let output = execute(&parse_args(&file, &["--wage-policy", "coerce"])).unwrap();
        assert_eq!(output, "['A', 80.0, 0.0]");
    }

    #[test]
    fn test_execute_numeric_names_and_teams() {
        let file = players_file(
            "Name,Nationality,Club,Overall,Wage\n\
             1,7,9,80,€1K\n\
             2,7,9,70,€2K\n",
        );
        let path = file.path().to_str().unwrap();
        let args = Args::try_parse_from(["player_stats", "7", "9", "--data", path]).unwrap();

        assert_eq!(execute(&args).unwrap(), "['1, 2', 75.0, 1500.0]");
    }

    #[test]
    fn test_execute_missing_file() {
        let file = players_file(PLAYERS);
        let mut args = parse_args(&file, &[]);
        args.data = PathBuf::from("does/not/exist.csv");

        let err = execute(&args).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.csv"));
    }
}
