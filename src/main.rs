//! Usage: `player_stats <country> <club>`. Reads the first 100 rows of
//! `data.csv` and prints the common players, the country's mean overall rating
//! and the club's mean wage.

use clap::Parser;
use player_stats::{cli, logging};

fn main() -> anyhow::Result<()> {
    let args = cli::Args::try_parse().unwrap_or_else(|err| cli::exit_on_parse_error(err));

    logging::init();

    let output = cli::execute(&args)?;
    println!("{output}");
    Ok(())
}
