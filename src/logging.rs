//! Logging setup using tracing_subscriber. Logs go to stderr so stdout only
//! carries the report line.

use std::{io::IsTerminal, sync::Once};

use tracing_subscriber::{filter::Directive, filter::LevelFilter, EnvFilter};

static LOG_ENV_VAR: &str = "PLAYER_STATS_LOG";
const DEFAULT_LOG_LEVEL: &str = "warn";
const CRATE_NAME: &str = "player_stats";

/// Initializes a tracing subscriber for logging.
pub fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let (env_filter, log_level) = env_filter_and_log_level();

        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .try_init();

        tracing::debug!("log level: {}", log_level);
    });
}

fn env_filter_and_log_level() -> (EnvFilter, String) {
    // RUST_LOG directives win over PLAYER_STATS_LOG for this crate
    let directive_string = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let mut env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(&directive_string);

    let log_level =
        std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

    if !directive_string.contains(&format!("{CRATE_NAME}=")) {
        env_filter = env_filter.add_directive(crate_directive(&log_level));
    }

    (env_filter, log_level)
}

/// Directive for this crate only; an unknown level falls back to the default.
fn crate_directive(level: &str) -> Directive {
    format!("{CRATE_NAME}={level}")
        .parse::<Directive>()
        .or_else(|_| format!("{CRATE_NAME}={DEFAULT_LOG_LEVEL}").parse())
        .unwrap_or_else(|_| LevelFilter::WARN.into())
}
