use std::sync::Once;

/// Where `stratum` takes its log verbosity from.
///
/// Precedence: an explicit `env_filter` (`--log-level`, e.g.
/// "stratum_cache=trace"), then `RUST_LOG`, then `default_level`. Output
/// always goes to stderr so piped results on stdout stay parseable.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            // Results go to stdout; keep stderr quiet unless something is wrong.
            default_level: log::LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the process-wide backend.
///
/// Only the first caller's config takes effect; the backend cannot be swapped
/// once `log` has a logger.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(
            config.env_filter,
            std::env::var("RUST_LOG").ok(),
            config.default_level,
        );

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);
        builder.target(env_logger::Target::Stderr);
        builder.init();

        log::debug!("logging initialized");
    });
}

/// Picks the filter string: flag first, then environment, then the default level.
fn resolve_filter(flag: Option<String>, env: Option<String>, default_level: log::LevelFilter) -> String {
    let non_blank = |f: &String| !f.trim().is_empty();
    flag.filter(non_blank)
        .or(env.filter(non_blank))
        .unwrap_or_else(|| default_level.to_string().to_lowercase())
}
