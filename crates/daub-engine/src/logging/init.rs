use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "daub_ui=debug,daub_engine=info").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Config with an explicit filter, overriding `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Filter the logger ends up with.
#[derive(Debug, Clone, PartialEq, Eq)]
enum EffectiveFilter {
    /// `env_logger` directives, from the config or `RUST_LOG`.
    Directives(String),
    /// Fallback when neither is set.
    Level(log::LevelFilter),
}

/// Picks the filter: `config.env_filter`, then `rust_log`, then `info`.
fn effective_filter(config: &LoggingConfig, rust_log: Option<String>) -> EffectiveFilter {
    match (&config.env_filter, rust_log) {
        (Some(filter), _) => EffectiveFilter::Directives(filter.clone()),
        (None, Some(filter)) => EffectiveFilter::Directives(filter),
        (None, None) => EffectiveFilter::Level(log::LevelFilter::Info),
    }
}

/// Initializes the global logger once.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `info`.
/// Subsequent calls are ignored, as is a logger already installed by the host.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match effective_filter(&config, std::env::var("RUST_LOG").ok()) {
            EffectiveFilter::Directives(filter) => {
                builder.parse_filters(&filter);
            }
            EffectiveFilter::Level(level) => {
                builder.filter_level(level);
            }
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_filter_wins_over_rust_log() {
        let config = LoggingConfig::with_filter("daub_ui=debug");
        assert_eq!(
            effective_filter(&config, Some("warn".to_string())),
            EffectiveFilter::Directives("daub_ui=debug".to_string()),
        );
    }

    #[test]
    fn rust_log_used_without_config_filter() {
        assert_eq!(
            effective_filter(&LoggingConfig::default(), Some("warn".to_string())),
            EffectiveFilter::Directives("warn".to_string()),
        );
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(
            effective_filter(&LoggingConfig::default(), None),
            EffectiveFilter::Level(log::LevelFilter::Info),
        );
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::with_filter("off"));
    }
}
