use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "vellum_ui=debug,vellum_gradient=warn").
///
/// `write_style` controls ANSI coloring behavior. `capture_for_tests` routes
/// output through the test harness capture instead of stderr.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub capture_for_tests: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            capture_for_tests: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn for_tests() -> Self {
        Self { capture_for_tests: true, ..Self::default() }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored. A logger
/// installed by someone else is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);
        builder.is_test(config.capture_for_tests);

        match builder.try_init() {
            Ok(()) => log::debug!("logging initialized"),
            Err(err) => log::warn!("logger already installed: {err}"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::for_tests());
        init_logging(LoggingConfig::for_tests().with_filter("trace"));
        log::info!("still logging");
    }

    #[test]
    fn with_filter_overrides_env() {
        let config = LoggingConfig::default().with_filter("vellum_ui=debug");
        assert_eq!(config.env_filter.as_deref(), Some("vellum_ui=debug"));
        assert!(!config.capture_for_tests);
    }
}
