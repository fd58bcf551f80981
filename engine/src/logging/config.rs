use std::collections::HashMap;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable read by the turok runtimes and tools.
pub const DEFAULT_LOG_ENV: &str = "TUROK_LOG";

#[derive(Debug, Clone)]
pub struct LogConfig {
    global_level: Level,
    scope_levels: HashMap<String, Level>,
}

impl LogConfig {
    pub fn new() -> Self {
        Self {
            global_level: Level::WARN,
            scope_levels: HashMap::new(),
        }
    }

    /// Build a config from a directive string such as `"warn,script=debug,audio=trace"`.
    /// Unknown levels are skipped.
    pub fn parse(directives: &str) -> Self {
        let mut config = Self::new();
        config.apply_directives(directives);
        config
    }

    pub fn from_env(env_var_name: &str) -> Self {
        match std::env::var(env_var_name) {
            Ok(directives) => Self::parse(&directives),
            Err(_) => Self::new(),
        }
    }

    fn apply_directives(&mut self, directives: &str) {
        for directive in directives.split(',').map(str::trim) {
            if directive.is_empty() {
                continue;
            }

            match directive.split_once('=') {
                Some((scope, level)) => {
                    if let Some(level) = parse_level(level.trim()) {
                        self.scope_levels.insert(scope.trim().to_string(), level);
                    }
                }
                None => {
                    if let Some(level) = parse_level(directive) {
                        self.global_level = level;
                    }
                }
            }
        }
    }

    pub fn should_log(&self, scope: &str, level: Level) -> bool {
        let target_level = self.scope_levels.get(scope).unwrap_or(&self.global_level);
        level <= *target_level
    }

    pub fn global_level(&self) -> Level {
        self.global_level
    }

    pub fn scope_level(&self, scope: &str) -> Option<Level> {
        self.scope_levels.get(scope).copied()
    }

    /// Most verbose level any scope can emit at.
    pub fn max_level(&self) -> Level {
        self.scope_levels
            .values()
            .copied()
            .fold(self.global_level, Level::max)
    }

    pub fn set_global_level(&mut self, level: Level) {
        self.global_level = level;
    }

    pub fn set_scope_level(&mut self, scope: impl Into<String>, level: Level) {
        self.scope_levels.insert(scope.into(), level);
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_level(level_str: &str) -> Option<Level> {
    match level_str.to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Subscriber filter: `RUST_LOG` directives when present, otherwise the
/// most verbose level the scope config allows. Scope filtering itself
/// happens in `scoped_log!`.
fn subscriber_filter(config: &LogConfig, rust_log: Option<&str>) -> EnvFilter {
    match rust_log.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::default().add_directive(LevelFilter::from_level(config.max_level()).into()),
    }
}

/// Install the fmt subscriber and the scope config read from `env_var_name`.
/// Safe to call more than once; only the first call takes effect.
pub fn init_logging(env_var_name: &str) -> LogConfig {
    init_logging_with(LogConfig::from_env(env_var_name))
}

pub fn init_logging_with(config: LogConfig) -> LogConfig {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(subscriber_filter(&config, rust_log.as_deref()))
        .try_init();

    super::install_log_config(config.clone());
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_level() {
        let config = LogConfig::parse("debug");
        assert_eq!(config.global_level(), Level::DEBUG);
    }

    #[test]
    fn test_parse_scope_levels() {
        let config = LogConfig::parse("warn, script=debug ,audio=TRACE");

        assert_eq!(config.global_level(), Level::WARN);
        assert_eq!(config.scope_level("script"), Some(Level::DEBUG));
        assert_eq!(config.scope_level("audio"), Some(Level::TRACE));
        assert_eq!(config.scope_level("content"), None);
    }

    #[test]
    fn test_parse_skips_unknown_levels() {
        let config = LogConfig::parse("loud,script=shouting,,content=info");

        assert_eq!(config.global_level(), Level::WARN);
        assert_eq!(config.scope_level("script"), None);
        assert_eq!(config.scope_level("content"), Some(Level::INFO));
    }

    #[test]
    fn test_should_log() {
        let mut config = LogConfig::new();
        config.set_scope_level("script", Level::DEBUG);

        assert!(config.should_log("unknown", Level::ERROR));
        assert!(config.should_log("unknown", Level::WARN));
        assert!(!config.should_log("unknown", Level::INFO));

        assert!(config.should_log("script", Level::DEBUG));
        assert!(!config.should_log("script", Level::TRACE));
    }

    #[test]
    fn test_max_level_takes_most_verbose_scope() {
        assert_eq!(LogConfig::new().max_level(), Level::WARN);
        assert_eq!(LogConfig::parse("warn,audio=trace").max_level(), Level::TRACE);
        assert_eq!(LogConfig::parse("info,script=error").max_level(), Level::INFO);
    }

    #[test]
    fn test_subscriber_filter_passes_warn_without_rust_log() {
        let filter = subscriber_filter(&LogConfig::new(), None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let filter = subscriber_filter(&LogConfig::parse("warn,audio=trace"), None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_subscriber_filter_prefers_rust_log() {
        let filter = subscriber_filter(&LogConfig::parse("trace"), Some("error"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }
}
