use tracing::Level;

pub struct Config {
    /// Colors diagnostics on stderr.
    ///
    /// Never affects the report itself, which is always plain text.
    pub color: bool,
    /// Level used when `RUST_LOG` is not set.
    pub log_level: Level,
}

impl Config {
    pub const DEFAULT_LOG_LEVEL: Level = Level::WARN;

    pub fn new(color: bool) -> Self {
        Self {
            color,
            log_level: Self::DEFAULT_LOG_LEVEL,
        }
    }
}
