/// Presentation settings collected from the global command-line flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Each level hides more decoration.
    ///
    /// Result lines on stdout are printed at every level.
    pub quiet: u8,
    /// Raises the log level: `1` for debug, `2` or more for trace.
    pub verbose: u8,
    /// Disables colored output even on a terminal.
    pub no_color: bool,
}

impl Config {
    /// Default `tracing` filter directive for these settings.
    ///
    /// `RUST_LOG` takes precedence when it is set.
    pub fn log_directive(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (q, _) if q > 0 => "warn",
            (_, 0) => "info",
            (_, 1) => "debug",
            _ => "trace",
        }
    }
}
