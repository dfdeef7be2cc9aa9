//! Logging setup for the bluff_odds demos.

use tracing_subscriber::{fmt, fmt::format::FmtSpan, prelude::*, EnvFilter, Layer};

/// Logging flags, meant for `#[command(flatten)]`.
///
/// The demos print their results on stdout, so every log line goes to
/// stderr.
#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    /// More solver detail: -v shows setup, -vv every odds query
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Only warnings and errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbosity")]
    pub quiet: bool,

    /// Log line format
    #[arg(long = "log-format", value_enum, default_value_t, global = true)]
    pub log_format: LogFormat,

    /// Also log when each solver span closes, with its timing
    #[arg(long = "spans", global = true)]
    pub spans: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl LogArgs {
    /// Filter directives for the crate. Other crates stay at `warn`.
    fn directives(&self) -> String {
        let level = match (self.quiet, self.verbosity) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        };
        format!("warn,bluff_odds={level},odds_table={level}")
    }

    /// Install the global subscriber. `RUST_LOG` overrides the flags.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber is already installed.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directives()));

        let span_events = if self.spans {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_span_events(span_events);
        let layer = match self.log_format {
            LogFormat::Compact => layer.compact().boxed(),
            LogFormat::Pretty => layer.pretty().boxed(),
            LogFormat::Json => layer.json().boxed(),
        };

        tracing_subscriber::registry().with(filter).with(layer).init();
    }
}
