#![doc = include_str!("../README.md")]

use clap::{value_parser, ArgAction, Args};

/// Common way to set logging levels
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LoggingArgs {
    /// Log more, `-vv` for everything
    #[clap(short = 'v', global = true, value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Log less, `-qq` for nothing
    #[clap(short = 'q', global = true, value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// How far from the default level the flags move logging, from `-2` (`-qq`) to `2` (`-vv`)
    pub fn verbosity(&self) -> i8 {
        self.verbose.min(2) as i8 - self.quiet.min(2) as i8
    }

    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used
    #[cfg(feature = "tracing")]
    pub fn log_level_filter(&self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;
        match self.verbosity() {
            i8::MIN..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            2..=i8::MAX => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[command(flatten)]
        logging: LoggingArgs,
    }

    fn verbosity(args: &str) -> i8 {
        TestArgs::try_parse_from(args.split_whitespace())
            .expect("could not parse test string")
            .logging
            .verbosity()
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(verbosity("test"), 0);
        assert_eq!(verbosity("test -v"), 1);
        assert_eq!(verbosity("test -vv"), 2);
        assert_eq!(verbosity("test -qq"), -2);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(TestArgs::try_parse_from(["test", "-v", "-q"]).is_err());
    }
}
