//! the args for running tinyc

use std::path::PathBuf;
use tiny_cli_common::LoggingArgs;
use tiny_parsing::parser::{ParserConfig, DEFAULT_MAX_DEPTH};

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Scans and parses TINY programs")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Scans a source file and prints its token listing, one `lexeme,KIND` per line
    Scan(ScanArgs),
    /// Parses a source file and prints its syntax tree
    Parse(ParseArgs),
}

#[derive(Debug, clap::Args)]
pub struct ScanArgs {
    /// The source file to scan
    #[clap(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,
    /// Write the listing here instead of standard out
    #[clap(short = 'o', long = "output", value_name = "OUT")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
pub struct ParseArgs {
    /// The source file to parse
    #[clap(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,
    /// Read FILE as a token listing made by `tinyc scan`
    #[clap(long)]
    pub tokens: bool,
    /// How to print the syntax tree
    #[clap(short = 'f', long, value_enum, default_value_t = Format::Tree)]
    pub format: Format,
    /// The deepest nesting of grammar rules allowed
    #[clap(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
    /// Accept a `;` before `end`, `until` or the end of the file
    #[clap(long)]
    pub allow_trailing_semicolon: bool,
    /// Write the tree here instead of standard out
    #[clap(short = 'o', long = "output", value_name = "OUT")]
    pub output: Option<PathBuf>,
}

impl ParseArgs {
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new()
            .with_max_depth(self.max_depth)
            .with_trailing_semicolon(self.allow_trailing_semicolon)
    }
}

/// Output formats for `tinyc parse`
#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// An indented tree of node labels
    Tree,
    /// A Graphviz digraph
    Dot,
    /// The rust debug representation
    Debug,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    fn parse_args(test: &str) -> Args {
        Args::try_parse_from(test.split(' ')).expect("could not parse test string")
    }

    #[test]
    fn test_scan_args() {
        let args = parse_args("tinyc scan sample.tiny -o sample.tokens");
        let Command::Scan(scan) = args.command else {
            panic!("expected scan")
        };
        assert_eq!(scan.file, Path::new("sample.tiny"));
        assert_eq!(scan.output.as_deref(), Some(Path::new("sample.tokens")));
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse_args("tinyc parse sample.tiny");
        let Command::Parse(parse) = args.command else {
            panic!("expected parse")
        };
        assert!(!parse.tokens);
        assert_eq!(parse.format, Format::Tree);
        assert_eq!(parse.parser_config(), ParserConfig::default());
    }

    #[test]
    fn test_parse_options() {
        let args = parse_args(
            "tinyc -v parse sample.tokens --tokens --format dot --max-depth 64 --allow-trailing-semicolon",
        );
        assert_eq!(args.logging().verbosity(), 1);
        let Command::Parse(parse) = args.command else {
            panic!("expected parse")
        };
        assert!(parse.tokens);
        assert_eq!(parse.format, Format::Dot);
        let config = parse.parser_config();
        assert_eq!(config.max_depth(), 64);
        assert!(config.allow_trailing_semicolon());
    }

    #[test]
    fn test_file_required() {
        assert!(Args::try_parse_from(["tinyc", "parse"]).is_err());
    }
}
