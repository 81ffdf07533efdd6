use crate::args::{Args, Command, Format, ParseArgs, ScanArgs};
use clap::Parser;
use eyre::{eyre, WrapErr};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr as StderrStream;
use std::fs::File;
use std::io;
use std::io::{stderr, stdout, BufWriter, Stderr, StderrLock, Stdout, StdoutLock, Write};
use std::path::Path;
use tiny_ast::graph::to_dot;
use tiny_ast::printer::TreePrinter;
use tiny_parsing::parser::SyntaxError;
use tiny_parsing::token_listing::{read_tokens, write_tokens};
use tiny_parsing::{parse_with, tokenize};
use tiny_tokens::token::TokenKind;
use tracing::metadata::LevelFilter;
use tracing::{debug, info, trace, warn, Level, Metadata};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::{format, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

mod args;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting tinyc with args: {args:?}");
    debug!("tinyc version: {}", env!("CARGO_PKG_VERSION"));

    match &args.command {
        Command::Scan(scan) => run_scan(scan),
        Command::Parse(parse) => run_parse(parse),
    }
}

fn run_scan(args: &ScanArgs) -> eyre::Result<()> {
    let source = read_source(&args.file)?;
    let tokens = tokenize(&source);
    let invalid = tokens.iter().filter(|t| t.is(TokenKind::Error)).count();
    if invalid > 0 {
        warn!(
            "{} contains {invalid} unrecognized characters",
            args.file.display()
        );
    }
    let mut out = output(args.output.as_deref())?;
    write_tokens(&tokens, &mut out)?;
    info!("scanned {} tokens", tokens.len());
    Ok(())
}

fn run_parse(args: &ParseArgs) -> eyre::Result<()> {
    let source = read_source(&args.file)?;
    let tokens = if args.tokens {
        read_tokens(source.as_bytes())
            .wrap_err_with(|| format!("invalid token listing {}", args.file.display()))?
    } else {
        tokenize(&source)
    };

    let program = match parse_with(&tokens, &args.parser_config()) {
        Ok(program) => program,
        Err(error) => {
            eprint!("{}", render_error(&error, &source, &args.file));
            debug!("non terminal stack: {:?}", error.non_terminal_stack);
            return Err(eyre!("could not parse {}", args.file.display()));
        }
    };

    let rendered = match args.format {
        Format::Tree => TreePrinter::new().print(&program)?,
        Format::Dot => to_dot(&program),
        Format::Debug => format!("{program:#?}\n"),
    };
    let mut out = output(args.output.as_deref())?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn read_source(path: &Path) -> eyre::Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("could not read {}", path.display()))
}

/// Standard out, or the given file
fn output(path: Option<&Path>) -> eyre::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("could not create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(stdout().lock()),
    })
}

/// The error's source snippet, with the file path in the location line
fn render_error(error: &SyntaxError, source: &str, path: &Path) -> String {
    let mut rendered = String::new();
    for (index, line) in error.render(source).lines().enumerate() {
        let line = match index {
            0 => line
                .if_supports_color(StderrStream, |text| text.bright_red().to_string())
                .to_string(),
            1 => format!("  -> {}:{}", path.display(), error.location)
                .if_supports_color(StderrStream, |text| text.blue().to_string())
                .to_string(),
            _ => line.to_string(),
        };
        rendered.push_str(&line);
        rendered.push('\n');
    }
    rendered
}

struct MyWriter {
    stdout: Stdout,
    stderr: Stderr,
}

enum StdioLock<'a> {
    Stdout(StdoutLock<'a>),
    Stderr(StderrLock<'a>),
}

impl io::Write for StdioLock<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            StdioLock::Stdout(stdout) => stdout.write(buf),
            StdioLock::Stderr(stderr) => stderr.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            StdioLock::Stdout(stdout) => stdout.flush(),
            StdioLock::Stderr(stderr) => stderr.flush(),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            StdioLock::Stdout(stdout) => stdout.write_all(buf),
            StdioLock::Stderr(stderr) => stderr.write_all(buf),
        }
    }
}

impl<'a> MakeWriter<'a> for MyWriter {
    type Writer = StdioLock<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        StdioLock::Stdout(self.stdout.lock())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        // warnings and errors stay off of standard out, which carries listings and trees
        if meta.level() <= &Level::WARN {
            StdioLock::Stderr(self.stderr.lock())
        } else {
            StdioLock::Stdout(self.stdout.lock())
        }
    }
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().with_target(true))
                .with_writer(MyWriter {
                    stdout: stdout(),
                    stderr: stderr(),
                })
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_parsing::parse_source;

    #[test]
    fn test_render_error_names_file() {
        let source = "if x then write x";
        let error = parse_source(source).unwrap_err();
        let rendered = render_error(&error, source, Path::new("sample.tiny"));
        assert!(rendered.contains("expected END, found end of input"), "{rendered}");
        assert!(rendered.contains("sample.tiny:1:18"), "{rendered}");
        assert!(rendered.contains("1 | if x then write x"), "{rendered}");
    }

    #[test]
    fn test_output_to_file() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.txt");
        {
            let mut out = output(Some(&path))?;
            out.write_all(b"program\n")?;
            out.flush()?;
        }
        assert_eq!(std::fs::read_to_string(&path)?, "program\n");
        Ok(())
    }
}
