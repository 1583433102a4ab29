//! uclex: Print the token stream of a uC source file.
//!
//! Usage:
//!   uclex [options] <FILE>
//!
//! Tokens go to stdout one per line. Lexical errors are printed inline on
//! stdout as `Lexical error: <message> at <line>:<column>`; they do not stop
//! the scan and do not change the exit status.

use clap::{Parser as ClapParser, ValueEnum};
use miette::{NamedSource, SourceSpan};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use uc_diagnostics::{messages, Diagnostic};
use uc_lexer::{LexError, LexErrorHandler, ScanError, Scanner, Token};

#[derive(ClapParser, Debug)]
#[command(name = "uclex", about = "uclex - lexical analyzer for uC", version)]
struct Cli {
    /// Path to the file to be scanned.
    #[arg(value_name = "FILE")]
    input_file: PathBuf,

    /// Output format for tokens and errors.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also render each lexical error with its source line on stderr.
    #[arg(long)]
    pretty: bool,

    /// Log scanner activity to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `LexToken(KIND,'value',line,column)` lines.
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Input {} not found", .0.display())]
    InputNotFound(PathBuf),
    #[error("Cannot read file '{}': {source}.", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CliError::InputNotFound(path) => {
                Diagnostic::new(&messages::INPUT_0_NOT_FOUND, &[&path.display().to_string()])
            }
            CliError::Read { path, source } => Diagnostic::new(
                &messages::CANNOT_READ_FILE_0_1,
                &[&path.display().to_string(), &source.to_string()],
            ),
            CliError::Scan(_) | CliError::Json(_) => {
                Diagnostic::new(&messages::INTERNAL_ERROR_0, &[&self.to_string()])
            }
        }
    }
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    value: &'a str,
    line: u32,
    column: u32,
}

#[derive(Serialize)]
struct ErrorRecord<'a> {
    error: &'a str,
    line: u32,
    column: u32,
}

/// A lexical error rendered against its source.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
#[diagnostic(code(uc::lexical_error))]
struct LexReport {
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
}

/// Prints lexical errors as they are reported and keeps them for `--pretty`.
struct Reporter {
    format: OutputFormat,
    errors: Vec<LexError>,
}

impl LexErrorHandler for Reporter {
    fn report(&mut self, error: &LexError) {
        let message = error.kind.to_string();
        match self.format {
            OutputFormat::Text => {
                println!("Lexical error: {} at {}:{}", message, error.line, error.column);
            }
            OutputFormat::Json => {
                let record = ErrorRecord {
                    error: &message,
                    line: error.line,
                    column: error.column,
                };
                match serde_json::to_string(&record) {
                    Ok(line) => println!("{}", line),
                    Err(e) => tracing::warn!("failed to serialize lexical error: {e}"),
                }
            }
        }
        self.errors.push(error.clone());
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.to_diagnostic());
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let source = read_source(&cli.input_file)?;

    let mut scanner = Scanner::new(Reporter {
        format: cli.format,
        errors: Vec::new(),
    });
    scanner.build()?;
    scanner.load(source.as_str());

    let mut count = 0usize;
    while let Some(token) = scanner.next_token()? {
        print_token(&token, cli.format)?;
        count += 1;
    }

    let reporter = scanner.into_handler();
    tracing::debug!(
        tokens = count,
        errors = reporter.errors.len(),
        "scanned {}",
        cli.input_file.display()
    );

    if cli.pretty {
        let name = cli.input_file.display().to_string();
        for error in &reporter.errors {
            let report = LexReport {
                message: error.kind.to_string(),
                src: NamedSource::new(&name, source.clone()),
                span: SourceSpan::from((error.span.start as usize, error.span.length as usize)),
            };
            eprintln!("{:?}", miette::Report::new(report));
        }
    }
    Ok(())
}

fn read_source(path: &Path) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::InputNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn print_token(token: &Token, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => println!("{}", token),
        OutputFormat::Json => {
            let record = TokenRecord {
                kind: token.kind.name(),
                value: &token.lexeme,
                line: token.line,
                column: token.column,
            };
            println!("{}", serde_json::to_string(&record)?);
        }
    }
    Ok(())
}

/// Install a stderr subscriber when `RUST_LOG` is set or `--verbose` is given.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("uc_lexer=debug,uclex=debug")
    } else {
        return;
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}
