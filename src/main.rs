//! marktag CLI - convert a Markdown file to HTML tags or ANSI escapes

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use marktag::{Config, Error, OutputFormat};

#[derive(Parser)]
#[command(name = "marktag")]
#[command(about = "Convert Markdown to HTML tags or ANSI terminal escapes")]
#[command(version)]
struct Cli {
    /// Markdown file to convert (`.md` is appended when missing)
    path: PathBuf,

    /// Also write the result to this file
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output format [default: html with --output, ansi otherwise]
    #[arg(short, long, value_name = "FORMAT", value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Escape `<`, `>`, `&` and `"` in text
    #[arg(long)]
    escape_html: bool,

    /// Log more (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_format(value: &str) -> Result<OutputFormat, Error> {
    value.parse()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::new(cli.path, cli.output, cli.format, cli.escape_html);
    info!(
        input = %config.input.display(),
        output = ?config.output,
        format = %config.format,
        escape_html = config.escape_html,
        "resolved configuration"
    );

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Read, convert, then write. Nothing is printed unless every earlier step
/// succeeded.
fn run(config: &Config) -> Result<(), Error> {
    let source = marktag::io::read_source(&config.input)?;
    let options = config.options();

    let html = marktag::to_html_with_options(&source, &options)?;
    let rendered = marktag::render(
        &html,
        config.format,
        &marktag::DEFAULT_RULES,
        config.escape_html,
    );

    if let Some(path) = &config.output {
        marktag::io::write_output(path, &rendered)?;
    }

    // The file is already in place here; a failing stdout does not remove it.
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source| Error::OutputWrite {
            path: PathBuf::from("<stdout>"),
            source,
        })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
