//! prompt-markdown - convert HTML or plain text to clean Markdown

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use prompt_markdown::{
    ConversionError, ConversionOptions, DEFAULT_MAX_DEPTH, convert_bytes, html_to_markdown_with_options,
    plain_text_to_markdown,
};

/// Highest `--max-depth` accepted; rendering recurses once per level on the
/// main thread's stack.
const MAX_DEPTH_CEILING: usize = 2048;

#[derive(Parser, Debug)]
#[command(name = "prompt-markdown")]
#[command(version, about = "Convert HTML or plain text to clean Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    prompt-markdown page.html                 Convert a file to stdout
    curl -s URL | prompt-markdown -o out.md   Convert stdin to a file
    prompt-markdown --plain notes.txt         Infer headings from plain text")]
struct Cli {
    /// Input file ("-" or omitted reads stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Write Markdown to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Treat the input as plain text and infer headings from line shapes
    #[arg(long)]
    plain: bool,

    /// Skip the cleanup pass (blank-line collapsing and trimming)
    #[arg(long)]
    no_clean: bool,

    /// Maximum element nesting depth before the input is rejected (at most 2048)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH, value_parser = parse_max_depth)]
    max_depth: usize,

    /// Comma-separated tags to drop together with their contents (e.g. script,style)
    #[arg(long, value_name = "TAGS", value_delimiter = ',')]
    strip_tags: Vec<String>,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_max_depth(value: &str) -> Result<usize, String> {
    let depth: usize = value.parse().map_err(|e| format!("{e}"))?;
    if depth > MAX_DEPTH_CEILING {
        return Err(format!("must be at most {MAX_DEPTH_CEILING}"));
    }
    Ok(depth)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Log to stderr to keep stdout clean for the converted document
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let input = read_input(cli.input.as_deref())?;
    let options = ConversionOptions::default()
        .with_max_depth(cli.max_depth)
        .with_strip_tags(&cli.strip_tags);
    let is_html = !cli.plain;

    tracing::debug!(bytes = input.len(), is_html, clean = !cli.no_clean, "read input");

    let mut markdown = if cli.no_clean {
        let content = std::str::from_utf8(&input).map_err(ConversionError::from)?;
        if is_html {
            html_to_markdown_with_options(content, &options)?
        } else {
            plain_text_to_markdown(content)
        }
    } else {
        convert_bytes(&input, is_html, &options)?
    };

    if !markdown.is_empty() && !markdown.ends_with('\n') {
        markdown.push('\n');
    }

    write_output(cli.output.as_deref(), &markdown)
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, markdown: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, markdown).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(markdown.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write stdout")
        }
    }
}
