use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::style::{Color as TermColor, ResetColor, SetBackgroundColor};
use crossterm::QueueableCommand;
use indent_shade::classify::{classify, LineSpan};
use indent_shade::color::Argb;
use indent_shade::config::Config;
use indent_shade::render::{indent_spans, IndentSpan};
use ratatui::style::Color;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Preview indentation coloring for a file in the terminal
#[derive(Parser, Debug)]
#[command(name = "indent-shade")]
#[command(about = "Colorize leading indentation to expose depth and errors", long_about = None)]
#[command(version)]
struct Args {
    /// File to colorize
    #[arg(value_name = "FILE", required_unless_present = "config_schema")]
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics
    #[arg(long, value_name = "PATH", default_value = "/tmp/indent-shade.log")]
    log_file: PathBuf,

    /// Background color the translucent bands are blended over, as R,G,B
    #[arg(long, value_name = "R,G,B", default_value = "30,30,30")]
    background: String,

    /// Print the JSON schema for the configuration file and exit
    #[arg(long)]
    config_schema: bool,
}

/// Parse an opaque "R,G,B" background color
fn parse_background(input: &str) -> Result<Argb> {
    let channels: Vec<&str> = input.split(',').collect();
    if channels.len() != 3 {
        bail!("background must be three comma-separated channels, got {input:?}");
    }
    let mut parsed = [0u8; 3];
    for (slot, channel) in parsed.iter_mut().zip(&channels) {
        *slot = channel
            .trim()
            .parse()
            .with_context(|| format!("invalid background channel {channel:?}"))?;
    }
    Ok(Argb::opaque(parsed[0], parsed[1], parsed[2]))
}

/// Write one line with its indentation cells drawn on their span backgrounds
fn write_line(
    out: &mut impl Write,
    text: &str,
    start: usize,
    spans: &[IndentSpan],
) -> Result<()> {
    let mut spans = spans.iter();
    let mut current = spans.next();

    for (i, ch) in text.chars().enumerate() {
        let offset = start + i;
        while let Some(span) = current {
            if span.range.end <= offset {
                current = spans.next();
            } else {
                break;
            }
        }
        match current {
            Some(span) if span.range.contains(&offset) => {
                let bg = match span.color {
                    Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
                    _ => TermColor::Reset,
                };
                out.queue(SetBackgroundColor(bg))?;
                write!(out, "{ch}")?;
                out.queue(ResetColor)?;
            }
            _ => write!(out, "{ch}")?,
        }
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.config_schema {
        println!("{}", Config::schema());
        return Ok(());
    }

    // Log to a file so diagnostics don't interleave with the colorized output.
    // Fall back to no logging if the log file can't be created.
    if let Ok(log_file) = std::fs::File::create(&args.log_file) {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::sync::Arc::new(log_file)))
            .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
            .init();
    }

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    let base = parse_background(&args.background)?;

    let Some(file) = args.file else {
        bail!("FILE is required");
    };
    let contents = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let mut stdout = io::stdout().lock();
    let mut malformed_lines = Vec::new();
    let mut offset = 0usize;

    for (line_number, line_text) in contents.lines().enumerate() {
        let line = LineSpan::new(line_text, offset);
        let classification = classify(&line, &config)?;
        if classification.is_malformed {
            malformed_lines.push(line_number + 1);
        }
        let spans = indent_spans(&classification, base);
        write_line(&mut stdout, line_text, offset, &spans)?;
        offset = line.end() + 1;
    }
    stdout.flush()?;

    tracing::info!(
        "Colorized {} with {} malformed lines",
        file.display(),
        malformed_lines.len()
    );

    if malformed_lines.is_empty() {
        eprintln!("{}: indentation OK", file.display());
    } else {
        eprintln!(
            "{}: malformed indentation on lines {:?}",
            file.display(),
            malformed_lines
        );
    }
    Ok(())
}
