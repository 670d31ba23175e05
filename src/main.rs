//! Command line front end.
//!
//! ```bash
//! roman-numerals validate XLII IIII
//! roman-numerals to-roman 2024
//! roman-numerals scan "Chapter IV, section IX"
//! roman-numerals scan --loose --file book.txt
//! roman-numerals --format json analyze --file book.txt
//! ```

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use encoding_rs::WINDOWS_1251;
use roman_numerals::{
    analyze_text, context_window, samples, scan, to_arabic, to_roman, validate, ContextStyle,
    ScanMode, ValidationStatus,
};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roman-numerals")]
#[command(version)]
#[command(about = "Validate, convert and find classical numerals")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, env = "ROMAN_FORMAT", default_value = "text", value_enum)]
    format: OutputFormat,

    /// Characters of context shown on each side of a scan match
    #[arg(long, global = true, env = "ROMAN_CONTEXT_WIDTH", default_value_t = 20)]
    context_width: usize,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one or more numerals
    Validate {
        #[arg(required = true)]
        numerals: Vec<String>,
    },

    /// Convert integers (1-3999) to numerals
    ToRoman {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Convert numerals to integers, validating them first
    ToArabic {
        #[arg(required = true)]
        numerals: Vec<String>,
    },

    /// Find numerals in text
    Scan {
        /// Report every word made of numeral letters, valid or not
        #[arg(long)]
        loose: bool,

        /// Input file (reads TEXT, or stdin when neither is given)
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        text: Option<String>,
    },

    /// Summarise every candidate numeral in a text
    Analyze {
        /// Input file (reads TEXT, or stdin when neither is given)
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        text: Option<String>,
    },

    /// Show reference numerals and how they validate
    Samples,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Validate { numerals } => cmd_validate(numerals, cli.format),
        Commands::ToRoman { values } => cmd_to_roman(values, cli.format),
        Commands::ToArabic { numerals } => cmd_to_arabic(numerals, cli.format),
        Commands::Scan { loose, file, text } => {
            let style = ContextStyle::with_width(cli.context_width);
            cmd_scan(*loose, file.as_deref(), text.as_deref(), &style, cli.format)
        }
        Commands::Analyze { file, text } => {
            cmd_analyze(file.as_deref(), text.as_deref(), cli.format)
        }
        Commands::Samples => cmd_samples(cli.format),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// =============================================================================
// COMMANDS
// =============================================================================
//
// Each command returns Ok(false) when it ran but some input was rejected.

fn cmd_validate(numerals: &[String], format: OutputFormat) -> Result<bool> {
    let results: Vec<_> = numerals.iter().map(|n| validate(n)).collect();
    let all_valid = results.iter().all(|r| r.is_valid());

    match format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Text => {
            for r in &results {
                match (r.value(), r.detail()) {
                    (Some(value), _) => println!("{:<16} {:<20} {value}", r.numeral(), r.status()),
                    (None, detail) => println!(
                        "{:<16} {:<20} {}",
                        r.numeral(),
                        r.status(),
                        detail.unwrap_or_default()
                    ),
                }
            }
        }
    }

    Ok(all_valid)
}

#[derive(Serialize)]
struct Conversion {
    input: String,
    output: Option<String>,
    error: Option<String>,
}

fn cmd_to_roman(values: &[i64], format: OutputFormat) -> Result<bool> {
    let conversions: Vec<Conversion> = values
        .iter()
        .map(|&value| {
            let (output, error) = match to_roman(value) {
                Ok(numeral) => {
                    debug!(value, numeral = %numeral, back = ?to_arabic(&numeral), "converted");
                    (Some(numeral), None)
                }
                Err(e) => (None, Some(e.to_string())),
            };
            Conversion {
                input: value.to_string(),
                output,
                error,
            }
        })
        .collect();

    print_conversions(&conversions, format)
}

fn cmd_to_arabic(numerals: &[String], format: OutputFormat) -> Result<bool> {
    let conversions: Vec<Conversion> = numerals
        .iter()
        .map(|numeral| {
            let result = validate(numeral);
            Conversion {
                input: numeral.clone(),
                output: result.value().map(|v| v.to_string()),
                error: result
                    .detail()
                    .map(|d| format!("{}: {d}", result.status())),
            }
        })
        .collect();

    print_conversions(&conversions, format)
}

fn print_conversions(conversions: &[Conversion], format: OutputFormat) -> Result<bool> {
    match format {
        OutputFormat::Json => print_json(&conversions)?,
        OutputFormat::Text => {
            for c in conversions {
                match (&c.output, &c.error) {
                    (Some(out), _) => println!("{} = {out}", c.input),
                    (None, Some(err)) => println!("{}: {err}", c.input),
                    (None, None) => println!("{}", c.input),
                }
            }
        }
    }

    Ok(conversions.iter().all(|c| c.error.is_none()))
}

#[derive(Serialize)]
struct ScanHit<'a> {
    #[serde(flatten)]
    result: &'a roman_numerals::ValidationResult,
    context: String,
}

fn cmd_scan(
    loose: bool,
    file: Option<&Path>,
    text: Option<&str>,
    style: &ContextStyle,
    format: OutputFormat,
) -> Result<bool> {
    let source = read_input(file, text)?;
    let mode = if loose {
        ScanMode::Loose
    } else {
        ScanMode::Strict
    };

    let results = scan(&source, mode);
    let hits: Vec<ScanHit> = results
        .iter()
        .filter_map(|r| {
            let span = r.span()?;
            Some(ScanHit {
                result: r,
                context: context_window(&source, span, style),
            })
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&hits)?,
        OutputFormat::Text => {
            if hits.is_empty() {
                println!("No numerals found.");
            }
            for (i, hit) in hits.iter().enumerate() {
                println!("{}. {}", i + 1, hit.result);
                println!("   {}", hit.context);
            }
        }
    }

    Ok(true)
}

fn cmd_analyze(file: Option<&Path>, text: Option<&str>, format: OutputFormat) -> Result<bool> {
    let source = read_input(file, text)?;
    let analysis = analyze_text(&source);

    match format {
        OutputFormat::Json => print_json(&analysis)?,
        OutputFormat::Text => {
            println!("Characters:      {}", analysis.total_characters);
            println!("Lines:           {}", analysis.total_lines);
            println!("Candidates:      {}", analysis.candidates_found);
            println!("Valid numerals:  {}", analysis.valid_numerals);

            println!("\nValidation stats:");
            for (status, count) in &analysis.validation_stats {
                println!("  {status:<20} {count}");
            }

            if !analysis.numerals.is_empty() {
                println!("\nNumerals:");
                for n in &analysis.numerals {
                    println!("  {} = {} (line {})", n.roman, n.arabic, n.line);
                }
            }
        }
    }

    Ok(true)
}

#[derive(Serialize)]
struct SampleRow {
    numeral: &'static str,
    expected_valid: bool,
    status: ValidationStatus,
    value: Option<u32>,
    note: &'static str,
}

fn cmd_samples(format: OutputFormat) -> Result<bool> {
    let rows: Vec<SampleRow> = samples::CORRECT
        .iter()
        .map(|&n| (n, true, ""))
        .chain(samples::INCORRECT.iter().map(|&(n, note)| (n, false, note)))
        .map(|(numeral, expected_valid, note)| {
            let result = validate(numeral);
            SampleRow {
                numeral,
                expected_valid,
                status: result.status(),
                value: result.value(),
                note,
            }
        })
        .collect();

    let all_pass = rows
        .iter()
        .all(|r| (r.status == ValidationStatus::Valid) == r.expected_valid);

    match format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Text => {
            for r in &rows {
                let mark = if (r.status == ValidationStatus::Valid) == r.expected_valid {
                    "PASS"
                } else {
                    "FAIL"
                };
                let value = r.value.map(|v| v.to_string()).unwrap_or_else(|| "-".into());
                println!(
                    "{:<10} {:>6}  {:<20} {mark}  {}",
                    r.numeral, value, r.status, r.note
                );
            }
        }
    }

    Ok(all_pass)
}

// =============================================================================
// HELPERS
// =============================================================================

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{json}");
    Ok(())
}

/// Text from the argument, the file, or stdin, in that order.
fn read_input(file: Option<&Path>, text: Option<&str>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    let bytes = match file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            if buf.is_empty() {
                bail!("no input provided: pass TEXT, --file, or pipe text via stdin");
            }
            buf
        }
    };

    Ok(decode(bytes))
}

/// Decodes UTF-8, falling back to Windows-1251 for legacy Cyrillic text.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                valid_up_to = e.utf8_error().valid_up_to(),
                "input is not valid UTF-8, decoding as windows-1251"
            );
            let (text, _, _) = WINDOWS_1251.decode(e.as_bytes());
            text.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn utf8_input_is_kept() {
        assert_eq!(decode("Глава IV".as_bytes().to_vec()), "Глава IV");
    }

    #[test]
    fn windows_1251_input_is_recovered() {
        // "Глава IV" in windows-1251.
        let text = decode(vec![0xC3, 0xEB, 0xE0, 0xE2, 0xE0, b' ', b'I', b'V']);
        assert_eq!(text, "Глава IV");

        let found = scan(&text, ScanMode::Strict);
        assert_eq!(found.len(), 1);
        let span = found[0].span().expect("scan results carry a span");
        assert_eq!(
            context_window(&text, span, &ContextStyle::default()),
            "Глава >>>IV<<<"
        );
    }
}
