use clap::{Parser, Subcommand};
use narrox::{CleanerChain, Locale, NumberNormalizer};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Subcommand, Debug)]
enum Mode {
    /// Normalize a single string of text
    #[command(alias = "t", long_flag_alias = "text", short_flag_alias = 't')]
    Text {
        /// Text to normalize
        text: String,
    },

    /// Read from a file path and normalize each non-empty line
    #[command(alias = "f", long_flag_alias = "file", short_flag_alias = 'f')]
    File {
        /// Filesystem path to read lines from
        input_path: String,

        /// Write results here instead of stdout
        #[arg(short = 'o', long = "output", value_name = "OUTPUT_PATH")]
        output_path: Option<String>,
    },

    /// Continuously read lines from stdin, writing each result to stdout
    #[command(aliases = ["stdio", "stdin", "-"], long_flag_aliases = ["stdio", "stdin"])]
    Stream,
}

#[derive(Parser, Debug)]
#[command(name = "narro")]
#[command(version = "0.1")]
struct Cli {
    /// Comma-separated cleaner names, applied in order.
    /// Known: basic_cleaners, transliteration_cleaners, english_cleaners,
    /// azerbaijani_cleaners, turkish_cleaners
    #[arg(
        short = 'c',
        long = "cleaners",
        value_name = "CLEANERS",
        default_value = "english_cleaners"
    )]
    cleaners: String,

    /// Only expand numbers, using this locale (en, az, tr).
    /// Takes precedence over --cleaners
    #[arg(short = 'l', long = "lan", value_name = "LANGUAGE")]
    lan: Option<String>,

    /// Emit one JSON object per line instead of plain text
    #[arg(long = "json", default_value_t = false)]
    json: bool,

    /// Enable verbose debug logs on stderr
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    mode: Mode,
}

/// What a line goes through: the full cleaner chain or numbers only.
enum Normalizer {
    Cleaners(CleanerChain),
    Numbers(NumberNormalizer),
}

impl Normalizer {
    fn from_cli(cleaners: &str, lan: Option<&str>) -> narrox::Result<Self> {
        match lan {
            Some(tag) => {
                let locale: Locale = tag.parse()?;
                info!(%locale, "expanding numbers only");
                Ok(Normalizer::Numbers(NumberNormalizer::for_locale(locale)))
            }
            None => {
                let chain: CleanerChain = cleaners.parse()?;
                info!(cleaners, "using cleaner chain");
                Ok(Normalizer::Cleaners(chain))
            }
        }
    }

    fn normalize(&self, text: &str) -> narrox::Result<String> {
        match self {
            Normalizer::Cleaners(chain) => chain.clean(text),
            Normalizer::Numbers(numbers) => numbers.normalize(text),
        }
    }
}

#[derive(Serialize)]
struct LineRecord<'a> {
    line: usize,
    input: &'a str,
    output: &'a str,
}

fn write_result(
    out: &mut dyn Write,
    json: bool,
    line: usize,
    input: &str,
    output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let record = LineRecord {
            line,
            input,
            output,
        };
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
    } else {
        writeln!(out, "{output}")?;
    }
    Ok(())
}

fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        cleaners,
        lan,
        json,
        verbose,
        mode,
    } = Cli::parse();

    setup_logging(verbose)?;
    let normalizer = Normalizer::from_cli(&cleaners, lan.as_deref())?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        match &mode {
            Mode::Text { text } => {
                let output = normalizer.normalize(text)?;
                write_result(&mut io::stdout(), json, 1, text, &output)?;
            }

            Mode::File {
                input_path,
                output_path,
            } => {
                let file_content = fs::read_to_string(input_path)?;
                let mut out: Box<dyn Write> = match output_path {
                    Some(path) => Box::new(io::BufWriter::new(fs::File::create(path)?)),
                    None => Box::new(io::stdout()),
                };

                let mut written = 0;
                for (i, line) in file_content.lines().enumerate() {
                    let stripped_line = line.trim();
                    if stripped_line.is_empty() {
                        continue;
                    }

                    let output = normalizer.normalize(stripped_line)?;
                    write_result(out.as_mut(), json, i + 1, stripped_line, &output)?;
                    written += 1;
                }
                out.flush()?;
                info!(lines = written, input = %input_path, "file normalized");
            }

            Mode::Stream => {
                let stdin = tokio::io::stdin();
                let reader = BufReader::new(stdin);
                let mut lines = reader.lines();
                let mut stdout = io::stdout();
                let mut line_number = 0;

                eprintln!("Entering streaming mode. Type text and press Enter. Use Ctrl+D to exit.");

                while let Some(line) = lines.next_line().await? {
                    line_number += 1;
                    let stripped_line = line.trim();
                    if stripped_line.is_empty() {
                        continue;
                    }

                    match normalizer.normalize(stripped_line) {
                        Ok(output) => {
                            write_result(&mut stdout, json, line_number, stripped_line, &output)?;
                            stdout.flush()?;
                            debug!(line = line_number, "line written");
                        }
                        Err(e) => error!(line = line_number, "Error processing line: {e}"),
                    }
                }
            }
        }

        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
