//! `urlform` CLI — encode JSON parameters as form-urlencoded strings.
//!
//! ## Usage
//!
//! ```sh
//! # Encode a JSON object (stdin → stdout)
//! echo '{"tags":["x","y"],"active":true}' | urlform encode
//! # active=1&tags%5B%5D=x&tags%5B%5D=y
//!
//! # Encode from file to file, with a tighter nesting limit
//! urlform encode -i params.json -o body.txt --max-depth 4
//!
//! # Inspect the flattened pairs before escaping
//! urlform pairs -i params.json
//!
//! # Escape a single string
//! urlform escape 'a b&c'
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use urlform_core::{EncodeOptions, DEFAULT_MAX_DEPTH};

#[derive(Parser)]
#[command(
    name = "urlform",
    version,
    about = "Encode nested JSON parameters as application/x-www-form-urlencoded"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON object as a form-urlencoded string
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Maximum nesting depth of any parameter value
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Print the flattened key/value pairs, one per line
    Pairs {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Maximum nesting depth of any parameter value
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        /// Percent-escape each key and value
        #[arg(long)]
        escaped: bool,
    },
    /// Percent-escape a single string
    Escape {
        /// Text to escape (reads from stdin if omitted)
        text: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    match cli.command {
        Commands::Encode {
            input,
            output,
            max_depth,
        } => {
            let json = read_input(input.as_deref())?;
            let options = EncodeOptions::default().with_max_depth(max_depth);
            let encoded = urlform_core::encode_json_with(&json, &options)
                .context("Failed to encode JSON parameters")?;
            write_output(output.as_deref(), &encoded)?;
        }
        Commands::Pairs {
            input,
            max_depth,
            escaped,
        } => {
            let json = read_input(input.as_deref())?;
            let value: serde_json::Value =
                serde_json::from_str(&json).context("Failed to parse JSON input")?;
            let params = urlform_core::params_from_json(value)?;
            let options = EncodeOptions::default().with_max_depth(max_depth);
            let pairs = urlform_core::flatten_params(&params, &options)
                .context("Failed to flatten JSON parameters")?;
            for pair in &pairs {
                if escaped {
                    println!("{}", pair.to_encoded());
                } else {
                    println!("{}={}", pair.key, pair.value);
                }
            }
        }
        Commands::Escape { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = read_input(None)?;
                    // A single trailing newline comes from `echo`, not the payload
                    if buf.ends_with('\n') {
                        buf.pop();
                        if buf.ends_with('\r') {
                            buf.pop();
                        }
                    }
                    buf
                }
            };
            print!("{}", urlform_core::escape(&text));
        }
    }

    Ok(())
}

/// Read JSON parameters from `path`, or stdin when no path is given.
fn read_input(path: Option<&str>) -> Result<String> {
    let Some(path) = path else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read parameters from stdin")?;
        return Ok(buf);
    };
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read parameters file: {path}"))
}

/// Write the encoded body to `path`, or stdout (without a trailing newline).
fn write_output(path: Option<&str>, encoded: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, encoded)
            .with_context(|| format!("Failed to write encoded output: {path}")),
        None => {
            print!("{encoded}");
            Ok(())
        }
    }
}
