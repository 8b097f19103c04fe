//! `relop` CLI — evaluate relational comparisons and filter JSON records from
//! the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Evaluate one comparison (operands are JSON literals, bare words are strings)
//! relop eval '<' 3 4            # true
//! relop eval '==' '"5"' 5       # false
//!
//! # Keep records whose field satisfies a condition (stdin → stdout)
//! echo '[{"age":30},{"age":12}]' | relop filter --field age --op '>=' --value 18
//!
//! # Filter from file to file
//! relop filter -i people.json -o adults.json --field age --op '>=' --value 18
//!
//! # List supported operators
//! relop operators
//! ```
//!
//! Logging goes to stderr through `env_logger`; set `RUST_LOG` or pass `-v`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use relop_core::{Condition, Operator};
use serde_json::Value;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "relop",
    version,
    about = "Runtime relational comparison over dynamic values"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging for relop (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate `LEFT OP RIGHT` and print true or false
    Eval {
        /// Operator token: >, >=, <, <=, ==, !=
        op: String,
        /// Left operand as a JSON literal
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// Right operand as a JSON literal
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
    /// Keep the records of a JSON array whose field satisfies a condition
    Filter {
        /// Dot-separated field path (e.g. "user.age" or "scores.0")
        #[arg(long)]
        field: String,
        /// Operator token: >, >=, <, <=, ==, !=
        #[arg(long)]
        op: String,
        /// Operand to compare against, as a JSON literal
        #[arg(long, allow_hyphen_values = true)]
        value: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List the supported operator tokens
    Operators,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Eval { op, left, right } => {
            let left = parse_operand(&left);
            let right = parse_operand(&right);
            let holds = relop_core::try_compare(&op, &left, &right)?;
            println!("{}", holds);
        }
        Commands::Filter {
            field,
            op,
            value,
            input,
            output,
        } => {
            let condition = Condition::new(field, &op, parse_operand(&value))?;
            let json = read_input(input.as_deref())?;
            let records =
                relop_core::parse_records(&json).context("Failed to parse input JSON")?;
            let kept = relop_core::filter_records(&records, &condition);
            let pretty = serde_json::to_string_pretty(&kept)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Operators => {
            for op in Operator::ALL {
                println!("{}", op);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_module("relop_core", log::LevelFilter::Trace);
        builder.filter_module("relop", log::LevelFilter::Debug);
    }
    builder.init();
}

/// Parse a command-line operand as JSON, falling back to a bare string.
///
/// - `42` → number, `"42"` → string, `true` → bool, `null` → null
/// - `hello` (not valid JSON) → the string `"hello"`
fn parse_operand(raw: &str) -> Value {
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => {
            log::debug!("operand {:?} is not JSON, using it as a string", raw);
            Value::String(raw.to_string())
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
