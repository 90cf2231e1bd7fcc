//! `ivrc` - compile flowchart diagrams into IVR call-flow scripts.
//!
//! # Commands
//!
//! - `convert`: diagram → script (JavaScript module, JSON or YAML)
//! - `parse`: dump the parsed diagram as JSON
//! - `validate`: run the strict checks and report every problem

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ivr_compiler::export::ExportFormat;
use ivr_compiler::parse;
use ivr_compiler::pipeline::{self, CompileOptions};
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "ivrc",
    version,
    about = "Compile flowchart diagrams into IVR call-flow scripts"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging (can be repeated for more detail: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a diagram into a call-flow script.
    Convert {
        /// Input file path, inline diagram text, or "-" for stdin.
        #[arg(default_value = "-")]
        input: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "js")]
        format: ExportFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Fail on structural problems instead of converting anyway
        #[arg(long)]
        strict: bool,

        /// Do not inject the Start / Problems / Goodbye nodes
        #[arg(long)]
        no_standard_nodes: bool,

        /// Strip code fences and fix indentation before parsing
        #[arg(long)]
        normalize: bool,
    },

    /// Print the parsed diagram as JSON.
    Parse {
        #[arg(default_value = "-")]
        input: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check a diagram against the strict rules.
    Validate {
        #[arg(default_value = "-")]
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Convert {
            input,
            format,
            output,
            strict,
            no_standard_nodes,
            normalize,
        } => {
            let options = CompileOptions {
                strict,
                standard_nodes: !no_standard_nodes,
                normalize,
                format,
            };
            cmd_convert(&input, &options, output.as_deref())
        }
        Command::Parse { input, pretty } => cmd_parse(&input, pretty),
        Command::Validate { input } => cmd_validate(&input),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

fn load_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else if Path::new(input).exists() {
        std::fs::read_to_string(input).context(format!("Failed to read file: {input}"))
    } else {
        // Treat as inline diagram text
        Ok(input.to_string())
    }
}

fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content).context(format!("Failed to write to: {path}"))?;
            info!("Wrote output to: {path}");
        }
        None => {
            let mut stdout = io::stdout();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

fn cmd_convert(input: &str, options: &CompileOptions, output: Option<&str>) -> Result<()> {
    let source = load_input(input)?;
    match pipeline::convert(&source, options) {
        Ok(script) => write_output(output, &script),
        Err(errors) => {
            for error in &errors {
                eprintln!("{error}");
            }
            bail!("conversion failed with {} error(s)", errors.len())
        }
    }
}

fn cmd_parse(input: &str, pretty: bool) -> Result<()> {
    let source = load_input(input)?;
    let diagram = parse::parse(&source);
    let json = if pretty {
        serde_json::to_string_pretty(&diagram)?
    } else {
        serde_json::to_string(&diagram)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_validate(input: &str) -> Result<()> {
    let source = load_input(input)?;
    let options = CompileOptions {
        strict: true,
        ..Default::default()
    };
    match pipeline::compile(&source, &options) {
        Ok(nodes) => {
            println!("✓ Valid diagram ({} script nodes)", nodes.len());
            Ok(())
        }
        Err(errors) => {
            println!("✗ Invalid diagram");
            for error in &errors {
                println!("  {error}");
            }
            bail!("{} validation error(s)", errors.len())
        }
    }
}
