//! texkit - TeX input preprocessing from the command line
//!
//! Every command prints one JSON document to stdout.

mod config;
mod json_tree;
mod logging;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::PathBuf;
use texkit_dimen::{format_em, match_dimen};
use texkit_preprocess::{scan_mixed_content, ScanContext, Substitutor};

use crate::config::Config;
use crate::json_tree::{JsonBuilder, SourceParser};

#[derive(Parser)]
#[command(name = "texkit", version, about = "TeX input preprocessing")]
struct Cli {
    /// Configuration file (defaults to ./texkit.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a dimension literal and convert it to em
    Dimen {
        literal: String,
        /// Allow content after the unit
        #[arg(long)]
        trailing: bool,
    },
    /// Substitute #1..#9 in a macro body
    Expand {
        body: String,
        args: Vec<String>,
    },
    /// Split text into plain text and math islands
    Scan {
        text: String,
        #[arg(long)]
        style_level: Option<u8>,
        #[arg(long)]
        font: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    logging::init_logging(&config.logging).context("Failed to initialize logging")?;

    let output = run(cli.command, &config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run(command: Command, config: &Config) -> anyhow::Result<Value> {
    match command {
        Command::Dimen { literal, trailing } => {
            let m = match_dimen(&literal, trailing)
                .with_context(|| format!("'{literal}' is not a dimension"))?;
            let em = m
                .magnitude()
                .map(|magnitude| m.unit.to_em(magnitude))
                .transpose()?;
            tracing::debug!(literal = %literal, length = m.length, "dimension matched");
            Ok(json!({
                "numeral": m.numeral,
                "unit": m.unit,
                "length": m.length,
                "em": em.map(|em| em.to_string()),
                "formatted": em.map(format_em),
            }))
        }
        Command::Expand { body, args } => {
            let expanded = Substitutor::new(config.preprocess.clone())
                .substitute(&args, &body)
                .with_context(|| format!("Failed to expand '{body}'"))?;
            Ok(json!({ "expanded": expanded }))
        }
        Command::Scan {
            text,
            style_level,
            font,
        } => {
            let mut context = ScanContext::new(config.preprocess.clone());
            if let Some(font) = font {
                context = context.with_font(font);
            }
            let nodes = scan_mixed_content(&text, style_level, &SourceParser, &JsonBuilder, &context)
                .with_context(|| format!("Failed to scan '{text}'"))?;
            Ok(Value::Array(nodes))
        }
    }
}
