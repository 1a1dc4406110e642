// SPDX-License-Identifier: PMPL-1.0-or-later

//! sentiance-es: Spanish display strings for Sentiance SDK constants
//!
//! Translates single constants or whole SDK JSON objects, lists the
//! dictionary, and checks the dictionary against scraped SDK documentation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use sentiance_es::config::CheckerConfig;
use sentiance_es::coverage::{self, ReportFormat};
use sentiance_es::i18n::{Category, Registry};
use sentiance_es::translate::{translate_json, ObjectKind, Translator};
use serde::Serialize;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sentiance-es")]
#[command(version)]
#[command(about = "Spanish display strings for Sentiance SDK constants")]
#[command(long_about = None)]
struct Cli {
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a single constant (unknown values are printed unchanged)
    Translate {
        /// Category identifier, e.g. transportMode
        #[arg(value_name = "CATEGORY")]
        category: String,

        /// SDK constant, e.g. BICYCLE
        #[arg(value_name = "VALUE")]
        value: String,

        /// YAML file with display-string overrides
        #[arg(long)]
        overrides: Option<PathBuf>,
    },

    /// Translate SDK JSON (an object or an array of objects)
    TranslateJson {
        /// Shape of the input objects
        #[arg(short, long, value_enum)]
        kind: ObjectKind,

        /// Input file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// YAML file with display-string overrides
        #[arg(long)]
        overrides: Option<PathBuf>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// List the dictionary
    Tables {
        /// Only this category
        #[arg(short, long)]
        category: Option<Category>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: TableFormat,

        /// YAML file with display-string overrides
        #[arg(long)]
        overrides: Option<PathBuf>,
    },

    /// Report constants documented by the SDK but missing from the dictionary
    Check {
        /// Documentation directory
        #[arg(short, long)]
        docs: Option<PathBuf>,

        /// Constants-definition file (defaults to the built-in dictionary)
        #[arg(short = 'k', long)]
        constants: Option<PathBuf>,

        /// Documentation file extension
        #[arg(short, long)]
        extension: Option<String>,

        /// YAML checker configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Extra stoplist token (repeatable)
        #[arg(long = "stop", value_name = "TOKEN")]
        stop: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TableFormat {
    Text,
    Json,
    /// `export const` declarations
    Js,
}

#[derive(Serialize)]
struct TableDump<'a> {
    category: Category,
    sdk_name: &'static str,
    entries: Vec<TableEntry<'a>>,
}

#[derive(Serialize)]
struct TableEntry<'a> {
    key: &'a str,
    display: &'a str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("sentiance_es={}", level).parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let color = !cli.no_color && io::stdout().is_terminal();
    if !color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Translate {
            category,
            value,
            overrides,
        } => {
            let registry = load_registry(overrides.as_deref())?;
            if Category::from_id(&category).is_none() {
                tracing::warn!(category = %category, "unknown category, value passed through");
            }
            println!("{}", registry.translate_by_name(&category, &value));
        }

        Commands::TranslateJson {
            kind,
            input,
            overrides,
            compact,
        } => {
            let translator = Translator::new(load_registry(overrides.as_deref())?);
            let content = read_input(input.as_deref())?;
            let value: serde_json::Value =
                serde_json::from_str(&content).context("parsing input JSON")?;
            let translated = translate_json(&translator, kind, value)?;
            let out = if compact {
                serde_json::to_string(&translated)?
            } else {
                serde_json::to_string_pretty(&translated)?
            };
            println!("{}", out);
        }

        Commands::Tables {
            category,
            format,
            overrides,
        } => {
            let registry = load_registry(overrides.as_deref())?;
            print_tables(&registry, category, format)?;
        }

        Commands::Check {
            docs,
            constants,
            extension,
            config,
            stop,
            format,
        } => {
            let mut checker = match config {
                Some(path) => CheckerConfig::load(&path)?,
                None => CheckerConfig::default(),
            };
            if let Some(docs) = docs {
                checker.docs_dir = docs;
            }
            if constants.is_some() {
                checker.constants = constants;
            }
            if let Some(extension) = extension {
                checker.extension = extension;
            }
            checker.extra_stoplist.extend(stop);

            let report = coverage::run(&checker, &Registry::spanish())?;
            println!("{}", format.render(&report, color)?);
        }
    }

    Ok(())
}

fn load_registry(overrides: Option<&Path>) -> Result<Registry> {
    match overrides {
        Some(path) => Registry::spanish().with_overrides_file(path),
        None => Ok(Registry::spanish()),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}

fn print_tables(registry: &Registry, only: Option<Category>, format: TableFormat) -> Result<()> {
    let categories: Vec<Category> = match only {
        Some(c) => vec![c],
        None => registry.categories().collect(),
    };

    match format {
        TableFormat::Text => {
            for category in &categories {
                let entries: Vec<(&str, &str)> = registry.entries(*category).collect();
                println!(
                    "{} ({}, {} entries)",
                    category.id().bold(),
                    category.sdk_name(),
                    entries.len()
                );
                for (key, display) in entries {
                    println!("  {:<28} {}", key, display);
                }
                println!();
            }
        }
        TableFormat::Json => {
            let dump: Vec<TableDump> = categories
                .iter()
                .map(|c| TableDump {
                    category: *c,
                    sdk_name: c.sdk_name(),
                    entries: registry
                        .entries(*c)
                        .map(|(key, display)| TableEntry { key, display })
                        .collect(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
        TableFormat::Js => {
            let blocks: Vec<String> = categories
                .iter()
                .map(|c| registry.render_declaration(*c))
                .collect();
            print!("{}", blocks.join("\n"));
        }
    }

    Ok(())
}
