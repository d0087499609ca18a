//! Render JSON records through a TOML table definition

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use formtable::{Row, TableConfig};

#[derive(Parser, Debug)]
#[command(name = "formtable", version, about = "Render records through a table definition")]
struct Cli {
    /// Table definition (TOML)
    #[arg(short, long)]
    config: PathBuf,

    /// JSON file holding an array of record objects
    #[arg(short, long)]
    data: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// One JSON object per row: field -> rendered cell
    Json,
    /// Tab-separated, label header first
    Tsv,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut table = TableConfig::load(&cli.config)
        .and_then(TableConfig::into_table)
        .with_context(|| format!("Failed to build table from {}", cli.config.display()))?;

    let content = fs::read_to_string(&cli.data)
        .with_context(|| format!("Failed to read data file: {}", cli.data.display()))?;
    let records: Vec<serde_json::Value> = serde_json::from_str(&content)
        .with_context(|| format!("Data file is not a JSON array: {}", cli.data.display()))?;

    let rows = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| Row::from_json(record).with_context(|| format!("Record {}", i)))
        .collect::<Result<Vec<_>>>()?;

    log::info!("Rendering {} records", rows.len());
    table.set_data(rows);

    let rendered = table.render_rows();
    match cli.format {
        OutputFormat::Json => {
            for row in &rendered {
                let line = serde_json::to_string(row).context("Failed to serialize row")?;
                println!("{}", line);
            }
        }
        OutputFormat::Tsv => {
            let header: Vec<String> = table
                .display_fields()
                .iter()
                .map(|field| table.label(field))
                .collect();
            println!("{}", header.join("\t").bold());
            for row in &rendered {
                let cells: Vec<&str> = row.cells.iter().map(|cell| cell.html.as_str()).collect();
                println!("{}", cells.join("\t"));
            }
        }
    }

    Ok(())
}
