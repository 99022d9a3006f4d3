#![forbid(unsafe_code)]
//! Inspect the premine distribution and check transactions against it.

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Color as TableColor;
use comfy_table::{Cell, ContentArrangement, Table};
use premine_lock::config::{load_config_from, OutputFormat, DEFAULT_CONFIG_PATH};
use premine_lock::distribution::{self, Distribution};
use premine_lock::UxOut;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Overrides logging.level from the config file
    #[arg(long)]
    log_level: Option<String>,
    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lists distribution addresses
    Addresses {
        /// Which partition to list
        #[arg(long, value_enum, default_value_t = AddressSet::All)]
        set: AddressSet,
    },
    /// Prints the distribution parameters
    Params,
    /// Checks a JSON array of transaction inputs for locked addresses
    Check {
        /// File holding `[{"address": "...", "coins": N, "hours": N}, ...]`
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AddressSet {
    All,
    Unlocked,
    Locked,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config_from(&cli.config)?;

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let level = tracing::Level::from_str(level).map_err(|e| format!("Invalid log level: {}", e))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let dist = distribution::init();

    match &cli.command {
        Commands::Addresses { set } => addresses(dist, *set, format)?,
        Commands::Params => params(dist, format)?,
        Commands::Check { file } => return check(dist, file, format),
    }

    Ok(ExitCode::SUCCESS)
}

fn addresses(
    dist: &Distribution,
    set: AddressSet,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let unlocked_count = dist.params().initial_unlocked_count as usize;
    let rows: Vec<(usize, String)> = match set {
        AddressSet::All => dist.addresses().into_iter().enumerate().collect(),
        AddressSet::Unlocked => dist.unlocked_addresses().into_iter().enumerate().collect(),
        AddressSet::Locked => dist
            .locked_addresses()
            .into_iter()
            .enumerate()
            .map(|(i, a)| (i + unlocked_count, a))
            .collect(),
    };

    if format == OutputFormat::Json {
        let entries: Vec<serde_json::Value> = rows
            .iter()
            .map(|(index, address)| {
                serde_json::json!({
                    "index": index,
                    "address": address,
                    "locked": dist.is_locked_index(*index).unwrap_or(false),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Address", "Status"]);

    for (index, address) in &rows {
        let status = if dist.is_locked_index(*index).unwrap_or(false) {
            Cell::new("locked").fg(TableColor::Red)
        } else {
            Cell::new("unlocked").fg(TableColor::Green)
        };
        table.add_row(vec![Cell::new(index), Cell::new(address), status]);
    }

    println!("{}", table);
    println!(
        "{}",
        format!("{} address(es) listed", rows.len()).bright_cyan()
    );
    Ok(())
}

fn params(dist: &Distribution, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let p = dist.params();

    if format == OutputFormat::Json {
        let mut value = serde_json::to_value(p)?;
        value["initial_balance"] = serde_json::json!(dist.initial_balance());
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let interval = humantime::format_duration(Duration::from_secs(p.unlock_time_interval));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Parameter", "Value"]);
    table.add_row(vec!["Max coin supply".to_string(), p.max_coin_supply.to_string()]);
    table.add_row(vec!["Distribution addresses".to_string(), p.addresses_total.to_string()]);
    table.add_row(vec!["Initial balance per address".to_string(), dist.initial_balance().to_string()]);
    table.add_row(vec!["Initially unlocked".to_string(), p.initial_unlocked_count.to_string()]);
    table.add_row(vec!["Locked".to_string(), p.locked_count().to_string()]);
    table.add_row(vec!["Unlock rate (reserved)".to_string(), p.unlock_address_rate.to_string()]);
    table.add_row(vec!["Unlock interval (reserved)".to_string(), interval.to_string()]);

    println!("{}", table);
    Ok(())
}

fn check(
    dist: &Distribution,
    file: &Path,
    format: OutputFormat,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read inputs from {}: {}", file.display(), e))?;
    let inputs: Vec<UxOut> = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse inputs: {}", e))?;

    let locked = dist.transaction_is_locked(&inputs);
    let locked_count = dist.count_locked_inputs(&inputs);

    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "inputs": inputs.len(),
                "locked_inputs": locked_count,
                "locked": locked,
            }))?
        );
    } else if locked {
        println!(
            "{}",
            format!(
                "🔒 Transaction is LOCKED: {} of {} input(s) spend locked distribution addresses",
                locked_count,
                inputs.len()
            )
            .red()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("✅ Transaction is spendable ({} input(s) checked)", inputs.len()).bright_green()
        );
    }

    Ok(if locked {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
