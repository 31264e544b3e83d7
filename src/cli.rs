//! Command-line interface for inspecting a periodic table dataset.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::Config;
use crate::error::RegistryError;
use crate::model::{ElementRecord, ElementRegistry, Loaded};

/// Load a periodic table CSV and inspect the resulting element registry.
#[derive(Parser)]
#[command(name = "vsepr-elements")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Periodic table CSV (default: `data_path` from the config file)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Fail on the first malformed row instead of skipping it
    #[arg(long, global = true)]
    pub strict: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every entry ordered by atomic number.
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a single element by symbol (e.g. O, Be, LP).
    Show {
        symbol: String,

        #[arg(long)]
        json: bool,
    },
    /// Report skipped rows, duplicate symbols and defaulted fields.
    Check,
    /// Print the effective configuration and where it was loaded from.
    Config,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no dataset given; pass --data or set data_path in {0}")]
    NoDataPath(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// Run the CLI with an already parsed command line.
pub fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let (mut config, message) = Config::load();
    log::info!("{}", message);

    if let Some(data) = cli.data {
        config.data_path = Some(data);
    }
    if cli.strict {
        config.strict = true;
    }

    match cli.command {
        Commands::Config => config_command(&config, &message, &mut io::stdout(), &mut io::stderr()),
        Commands::List { json } => {
            let registry = load(&config)?.registry;
            list_command(&registry, json)
        }
        Commands::Show { symbol, json } => {
            let registry = load(&config)?.registry;
            show_command(&registry, &symbol, json)
        }
        Commands::Check => {
            let loaded = load(&config)?;
            Ok(check_command(&loaded))
        }
    }
}

fn load(config: &Config) -> Result<Loaded, CliError> {
    let path = config.data_path.as_ref().ok_or_else(|| {
        CliError::NoDataPath(
            Config::get_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "settings.json".to_string()),
        )
    })?;
    Ok(config.loader().load_with_report(path)?)
}

/// Effective configuration as JSON on `out`, where it came from on `status`.
fn config_command<W: Write, E: Write>(
    config: &Config,
    source: &str,
    out: &mut W,
    status: &mut E,
) -> Result<ExitCode, CliError> {
    writeln!(status, "{}", source)?;
    writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
    Ok(ExitCode::SUCCESS)
}

fn list_command(registry: &ElementRegistry, json: bool) -> Result<ExitCode, CliError> {
    let entries = registry.iter_by_atomic_number();
    if json {
        let records: Vec<&ElementRecord> = entries.iter().map(|(_, r)| *r).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{:>4}  {:<3}  {:<14} {:>6} {:>5} {:>7}  {:<20}  {}",
        "Z", "Sym", "Name", "Period", "EN", "Valence", "Bond radii (pm)", "Colour"
    );
    for (symbol, record) in entries {
        println!("{}", table_row(symbol, record));
    }
    Ok(ExitCode::SUCCESS)
}

fn table_row(symbol: &str, e: &ElementRecord) -> String {
    let radii = format!(
        "{:.1}/{:.1}/{:.1}",
        e.bond_radii[0], e.bond_radii[1], e.bond_radii[2]
    );
    let exception = if e.geometry_exception { "  *" } else { "" };
    format!(
        "{:>4}  {:<3}  {:<14} {:>6} {:>5.2} {:>7}  {:<20}  ({:.2}, {:.2}, {:.2}){}",
        e.atomic_number,
        symbol,
        e.name,
        e.period_number,
        e.electronegativity,
        e.valence_electrons,
        radii,
        e.color.x,
        e.color.y,
        e.color.z,
        exception
    )
}

fn show_command(registry: &ElementRegistry, symbol: &str, json: bool) -> Result<ExitCode, CliError> {
    let Some(record) = registry.get(symbol) else {
        eprintln!("No element with symbol '{}'", symbol);
        return Ok(ExitCode::FAILURE);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else if record.is_lone_pair() {
        println!("{} ({}): placeholder, not an element", record.name, symbol);
    } else {
        println!("{} ({})", record.name, symbol);
        println!("  atomic number        {}", record.atomic_number);
        println!("  period               {}", record.period_number);
        println!("  electronegativity    {:.2}", record.electronegativity);
        println!("  atomic radius        {:.1} pm", record.atomic_radius);
        println!(
            "  bond radii           {:.1} / {:.1} / {:.1} pm",
            record.bond_radii[0], record.bond_radii[1], record.bond_radii[2]
        );
        println!("  van der Waals radius {:.2}", record.van_der_waals_radius);
        println!("  valence electrons    {}", record.valence_electrons);
        println!(
            "  colour               ({:.3}, {:.3}, {:.3})",
            record.color.x, record.color.y, record.color.z
        );
        if record.geometry_exception {
            println!("  geometry exception");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn check_command(loaded: &Loaded) -> ExitCode {
    let report = &loaded.report;
    println!(
        "{} data rows, {} distinct symbols, {} entries including the lone pair",
        report.rows_admitted,
        report.rows_inserted,
        loaded.registry.len()
    );

    for skipped in &report.skipped {
        println!("skipped line {}: {}", skipped.line, skipped.reason);
    }
    for symbol in &report.duplicates {
        println!("duplicate symbol {} (later row kept)", symbol);
    }
    for (symbol, columns) in &report.defaulted {
        println!("{}: defaulted to 0: {}", symbol, columns.join(", "));
    }

    if report.skipped.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
