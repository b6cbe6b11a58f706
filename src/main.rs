//! Emission Engine CLI
//!
//! Quick and detailed Scope 1 + 2 estimates from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use emission_engine::coerce::{read_input_file, to_count, to_float, to_optional};
use emission_engine::factors::{self, DEFAULT_PRICE_PER_KWH, DEFAULT_REFRIGERANT_GWP};
use emission_engine::{EstimationInput, estimate, report};

#[derive(Parser)]
#[command(name = "emission-engine")]
#[command(about = "Scope 1 + 2 carbon estimation for small and medium enterprises")]
struct Cli {
    /// Print the result as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Log estimation details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quick estimate from the monthly electricity bill alone
    Quick {
        /// Monthly electricity bill (e.g. "3,200")
        #[arg(short, long, default_value = "0")]
        bill: String,

        #[command(flatten)]
        scope3: Scope3Args,
    },

    /// Itemized estimate from utility, vehicle, fuel and refrigerant data
    Detail {
        /// Monthly electricity bill
        #[arg(long, default_value = "0")]
        bill: String,

        /// Electricity price per kWh
        #[arg(long, default_value_t = DEFAULT_PRICE_PER_KWH.to_string())]
        price: String,

        /// Annual electricity consumption in kWh (overrides the bill)
        #[arg(long, default_value = "0")]
        kwh: String,

        /// Number of cars
        #[arg(long, default_value = "0")]
        cars: String,

        /// Number of motorcycles
        #[arg(long, default_value = "0")]
        motorcycles: String,

        /// Gasoline used per year, liters
        #[arg(long, default_value = "0")]
        gasoline: String,

        /// Diesel used per year, liters
        #[arg(long, default_value = "0")]
        diesel: String,

        /// Refrigerant leaked per year, kg
        #[arg(long, default_value = "0")]
        refrigerant_kg: String,

        /// Refrigerant global warming potential
        #[arg(long, default_value_t = DEFAULT_REFRIGERANT_GWP.to_string())]
        gwp: String,

        #[command(flatten)]
        scope3: Scope3Args,
    },

    /// Estimate from a JSON input document
    File {
        /// Path to the input JSON file
        path: PathBuf,
    },

    /// List the emission factors in use
    Factors,
}

#[derive(Args)]
struct Scope3Args {
    /// Include water and waste (minor Scope 3)
    #[arg(long)]
    scope3: bool,

    /// Water used per year, m3
    #[arg(long, default_value = "0")]
    water: String,

    /// Waste produced per year, tonnes
    #[arg(long, default_value = "0")]
    waste: String,
}

impl Scope3Args {
    fn apply(&self, input: EstimationInput) -> EstimationInput {
        if self.scope3 {
            input.with_scope3(to_float(&self.water, 0.0), to_float(&self.waste, 0.0))
        } else {
            input
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let input = match cli.command {
        Commands::Quick { bill, scope3 } => {
            scope3.apply(EstimationInput::quick(to_optional(&bill)))
        }

        Commands::Detail {
            bill,
            price,
            kwh,
            cars,
            motorcycles,
            gasoline,
            diesel,
            refrigerant_kg,
            gwp,
            scope3,
        } => {
            let input = EstimationInput {
                monthly_bill: to_optional(&bill),
                price_per_kwh: to_float(&price, DEFAULT_PRICE_PER_KWH),
                annual_kwh: to_optional(&kwh),
                car_count: to_count(&cars, 0.0),
                motorcycles: to_count(&motorcycles, 0.0),
                gasoline_liters_year: to_optional(&gasoline),
                diesel_liters_year: to_optional(&diesel),
                refrigerant_leak_kg: to_float(&refrigerant_kg, 0.0),
                refrigerant_gwp: to_float(&gwp, DEFAULT_REFRIGERANT_GWP),
                ..EstimationInput::detail()
            };
            scope3.apply(input)
        }

        Commands::File { path } => read_input_file(&path)
            .with_context(|| format!("Failed to load input from {}", path.display()))?,

        Commands::Factors => {
            println!("{:<24} {:>10}  {}", "Factor", "Value", "Unit");
            println!("{}", "-".repeat(48));
            for row in factors::factor_table() {
                println!("{:<24} {:>10.4}  {}", row.name, row.value, row.unit);
            }
            return Ok(());
        }
    };

    info!(mode = ?input.mode, "running estimate");
    let result = estimate(&input);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result);
        println!("{}", report::narrative(&result));
    }

    Ok(())
}
