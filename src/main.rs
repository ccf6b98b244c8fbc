use clap::{Parser, Subcommand};
use tracing::{error, info};

use poke_scout::aggregator::{aggregate, error_report_message};
use poke_scout::catalog::list_candidate_names;
use poke_scout::client::PokeApiClient;
use poke_scout::config::Config;
use poke_scout::export::export_to_file;
use poke_scout::logging;
use poke_scout::types::{BatchOutcome, SuccessTable};

#[derive(Parser)]
#[command(name = "poke_scout")]
#[command(about = "Pokémon scouting: batch attribute and location lookups over the PokéAPI")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List candidate Pokémon names from the catalog
    Catalog {
        /// Maximum number of names to request
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Fetch attributes and locations for up to 5 Pokémon
    Scout {
        /// Pokémon names to look up
        names: Vec<String>,
        /// Export the results as CSV
        #[arg(long)]
        csv: bool,
        /// Directory for CSV exports
        #[arg(long, default_value = "output")]
        output_dir: String,
    },
}

fn print_table(table: &SuccessTable) {
    println!(
        "{:<12} {:>6} {:>7} {:>7} {:>16} {:<18} {}",
        "Name", "ID", "Height", "Weight", "Base Experience", "Types", "Location"
    );
    for row in &table.rows {
        println!(
            "{:<12} {:>6} {:>7} {:>7} {:>16} {:<18} {}",
            row.name, row.id, row.height, row.weight, row.base_experience, row.types, row.location
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load_or_default()?;
    let api = PokeApiClient::new(&config.api)?;

    match cli.command {
        Commands::Catalog { limit } => {
            let limit = limit.unwrap_or(config.api.list_limit);
            println!("📡 Fetching Pokémon catalog (limit {})...", limit);

            let mut names = list_candidate_names(&api, limit).await;
            if names.is_empty() {
                println!("⚠️  No catalog entries available");
                return Ok(());
            }
            names.sort();
            for name in &names {
                println!("{name}");
            }
            info!("Listed {} catalog names", names.len());
        }
        Commands::Scout {
            names,
            csv,
            output_dir,
        } => {
            println!("🔍 Scouting {} Pokémon...", names.len());

            match aggregate(&api, &names).await {
                BatchOutcome::NoSelection => {
                    println!("Please select at least one Pokémon.");
                }
                BatchOutcome::ErrorReport { names } => {
                    error!("Scouting batch failed for: {}", names.join(", "));
                    println!("❌ {}", error_report_message(&names));
                }
                BatchOutcome::Success(table) => {
                    println!("✅ Resolved {} Pokémon\n", table.len());
                    print_table(&table);

                    if csv {
                        let path = export_to_file(&table.rows, &output_dir)?;
                        println!("\n💾 Saved CSV to {path}");
                    }
                }
            }
        }
    }

    Ok(())
}
