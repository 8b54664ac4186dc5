mod config;
mod database;
mod entities;
mod error;
mod http_server;
mod logging;
mod seed;
mod services;
#[cfg(test)]
mod test_utils;
mod validation;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::{Result, eyre::Context};

use crate::{config::Config, database::Database, logging::setup_logging};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The config file to use
    #[arg(short, long, env = "PIZZA_RESTAURANTS_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Database connection string (default: a local SQLite file)
    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,

    /// Console log level (default: info)
    #[arg(long, default_value = "info", global = true, env = "LOG_LEVEL")]
    log_level: log::LevelFilter,

    /// File log level (default: debug)
    #[arg(long, default_value = "debug", global = true)]
    log_file_level: log::LevelFilter,

    /// Path to log file
    #[arg(long, env = "PIZZA_RESTAURANTS_LOG_FILE", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// The port to run the server on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },
    /// Replace all restaurants, pizzas and offerings with the sample data set
    Seed,
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Create a default config file, if it doesn't exist
    CreateDefault,
    /// Print the path to the config file
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    setup_logging(args.log_level, args.log_file.clone(), args.log_file_level)?;

    log::debug!("Loading configuration");

    let config = {
        if let Some(config) = &args.config {
            Config::from_file(config)
        } else {
            Config::load()
        }
    }
    .wrap_err("Failed to load pizza-restaurants config")?;

    let database_url = config.database_url(args.database_url.as_deref());

    match args.command {
        Commands::Serve { port } => {
            let port = config.port(port);
            let database = Database::open(&database_url).await?;

            log::info!("Starting HTTP server on port: {}", port);
            http_server::app::start(port, database).await?;
        }
        Commands::Seed => {
            let database = Database::open(&database_url).await?;

            log::debug!("Seeding database");
            let summary = seed::seed(&database).await?;
            println!(
                "Seeded {} restaurants, {} pizzas and {} restaurant pizzas",
                summary.restaurants, summary.pizzas, summary.restaurant_pizzas
            );
        }
        Commands::Config(config_commands) => match config_commands {
            ConfigCommands::CreateDefault => {
                log::debug!("Creating default config");
                let path = Config::create_default()?;
                log::info!("Default config available at: {}", path.display());
            }
            ConfigCommands::Path => match Config::config_path() {
                Some(path) => println!("{}", path.display()),
                None => println!("No default config path found"),
            },
        },
    }

    Ok(())
}
