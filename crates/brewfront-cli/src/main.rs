mod admin;
mod stores;

use brewfront_core::StoreSearchRequest;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "brewfront-cli")]
#[command(about = "Brewfront storefront operations CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations.
    Migrate,
    /// Insert the Seattle demo dataset (stores, catalog, promotions, members).
    SeedDemo,
    /// Store directory commands.
    Stores {
        #[command(subcommand)]
        command: StoresCommands,
    },
}

#[derive(Debug, Subcommand)]
enum StoresCommands {
    /// Search stores by coordinates or by city/zip.
    Search(SearchArgs),
}

#[derive(Debug, Args)]
struct SearchArgs {
    #[arg(long, requires = "longitude")]
    latitude: Option<f64>,
    #[arg(long, requires = "latitude")]
    longitude: Option<f64>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    zip_code: Option<String>,
    /// Search radius in kilometers (default 25).
    #[arg(long)]
    radius: Option<f64>,
}

impl From<SearchArgs> for StoreSearchRequest {
    fn from(args: SearchArgs) -> Self {
        Self {
            latitude: args.latitude,
            longitude: args.longitude,
            city: args.city,
            zip_code: args.zip_code,
            radius: args.radius,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let pool = brewfront_db::connect_pool_from_env().await?;

    match cli.command {
        Commands::Migrate => admin::run_migrate(&pool).await,
        Commands::SeedDemo => admin::run_seed_demo(&pool).await,
        Commands::Stores { command } => match command {
            StoresCommands::Search(args) => stores::run_stores_search(&pool, args.into()).await,
        },
    }
}
