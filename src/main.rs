use clap::{Args, Parser, Subcommand};
use parking_admin::config::AppConfig;
use parking_admin::domain::SpotView;
use parking_admin::errors::{AppError, AppResult};
use parking_admin::inventory::{InventoryStore, SpotQuery};
use parking_admin::seed::load_store;
use parking_admin::spreadsheets::{export_filename, export_spots_xlsx};
use parking_admin::templates::pages::{parking_page, ParkingPageVm};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parking_admin")]
#[command(about = "Parking spot inventory for the residential admin panel")]
struct Cli {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON seed file with the inventory (overrides the config)
    #[arg(long)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print matching spots as a table
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Render the parking page to an HTML file
    Render {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, default_value = "parqueaderos.html")]
        out: PathBuf,
    },

    /// Export matching spots to an xlsx workbook
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Defaults to parqueaderos_<date>.xlsx
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Filter bar values. Unset flags keep the configured defaults.
#[derive(Args)]
struct FilterArgs {
    #[arg(long)]
    search: Option<String>,

    /// all | disponible | ocupado | temporal
    #[arg(long)]
    status: Option<String>,

    /// all | residente | visitante
    #[arg(long = "type")]
    spot_type: Option<String>,

    /// number | occupancy | category
    #[arg(long)]
    sort: Option<String>,
}

impl FilterArgs {
    fn to_query(&self, cfg: &AppConfig) -> AppResult<SpotQuery> {
        let defaults = &cfg.query;
        SpotQuery::from_raw(
            self.search.as_deref().unwrap_or(&defaults.search),
            self.status.as_deref().unwrap_or(&defaults.status),
            self.spot_type.as_deref().unwrap_or(&defaults.spot_type),
            self.sort.as_deref().unwrap_or(&defaults.sort),
        )
        .map_err(AppError::Config)
    }
}

fn main() {
    let cli = Cli::parse();

    let cfg = match AppConfig::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(cli, &cfg) {
        error!(error = %e, "command failed");
        std::process::exit(1);
    }
}

fn run(cli: Cli, cfg: &AppConfig) -> AppResult<()> {
    let seed_path = cli.seed.or_else(|| cfg.seed_path.clone());
    let store = load_store(seed_path.as_deref())?;

    match cli.command {
        Commands::List { filter } => {
            let query = filter.to_query(cfg)?;
            print_table(&store, &query);
        }
        Commands::Render { filter, out } => {
            let query = filter.to_query(cfg)?;
            let vm = ParkingPageVm::build(&store, &query, &cfg.building_name);
            fs::write(&out, parking_page(&vm).into_string())?;
            info!(path = %out.display(), "parking page rendered");
        }
        Commands::Export { filter, out } => {
            let query = filter.to_query(cfg)?;
            let spots = store.query(&query);
            let buffer = export_spots_xlsx(&spots, &cfg.sheet_name)?;
            let out = out.unwrap_or_else(|| {
                PathBuf::from(export_filename(chrono::Local::now().date_naive()))
            });
            fs::write(&out, buffer)?;
            info!(path = %out.display(), rows = spots.len(), "inventory exported");
        }
    }

    Ok(())
}

fn print_table(store: &InventoryStore, query: &SpotQuery) {
    println!(
        "{:<8} {:<10} {:<11} {:<22} {:<6} {:<8}",
        "Espacio", "Tipo", "Estado", "Propietario", "Apto", "Placa"
    );
    for spot in store.query(query) {
        let view = SpotView::from_spot(spot);
        println!(
            "{:<8} {:<10} {:<11} {:<22} {:<6} {:<8}",
            view.number,
            view.category_label,
            view.status_label,
            spot.owner.as_deref().unwrap_or("-"),
            spot.apartment.as_deref().unwrap_or("-"),
            view.plate.as_deref().unwrap_or("-"),
        );
    }

    let summary = store.summary();
    println!(
        "\n{} espacios · {} disponibles · {} ocupados · {} temporales",
        summary.total, summary.available, summary.occupied, summary.temporary
    );
}
