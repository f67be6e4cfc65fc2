//! CLI frontend for the Stash owned-item scanner.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use stash_scan::ScanConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "stash",
    about = "Stash: list everything a player owns in a world snapshot",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// Options shared by every scanning command.
#[derive(Args)]
struct ScanArgs {
    /// World snapshot JSON file
    snapshot: PathBuf,

    /// Skip the player's inventory and equipment
    #[arg(long)]
    no_inventory: bool,

    /// Skip world locations
    #[arg(long)]
    no_world: bool,

    /// Skip stockpiled resources
    #[arg(long)]
    no_stockpile: bool,

    /// Only scan the location with this name
    #[arg(short, long)]
    location: Option<String>,
}

impl ScanArgs {
    fn config(&self) -> ScanConfig {
        let config = ScanConfig::default()
            .with_inventory(!self.no_inventory)
            .with_locations(!self.no_world)
            .with_stockpile(!self.no_stockpile);
        match &self.location {
            Some(name) => config.with_location_filter(name),
            None => config,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List every owned item
    List {
        #[command(flatten)]
        scan: ScanArgs,

        /// Only show items from this origin: inventory, world
        #[arg(short, long)]
        origin: Option<String>,
    },

    /// Show owned items grouped by name
    Tally {
        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Export owned items as JSON
    Export {
        #[command(flatten)]
        scan: ScanArgs,

        /// Output file path (default: stdout)
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { scan, origin } => {
            commands::list::run(&scan.snapshot, scan.config(), origin.as_deref())
        }
        Commands::Tally { scan } => commands::tally::run(&scan.snapshot, scan.config()),
        Commands::Export { scan, output } => {
            commands::export::run(&scan.snapshot, scan.config(), output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
