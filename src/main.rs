mod app;
mod config;
mod logging;
mod models;
mod snapshot;
mod store;
mod tui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::rc::Rc;

use app::run_tui;
use config::Config;
use store::{AppEvent, CustomRoomTagStore, Dispatcher, RoomListStore};

#[derive(Parser)]
#[command(name = "tagpanel")]
#[command(version)]
#[command(about = "Custom room tag panel for a chat room list")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Room snapshot (JSON) to build the room list from
    #[arg(short, long, env = "TAGPANEL_ROOMS")]
    rooms: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sorted tag panel as JSON
    Sorted {
        /// Room snapshot (JSON)
        #[arg(short, long)]
        rooms: PathBuf,
        /// Select a tag before printing (repeatable)
        #[arg(short, long)]
        select: Vec<String>,
    },
    /// Print the shared prefix used to pick avatar letters
    Prefix { a: String, b: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Sorted { rooms, select }) => {
            logging::init_stderr();
            print_sorted(&rooms, select)?;
        }
        Some(Commands::Prefix { a, b }) => {
            println!("{:?}", store::common_prefix(&a, &b));
        }
        None => {
            let config = load_config();
            let log_path = config::config_dir()?.join("tagpanel.log");
            logging::init_file(&log_path)
                .with_context(|| format!("could not open log file {}", log_path.display()))?;

            let rooms = cli.rooms.or_else(|| config.default_rooms_path.clone());
            run_tui(rooms, config).await?;
        }
    }

    Ok(())
}

fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet and the TUI is not drawn either
            eprintln!("Warning: Could not load config: {}", e);
            Config::defaults()
        }
    }
}

fn print_sorted(path: &std::path::Path, select: Vec<String>) -> Result<()> {
    let rooms = Rc::new(RoomListStore::from_rooms(snapshot::load(path)?));
    let dispatcher = Dispatcher::new();
    let store = CustomRoomTagStore::new(rooms, &dispatcher);

    for tag in select {
        dispatcher.dispatch(AppEvent::SelectCustomRoomTag(tag))?;
    }

    let json = serde_json::to_string_pretty(&store.sorted_tags())?;
    println!("{}", json);
    Ok(())
}
