mod common;
mod config;
mod network;
mod relay;
mod server;
mod storage;
mod ui;

use std::error::Error;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use network::{HttpTransport, RelayClient};
use relay::ChatRelay;
use storage::GameDatabase;
use tokio::sync::mpsc;
use ui::ChatApp;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "dungeon_chat",
    version,
    about = "Chat with an AI Dungeon Master"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Run the DM server that answers POST /message
    Serve,
    /// Create the game database schema
    InitDb,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);

    match cli.mode {
        Some(Mode::Serve) => server::serve(&app_config).await,
        Some(Mode::InitDb) => init_db(&app_config),
        None => run_chat_client(app_config).await,
    }
}

fn init_db(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let db = GameDatabase::with_path(&config.database_path)?;
    log::info!(
        "Tables in {}: {}",
        config.database_path,
        db.table_names()?.join(", ")
    );
    println!("Database initialized.");
    Ok(())
}

async fn run_chat_client(config: AppConfig) -> Result<(), Box<dyn Error>> {
    // UI -> relay
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // relay -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    let transport = HttpTransport::new(&config.server_url)?;
    tokio::spawn(RelayClient::new(transport, event_tx, cmd_rx).run());

    let relay = ChatRelay::bind(&config.element_ids, cmd_tx);
    let options = eframe::NativeOptions::default();
    let mut parts = Some((relay, event_rx));
    let viewport_rows = config.viewport_rows;

    eframe::run_native(
        "Dungeon Chat",
        options,
        Box::new(move |cc| {
            let (relay, event_receiver) = parts
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!("Chat client started against {}", config.server_url);

            Ok(Box::new(ChatApp::new(cc, relay, event_receiver, viewport_rows)))
        }),
    )?;

    Ok(())
}
