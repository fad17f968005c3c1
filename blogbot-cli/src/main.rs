use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use blogbot_client::BlogClient;
use clap::Parser;
use tracing::info;

mod logging;
mod menu;
mod settings;

use logging::{DEFAULT_LOG_LEVEL, init_logging};
use menu::Menu;
use settings::{DEFAULT_CONFIG_FILE, Overrides, Settings};

#[derive(Debug, Parser)]
#[command(name = "blogbot", version, about = "Console assistant for a remote blog API")]
struct Cli {
    /// Путь к properties-файлу с `api.base.url` и `bot.name`.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Базовый URL API; перекрывает `api.base.url`.
    #[arg(long, env = "BLOGBOT_API_URL")]
    base_url: Option<String>,

    /// Имя бота; перекрывает `bot.name`.
    #[arg(long, env = "BLOGBOT_NAME")]
    bot_name: Option<String>,

    /// Уровень логирования, если не задан `RUST_LOG`.
    #[arg(long, env = "LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging(&cli.log_level)?;

    let settings = Settings::load(
        &cli.config,
        Overrides {
            base_url: cli.base_url,
            bot_name: cli.bot_name,
        },
    )
    .context("failed to load settings")?;
    info!(base_url = %settings.api_base_url, bot = %settings.bot_name, "settings loaded");

    let client =
        BlogClient::new(settings.api_base_url.clone()).context("failed to create api client")?;

    let stdin = io::stdin();
    let mut menu = Menu::new(&client, &settings.bot_name, stdin.lock(), io::stdout());
    menu.run().await
}
