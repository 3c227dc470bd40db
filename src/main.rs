use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

mod application;
mod domain;
mod infrastructure;

use application::relay::RelayService;
use application::router::IntentRouter;
use infrastructure::config::Config;
use infrastructure::gateways::{
    GeocodeGateway, ImageSearchGateway, NluGateway, TelegramGateway, TranslateGateway,
    WeatherGateway,
};

#[derive(Parser)]
#[command(name = "pogoda-bot")]
#[command(about = "A multilanguage weather chat bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_bot(cli.config, cli.token);
        }
        Commands::Version => {
            println!("pogoda-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config(&cli.config);
        }
    }
}

fn run_bot(config_path: String, token_override: Option<String>) {
    // Load config
    let config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using environment", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    tracing::info!("Starting {}", config.bot.name);

    let token = match token_override.or_else(|| config.telegram.token.clone()) {
        Some(token) => token,
        None => {
            tracing::error!("No bot token configured (config file or BOT_TOKEN)");
            return;
        }
    };

    // One HTTP client shared across gateways, with an explicit
    // per-request timeout.
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(config.poll.request_timeout_seconds))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            return;
        }
    };

    let chat = Arc::new(TelegramGateway::new(token, client.clone()));
    let router = IntentRouter::new(
        Arc::new(TranslateGateway::new(config.keys.translate.clone(), client.clone())),
        Arc::new(NluGateway::new(
            config.keys.nlu_app.clone(),
            config.keys.nlu_subscription.clone(),
            client.clone(),
        )),
        Arc::new(GeocodeGateway::new(config.keys.geocoding.clone(), client.clone())),
        Arc::new(WeatherGateway::new(config.keys.weather.clone(), client.clone())),
        Arc::new(ImageSearchGateway::new(config.keys.image_search.clone(), client)),
    );

    let relay = RelayService::new(
        chat,
        router,
        Duration::from_secs(config.poll.interval_seconds),
    );

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            return;
        }
    };
    rt.block_on(relay.run());
}

fn init_config(path: &str) {
    if std::path::Path::new(path).exists() {
        tracing::warn!("Config file {} already exists, not overwriting", path);
        return;
    }
    match Config::default().save(path) {
        Ok(()) => println!("Wrote default config to {}", path),
        Err(e) => tracing::error!("Failed to write config: {}", e),
    }
}
