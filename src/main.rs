// src/main.rs

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use journey_backend::api::http::http_router;
use journey_backend::config::Config;
use journey_backend::llm::GeminiClient;
use journey_backend::state::AppState;

#[derive(Parser)]
#[command(name = "journey-backend")]
#[command(about = "Backend for the DSA journey map")]
#[command(version)]
struct Cli {
    /// Host to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding index.html and journeyData.json
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so Config::from_env sees it
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    // Missing GEMINI_API_KEY is fatal: the process does not start.
    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(static_dir) = cli.static_dir {
        config.static_dir = static_dir;
    }
    let config = Arc::new(config);

    info!("Starting journey backend");
    info!("Model: {}", config.gemini_model);
    info!("Static assets: {}", config.static_dir.display());

    let generator = Arc::new(GeminiClient::new(&config));
    let app_state = Arc::new(AppState::new(config.clone(), generator));

    let app = http_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Listening on http://{}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
