use clap::Parser;
use plateful::{
    api::{handlers::AppState, routes},
    cli::{Cli, Commands},
    config::Settings,
    upstream::{RecipeApiClient, UpstreamConfig},
    Error, Result,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,plateful=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_env()?;
    settings.validate()?;

    // Handle commands
    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, port, host).await?;
        }
        Commands::Search {
            query,
            cuisine,
            diet,
            max_time,
        } => {
            search_recipes(settings, query, cuisine, diet, max_time).await?;
        }
        Commands::Moods => {
            plateful::cli::commands::moods();
        }
    }

    Ok(())
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }

    info!("Starting Plateful server");
    info!("Server: {}:{}", settings.server.host, settings.server.port);

    // Initialize upstream client with injected configuration
    let upstream_config = UpstreamConfig::from_env()?;
    info!("Upstream recipe API: {}", upstream_config.base_url);

    let client = RecipeApiClient::new(upstream_config)?;

    // Create application state
    let state = AppState {
        client,
        settings: settings.clone(),
    };

    // Create router with rate limiting
    let app = routes::create_router(state, &settings);

    // Start server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("\n========================================");
    println!("Plateful Server");
    println!("========================================");
    println!("Status: Running");
    println!("Address: http://{addr}");
    println!("Upstream: Configured");
    println!("\nAPI Endpoints:");
    println!("  GET  /recipes/search");
    println!("  GET  /recipes/random");
    println!("  GET  /recipes/mood");
    println!("  GET  /recipes/:id");
    println!("  GET  /mealplan");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}

async fn search_recipes(
    settings: Settings,
    query: String,
    cuisine: Option<String>,
    diet: Option<String>,
    max_time: Option<u32>,
) -> Result<()> {
    let server_url = settings
        .server
        .external_url
        .unwrap_or_else(|| format!("http://{}:{}", settings.server.host, settings.server.port));

    plateful::cli::commands::search(&server_url, &query, cuisine, diet, max_time).await
}
