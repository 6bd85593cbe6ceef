use clap::Parser;
use pantry::{
    api::{handlers::AppState, routes},
    cli::{Cli, Commands},
    config::Settings,
    corpus::load_corpus,
    index::Recommender,
    nlp::EnglishNormalizer,
    Error, Result,
};
use std::sync::Arc;
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
                .unwrap_or_else(|_| "info,pantry=debug".into()),
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
        Commands::Search { ingredients, limit } => {
            search_recipes(settings, ingredients, limit).await?;
        }
        Commands::Validate { dataset } => {
            let path = dataset
                .map(std::path::PathBuf::from)
                .unwrap_or(settings.dataset.path);
            pantry::cli::commands::validate(path)?;
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

    info!("Starting Pantry server");
    info!("Dataset: {}", settings.dataset.path.display());
    info!("Server: {}:{}", settings.server.host, settings.server.port);

    // Load the corpus and fit the similarity index once; both are
    // immutable for the rest of the process
    let normalizer = EnglishNormalizer::new();
    let corpus = load_corpus(&settings.dataset.path, &normalizer)?;
    let recipe_count = corpus.len();

    let recommender = Arc::new(Recommender::new(corpus, Box::new(normalizer)));
    info!("Recommender ready ({} recipes)", recipe_count);

    // Create application state
    let state = AppState {
        recommender,
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
    println!("Pantry Recommendation Server");
    println!("========================================");
    println!("Status: Running");
    println!("Address: http://{addr}");
    println!("Recipes: {recipe_count}");
    println!("\nAPI Endpoints:");
    println!("  GET  /api/recommend");
    println!("  GET  /api/recipes/:id");
    println!("  GET  /api/stats");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}

async fn search_recipes(settings: Settings, ingredients: String, limit: Option<usize>) -> Result<()> {
    let server_url = settings
        .server
        .external_url
        .unwrap_or_else(|| format!("http://{}:{}", settings.server.host, settings.server.port));

    pantry::cli::commands::search(&server_url, &ingredients, limit).await
}
