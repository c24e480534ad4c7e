//! StackIt assistant API server binary.
//!
//! Loads `.env`, resolves the completion credential (refusing to start
//! without it), and serves the API until Ctrl-C.

use std::sync::Arc;

use clap::Parser;
use stackit_api::config::{ApiConfig, DEFAULT_ALLOWED_ORIGINS};
use stackit_core::completion::config::CompletionConfig;
use stackit_core::completion::groq::GroqClient;
use tracing::{error, info};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "stackit_api_server", about = "StackIt assistant API server")]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Origins allowed to call `/api/*` from a browser (comma-separated).
    #[arg(
        long,
        env = "CORS_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values_t = DEFAULT_ALLOWED_ORIGINS.map(String::from)
    )]
    allowed_origins: Vec<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "info,stackit_api=debug,stackit_core=debug,tower_http=info",
                )
            }),
        )
        .init();

    if let Err(e) = run(Args::parse()).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Fails fast when GROQ_API_KEY is absent.
    let completion_config = CompletionConfig::from_env()?;
    info!(
        model = %completion_config.model,
        timeout_secs = completion_config.timeout.as_secs(),
        "completion client configured"
    );
    let completion = GroqClient::new(completion_config)?;

    let config = ApiConfig {
        bind_addr: format!("{}:{}", args.host, args.port),
        allowed_origins: args.allowed_origins,
    };

    let state = stackit_api::AppState {
        config: config.clone(),
        completion: Arc::new(completion),
    };

    let app = stackit_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(
        addr = %local_addr,
        origins = ?config.allowed_origins,
        version = stackit_core::version(),
        "REST API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
