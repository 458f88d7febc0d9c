//! Veracity HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use veracity::config::Config;
use veracity::corpus::ReferenceCorpus;
use veracity::embedding::{Embedder, EmbedderConfig};
use veracity::gateway::{HandlerState, cors_layer, create_router_with_state};
use veracity::ledger::DocumentLedger;
use veracity::pipeline::CheckPipeline;
use veracity::scoring::SimilarityScorer;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
██╗   ██╗███████╗██████╗  █████╗  ██████╗██╗████████╗██╗   ██╗
██║   ██║██╔════╝██╔══██╗██╔══██╗██╔════╝██║╚══██╔══╝╚██╗ ██╔╝
██║   ██║█████╗  ██████╔╝███████║██║     ██║   ██║    ╚████╔╝
╚██╗ ██╔╝██╔══╝  ██╔══██╗██╔══██║██║     ██║   ██║     ╚██╔╝
 ╚████╔╝ ███████╗██║  ██║██║  ██║╚██████╗██║   ██║      ██║
  ╚═══╝  ╚══════╝╚═╝  ╚═╝╚═╝  ╚═╝ ╚═════╝╚═╝   ╚═╝      ╚═╝

        EXTRACT. EMBED. SCORE.
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        db_path = %config.db_path.display(),
        "Veracity starting"
    );

    let ledger = Arc::new(DocumentLedger::open(&config.db_path)?);

    let corpus = Arc::new(ReferenceCorpus::load(config.corpus_path.as_deref())?);

    let embedder_config = if let Some(path) = &config.model_path {
        EmbedderConfig::new(path.clone())
    } else {
        tracing::warn!("No VERACITY_MODEL_PATH configured, running embedder in stub mode");
        EmbedderConfig::stub()
    };
    let embedder = Arc::new(Embedder::load(embedder_config)?);

    let scorer = SimilarityScorer::new(embedder);
    let pipeline = Arc::new(CheckPipeline::new(scorer, ledger, corpus));

    let state = HandlerState::new(pipeline);
    let cors = cors_layer(&config.allowed_origins);
    let app = create_router_with_state(state, cors);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Veracity shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("VERACITY_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/health", port);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("failed to build client");

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
