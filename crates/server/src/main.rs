//! greenlight-server - HTTP front-end for the film success predictor.
//!
//! Loads the cleaned catalog and the fitted artifacts once, builds the
//! prediction service and serves the three-operation API. A missing or
//! inconsistent artifact aborts startup; the process never serves with a
//! partial model set.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use artifacts::ArtifactSet;
use catalog::load_catalog;
use server::{AppState, PredictionService, build_router};

/// greenlight - film success prediction service
#[derive(Parser)]
#[command(name = "greenlight-server")]
#[command(about = "Predicts commercial success of hypothetical films", long_about = None)]
struct Args {
    /// Path to the cleaned film dataset (JSON array)
    #[arg(long, default_value = "data/films.json")]
    catalog: PathBuf,

    /// Directory holding scaler.json, vectorizer.json and model.json
    #[arg(long, default_value = "data/artifacts")]
    artifacts: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:5000")]
    listen: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server=debug,pipeline=debug".into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting greenlight server v{}", env!("CARGO_PKG_VERSION"));

    info!("Loading catalog from {}", args.catalog.display());
    let catalog = Arc::new(
        load_catalog(&args.catalog)
            .with_context(|| format!("loading catalog from {}", args.catalog.display()))?,
    );
    info!("Catalog ready: {} films", catalog.len());

    info!("Loading fitted artifacts from {}", args.artifacts.display());
    let artifacts = Arc::new(
        ArtifactSet::load(&args.artifacts)
            .with_context(|| format!("loading artifacts from {}", args.artifacts.display()))?,
    );

    let service = Arc::new(PredictionService::new(catalog, artifacts));
    let app = build_router(AppState { service });

    let listener = tokio::net::TcpListener::bind(&args.listen)
        .await
        .with_context(|| format!("binding {}", args.listen))?;
    info!("Serving on {}", args.listen);

    axum::serve(listener, app).await?;

    Ok(())
}
