//! # Mora Node
//!
//! The entry point wiring the poll subsystems behind the HTTP gateway.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Initialize structured logging
//! 3. Build the in-memory stores and subsystem services
//! 4. Seed the starter questions into an empty pool
//! 5. Serve the gateway router until shutdown is signalled
//!
//! ## Wiring
//!
//! ```text
//! gateway ──PoolApi──────────→ PoolService ──QuestionStore──→ memory
//!    │                              ↑
//!    ├──CommitmentStore──→ memory   │ EpochCloser
//!    │                              │
//!    └──AggregationApi──→ AggregationService ──AggregateStore──→ memory
//! ```

mod config;
mod seeds;

use anyhow::Context;
use config::NodeConfig;
use mora_aggregate::{
    AggregationApi, AggregationService, CommitmentStore, InMemoryAggregateStore,
    InMemoryCommitmentStore, PoolEpochCloser,
};
use mora_gateway::{build_router, AppState, StaticTokenValidator};
use mora_pool::{InMemoryQuestionStore, PoolApi, PoolService};
use mora_telemetry::{init_logging, TelemetryConfig};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = NodeConfig::from_env();
    let _guard = init_logging(&TelemetryConfig::from_env())?;

    if config.uses_default_manage_key() {
        warn!("[node] MORA_MANAGE_API_KEY not set; manage surface uses the development key");
    }

    // Stores and services.
    let question_store = Arc::new(InMemoryQuestionStore::new());
    let pool: Arc<dyn PoolApi> = Arc::new(PoolService::new(question_store));
    let commitment_store = Arc::new(InMemoryCommitmentStore::new());
    let commitments: Arc<dyn CommitmentStore> = Arc::clone(&commitment_store) as _;
    let aggregation: Arc<dyn AggregationApi> = Arc::new(AggregationService::new(
        commitment_store,
        Arc::new(InMemoryAggregateStore::new()),
        Arc::new(PoolEpochCloser::new(Arc::clone(&pool))),
    ));

    // Starter questions so the first epoch has something to promote.
    let mut seeded = 0usize;
    for seed in seeds::seed_questions() {
        pool.add_question(seed)
            .await
            .context("seeding starter questions")?;
        seeded += 1;
    }
    info!(seeded, "[node] question pool seeded");

    let state = AppState {
        pool,
        aggregation,
        commitments,
        sessions: Arc::new(StaticTokenValidator::new(config.session_token.clone())),
        manage_api_key: config.manage_api_key.clone(),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "[node] gateway listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving gateway")?;

    info!("[node] shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "[node] failed to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("[node] shutdown signal received");
}
