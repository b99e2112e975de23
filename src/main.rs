// Ordenes - Medical Orders Service
// Copyright (c) 2025 Ordenes Contributors
// Licensed under the MIT License

use anyhow::Context;
use clap::Parser;
use ordenes::api::{self, AppState};
use ordenes::config::{load_config, OrdenesConfig};
use ordenes::logging::init_logging;
use ordenes::rules::OrderValidator;
use ordenes::service::{DiagnosticAidService, MedicationService, OrderService, ProcedureService};
use ordenes::storage::{
    InMemoryDiagnosticAidStore, InMemoryMedicationStore, InMemoryOrderStore,
    InMemoryProcedureStore,
};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "ordenes", about = "Medical orders service", version)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "ordenes.toml", env = "ORDENES_CONFIG")]
    config: PathBuf,

    /// Override the configured log level
    #[arg(long, env = "ORDENES_LOG_LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    // Optional; a missing .env file is silently ignored.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = if cli.config.exists() {
        match load_config(&cli.config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                process::exit(2);
            }
        }
    } else {
        OrdenesConfig::default()
    };

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);
    let _guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        "Ordenes - Medical Orders Service"
    );

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "service terminated with an error");
        process::exit(1);
    }
}

async fn run(config: OrdenesConfig) -> anyhow::Result<()> {
    let orders = Arc::new(InMemoryOrderStore::new());
    let medications = Arc::new(InMemoryMedicationStore::new());
    let procedures = Arc::new(InMemoryProcedureStore::new());
    let diagnostic_aids = Arc::new(InMemoryDiagnosticAidStore::new());

    let state = AppState {
        orders: Arc::new(OrderService::new(
            orders,
            medications.clone(),
            procedures.clone(),
            diagnostic_aids.clone(),
            OrderValidator::with_default_rules(),
        )),
        medications: Arc::new(MedicationService::new(medications)),
        procedures: Arc::new(ProcedureService::new(procedures)),
        diagnostic_aids: Arc::new(DiagnosticAidService::new(diagnostic_aids)),
    };

    let app = api::router(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                return std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("received SIGINT, shutting down");
            }
            _ = sigterm.recv() => {
                tracing::info!("received SIGTERM, shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
        } else {
            tracing::info!("received SIGINT, shutting down");
        }
    }
}
