//! reg-web - Registrar catalog query service
//!
//! Serves the course catalog search page and its two JSON endpoints:
//! wildcard overview search and per-class detail lookup. The catalog
//! database is opened read-only; this service never writes to it.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use reg_common::config::resolve_database_path;
use reg_common::db::connect_readonly;
use reg_web::{build_router, AppState};

/// The registrar application
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The port at which the server should listen
    port: u16,

    /// Path to the catalog database (overrides env and config file)
    #[arg(long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber before anything else can log
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting registrar service (reg-web) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();

    let db_path = resolve_database_path(args.database.as_deref())?;
    info!("Database path: {}", db_path.display());

    let pool = match connect_readonly(&db_path).await {
        Ok(pool) => {
            info!("✓ Connected to catalog (read-only)");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    info!("reg-web listening on http://0.0.0.0:{}", args.port);
    info!("Health check: http://0.0.0.0:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
