use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use namestore::{Config, NamestoreState, db, namestore_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel,
        basic_auth = cfg.basic_auth,
    );

    let pool = db::connect(&cfg.database_url).await?;
    db::init_schema(&pool).await?;

    let state = NamestoreState::new(pool).with_password_cost(cfg.password_cost);
    if cfg.seed_test_credential {
        state.auth.seed_test_credential().await?;
    }

    let app = namestore_router(state, cfg.basic_auth);

    let listener = TcpListener::bind(cfg.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    shutdown_on(tokio::signal::ctrl_c()).await;
}

/// Resolves once `signal` fires. A signal that cannot be installed never
/// resolves, so the server keeps running instead of stopping at startup.
async fn shutdown_on(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        error!(error = %e, "failed to install Ctrl-C handler; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("Shutting down server...");
}
