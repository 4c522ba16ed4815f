use std::sync::Arc;

use anyhow::Context;
use api::auth::{GitHubOAuth, OAuthConfig};
use api::{Settings, StoreBackend};
use store::{MemoryStore, MongoStore, PostStore};
use tokio::signal;
use tower_sessions::cookie::Key;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use web::sessions;
use web::state::{AppState, RouteOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new().context("Failed to load settings")?;
    info!(?settings, "Starting forum");

    let posts = open_store(&settings).await?;
    web::check_store(posts.as_ref()).await;

    let pool = sessions::connect(&settings.session_database_url)
        .await
        .context("Failed to open the session database")?;
    let session_store = sessions::open_store(pool)
        .await
        .context("Failed to prepare the session table")?;
    let deletion_task = sessions::spawn_deletion_task(session_store.clone());

    let oauth = GitHubOAuth::new(OAuthConfig::github(&settings)?)?;
    let state = AppState::new(posts, Arc::new(oauth), RouteOptions::from(&settings));
    let key = Key::derive_from(settings.secret_key.as_bytes());
    let app = web::app(state, session_store, key, settings.secure_cookies);

    let listener = tokio::net::TcpListener::bind(&settings.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", settings.bind_address))?;
    info!("Server listening on {}", settings.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    deletion_task.abort();
    info!("Server shut down");
    Ok(())
}

async fn open_store(settings: &Settings) -> anyhow::Result<Arc<dyn PostStore>> {
    match settings.store_backend {
        StoreBackend::Mongo => {
            let store = MongoStore::connect(
                &settings.mongo_connection_string,
                &settings.mongo_dbname,
                &settings.mongo_collection,
            )
            .await
            .context("Failed to create MongoDB client")?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            warn!("Using the in-memory post store; posts are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
