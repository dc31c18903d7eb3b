use std::net::SocketAddr;

use mongodb::Client;
use tracing_subscriber::EnvFilter;

use rustpedidos::{config, config::StorageKind, routes, services::db_init, storage::Storage, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = config::load();

    let storage = match settings.storage {
        StorageKind::Mongo => {
            let client = Client::with_uri_str(&settings.mongodb_uri)
                .await
                .expect("Failed to connect to MongoDB");
            let db = client.database(&settings.mongodb_db);

            if let Err(e) = db_init::ensure_indexes(&db).await {
                tracing::warn!(error = %e, "could not ensure indexes");
            }

            Storage::mongo(db)
        }
        StorageKind::Memory => {
            tracing::warn!("using in-memory storage; data is lost on exit");
            Storage::memory()
        }
    };

    let state = AppState::new(storage);
    let app = routes::app(state);

    let ip = settings
        .host
        .parse::<std::net::IpAddr>()
        .expect("HOST must be an IP address");
    let addr = SocketAddr::from((ip, settings.port));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.expect("bind listener");
    axum::serve(listener, app).await.expect("server error");
}
