use std::sync::Arc;
use std::time::Duration;

use tradelot_api::app::{self, services::AppServices};
use tradelot_auth::TokenService;
use tradelot_store::MarketStore;

const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60;
const SWEEP_INTERVAL: Duration = Duration::from_secs(10 * 60);

#[tokio::main]
async fn main() {
    tradelot_observability::init();

    let jwt_secret = std::env::var("TRADELOT_JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("TRADELOT_JWT_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });
    let token_ttl_secs = std::env::var("TRADELOT_TOKEN_TTL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TOKEN_TTL_SECS);
    let bind = std::env::var("TRADELOT_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let store = Arc::new(MarketStore::new());
    let services = Arc::new(AppServices::new(
        Arc::clone(&store),
        TokenService::new(jwt_secret.as_bytes(), token_ttl_secs),
    ));

    // Revocation entries outlive their usefulness once the token itself has
    // expired; sweep them periodically so the set stays bounded.
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            if let Err(e) = store.revocations.sweep(chrono::Utc::now()) {
                tracing::warn!(error = %e, "revocation sweep failed");
            }
        }
    });

    let router = app::build_router(services);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, router).await.unwrap();
}
