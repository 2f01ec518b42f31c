use std::sync::Arc;

use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moebelscout_api::config::Config;
use moebelscout_api::db::{create_redis_client, KvStore, RedisStore};
use moebelscout_api::routes::{create_router, AppState};
use moebelscout_api::services::providers::{
    HttpShoppingProvider, HttpVisionProvider, RemoteFavorites,
};
use moebelscout_api::services::{BudgetService, Catalog, PriceTracker, ProfileService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moebelscout_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let redis_client = create_redis_client(&config.redis_url)?;
    let store: Arc<dyn KvStore> = Arc::new(RedisStore::new(redis_client));

    let state = Arc::new(AppState {
        catalog: Catalog::with_reference_items(),
        profile: ProfileService::new(store.clone()),
        tracker: PriceTracker::new(store.clone()),
        budget: BudgetService::new(store),
        vision: Arc::new(HttpVisionProvider::new(
            config.vision_api_key.clone(),
            config.vision_api_url.clone(),
        )),
        shopping: Arc::new(HttpShoppingProvider::new(
            config.shopping_api_key.clone(),
            config.shopping_api_url.clone(),
        )),
        favorites: Arc::new(RemoteFavorites::new(
            config.favorites_api_url.clone(),
            config.favorites_api_token.clone(),
        )),
    });

    let app = create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "moebelscout API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
