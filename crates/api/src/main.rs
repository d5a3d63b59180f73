use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::config::ServerConfig;
use api::gql::build_schema;
use api::state::AppState;
use infra::db::{self, DbConfig};
use infra::repos::PlayerRepo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_config = DbConfig::from_env()?;
    let server_config = ServerConfig::from_env()?;

    let graph = db::connect(&db_config).await?;
    let state = AppState::new(PlayerRepo::new(graph));

    let schema = build_schema(state.clone());
    let app = build_router(state, schema, &server_config);

    let addr = format!("0.0.0.0:{}", server_config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
