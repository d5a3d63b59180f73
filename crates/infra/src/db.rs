use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph};
use std::env;

/// Pooled Bolt connection. Each query borrows a connection for as long as its
/// row stream lives, so dropping the stream hands the connection back.
pub type Db = Graph;

#[derive(Clone)]
pub struct DbConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: Option<String>,
    pub max_connections: usize,
}

impl DbConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            uri: env::var("NEO4J_URI").unwrap_or_else(|_| "bolt://localhost:7687".to_string()),
            user: env::var("NEO4J_USER").unwrap_or_else(|_| "neo4j".to_string()),
            password: env::var("NEO4J_PASSWORD").context("NEO4J_PASSWORD must be set")?,
            database: env::var("NEO4J_DATABASE").ok().filter(|db| !db.is_empty()),
            max_connections: env::var("NEO4J_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(16),
        })
    }
}

pub async fn connect(config: &DbConfig) -> Result<Db> {
    let mut builder = ConfigBuilder::default()
        .uri(config.uri.as_str())
        .user(config.user.as_str())
        .password(config.password.as_str())
        .max_connections(config.max_connections);

    if let Some(database) = &config.database {
        builder = builder.db(database.as_str());
    }

    let graph = Graph::connect(builder.build()?)
        .await
        .with_context(|| format!("Failed to connect to Neo4j at {}", config.uri))?;

    tracing::info!(
        uri = %config.uri,
        max_connections = config.max_connections,
        "Connected to Neo4j"
    );

    Ok(graph)
}
