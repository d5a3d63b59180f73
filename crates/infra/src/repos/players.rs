use async_trait::async_trait;
use neo4rs::{query, Query};
use serde::de::DeserializeOwned;

use super::PlayerGraph;
use crate::{
    db::Db,
    error::RepoResult,
    models::{CommonTeammateRow, PlayerRow, TeammateRow},
};

const FIND_PLAYER: &str = r#"
    MATCH (p:Player {name: $name})
    RETURN p.name AS name
"#;

const LIST_TEAMMATES: &str = r#"
    MATCH (p:Player {name: $name})-[r:PLAYED_TOGETHER]-(t:Player)
    RETURN t.name AS teammate, r.history AS history
"#;

const LIST_COMMON_TEAMMATES: &str = r#"
    MATCH (t:Player)
    WHERE ALL(name IN $players WHERE (t)-[:PLAYED_TOGETHER]-(:Player {name: name}))
    WITH t
    MATCH (p:Player)-[r:PLAYED_TOGETHER]-(t)
    WHERE p.name IN $players
    RETURN t.name AS teammate, p.name AS with_player, r.history AS history
"#;

/// Neo4j-backed gateway.
#[derive(Clone)]
pub struct PlayerRepo {
    pool: Db,
}

impl PlayerRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    async fn fetch_all<T: DeserializeOwned>(&self, q: Query) -> RepoResult<Vec<T>> {
        let mut stream = self.pool.execute(q).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row.to::<T>()?);
        }
        Ok(rows)
    }
}

#[async_trait]
impl PlayerGraph for PlayerRepo {
    async fn find_player(&self, name: &str) -> RepoResult<Option<PlayerRow>> {
        let mut stream = self
            .pool
            .execute(query(FIND_PLAYER).param("name", name))
            .await?;
        match stream.next().await? {
            Some(row) => Ok(Some(row.to::<PlayerRow>()?)),
            None => Ok(None),
        }
    }

    async fn list_teammates(&self, name: &str) -> RepoResult<Vec<TeammateRow>> {
        self.fetch_all(query(LIST_TEAMMATES).param("name", name))
            .await
    }

    async fn list_common_teammates(
        &self,
        players: &[String],
    ) -> RepoResult<Vec<CommonTeammateRow>> {
        self.fetch_all(query(LIST_COMMON_TEAMMATES).param("players", players.to_vec()))
            .await
    }

    async fn ping(&self) -> RepoResult<()> {
        self.pool.run(query("RETURN 1")).await?;
        Ok(())
    }
}
