//! In-memory player graph.
//!
//! Only built for tests or with the `test-utils` feature.
//!
//! Mirrors the Cypher patterns used by [`super::PlayerRepo`] over a plain
//! node list and an undirected edge list, so resolvers can run without a
//! database. Row order follows insertion order, which is what a fresh Neo4j
//! instance returns for small graphs.

use async_trait::async_trait;

use super::PlayerGraph;
use crate::{
    error::RepoResult,
    models::{CommonTeammateRow, PlayerRow, TeammateRow},
};

#[derive(Debug, Clone)]
struct Relation {
    a: String,
    b: String,
    history: Option<String>,
}

impl Relation {
    /// The far end of this edge when entered from `name`.
    fn other_end(&self, name: &str) -> Option<&str> {
        if self.a == name {
            Some(&self.b)
        } else if self.b == name {
            Some(&self.a)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPlayerGraph {
    players: Vec<String>,
    relations: Vec<Relation>,
}

impl MemoryPlayerGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.ensure_player(name.into());
        self
    }

    /// Adds an undirected `PLAYED_TOGETHER` edge, creating missing players.
    /// Parallel edges between the same pair are kept as separate edges.
    pub fn with_relation(
        mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        history: Option<&str>,
    ) -> Self {
        let (a, b) = (a.into(), b.into());
        self.ensure_player(a.clone());
        self.ensure_player(b.clone());
        self.relations.push(Relation {
            a,
            b,
            history: history.map(str::to_string),
        });
        self
    }

    fn ensure_player(&mut self, name: String) {
        if !self.players.contains(&name) {
            self.players.push(name);
        }
    }

    fn related(&self, x: &str, y: &str) -> bool {
        self.relations
            .iter()
            .any(|r| r.other_end(x).is_some_and(|other| other == y))
    }
}

#[async_trait]
impl PlayerGraph for MemoryPlayerGraph {
    async fn find_player(&self, name: &str) -> RepoResult<Option<PlayerRow>> {
        Ok(self
            .players
            .iter()
            .find(|p| p.as_str() == name)
            .map(|p| PlayerRow { name: p.clone() }))
    }

    async fn list_teammates(&self, name: &str) -> RepoResult<Vec<TeammateRow>> {
        Ok(self
            .relations
            .iter()
            .filter_map(|r| {
                r.other_end(name).map(|teammate| TeammateRow {
                    teammate: teammate.to_string(),
                    history: r.history.clone(),
                })
            })
            .collect())
    }

    async fn list_common_teammates(
        &self,
        players: &[String],
    ) -> RepoResult<Vec<CommonTeammateRow>> {
        let mut rows = Vec::new();

        for candidate in &self.players {
            if !players.iter().all(|p| self.related(candidate, p)) {
                continue;
            }
            for relation in &self.relations {
                let Some(other) = relation.other_end(candidate) else {
                    continue;
                };
                if players.iter().any(|p| p == other) {
                    rows.push(CommonTeammateRow {
                        teammate: candidate.clone(),
                        with_player: other.to_string(),
                        history: relation.history.clone(),
                    });
                }
            }
        }

        Ok(rows)
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> MemoryPlayerGraph {
        MemoryPlayerGraph::new()
            .with_relation("Carol", "Dan", Some(r#"{"ClubZ": ["2018/19"]}"#))
            .with_relation("Eve", "Carol", Some(r#"{"ClubZ": ["2019/20"]}"#))
            .with_relation("Dan", "Eve", None)
            .with_player("Ghost")
    }

    fn names(players: &[&str]) -> Vec<String> {
        players.iter().map(|p| p.to_string()).collect()
    }

    #[tokio::test]
    async fn test_find_player() {
        let graph = graph();

        assert_eq!(
            graph.find_player("Ghost").await.unwrap(),
            Some(PlayerRow {
                name: "Ghost".to_string()
            })
        );
        assert_eq!(graph.find_player("Nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_teammates_walks_both_directions() {
        let rows = graph().list_teammates("Carol").await.unwrap();

        assert_eq!(
            rows,
            vec![
                TeammateRow {
                    teammate: "Dan".to_string(),
                    history: Some(r#"{"ClubZ": ["2018/19"]}"#.to_string()),
                },
                TeammateRow {
                    teammate: "Eve".to_string(),
                    history: Some(r#"{"ClubZ": ["2019/20"]}"#.to_string()),
                },
            ]
        );
        assert!(graph().list_teammates("Ghost").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_common_teammates_requires_every_player() {
        let graph = graph();

        let rows = graph
            .list_common_teammates(&names(&["Dan", "Eve"]))
            .await
            .unwrap();

        assert_eq!(
            rows,
            vec![
                CommonTeammateRow {
                    teammate: "Carol".to_string(),
                    with_player: "Dan".to_string(),
                    history: Some(r#"{"ClubZ": ["2018/19"]}"#.to_string()),
                },
                CommonTeammateRow {
                    teammate: "Carol".to_string(),
                    with_player: "Eve".to_string(),
                    history: Some(r#"{"ClubZ": ["2019/20"]}"#.to_string()),
                },
            ]
        );

        assert!(graph
            .list_common_teammates(&names(&["Carol", "Ghost"]))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_requested_player_is_not_excluded_from_candidates() {
        // With a self-loop, Carol is related to herself and so qualifies as a
        // common teammate of Carol and Dan.
        let graph = MemoryPlayerGraph::new()
            .with_relation("Carol", "Carol", None)
            .with_relation("Carol", "Dan", None);

        let rows = graph
            .list_common_teammates(&names(&["Carol", "Dan"]))
            .await
            .unwrap();

        let pairs: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.teammate.as_str(), r.with_player.as_str()))
            .collect();
        assert_eq!(pairs, vec![("Carol", "Carol"), ("Carol", "Dan")]);
    }

    #[tokio::test]
    async fn test_ping() {
        assert!(graph().ping().await.is_ok());
    }
}
