#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod players;

use async_trait::async_trait;

use crate::error::RepoResult;
use crate::models::{CommonTeammateRow, PlayerRow, TeammateRow};

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryPlayerGraph;
pub use players::PlayerRepo;

/// Query gateway over the player graph.
///
/// Every method is a single read; implementations hold no per-request state.
#[async_trait]
pub trait PlayerGraph: Send + Sync {
    async fn find_player(&self, name: &str) -> RepoResult<Option<PlayerRow>>;

    /// All `PLAYED_TOGETHER` edges touching `name`, one row per edge.
    async fn list_teammates(&self, name: &str) -> RepoResult<Vec<TeammateRow>>;

    /// Edges between each player related to *every* name in `players` and
    /// the members of `players` it is related to.
    async fn list_common_teammates(&self, players: &[String])
        -> RepoResult<Vec<CommonTeammateRow>>;

    /// Cheapest possible round-trip.
    async fn ping(&self) -> RepoResult<()>;
}
