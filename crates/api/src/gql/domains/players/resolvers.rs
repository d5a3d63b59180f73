use async_graphql::{Context, Object, Result};

use crate::gql::error::GqlError;
use crate::state::AppState;

use super::service::{
    aggregate_common_teammates, aggregate_teammates, common_teammate_names, TeammateParams,
    TeammateSort,
};
use super::types::{CommonTeammateSummary, Player, TeammateSummary};

#[derive(Default)]
pub struct PlayerQuery;

#[Object]
impl PlayerQuery {
    /// Look up a player by exact name. Unknown names resolve to null.
    async fn player(&self, ctx: &Context<'_>, name: String) -> Result<Option<Player>> {
        let state = ctx.data::<AppState>()?;
        let row = state
            .graph
            .find_player(&name)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Player::from))
    }

    /// Everyone who shared a club with `name`.
    ///
    /// `sortBy: "seasons"` puts the longest partnerships first. `club`
    /// restricts the result to that club and drops teammates who never
    /// played there.
    async fn teammates(
        &self,
        ctx: &Context<'_>,
        name: String,
        sort_by: Option<String>,
        club: Option<String>,
    ) -> Result<Vec<TeammateSummary>> {
        let state = ctx.data::<AppState>()?;
        let params = TeammateParams {
            sort: TeammateSort::from_arg(sort_by.as_deref()),
            club,
        };

        let rows = state
            .graph
            .list_teammates(&name)
            .await
            .map_err(GqlError::from)?;
        tracing::debug!(player = %name, edges = rows.len(), "Fetched teammate edges");

        Ok(aggregate_teammates(rows, &params))
    }

    /// Players who shared a club with every one of `players`.
    async fn common_teammates(
        &self,
        ctx: &Context<'_>,
        players: Vec<Option<String>>,
    ) -> Result<Vec<CommonTeammateSummary>> {
        let Some(players) = common_teammate_names(players) else {
            return Ok(Vec::new());
        };
        let state = ctx.data::<AppState>()?;

        let rows = state
            .graph
            .list_common_teammates(&players)
            .await
            .map_err(GqlError::from)?;
        tracing::debug!(
            players = ?players,
            edges = rows.len(),
            "Fetched common teammate edges"
        );

        Ok(aggregate_common_teammates(rows))
    }
}
