use async_graphql::SimpleObject;

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
}

impl From<infra::models::PlayerRow> for Player {
    fn from(row: infra::models::PlayerRow) -> Self {
        Self { name: row.name }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Club {
    pub name: String,
}

/// Seasons two players spent together at one club, as stored on one edge.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct TeammateClub {
    pub club: Club,
    pub seasons: Vec<String>,
}

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct TeammateSummary {
    pub player: Player,
    pub clubs: Vec<TeammateClub>,
}

/// Seasons at one club merged across every requested player the teammate
/// shared it with.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct CommonTeammateClub {
    pub club: Club,
    pub seasons: Vec<String>,
    pub with_players: Vec<Player>,
}

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct CommonTeammateSummary {
    pub player: Player,
    pub clubs: Vec<CommonTeammateClub>,
}
