use std::collections::BTreeSet;

use indexmap::{map::Entry, IndexMap};
use infra::models::{CommonTeammateRow, TeammateRow};

use super::history::history_or_empty;
use super::types::{
    Club, CommonTeammateClub, CommonTeammateSummary, Player, TeammateClub, TeammateSummary,
};

/// Ordering applied to a teammate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeammateSort {
    /// Order in which the graph returned the teammates.
    #[default]
    Discovery,
    /// Most seasons together first; ties keep discovery order.
    Seasons,
}

impl TeammateSort {
    /// Only `"seasons"` selects a sort; anything else keeps discovery order.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("seasons") => TeammateSort::Seasons,
            _ => TeammateSort::Discovery,
        }
    }
}

/// Parameters for a one-hop teammate lookup (parsed by the resolver).
#[derive(Debug, Clone, Default)]
pub struct TeammateParams {
    pub sort: TeammateSort,
    /// Keep only this club. An empty string is no filter.
    pub club: Option<String>,
}

impl TeammateParams {
    fn club_filter(&self) -> Option<&str> {
        self.club.as_deref().filter(|c| !c.is_empty())
    }
}

#[derive(Default)]
struct TeammateAccumulator {
    clubs: Vec<TeammateClub>,
    season_count: usize,
}

/// Fold one-hop edge rows into per-teammate summaries.
///
/// Club entries are appended per edge and never merged, so a teammate linked
/// by two edges that both mention a club lists that club twice.
pub fn aggregate_teammates(
    rows: impl IntoIterator<Item = TeammateRow>,
    params: &TeammateParams,
) -> Vec<TeammateSummary> {
    let club_filter = params.club_filter();
    let mut teammates: IndexMap<String, TeammateAccumulator> = IndexMap::new();

    for row in rows {
        let history = history_or_empty(row.history.as_deref());
        let acc = teammates.entry(row.teammate).or_default();

        for (club, seasons) in history {
            if club_filter.is_some_and(|wanted| wanted != club) {
                continue;
            }
            acc.season_count += seasons.len();
            acc.clubs.push(TeammateClub {
                club: Club { name: club },
                seasons,
            });
        }
    }

    let mut teammates: Vec<(String, TeammateAccumulator)> = teammates.into_iter().collect();

    if params.sort == TeammateSort::Seasons {
        // sort_by is stable
        teammates.sort_by(|(_, a), (_, b)| b.season_count.cmp(&a.season_count));
    }

    teammates
        .into_iter()
        .filter(|(_, acc)| club_filter.is_none() || !acc.clubs.is_empty())
        .map(|(name, acc)| TeammateSummary {
            player: Player { name },
            clubs: acc.clubs,
        })
        .collect()
}

struct CommonClubAccumulator {
    seasons: BTreeSet<String>,
    with_players: BTreeSet<String>,
}

/// Fold intersection rows into per-teammate summaries, merging each club's
/// seasons and partners across every row that mentions it.
pub fn aggregate_common_teammates(
    rows: impl IntoIterator<Item = CommonTeammateRow>,
) -> Vec<CommonTeammateSummary> {
    let mut teammates: IndexMap<String, IndexMap<String, CommonClubAccumulator>> =
        IndexMap::new();

    for row in rows {
        let history = history_or_empty(row.history.as_deref());
        let clubs = teammates.entry(row.teammate).or_default();

        for (club, seasons) in history {
            match clubs.entry(club) {
                Entry::Occupied(mut entry) => {
                    let acc = entry.get_mut();
                    acc.seasons.extend(seasons);
                    acc.with_players.insert(row.with_player.clone());
                }
                Entry::Vacant(entry) => {
                    entry.insert(CommonClubAccumulator {
                        seasons: seasons.into_iter().collect(),
                        with_players: BTreeSet::from([row.with_player.clone()]),
                    });
                }
            }
        }
    }

    teammates
        .into_iter()
        .map(|(name, clubs)| CommonTeammateSummary {
            player: Player { name },
            clubs: clubs
                .into_iter()
                .map(|(club, acc)| CommonTeammateClub {
                    club: Club { name: club },
                    seasons: acc.seasons.into_iter().collect(),
                    with_players: acc
                        .with_players
                        .into_iter()
                        .map(|name| Player { name })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

/// Names for an intersection lookup, or `None` when it cannot match anything:
/// it needs two or more names, and a null name never matches a node.
pub fn common_teammate_names(players: Vec<Option<String>>) -> Option<Vec<String>> {
    if players.len() < 2 {
        return None;
    }
    players.into_iter().collect()
}
