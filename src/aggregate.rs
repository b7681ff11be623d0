use std::collections::BTreeMap;

use serde::{ser::SerializeMap, Serializer};
use serde_derive::Serialize;

use crate::{
    error::StatsError,
    models::{MostReputablePlayer, Player, RichestPlayer, TopPlayer},
    ranking::{self, SortKey},
    store::PlayerStore,
    utils::{group_by_level_bucket, level_bucket_label},
};

/// How many players each of the top player charts shows.
pub const CHART_SIZE: i64 = 10;

#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_players: i64,
    pub total_kills: i64,
    pub total_deaths: i64,
    pub total_games: i64,
    pub total_wins: i64,
    pub total_beds_broken: i64,
    pub total_coins: i64,
    pub total_reputation: i64,
    pub average_level: i64,
    pub average_coins: i64,
    pub average_reputation: i64,
    pub top_player: Option<TopPlayer>,
    pub richest_player: Option<RichestPlayer>,
    pub most_reputable_player: Option<MostReputablePlayer>,
}

#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Chart {
    pub labels: Vec<String>,
    pub data: Vec<i32>,
}

impl Chart {
    fn from_ranking(players: &[Player], sort_key: SortKey) -> Self {
        Self {
            labels: players.iter().map(|p| p.nickname.clone()).collect(),
            data: players.iter().map(|p| sort_key.value_of(p)).collect(),
        }
    }
}

/// Player counts keyed by the first level of each bucket.
///
/// Serialized as a map from bucket label (`"10-19"`) to count, in level order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LevelDistribution(pub BTreeMap<i32, u64>);

impl serde::Serialize for LevelDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (start, count) in &self.0 {
            map.serialize_entry(&level_bucket_label(*start), count)?;
        }
        map.end()
    }
}

#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Charts {
    pub top_players_exp: Chart,
    pub top_players_kills: Chart,
    pub player_levels: LevelDistribution,
}

#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub stats: StatsSummary,
    pub charts: Charts,
}

fn total(players: &[Player], field: impl Fn(&Player) -> i32) -> i64 {
    players.iter().map(|p| i64::from(field(p))).sum()
}

/// Integer mean truncated toward zero, zero for an empty set.
fn mean(sum: i64, count: i64) -> i64 {
    if count == 0 {
        0
    } else {
        sum / count
    }
}

fn best_by(players: &[Player], sort_key: SortKey) -> Option<&Player> {
    players.iter().min_by(|a, b| sort_key.compare(a, b))
}

pub fn summarize(players: &[Player]) -> StatsSummary {
    let total_players = players.len() as i64;
    let total_levels = total(players, |p| p.level);
    let total_coins = total(players, |p| p.coins);
    let total_reputation = total(players, |p| p.reputation);

    StatsSummary {
        total_players,
        total_kills: total(players, |p| p.kills),
        total_deaths: total(players, |p| p.deaths),
        total_games: total(players, |p| p.games_played),
        total_wins: total(players, |p| p.wins),
        total_beds_broken: total(players, |p| p.beds_broken),
        total_coins,
        total_reputation,
        average_level: mean(total_levels, total_players),
        average_coins: mean(total_coins, total_players),
        average_reputation: mean(total_reputation, total_players),
        top_player: best_by(players, SortKey::Experience).map(|p| TopPlayer {
            nickname: p.nickname.clone(),
            experience: p.experience,
            level: p.level,
        }),
        richest_player: best_by(players, SortKey::Coins).map(|p| RichestPlayer {
            nickname: p.nickname.clone(),
            coins: p.coins,
        }),
        most_reputable_player: best_by(players, SortKey::Reputation).map(|p| {
            MostReputablePlayer {
                nickname: p.nickname.clone(),
                reputation: p.reputation,
            }
        }),
    }
}

/// Totals, averages, superlatives and chart data over every stored player.
pub async fn aggregate<S: PlayerStore>(store: &S) -> Result<StatsReport, StatsError> {
    let (players, top_exp, top_kills) = tokio::try_join!(
        store.all_players(),
        ranking::rank(store, SortKey::Experience, CHART_SIZE),
        ranking::rank(store, SortKey::Kills, CHART_SIZE),
    )?;

    debug!("Aggregating statistics over {} players", players.len());

    Ok(StatsReport {
        stats: summarize(&players),
        charts: Charts {
            top_players_exp: Chart::from_ranking(&top_exp, SortKey::Experience),
            top_players_kills: Chart::from_ranking(&top_kills, SortKey::Kills),
            player_levels: LevelDistribution(group_by_level_bucket(players.iter())),
        },
    })
}
