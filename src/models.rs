use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};

use crate::schema::players;

#[derive(Queryable, Selectable, Clone, Debug, Default, PartialEq, Eq)]
#[diesel(table_name = players)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Player {
    pub id: i32,
    pub nickname: String,
    pub level: i32,
    pub experience: i32,
    pub kills: i32,
    pub deaths: i32,
    pub wins: i32,
    pub games_played: i32,
    pub beds_broken: i32,
    pub coins: i32,
    pub reputation: i32,
}

/// Divides `numerator` by `denominator`, treating any denominator below 1 as 1
/// and any negative numerator as 0.
fn guarded_ratio(numerator: i32, denominator: i32) -> f64 {
    f64::from(numerator.max(0)) / f64::from(denominator.max(1))
}

impl Player {
    pub fn kd_ratio(&self) -> f64 {
        guarded_ratio(self.kills, self.deaths)
    }

    pub fn win_rate(&self) -> f64 {
        guarded_ratio(self.wins, self.games_played)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeaderboardPlayer {
    pub id: i32,
    pub nickname: String,
    pub level: i32,
    pub experience: i32,
    pub kills: i32,
    pub deaths: i32,
    pub wins: i32,
    pub games_played: i32,
    pub kd_ratio: f64,
    pub win_rate: f64,
}

impl From<Player> for LeaderboardPlayer {
    fn from(player: Player) -> Self {
        let kd_ratio = player.kd_ratio();
        let win_rate = player.win_rate();

        Self {
            id: player.id,
            nickname: player.nickname,
            level: player.level,
            experience: player.experience,
            kills: player.kills,
            deaths: player.deaths,
            wins: player.wins,
            games_played: player.games_played,
            kd_ratio,
            win_rate,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TopPlayer {
    pub nickname: String,
    pub experience: i32,
    pub level: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RichestPlayer {
    pub nickname: String,
    pub coins: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MostReputablePlayer {
    pub nickname: String,
    pub reputation: i32,
}
