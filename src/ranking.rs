use std::{cmp::Ordering, fmt, num::IntErrorKind, str::FromStr};

use crate::{error::StatsError, models::Player, store::PlayerStore};

pub const DEFAULT_LIMIT: i64 = 50;
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 100;

/// Numeric player columns a leaderboard can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Experience,
    Level,
    Kills,
    Deaths,
    Wins,
    GamesPlayed,
    BedsBroken,
    Coins,
    Reputation,
}

impl SortKey {
    pub const ALL: [SortKey; 9] = [
        SortKey::Experience,
        SortKey::Level,
        SortKey::Kills,
        SortKey::Deaths,
        SortKey::Wins,
        SortKey::GamesPlayed,
        SortKey::BedsBroken,
        SortKey::Coins,
        SortKey::Reputation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Experience => "experience",
            SortKey::Level => "level",
            SortKey::Kills => "kills",
            SortKey::Deaths => "deaths",
            SortKey::Wins => "wins",
            SortKey::GamesPlayed => "games_played",
            SortKey::BedsBroken => "beds_broken",
            SortKey::Coins => "coins",
            SortKey::Reputation => "reputation",
        }
    }

    pub fn value_of(&self, player: &Player) -> i32 {
        match self {
            SortKey::Experience => player.experience,
            SortKey::Level => player.level,
            SortKey::Kills => player.kills,
            SortKey::Deaths => player.deaths,
            SortKey::Wins => player.wins,
            SortKey::GamesPlayed => player.games_played,
            SortKey::BedsBroken => player.beds_broken,
            SortKey::Coins => player.coins,
            SortKey::Reputation => player.reputation,
        }
    }

    /// Leaderboard order: higher values first, lower ids first on ties.
    pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
        self.value_of(b)
            .cmp(&self.value_of(a))
            .then_with(|| a.id.cmp(&b.id))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| StatsError::InvalidSortKey(s.to_string()))
    }
}

/// Resolves the optional `sort` query parameter.
pub fn parse_sort_key(raw: Option<&str>) -> Result<SortKey, StatsError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(SortKey::default()),
        Some(key) => key.parse(),
    }
}

pub fn clamp_limit(limit: i64) -> i64 {
    limit.clamp(MIN_LIMIT, MAX_LIMIT)
}

/// Resolves the optional `limit` query parameter into an effective limit.
///
/// Integers outside of `i64` are clamped like any other out of range value,
/// anything that isn't an integer is rejected.
pub fn parse_limit(raw: Option<&str>) -> Result<i64, StatsError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_LIMIT),
        Some(raw) => raw,
    };

    match raw.parse::<i64>() {
        Ok(limit) => Ok(clamp_limit(limit)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(MAX_LIMIT),
            IntErrorKind::NegOverflow => Ok(MIN_LIMIT),
            _ => Err(StatsError::InvalidLimit(raw.to_string())),
        },
    }
}

/// The top `limit` players by `sort_key`.
pub async fn rank<S: PlayerStore>(
    store: &S,
    sort_key: SortKey,
    limit: i64,
) -> Result<Vec<Player>, StatsError> {
    let limit = clamp_limit(limit);

    let mut players = store.top_players(sort_key, limit).await?;

    players.sort_by(|a, b| sort_key.compare(a, b));
    players.truncate(limit as usize);

    debug!(
        "Ranked {} players by {} (limit {})",
        players.len(),
        sort_key,
        limit
    );

    Ok(players)
}
