use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_derive::{Deserialize, Serialize};

use crate::{
    error::{ErrorKind, StatsError},
    models::LeaderboardPlayer,
    ranking::{parse_limit, parse_sort_key, rank},
    store::PlayerStore,
};

#[derive(Deserialize, Serialize, Default, Debug)]
pub struct LeaderboardQuery {
    pub sort: Option<String>,
    pub limit: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct LeaderboardResponse {
    pub success: bool,
    pub players: Vec<LeaderboardPlayer>,
    pub total: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
}

/// Keeps the leaderboard body shape (`players`, `total`) on failures.
pub struct LeaderboardError(StatsError);

impl From<StatsError> for LeaderboardError {
    fn from(e: StatsError) -> Self {
        Self(e)
    }
}

impl IntoResponse for LeaderboardError {
    fn into_response(self) -> Response {
        let LeaderboardError(e) = self;
        error!("{}", e);

        let body = Json(LeaderboardResponse {
            success: false,
            players: Vec::new(),
            total: 0,
            error: Some(e.to_string()),
            kind: Some(e.kind()),
        });

        (e.status_code(), body).into_response()
    }
}

pub async fn leaderboard<S: PlayerStore>(
    State(store): State<Arc<S>>,
    query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> Result<impl IntoResponse, LeaderboardError> {
    let Query(query) = query.map_err(StatsError::from)?;
    let sort_key = parse_sort_key(query.sort.as_deref())?;
    let limit = parse_limit(query.limit.as_deref())?;

    let players: Vec<LeaderboardPlayer> = rank(store.as_ref(), sort_key, limit)
        .await?
        .into_iter()
        .map(LeaderboardPlayer::from)
        .collect();

    Ok(Json(LeaderboardResponse {
        success: true,
        total: players.len(),
        players,
        error: None,
        kind: None,
    }))
}
