use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::{aggregate::aggregate, error::StatsError, store::PlayerStore};

pub async fn stats<S: PlayerStore>(
    State(store): State<Arc<S>>,
) -> Result<impl IntoResponse, StatsError> {
    Ok(Json(aggregate(store.as_ref()).await?))
}
