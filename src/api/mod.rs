use axum::response::IntoResponse;
use http::StatusCode;

pub mod leaderboard;
pub mod stats;

pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}
