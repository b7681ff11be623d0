use http_body_util::BodyExt;

use axum::{body::Body, response::Response, Router};
use diesel::result::ConnectionError;
use http::{Request, StatusCode};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::{
    create_router, error::StatsError, models::Player, ranking::SortKey, store::PlayerStore,
    StatsConfig,
};

/// Player store backed by a vector, optionally failing every query.
#[derive(Default, Clone)]
pub struct MemoryStore {
    players: Vec<Player>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            players: Vec::new(),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<(), StatsError> {
        if self.unavailable {
            Err(ConnectionError::BadConnection(String::from("memory store is offline")).into())
        } else {
            Ok(())
        }
    }
}

impl PlayerStore for MemoryStore {
    async fn top_players(&self, sort_key: SortKey, limit: i64) -> Result<Vec<Player>, StatsError> {
        self.check()?;

        let mut players = self.players.clone();
        players.sort_by(|a, b| sort_key.compare(a, b));
        players.truncate(limit.max(0) as usize);

        Ok(players)
    }

    async fn all_players(&self) -> Result<Vec<Player>, StatsError> {
        self.check()?;

        let mut players = self.players.clone();
        players.sort_by_key(|p| p.id);

        Ok(players)
    }
}

async fn body_to_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = response.into_body().collect().await.unwrap().to_bytes();

    serde_json::from_slice(&body).unwrap()
}

async fn body_to_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();

    String::from_utf8(body.to_vec()).unwrap()
}

fn test_config() -> StatsConfig {
    StatsConfig {
        address: "localhost:8000".to_string(),
        database_url: "".to_string(),
        allowed_origin: Some("http://localhost:3000".to_string()),
    }
}

fn create_test_router(store: MemoryStore) -> Router {
    create_router(&test_config(), std::sync::Arc::new(store))
}

fn player(id: i32, nickname: &str) -> Player {
    Player {
        id,
        nickname: nickname.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn health() {
    let res = create_test_router(MemoryStore::default())
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK)
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let res = macros::oneshot_request!(MemoryStore::default(), GET, "/api/players");

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn allowed_origin_gets_cors_headers() {
    let res = create_test_router(MemoryStore::default())
        .oneshot(
            Request::builder()
                .uri("/api/leaderboard")
                .header(http::header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get(http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
}

#[test]
fn config_parses_from_toml() {
    let config: StatsConfig = toml::from_str(
        r#"
        address = "0.0.0.0:8000"
        database_url = "postgres://arenastats@localhost/arenastats"
        "#,
    )
    .unwrap();

    assert_eq!(config.address, "0.0.0.0:8000");
    assert!(config.allowed_origin.is_none());

    assert!(toml::from_str::<StatsConfig>("address = \"0.0.0.0:8000\"").is_err());
}
