use diesel_async::{
    pooled_connection::{
        deadpool::{Object, Pool},
        AsyncDieselConnectionManager,
    },
    AsyncPgConnection,
};

use crate::error::StatsError;

pub mod players;

type DatabaseConnection = Object<AsyncPgConnection>;

pub struct Database {
    backend: Pool<AsyncPgConnection>,
}

impl Database {
    async fn get(&self) -> Result<DatabaseConnection, StatsError> {
        Ok(self.backend.get().await?)
    }

    pub fn new(url: String) -> Self {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(url);

        let pool = Pool::builder(manager)
            .build()
            .expect("Failed to create connection pool");

        Self { backend: pool }
    }
}
