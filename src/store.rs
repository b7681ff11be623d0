use std::future::Future;

use crate::{error::StatsError, models::Player, ranking::SortKey};

/// Read access to the persisted player records.
pub trait PlayerStore: Send + Sync + 'static {
    /// At most `limit` players, ordered by `sort_key` descending and then by id.
    fn top_players(
        &self,
        sort_key: SortKey,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<Player>, StatsError>> + Send;

    /// Every player, ordered by id.
    fn all_players(&self) -> impl Future<Output = Result<Vec<Player>, StatsError>> + Send;
}
