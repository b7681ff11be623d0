use diesel::{pg::Pg, prelude::*};
use diesel_async::RunQueryDsl;

use super::Database;
use crate::{
    error::StatsError, models::Player, ranking::SortKey, schema::players, store::PlayerStore,
};

fn top_players_query(sort_key: SortKey, limit: i64) -> players::BoxedQuery<'static, Pg> {
    let query = players::table.into_boxed();

    let query = match sort_key {
        SortKey::Experience => query.order((players::experience.desc(), players::id.asc())),
        SortKey::Level => query.order((players::level.desc(), players::id.asc())),
        SortKey::Kills => query.order((players::kills.desc(), players::id.asc())),
        SortKey::Deaths => query.order((players::deaths.desc(), players::id.asc())),
        SortKey::Wins => query.order((players::wins.desc(), players::id.asc())),
        SortKey::GamesPlayed => query.order((players::games_played.desc(), players::id.asc())),
        SortKey::BedsBroken => query.order((players::beds_broken.desc(), players::id.asc())),
        SortKey::Coins => query.order((players::coins.desc(), players::id.asc())),
        SortKey::Reputation => query.order((players::reputation.desc(), players::id.asc())),
    };

    query.limit(limit)
}

fn all_players_query() -> players::BoxedQuery<'static, Pg> {
    players::table.into_boxed().order(players::id.asc())
}

impl PlayerStore for Database {
    async fn top_players(&self, sort_key: SortKey, limit: i64) -> Result<Vec<Player>, StatsError> {
        let mut conn = self.get().await?;

        Ok(top_players_query(sort_key, limit)
            .select(Player::as_select())
            .load(&mut conn)
            .await?)
    }

    async fn all_players(&self) -> Result<Vec<Player>, StatsError> {
        let mut conn = self.get().await?;

        Ok(all_players_query()
            .select(Player::as_select())
            .load(&mut conn)
            .await?)
    }
}
