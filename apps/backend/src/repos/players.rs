use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entities::players;
use crate::errors::domain::DomainError;

pub async fn find_by_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    session_key: &str,
) -> Result<Option<players::Model>, DomainError> {
    Ok(players::Entity::find()
        .filter(players::Column::RoomId.eq(room_id))
        .filter(players::Column::SessionKey.eq(session_key))
        .one(conn)
        .await?)
}

/// Players of a room ranked for the leaderboard: score descending, join
/// order as the tie-break so ties stay stable across polls.
pub async fn list_ranked<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Vec<players::Model>, DomainError> {
    Ok(players::Entity::find()
        .filter(players::Column::RoomId.eq(room_id))
        .order_by_desc(players::Column::Score)
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await?)
}

pub async fn count_in_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<u64, DomainError> {
    Ok(players::Entity::find()
        .filter(players::Column::RoomId.eq(room_id))
        .count(conn)
        .await?)
}

pub async fn create(
    txn: &DatabaseTransaction,
    room_id: i64,
    name: &str,
    session_key: &str,
) -> Result<players::Model, DomainError> {
    let player = players::ActiveModel {
        id: NotSet,
        room_id: Set(room_id),
        name: Set(name.to_owned()),
        score: Set(0),
        session_key: Set(session_key.to_owned()),
        created_at: Set(OffsetDateTime::now_utc()),
    };
    Ok(player.insert(txn).await?)
}

/// Update the display name of an existing player (re-join with a new name).
pub async fn rename(
    txn: &DatabaseTransaction,
    player_id: i64,
    name: &str,
) -> Result<(), DomainError> {
    players::Entity::update_many()
        .col_expr(players::Column::Name, Expr::val(name).into())
        .filter(players::Column::Id.eq(player_id))
        .exec(txn)
        .await?;
    Ok(())
}

/// Add points to a player's cumulative score in place.
pub async fn add_score(
    txn: &DatabaseTransaction,
    player_id: i64,
    points: i32,
) -> Result<(), DomainError> {
    players::Entity::update_many()
        .col_expr(
            players::Column::Score,
            Expr::col(players::Column::Score).add(points),
        )
        .filter(players::Column::Id.eq(player_id))
        .exec(txn)
        .await?;
    Ok(())
}
