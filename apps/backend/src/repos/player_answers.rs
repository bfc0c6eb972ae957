use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr,
};
use time::OffsetDateTime;

use crate::entities::questions::AnswerKey;
use crate::entities::{player_answers, players};
use crate::errors::domain::{ConflictKind, DomainError};

pub async fn find_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    room_question_id: i64,
) -> Result<Option<player_answers::Model>, DomainError> {
    Ok(player_answers::Entity::find()
        .filter(player_answers::Column::PlayerId.eq(player_id))
        .filter(player_answers::Column::RoomQuestionId.eq(room_question_id))
        .one(conn)
        .await?)
}

pub async fn count_for_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_question_id: i64,
) -> Result<u64, DomainError> {
    Ok(player_answers::Entity::find()
        .filter(player_answers::Column::RoomQuestionId.eq(room_question_id))
        .count(conn)
        .await?)
}

/// All answers for one question with the answering players, in submit order.
pub async fn list_with_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_question_id: i64,
) -> Result<Vec<(player_answers::Model, players::Model)>, DomainError> {
    let rows = player_answers::Entity::find()
        .filter(player_answers::Column::RoomQuestionId.eq(room_question_id))
        .find_also_related(players::Entity)
        .order_by_asc(player_answers::Column::Id)
        .all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(answer, player)| player.map(|p| (answer, p)))
        .collect())
}

/// Record an answer. Answers are immutable once written.
///
/// The (player, room_question) unique constraint is the real guard against
/// double-scoring; a violation here means the player answered concurrently
/// and surfaces as AlreadyAnswered.
pub async fn create(
    txn: &DatabaseTransaction,
    player_id: i64,
    room_question_id: i64,
    answer: AnswerKey,
    is_correct: bool,
    points: i32,
    now: OffsetDateTime,
) -> Result<player_answers::Model, DomainError> {
    let row = player_answers::ActiveModel {
        id: NotSet,
        player_id: Set(player_id),
        room_question_id: Set(room_question_id),
        answer: Set(answer),
        is_correct: Set(is_correct),
        points: Set(points),
        answered_at: Set(now),
    };

    row.insert(txn).await.map_err(|e| {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
            DomainError::conflict(
                ConflictKind::AlreadyAnswered,
                "player already answered this question",
            )
        } else {
            DomainError::from(e)
        }
    })
}
