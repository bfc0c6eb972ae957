use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use crate::entities::{questions, room_questions};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Persist the drawn questions as the room's fixed, ordered sequence.
///
/// Order values are dense from 0 in draw order. The sequence is written
/// once at game start and never mutated afterward.
pub async fn create_for_room(
    txn: &DatabaseTransaction,
    room_id: i64,
    question_ids: &[i64],
) -> Result<(), DomainError> {
    let rows: Vec<room_questions::ActiveModel> = question_ids
        .iter()
        .enumerate()
        .map(|(i, question_id)| room_questions::ActiveModel {
            id: NotSet,
            room_id: Set(room_id),
            question_id: Set(*question_id),
            order_no: Set(i as i32),
        })
        .collect();

    room_questions::Entity::insert_many(rows).exec(txn).await?;
    Ok(())
}

/// The room's question sequence joined with the bank rows, in play order.
pub async fn list_with_questions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Vec<(room_questions::Model, questions::Model)>, DomainError> {
    let rows = room_questions::Entity::find()
        .filter(room_questions::Column::RoomId.eq(room_id))
        .find_also_related(questions::Entity)
        .order_by_asc(room_questions::Column::OrderNo)
        .all(conn)
        .await?;

    rows.into_iter()
        .map(|(rq, question)| {
            let id = rq.id;
            question.map(|q| (rq, q)).ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("room question {id} has no bank question"),
                )
            })
        })
        .collect()
}
