//! Room lookups and guarded state transitions.

use sea_orm::sea_query::{Alias, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, Set,
};
use time::OffsetDateTime;

use crate::entities::rooms::{self, RoomStatus};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Option<rooms::Model>, DomainError> {
    Ok(rooms::Entity::find_by_id(room_id).one(conn).await?)
}

pub async fn require_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<rooms::Model, DomainError> {
    find_by_id(conn, room_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Room, format!("room {room_id} not found"))
    })
}

/// Find a room by its join code. Codes are stored uppercase; the caller
/// normalizes before lookup.
pub async fn find_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<Option<rooms::Model>, DomainError> {
    Ok(rooms::Entity::find()
        .filter(rooms::Column::Code.eq(code))
        .one(conn)
        .await?)
}

pub async fn require_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<rooms::Model, DomainError> {
    find_by_code(conn, code).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Room, format!("room {code} not found"))
    })
}

pub async fn code_exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<bool, DomainError> {
    Ok(find_by_code(conn, code).await?.is_some())
}

pub async fn create(
    txn: &DatabaseTransaction,
    code: &str,
    host_session: &str,
    num_questions: i32,
) -> Result<rooms::Model, DomainError> {
    let now = OffsetDateTime::now_utc();
    let room = rooms::ActiveModel {
        id: NotSet,
        code: Set(code.to_owned()),
        status: Set(RoomStatus::Waiting),
        current_question_index: Set(0),
        question_started_at: Set(None),
        host_session: Set(host_session.to_owned()),
        num_questions: Set(num_questions),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(room.insert(txn).await?)
}

/// Move a waiting room into play, with the clock starting at `now`.
///
/// Guarded on status so two concurrent starts cannot both succeed; the
/// loser's update matches no row and surfaces as AlreadyStarted.
pub async fn start(
    txn: &DatabaseTransaction,
    room_id: i64,
    now: OffsetDateTime,
) -> Result<rooms::Model, DomainError> {
    let result = rooms::Entity::update_many()
        .col_expr(
            rooms::Column::Status,
            Expr::val(RoomStatus::Playing).cast_as(Alias::new("room_status")),
        )
        .col_expr(rooms::Column::CurrentQuestionIndex, Expr::val(0).into())
        .col_expr(rooms::Column::QuestionStartedAt, Expr::val(now).into())
        .col_expr(rooms::Column::UpdatedAt, Expr::val(now).into())
        .filter(rooms::Column::Id.eq(room_id))
        .filter(rooms::Column::Status.eq(RoomStatus::Waiting))
        .exec(txn)
        .await?;

    if result.rows_affected == 0 {
        return Err(DomainError::validation(
            ValidationKind::AlreadyStarted,
            "game already started",
        ));
    }

    require_by_id(txn, room_id).await
}

/// Advance a playing room past an expired question, by exactly one step.
///
/// Compare-and-swap on the current index: when concurrent polls cross the
/// deadline together only one update matches, so a missed deadline advances
/// the room once. Returns `None` to the loser, who should re-read the room
/// instead of advancing again.
pub async fn advance_question(
    txn: &DatabaseTransaction,
    room_id: i64,
    from_index: i32,
    now: OffsetDateTime,
) -> Result<Option<rooms::Model>, DomainError> {
    let result = rooms::Entity::update_many()
        .col_expr(
            rooms::Column::CurrentQuestionIndex,
            Expr::val(from_index + 1).into(),
        )
        .col_expr(rooms::Column::QuestionStartedAt, Expr::val(now).into())
        .col_expr(rooms::Column::UpdatedAt, Expr::val(now).into())
        .filter(rooms::Column::Id.eq(room_id))
        .filter(rooms::Column::CurrentQuestionIndex.eq(from_index))
        .filter(rooms::Column::Status.eq(RoomStatus::Playing))
        .exec(txn)
        .await?;

    if result.rows_affected == 0 {
        return Ok(None);
    }
    Ok(Some(require_by_id(txn, room_id).await?))
}

/// Mark a playing room finished.
///
/// Idempotent: a room already finished by a concurrent poll is left
/// untouched.
pub async fn finish(
    txn: &DatabaseTransaction,
    room_id: i64,
    now: OffsetDateTime,
) -> Result<(), DomainError> {
    rooms::Entity::update_many()
        .col_expr(
            rooms::Column::Status,
            Expr::val(RoomStatus::Finished).cast_as(Alias::new("room_status")),
        )
        .col_expr(rooms::Column::UpdatedAt, Expr::val(now).into())
        .filter(rooms::Column::Id.eq(room_id))
        .filter(rooms::Column::Status.eq(RoomStatus::Playing))
        .exec(txn)
        .await?;
    Ok(())
}
