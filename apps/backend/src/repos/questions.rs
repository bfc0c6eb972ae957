use sea_orm::{ConnectionTrait, EntityTrait, QuerySelect};

use crate::entities::questions;
use crate::errors::domain::DomainError;

/// Ids of every question in the shared bank.
///
/// The bank is expected to stay small (hundreds of rows); sampling pulls
/// ids only and the selected rows are joined back per room.
pub async fn all_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<i64>, DomainError> {
    Ok(questions::Entity::find()
        .select_only()
        .column(questions::Column::Id)
        .into_tuple::<i64>()
        .all(conn)
        .await?)
}
