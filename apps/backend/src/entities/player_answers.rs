use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::questions::AnswerKey;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "player_answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "player_id")]
    pub player_id: i64,
    #[sea_orm(column_name = "room_question_id")]
    pub room_question_id: i64,
    pub answer: AnswerKey,
    #[sea_orm(column_name = "is_correct")]
    pub is_correct: bool,
    pub points: i32,
    #[sea_orm(column_name = "answered_at")]
    pub answered_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::room_questions::Entity",
        from = "Column::RoomQuestionId",
        to = "super::room_questions::Column::Id"
    )]
    RoomQuestion,
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::room_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomQuestion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
