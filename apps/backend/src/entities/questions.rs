use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One of the four labeled options on a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "answer_key")]
#[serde(rename_all = "lowercase")]
pub enum AnswerKey {
    #[sea_orm(string_value = "a")]
    A,
    #[sea_orm(string_value = "b")]
    B,
    #[sea_orm(string_value = "c")]
    C,
    #[sea_orm(string_value = "d")]
    D,
}

impl AnswerKey {
    /// Parse a caller-supplied option letter, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            "d" => Some(Self::D),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub text: String,
    #[sea_orm(column_name = "option_a")]
    pub option_a: String,
    #[sea_orm(column_name = "option_b")]
    pub option_b: String,
    #[sea_orm(column_name = "option_c")]
    pub option_c: String,
    #[sea_orm(column_name = "option_d")]
    pub option_d: String,
    pub correct: AnswerKey,
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room_questions::Entity")]
    RoomQuestions,
}

impl Related<super::room_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomQuestions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::AnswerKey;

    #[test]
    fn parse_accepts_any_case_and_surrounding_whitespace() {
        assert_eq!(AnswerKey::parse("b"), Some(AnswerKey::B));
        assert_eq!(AnswerKey::parse("B"), Some(AnswerKey::B));
        assert_eq!(AnswerKey::parse(" d "), Some(AnswerKey::D));
    }

    #[test]
    fn parse_rejects_anything_outside_the_four_options() {
        assert_eq!(AnswerKey::parse("e"), None);
        assert_eq!(AnswerKey::parse(""), None);
        assert_eq!(AnswerKey::parse("ab"), None);
    }
}
