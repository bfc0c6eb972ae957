use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
    Code,
    Status,
    CurrentQuestionIndex,
    QuestionStartedAt,
    HostSession,
    NumQuestions,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    RoomId,
    Name,
    Score,
    SessionKey,
    CreatedAt,
}

#[derive(Iden)]
enum Questions {
    Table,
    Id,
    Text,
    OptionA,
    OptionB,
    OptionC,
    OptionD,
    Correct,
    Category,
}

#[derive(Iden)]
enum RoomQuestions {
    Table,
    Id,
    RoomId,
    QuestionId,
    OrderNo,
}

#[derive(Iden)]
enum PlayerAnswers {
    Table,
    Id,
    PlayerId,
    RoomQuestionId,
    Answer,
    IsCorrect,
    Points,
    AnsweredAt,
}

#[derive(Iden)]
enum RoomStatusEnum {
    #[iden = "room_status"]
    Type,
}

#[derive(Iden)]
enum AnswerKeyEnum {
    #[iden = "answer_key"]
    Type,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                PgType::create()
                    .as_enum(RoomStatusEnum::Type)
                    .values(["WAITING", "PLAYING", "FINISHED"])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                PgType::create()
                    .as_enum(AnswerKeyEnum::Type)
                    .values(["a", "b", "c", "d"])
                    .to_owned(),
            )
            .await?;

        // rooms
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Rooms::Code)
                            .string_len(8)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Rooms::Status)
                            .custom(RoomStatusEnum::Type)
                            .not_null()
                            .default("WAITING"),
                    )
                    .col(
                        ColumnDef::new(Rooms::CurrentQuestionIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Rooms::QuestionStartedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Rooms::HostSession).string().not_null())
                    .col(
                        ColumnDef::new(Rooms::NumQuestions)
                            .integer()
                            .not_null()
                            .default(10),
                    )
                    .col(
                        ColumnDef::new(Rooms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rooms::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::RoomId).big_integer().not_null())
                    .col(ColumnDef::new(Players::Name).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Players::Score)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Players::SessionKey).string().not_null())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_room_id")
                            .from(Players::Table, Players::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One player row per browser session per room.
        manager
            .create_index(
                Index::create()
                    .name("ux_players_room_session")
                    .table(Players::Table)
                    .col(Players::RoomId)
                    .col(Players::SessionKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // questions (shared bank)
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Questions::Text).string_len(500).not_null())
                    .col(ColumnDef::new(Questions::OptionA).string_len(200).not_null())
                    .col(ColumnDef::new(Questions::OptionB).string_len(200).not_null())
                    .col(ColumnDef::new(Questions::OptionC).string_len(200).not_null())
                    .col(ColumnDef::new(Questions::OptionD).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Questions::Correct)
                            .custom(AnswerKeyEnum::Type)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Questions::Category).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        // room_questions (per-room ordered snapshot of the bank)
        manager
            .create_table(
                Table::create()
                    .table(RoomQuestions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomQuestions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(RoomQuestions::RoomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RoomQuestions::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RoomQuestions::OrderNo).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_questions_room_id")
                            .from(RoomQuestions::Table, RoomQuestions::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_questions_question_id")
                            .from(RoomQuestions::Table, RoomQuestions::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Order values are dense from 0 and unique per room.
        manager
            .create_index(
                Index::create()
                    .name("ux_room_questions_room_order")
                    .table(RoomQuestions::Table)
                    .col(RoomQuestions::RoomId)
                    .col(RoomQuestions::OrderNo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // player_answers
        manager
            .create_table(
                Table::create()
                    .table(PlayerAnswers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlayerAnswers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(PlayerAnswers::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlayerAnswers::RoomQuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlayerAnswers::Answer)
                            .custom(AnswerKeyEnum::Type)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PlayerAnswers::IsCorrect).boolean().not_null())
                    .col(
                        ColumnDef::new(PlayerAnswers::Points)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PlayerAnswers::AnsweredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_answers_player_id")
                            .from(PlayerAnswers::Table, PlayerAnswers::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_answers_room_question_id")
                            .from(PlayerAnswers::Table, PlayerAnswers::RoomQuestionId)
                            .to(RoomQuestions::Table, RoomQuestions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one answer per (player, room_question); duplicate submits
        // must fail at the database, not just in application checks.
        manager
            .create_index(
                Index::create()
                    .name("ux_player_answers_player_question")
                    .table(PlayerAnswers::Table)
                    .col(PlayerAnswers::PlayerId)
                    .col(PlayerAnswers::RoomQuestionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Answer counts per question are polled on every state read.
        manager
            .create_index(
                Index::create()
                    .name("ix_player_answers_room_question")
                    .table(PlayerAnswers::Table)
                    .col(PlayerAnswers::RoomQuestionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerAnswers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RoomQuestions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_type(PgType::drop().name(AnswerKeyEnum::Type).to_owned())
            .await?;
        manager
            .drop_type(PgType::drop().name(RoomStatusEnum::Type).to_owned())
            .await?;

        Ok(())
    }
}
