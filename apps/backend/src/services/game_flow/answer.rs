use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::info;

use super::GameFlowService;
use crate::domain;
use crate::entities::questions::AnswerKey;
use crate::entities::rooms::RoomStatus;
use crate::error::AppError;
use crate::errors::domain::{
    ConflictKind, DomainError, ForbiddenKind, InfraErrorKind, ValidationKind,
};
use crate::repos::{
    player_answers, players as players_repo, room_questions as room_questions_repo,
    rooms as rooms_repo,
};

/// Result of recording an answer, echoed back to the submitting client.
#[derive(Debug, Clone, Copy)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub points: i32,
}

impl GameFlowService {
    /// Record the caller's answer to the current question.
    ///
    /// Scoring uses the full-precision elapsed time against the question
    /// clock. Never advances the room; advancement belongs exclusively to
    /// the poll path.
    pub async fn submit_answer(
        &self,
        txn: &DatabaseTransaction,
        room_code: &str,
        session_key: &str,
        raw_answer: &str,
        now: OffsetDateTime,
    ) -> Result<AnswerOutcome, AppError> {
        let room = rooms_repo::require_by_code(txn, room_code).await?;

        let player = players_repo::find_by_session(txn, room.id, session_key)
            .await?
            .ok_or_else(|| {
                DomainError::forbidden(ForbiddenKind::NotInRoom, "you are not in this room")
            })?;

        if room.status != RoomStatus::Playing {
            return Err(DomainError::validation(
                ValidationKind::GameNotPlaying,
                "game is not currently playing",
            )
            .into());
        }

        let answer = AnswerKey::parse(raw_answer).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidOption,
                format!("{raw_answer:?} is not one of a, b, c or d"),
            )
        })?;

        let sequence = room_questions_repo::list_with_questions(txn, room.id).await?;
        let idx = room.current_question_index.max(0) as usize;
        let (room_question, question) = sequence.get(idx).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::QuestionsExhausted,
                "no question left to answer",
            )
        })?;

        let started_at = room.question_started_at.ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("room {} is playing without a question clock", room.id),
            )
        })?;
        let elapsed = now - started_at;
        if !domain::within_answer_window(elapsed) {
            return Err(
                DomainError::validation(ValidationKind::TimeExpired, "time is up").into(),
            );
        }

        if player_answers::find_for(txn, player.id, room_question.id)
            .await?
            .is_some()
        {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyAnswered,
                "player already answered this question",
            )
            .into());
        }

        let is_correct = answer == question.correct;
        let points = domain::answer_points(elapsed, is_correct);

        player_answers::create(
            txn,
            player.id,
            room_question.id,
            answer,
            is_correct,
            points,
            now,
        )
        .await?;

        if points > 0 {
            players_repo::add_score(txn, player.id, points).await?;
        }

        info!(
            room_id = room.id,
            player_id = player.id,
            answer = answer.as_str(),
            is_correct,
            points,
            "Answer recorded"
        );

        Ok(AnswerOutcome { is_correct, points })
    }
}
