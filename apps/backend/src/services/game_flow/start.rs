use rand::Rng;
use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::info;

use super::GameFlowService;
use crate::domain;
use crate::domain::rules::MIN_PLAYERS;
use crate::entities::rooms::{self, RoomStatus};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ForbiddenKind, InfraErrorKind, ValidationKind};
use crate::repos::{players, questions, room_questions, rooms as rooms_repo};

impl GameFlowService {
    /// Start the game in a waiting room.
    ///
    /// Draws the room's question sequence from the shared bank (uniform,
    /// without replacement, capped by bank size), persists it, and flips the
    /// room to playing with the first question's clock at `now`. The random
    /// source is injected so the draw is deterministic under test.
    pub async fn start_game<R: Rng + ?Sized>(
        &self,
        txn: &DatabaseTransaction,
        room_code: &str,
        session_key: &str,
        rng: &mut R,
        now: OffsetDateTime,
    ) -> Result<rooms::Model, AppError> {
        let room = rooms_repo::require_by_code(txn, room_code).await?;

        if room.host_session != session_key {
            return Err(DomainError::forbidden(
                ForbiddenKind::NotHost,
                "only the host can start the game",
            )
            .into());
        }

        if room.status != RoomStatus::Waiting {
            return Err(DomainError::validation(
                ValidationKind::AlreadyStarted,
                "game already started",
            )
            .into());
        }

        let player_count = players::count_in_room(txn, room.id).await?;
        if player_count < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::NotEnoughPlayers,
                format!("at least {MIN_PLAYERS} players required, room has {player_count}"),
            )
            .into());
        }

        let bank = questions::all_ids(txn).await?;
        let selected =
            domain::draw_question_ids(rng, &bank, room.num_questions.max(0) as usize);
        if selected.is_empty() {
            return Err(DomainError::infra(
                InfraErrorKind::EmptyQuestionBank,
                "question bank has no questions to draw from",
            )
            .into());
        }

        room_questions::create_for_room(txn, room.id, &selected).await?;
        let started = rooms_repo::start(txn, room.id, now).await?;

        info!(
            room_id = room.id,
            code = %room.code,
            questions = selected.len(),
            player_count,
            "Game started"
        );

        Ok(started)
    }
}
