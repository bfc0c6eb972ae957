//! Room lifecycle: creation and joining.

use sea_orm::DatabaseTransaction;
use tracing::info;

use crate::domain::rules::{DEFAULT_NUM_QUESTIONS, MAX_NUM_QUESTIONS, MIN_NUM_QUESTIONS};
use crate::entities::rooms::{self, RoomStatus};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::repos::{players, rooms as rooms_repo};
use crate::utils::join_code::generate_join_code;

/// Attempts to find an unused join code before giving up.
const MAX_CODE_ATTEMPTS: usize = 8;

/// Room lifecycle service.
pub struct RoomService;

impl RoomService {
    pub fn new() -> Self {
        Self
    }

    /// Create a room with the caller as host, plus the host's player row.
    ///
    /// The caller-supplied question count is clamped rather than rejected;
    /// omitting it gets the default.
    pub async fn create_room(
        &self,
        txn: &DatabaseTransaction,
        session_key: &str,
        name: &str,
        num_questions: Option<i32>,
    ) -> Result<rooms::Model, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(
                DomainError::validation(ValidationKind::MissingName, "a display name is required")
                    .into(),
            );
        }

        let num_questions = num_questions
            .unwrap_or(DEFAULT_NUM_QUESTIONS)
            .clamp(MIN_NUM_QUESTIONS, MAX_NUM_QUESTIONS);

        // Codes collide rarely (32^5 space); probe a handful before failing.
        // A collision between the existence check and the insert still trips
        // the unique constraint and surfaces as a conflict the client can
        // retry.
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_join_code();
            if rooms_repo::code_exists(txn, &code).await? {
                continue;
            }

            let room = rooms_repo::create(txn, &code, session_key, num_questions).await?;
            players::create(txn, room.id, name, session_key).await?;

            info!(room_id = room.id, code = %room.code, num_questions, "Room created");
            return Ok(room);
        }

        Err(DomainError::conflict(
            ConflictKind::JoinCodeConflict,
            format!("no unused join code found in {MAX_CODE_ATTEMPTS} attempts"),
        )
        .into())
    }

    /// Join a waiting room by code, or re-join one the caller is already in.
    ///
    /// Re-joining updates the display name instead of adding a second
    /// player for the same browser session.
    pub async fn join_room(
        &self,
        txn: &DatabaseTransaction,
        session_key: &str,
        name: &str,
        code: &str,
    ) -> Result<rooms::Model, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(
                DomainError::validation(ValidationKind::MissingName, "a display name is required")
                    .into(),
            );
        }
        let code = code.trim().to_ascii_uppercase();
        if code.is_empty() {
            return Err(
                DomainError::validation(ValidationKind::MissingCode, "a join code is required")
                    .into(),
            );
        }

        let room = rooms_repo::find_by_code(txn, &code).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Room, format!("room {code} not found"))
        })?;

        if room.status != RoomStatus::Waiting {
            return Err(DomainError::validation(
                ValidationKind::AlreadyStarted,
                "game already started",
            )
            .into());
        }

        match players::find_by_session(txn, room.id, session_key).await? {
            Some(player) => {
                players::rename(txn, player.id, name).await?;
            }
            None => {
                players::create(txn, room.id, name, session_key).await?;
            }
        }

        info!(room_id = room.id, code = %room.code, "Player joined room");
        Ok(room)
    }
}

impl Default for RoomService {
    fn default() -> Self {
        Self::new()
    }
}
