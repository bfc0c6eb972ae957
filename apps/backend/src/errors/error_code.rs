//! Error codes for the Quizroom backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Display name missing or blank
    MissingName,
    /// Join code missing or blank
    MissingCode,
    /// Join code is not a valid room code
    InvalidRoomCode,
    /// Answer is not one of a/b/c/d
    InvalidOption,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Authorization
    /// Only the host may perform this operation
    NotHost,
    /// Caller is not a player in this room
    NotInRoom,

    // Game state preconditions
    /// Game has already been started
    AlreadyStarted,
    /// Game is not currently playing
    GameNotPlaying,
    /// Fewer players than the required minimum
    NotEnoughPlayers,
    /// Answer arrived after the question deadline
    TimeExpired,
    /// The room has no question left at the current index
    QuestionsExhausted,

    // Conflicts
    /// Player already answered the current question
    AlreadyAnswered,
    /// Could not allocate an unused join code
    JoinCodeConflict,
    /// Row was modified concurrently
    ConcurrentUpdate,
    /// General conflict error
    Conflict,

    // Resource not found
    /// Room not found
    RoomNotFound,
    /// Player not found
    PlayerNotFound,
    /// Question not found
    QuestionNotFound,
    /// General not found error
    NotFound,

    // Infrastructure
    /// Question bank has no questions to draw from
    EmptyQuestionBank,
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Stored state violates an invariant
    DataCorruption,
    /// Operation timed out
    Timeout,
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Canonical string form, as it appears in HTTP responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingName => "MISSING_NAME",
            ErrorCode::MissingCode => "MISSING_CODE",
            ErrorCode::InvalidRoomCode => "INVALID_ROOM_CODE",
            ErrorCode::InvalidOption => "INVALID_OPTION",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::NotHost => "NOT_HOST",
            ErrorCode::NotInRoom => "NOT_IN_ROOM",
            ErrorCode::AlreadyStarted => "ALREADY_STARTED",
            ErrorCode::GameNotPlaying => "GAME_NOT_PLAYING",
            ErrorCode::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            ErrorCode::TimeExpired => "TIME_EXPIRED",
            ErrorCode::QuestionsExhausted => "QUESTIONS_EXHAUSTED",
            ErrorCode::AlreadyAnswered => "ALREADY_ANSWERED",
            ErrorCode::JoinCodeConflict => "JOIN_CODE_CONFLICT",
            ErrorCode::ConcurrentUpdate => "CONCURRENT_UPDATE",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::RoomNotFound => "ROOM_NOT_FOUND",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::QuestionNotFound => "QUESTION_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::EmptyQuestionBank => "EMPTY_QUESTION_BANK",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::DataCorruption => "DATA_CORRUPTION",
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
