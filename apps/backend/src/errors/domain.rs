//! Domain-level error type used across services and repos.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation,
//! which also fixes the status code and wire error code per kind.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Input or game-state precondition failures (HTTP 400)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    MissingName,
    MissingCode,
    InvalidOption,
    AlreadyStarted,
    GameNotPlaying,
    NotEnoughPlayers,
    TimeExpired,
    QuestionsExhausted,
    Other(String),
}

/// Authorization failures (HTTP 403)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ForbiddenKind {
    NotHost,
    NotInRoom,
}

/// Semantic conflicts (HTTP 409)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    AlreadyAnswered,
    JoinCodeConflict,
    ConcurrentUpdate,
    Other(String),
}

/// Missing resources in domain terms (HTTP 404)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Room,
    Player,
    Question,
    Other(String),
}

/// Infrastructure and operational failures (HTTP 5xx)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    DataCorruption,
    EmptyQuestionBank,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or game-state precondition violation
    Validation(ValidationKind, String),
    /// Caller lacks the right to perform the operation
    Forbidden(ForbiddenKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Forbidden(kind, d) => write!(f, "forbidden {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn forbidden(kind: ForbiddenKind, detail: impl Into<String>) -> Self {
        Self::Forbidden(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        use sea_orm::{DbErr, SqlErr};

        // Unique violations surface as conflicts; repos that know which
        // constraint fired refine the kind before this fallback runs.
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
            return Self::conflict(ConflictKind::Other("unique".to_owned()), detail);
        }

        match e {
            DbErr::RecordNotFound(detail) => {
                Self::not_found(NotFoundKind::Other("record".to_owned()), detail)
            }
            DbErr::ConnectionAcquire(err) => {
                Self::infra(InfraErrorKind::DbUnavailable, err.to_string())
            }
            DbErr::Conn(err) => Self::infra(InfraErrorKind::DbUnavailable, err.to_string()),
            other => Self::infra(InfraErrorKind::Other("db".to_owned()), other.to_string()),
        }
    }
}
