use actix_web::http::StatusCode;

use crate::error::AppError;
use crate::errors::domain::{
    ConflictKind, DomainError, ForbiddenKind, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;

fn app(err: DomainError) -> AppError {
    err.into()
}

#[test]
fn validation_kinds_map_to_400_with_their_own_codes() {
    let cases = [
        (ValidationKind::MissingName, ErrorCode::MissingName),
        (ValidationKind::AlreadyStarted, ErrorCode::AlreadyStarted),
        (ValidationKind::GameNotPlaying, ErrorCode::GameNotPlaying),
        (ValidationKind::NotEnoughPlayers, ErrorCode::NotEnoughPlayers),
        (ValidationKind::TimeExpired, ErrorCode::TimeExpired),
        (ValidationKind::InvalidOption, ErrorCode::InvalidOption),
    ];
    for (kind, code) in cases {
        let err = app(DomainError::validation(kind, "nope"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), code);
    }
}

#[test]
fn authorization_failures_map_to_403() {
    let err = app(DomainError::forbidden(ForbiddenKind::NotHost, "not yours"));
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
    assert_eq!(err.code(), ErrorCode::NotHost);

    let err = app(DomainError::forbidden(ForbiddenKind::NotInRoom, "stranger"));
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
    assert_eq!(err.code(), ErrorCode::NotInRoom);
}

#[test]
fn duplicate_answers_map_to_409() {
    let err = app(DomainError::conflict(
        ConflictKind::AlreadyAnswered,
        "twice",
    ));
    assert_eq!(err.status(), StatusCode::CONFLICT);
    assert_eq!(err.code(), ErrorCode::AlreadyAnswered);
}

#[test]
fn missing_room_maps_to_404() {
    let err = app(DomainError::not_found(NotFoundKind::Room, "no such code"));
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.code(), ErrorCode::RoomNotFound);
}

#[test]
fn empty_question_bank_is_a_server_error() {
    let err = app(DomainError::infra(
        InfraErrorKind::EmptyQuestionBank,
        "bank is empty",
    ));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.code(), ErrorCode::EmptyQuestionBank);
}

#[test]
fn error_codes_render_screaming_snake_case() {
    assert_eq!(ErrorCode::AlreadyAnswered.as_str(), "ALREADY_ANSWERED");
    assert_eq!(ErrorCode::EmptyQuestionBank.to_string(), "EMPTY_QUESTION_BANK");
}
