//! Game flow HTTP routes: start, poll, answer.

use actix_web::web;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::room_code::RoomCode;
use crate::extractors::session_key::SessionKey;
use crate::protocol::room_state::RoomStateBody;
use crate::services::game_flow::GameFlowService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
struct OkResponse {
    ok: bool,
}

#[derive(Debug, Serialize)]
struct AnswerResponse {
    ok: bool,
    is_correct: bool,
    points: i32,
}

/// POST /api/rooms/{code}/start
///
/// Host-only: draw the room's questions and start the first question's
/// clock.
async fn start_game(
    code: RoomCode,
    session: SessionKey,
    app_state: web::Data<AppState>,
) -> Result<web::Json<OkResponse>, AppError> {
    let now = OffsetDateTime::now_utc();

    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let mut rng = rand::rng();
            GameFlowService::new()
                .start_game(txn, &code.0, &session.0, &mut rng, now)
                .await
        })
    })
    .await?;

    Ok(web::Json(OkResponse { ok: true }))
}

/// GET /api/rooms/{code}/state
///
/// Poll endpoint driving the whole game loop. Phase transitions happen
/// lazily inside this call; see `GameFlowService::room_state`.
async fn room_state(
    code: RoomCode,
    session: SessionKey,
    app_state: web::Data<AppState>,
) -> Result<web::Json<RoomStateBody>, AppError> {
    let now = OffsetDateTime::now_utc();

    let body = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            GameFlowService::new()
                .room_state(txn, &code.0, &session.0, now)
                .await
        })
    })
    .await?;

    Ok(web::Json(body))
}

/// POST /api/rooms/{code}/answer
///
/// Record the caller's answer to the current question and echo the score.
async fn submit_answer(
    code: RoomCode,
    session: SessionKey,
    body: web::Json<AnswerRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<AnswerResponse>, AppError> {
    let now = OffsetDateTime::now_utc();
    let body = body.into_inner();

    let outcome = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            GameFlowService::new()
                .submit_answer(txn, &code.0, &session.0, &body.answer, now)
                .await
        })
    })
    .await?;

    Ok(web::Json(AnswerResponse {
        ok: true,
        is_correct: outcome.is_correct,
        points: outcome.points,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{code}/start").route(web::post().to(start_game)));
    cfg.service(web::resource("/{code}/state").route(web::get().to(room_state)));
    cfg.service(web::resource("/{code}/answer").route(web::post().to(submit_answer)));
}
