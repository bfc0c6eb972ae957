//! Room lifecycle HTTP routes.

use actix_web::web;
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::session_key::SessionKey;
use crate::services::rooms::RoomService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    #[serde(default)]
    pub num_questions: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct JoinRoomRequest {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
struct RoomCodeResponse {
    code: String,
}

/// POST /api/rooms
///
/// Create a room with the caller as host. Responds with the join code to
/// share with the other players.
async fn create_room(
    session: SessionKey,
    body: web::Json<CreateRoomRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<RoomCodeResponse>, AppError> {
    let body = body.into_inner();

    let room = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            RoomService::new()
                .create_room(txn, &session.0, &body.name, body.num_questions)
                .await
        })
    })
    .await?;

    Ok(web::Json(RoomCodeResponse { code: room.code }))
}

/// POST /api/rooms/join
///
/// Join a waiting room by code; re-joining updates the display name.
async fn join_room(
    session: SessionKey,
    body: web::Json<JoinRoomRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<RoomCodeResponse>, AppError> {
    let body = body.into_inner();

    let room = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            RoomService::new()
                .join_room(txn, &session.0, &body.name, &body.code)
                .await
        })
    })
    .await?;

    Ok(web::Json(RoomCodeResponse { code: room.code }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_room)));
    cfg.service(web::resource("/join").route(web::post().to(join_room)));
}
