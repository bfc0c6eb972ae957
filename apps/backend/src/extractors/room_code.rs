use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Room join code taken from the `{code}` path segment.
///
/// Codes are matched case-insensitively and stored uppercase, so the raw
/// segment is normalized here. Room existence is checked inside the
/// handler's transaction, not in the extractor.
#[derive(Debug, Clone)]
pub struct RoomCode(pub String);

impl FromRequest for RoomCode {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_code(req))
    }
}

fn parse_code(req: &HttpRequest) -> Result<RoomCode, AppError> {
    let raw = req
        .match_info()
        .get("code")
        .ok_or_else(|| AppError::invalid(ErrorCode::InvalidRoomCode, "missing code parameter"))?;

    let code = raw.trim().to_ascii_uppercase();
    if code.is_empty() || code.len() > 8 || !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(AppError::invalid(
            ErrorCode::InvalidRoomCode,
            format!("{raw:?} is not a valid room code"),
        ));
    }

    Ok(RoomCode(code))
}

#[cfg(test)]
mod tests {
    use actix_web::dev::Payload;
    use actix_web::test::TestRequest;
    use actix_web::FromRequest;

    use super::RoomCode;

    #[actix_web::test]
    async fn code_is_uppercased() {
        let req = TestRequest::default()
            .param("code", "ab9k2")
            .to_http_request();
        let code = RoomCode::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(code.0, "AB9K2");
    }

    #[actix_web::test]
    async fn non_alphanumeric_codes_are_rejected() {
        let req = TestRequest::default()
            .param("code", "ab-!2")
            .to_http_request();
        assert!(RoomCode::from_request(&req, &mut Payload::None)
            .await
            .is_err());
    }
}
