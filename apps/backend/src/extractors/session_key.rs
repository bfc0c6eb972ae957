use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Opaque per-browser session identity, minted by the session middleware.
///
/// This is how "who is asking" is resolved without a login system. Handlers
/// receive the key through this extractor and pass it explicitly into every
/// core operation; nothing below the web boundary reads ambient session
/// state.
#[derive(Debug, Clone)]
pub struct SessionKey(pub String);

impl FromRequest for SessionKey {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(req.extensions().get::<SessionKey>().cloned().ok_or_else(|| {
            AppError::internal(
                ErrorCode::Internal,
                "session middleware is not installed".to_string(),
            )
        }))
    }
}
