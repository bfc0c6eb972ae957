use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use time::Duration;
use uuid::Uuid;

use crate::extractors::session_key::SessionKey;

/// Cookie carrying the per-browser session identity.
pub const SESSION_COOKIE: &str = "qr_session";

/// How long a browser keeps its session identity.
const SESSION_TTL: Duration = Duration::days(30);

/// Ensures every request carries a session identity.
///
/// Reads the session cookie, minting a fresh UUID when it is absent, and
/// places the key in request extensions for the [`SessionKey`] extractor.
/// A minted key is attached to the response as a cookie so the browser
/// presents it from the next request on.
pub struct PlayerSession {
    secure: bool,
}

impl PlayerSession {
    /// `secure` marks the cookie Secure; enable behind HTTPS.
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }
}

impl<S, B> Transform<S, ServiceRequest> for PlayerSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = PlayerSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PlayerSessionMiddleware {
            service,
            secure: self.secure,
        }))
    }
}

pub struct PlayerSessionMiddleware<S> {
    service: S,
    secure: bool,
}

impl<S, B> Service<ServiceRequest> for PlayerSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let existing = req
            .cookie(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_owned());

        let (key, minted) = match existing {
            Some(key) if !key.is_empty() => (key, false),
            _ => (Uuid::new_v4().to_string(), true),
        };

        req.extensions_mut().insert(SessionKey(key.clone()));

        let secure = self.secure;
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            if minted {
                let cookie = Cookie::build(SESSION_COOKIE, key)
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .secure(secure)
                    .max_age(SESSION_TTL)
                    .finish();
                let _ = res.response_mut().add_cookie(&cookie);
            }

            Ok(res)
        })
    }
}
