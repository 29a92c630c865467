// src/web/extractors.rs

use actix_web::{FromRequest, HttpRequest};
use tracing::warn;

use crate::errors::AppError;

/// Caller identity, taken from the `X-User-ID` header. The gateway that
/// authenticates the session and stamps this header is an external
/// collaborator; handlers still resolve the id against the users table
/// before trusting it.
#[derive(Debug)]
pub struct AuthenticatedUser {
  pub user_id: i64,
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    if let Some(user_id_header) = req.headers().get("X-User-ID") {
      if let Ok(user_id_str) = user_id_header.to_str() {
        if let Ok(user_id) = user_id_str.parse::<i64>() {
          return futures_util::future::ready(Ok(AuthenticatedUser { user_id }));
        }
      }
    }
    warn!("AuthenticatedUser extractor: Missing or invalid X-User-ID header.");
    futures_util::future::ready(Err(AppError::Auth(
      "User authentication required. Missing or invalid X-User-ID header.".to_string(),
    )))
  }
}
