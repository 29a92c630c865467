// src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::services::auth_service;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

/// Mirrors the storefront's public `me` lookup: the caller's user row, or
/// JSON null when the identity header is absent or unknown.
#[instrument(name = "handler::me", skip(app_state, auth_user))]
pub async fn me_handler(
  app_state: web::Data<AppState>,
  auth_user: Option<AuthenticatedUser>,
) -> Result<HttpResponse, AppError> {
  let user = match auth_user {
    Some(auth) => auth_service::fetch_user(&app_state.db_pool, auth.user_id).await?,
    None => None,
  };

  Ok(HttpResponse::Ok().json(json!({ "user": user })))
}
