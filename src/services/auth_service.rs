// src/services/auth_service.rs

//! Resolves caller identity against the users table and gates admin-only
//! operations. Producing the identity header itself (session cookies,
//! OAuth) is the front door's job, not ours.

use crate::errors::{AppError, Result};
use crate::models::{Role, User};
use sqlx::SqlitePool;
use tracing::{debug, instrument, warn};

#[instrument(name = "auth_service::fetch_user", skip(pool))]
pub async fn fetch_user(pool: &SqlitePool, user_id: i64) -> Result<Option<User>> {
  let user: Option<User> = sqlx::query_as(
    "SELECT id, open_id, name, email, role, created_at, updated_at, last_signed_in FROM users WHERE id = ?",
  )
  .bind(user_id)
  .fetch_optional(pool)
  .await?;
  debug!(found = user.is_some(), "Looked up caller identity.");
  Ok(user)
}

/// The authenticated-endpoint gate: the caller's id must resolve to a row.
#[instrument(name = "auth_service::require_user", skip(pool))]
pub async fn require_user(pool: &SqlitePool, user_id: i64) -> Result<User> {
  fetch_user(pool, user_id).await?.ok_or_else(|| {
    warn!("Rejected request from unknown user id {}.", user_id);
    AppError::Auth("Unknown user identity.".to_string())
  })
}

pub fn ensure_admin(user: &User) -> Result<()> {
  if user.role != Role::Admin {
    warn!("User {} attempted an admin-only operation.", user.id);
    return Err(AppError::Auth("Administrator access required.".to_string()));
  }
  Ok(())
}

/// The admin-endpoint gate: resolve the caller, then check the role.
#[instrument(name = "auth_service::require_admin", skip(pool))]
pub async fn require_admin(pool: &SqlitePool, user_id: i64) -> Result<User> {
  let user = require_user(pool, user_id).await?;
  ensure_admin(&user)?;
  Ok(user)
}
