// src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::{auth_service, cart_service};
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTO ---
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequestPayload {
  pub product_id: i64,
  #[serde(default)]
  pub variation_id: Option<i64>,
  pub quantity: i64,
}

// --- Handler Implementations ---

#[instrument(name = "handler::get_cart", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn get_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let user = auth_service::require_user(&app_state.db_pool, auth_user.user_id).await?;
  let items = cart_service::items_for_user(&app_state.db_pool, user.id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart fetched successfully.",
      "items": items
  })))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload, auth_user),
    fields(user_id = %auth_user.user_id, product_id = %req_payload.product_id, quantity = %req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let user = auth_service::require_user(&app_state.db_pool, auth_user.user_id).await?;

  let updated_item = cart_service::add_item(
    &app_state.db_pool,
    user.id,
    req_payload.product_id,
    req_payload.variation_id,
    req_payload.quantity,
  )
  .await?;

  info!(
    "Add to cart successful for user: {}. Item ID: {}, Product ID: {}, New Quantity: {}",
    user.id, updated_item.id, updated_item.product_id, updated_item.quantity
  );

  Ok(HttpResponse::Ok().json(json!({
      "message": "Item added to cart successfully.",
      "cartItem": updated_item
  })))
}

#[instrument(name = "handler::remove_cart_item", skip(app_state, path, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn remove_cart_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let user = auth_service::require_user(&app_state.db_pool, auth_user.user_id).await?;
  let item_id = path.into_inner();
  cart_service::remove_item(&app_state.db_pool, user.id, item_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Item removed from cart."
  })))
}

#[instrument(name = "handler::clear_cart", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn clear_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let user = auth_service::require_user(&app_state.db_pool, auth_user.user_id).await?;
  let removed = cart_service::clear_cart(&app_state.db_pool, user.id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart cleared.",
      "removed": removed
  })))
}
