// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::price::format_price;
use crate::models::OrderStatus;
use crate::services::order_service::CreateOrderRequest;
use crate::services::{auth_service, order_service};
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTO ---
#[derive(Deserialize, Debug)]
pub struct UpdateStatusRequestPayload {
  pub status: OrderStatus,
}

// --- Handler Implementations ---

#[instrument(name = "handler::get_user_orders", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn get_user_orders_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let user = auth_service::require_user(&app_state.db_pool, auth_user.user_id).await?;
  let orders = order_service::get_user_orders(&app_state.db_pool, user.id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Orders fetched successfully.",
      "orders": orders
  })))
}

#[instrument(name = "handler::get_all_orders", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn get_all_orders_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  auth_service::require_admin(&app_state.db_pool, auth_user.user_id).await?;
  let orders = order_service::get_all_orders(&app_state.db_pool).await?;
  info!("Admin {} fetched {} orders.", auth_user.user_id, orders.len());

  Ok(HttpResponse::Ok().json(json!({
      "message": "Orders fetched successfully.",
      "orders": orders
  })))
}

#[instrument(
    name = "handler::create_order",
    skip(app_state, req_payload, auth_user),
    fields(user_id = %auth_user.user_id, item_count = %req_payload.items.len())
)]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateOrderRequest>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let user = auth_service::require_user(&app_state.db_pool, auth_user.user_id).await?;
  let (order_id, total_price_cents) = order_service::create_order(&app_state.db_pool, user.id, &req_payload).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Order created successfully.",
      "orderId": order_id,
      "totalPrice": format_price(total_price_cents)
  })))
}

#[instrument(
    name = "handler::update_order_status",
    skip(app_state, path, req_payload, auth_user),
    fields(user_id = %auth_user.user_id)
)]
pub async fn update_order_status_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  req_payload: web::Json<UpdateStatusRequestPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  auth_service::require_admin(&app_state.db_pool, auth_user.user_id).await?;
  let order_id = path.into_inner();
  order_service::update_status(&app_state.db_pool, order_id, req_payload.status).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Order status updated."
  })))
}
