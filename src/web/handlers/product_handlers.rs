// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::catalog_service;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = catalog_service::list_products(&app_state.db_pool).await?;
  info!("Successfully fetched {} products.", products.len());

  Ok(HttpResponse::Ok().json(json!({
      "message": "Products fetched successfully.",
      "products": products
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let (product, variations) = catalog_service::get_product(&app_state.db_pool, product_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Product fetched successfully.",
      "product": product,
      "variations": variations
  })))
}

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let categories = catalog_service::list_categories(&app_state.db_pool).await?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Categories fetched successfully.",
      "categories": categories
  })))
}

#[instrument(name = "handler::list_sizes", skip(app_state))]
pub async fn list_sizes_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let sizes = catalog_service::list_sizes(&app_state.db_pool).await?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Sizes fetched successfully.",
      "sizes": sizes
  })))
}

#[instrument(name = "handler::list_colors", skip(app_state))]
pub async fn list_colors_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let colors = catalog_service::list_colors(&app_state.db_pool).await?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Colors fetched successfully.",
      "colors": colors
  })))
}
