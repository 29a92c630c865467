// src/services/cart_service.rs

//! Per-user cart line items: validate, check stock, then add-or-increment.
//! The add path is a read-then-write, so concurrent mutations by the same
//! user can lose an update; single-request-per-call is assumed.

use crate::errors::{AppError, Result};
use crate::models::{CartItem, Product, ProductVariation};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, instrument, warn};

#[instrument(name = "cart_service::items_for_user", skip(pool))]
pub async fn items_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<CartItem>> {
  let items: Vec<CartItem> = sqlx::query_as(
    "SELECT id, user_id, product_id, variation_id, quantity, created_at FROM cart_items WHERE user_id = ? ORDER BY id ASC",
  )
  .bind(user_id)
  .fetch_all(pool)
  .await?;
  Ok(items)
}

/// Adds a product (optionally a specific variation) to the user's cart.
/// An existing line for the same (product, variation) pair has its quantity
/// incremented instead of a duplicate row being inserted.
#[instrument(name = "cart_service::add_item", skip(pool))]
pub async fn add_item(
  pool: &SqlitePool,
  user_id: i64,
  product_id: i64,
  variation_id: Option<i64>,
  quantity: i64,
) -> Result<CartItem> {
  if quantity <= 0 {
    warn!("Invalid quantity ({}) provided. Must be positive.", quantity);
    return Err(AppError::Validation("Quantity must be a positive number.".to_string()));
  }

  let product: Option<Product> = sqlx::query_as(
    "SELECT id, name, description, price_cents, category_id, image_url, stock, created_at, updated_at FROM products WHERE id = ?",
  )
  .bind(product_id)
  .fetch_optional(pool)
  .await?;
  let product = product.ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found.", product_id)))?;

  // Stock comes from the variation when one is requested, otherwise from
  // the product itself.
  let available_stock = match variation_id {
    Some(vid) => {
      let variation: Option<ProductVariation> = sqlx::query_as(
        "SELECT id, product_id, size_id, color_id, stock FROM product_variations WHERE id = ? AND product_id = ?",
      )
      .bind(vid)
      .bind(product_id)
      .fetch_optional(pool)
      .await?;
      variation
        .ok_or_else(|| AppError::NotFound(format!("Variation {} not found for product {}.", vid, product_id)))?
        .stock
    }
    None => product.stock,
  };

  if available_stock < quantity {
    warn!(
      "Insufficient stock for product {}. Available: {}, Requested: {}.",
      product_id, available_stock, quantity
    );
    return Err(AppError::Validation(format!(
      "Insufficient stock. Only {} available.",
      available_stock
    )));
  }

  // Existing line for the same (user, product, variation)? IS matches the
  // NULL variation case too.
  let existing: Option<CartItem> = sqlx::query_as(
    "SELECT id, user_id, product_id, variation_id, quantity, created_at FROM cart_items
     WHERE user_id = ? AND product_id = ? AND variation_id IS ?",
  )
  .bind(user_id)
  .bind(product_id)
  .bind(variation_id)
  .fetch_optional(pool)
  .await?;

  let item_id = match existing {
    Some(line) => {
      sqlx::query("UPDATE cart_items SET quantity = quantity + ? WHERE id = ?")
        .bind(quantity)
        .bind(line.id)
        .execute(pool)
        .await?;
      info!("Incremented cart line {} for user {} by {}.", line.id, user_id, quantity);
      line.id
    }
    None => {
      let result = sqlx::query(
        "INSERT INTO cart_items (user_id, product_id, variation_id, quantity, created_at) VALUES (?, ?, ?, ?, ?)",
      )
      .bind(user_id)
      .bind(product_id)
      .bind(variation_id)
      .bind(quantity)
      .bind(Utc::now())
      .execute(pool)
      .await?;
      let id = result.last_insert_rowid();
      info!("Added cart line {} for user {} (product {}).", id, user_id, product_id);
      id
    }
  };

  let item: CartItem = sqlx::query_as(
    "SELECT id, user_id, product_id, variation_id, quantity, created_at FROM cart_items WHERE id = ?",
  )
  .bind(item_id)
  .fetch_one(pool)
  .await?;
  Ok(item)
}

/// Deletes one cart row. Scoped to the caller, so deleting someone else's
/// line is a no-op.
#[instrument(name = "cart_service::remove_item", skip(pool))]
pub async fn remove_item(pool: &SqlitePool, user_id: i64, item_id: i64) -> Result<()> {
  let result = sqlx::query("DELETE FROM cart_items WHERE id = ? AND user_id = ?")
    .bind(item_id)
    .bind(user_id)
    .execute(pool)
    .await?;
  info!("Removed {} cart row(s) for user {}.", result.rows_affected(), user_id);
  Ok(())
}

/// Cart rows are deleted, not archived.
#[instrument(name = "cart_service::clear_cart", skip(pool))]
pub async fn clear_cart(pool: &SqlitePool, user_id: i64) -> Result<u64> {
  let result = sqlx::query("DELETE FROM cart_items WHERE user_id = ?")
    .bind(user_id)
    .execute(pool)
    .await?;
  info!("Cleared {} cart row(s) for user {}.", result.rows_affected(), user_id);
  Ok(result.rows_affected())
}
