// src/services/order_service.rs

//! The order-creation workflow: parse and total the submitted cart lines,
//! then write the order row and its line items in one transaction. Line
//! prices are snapshots of what the caller was shown; they never track the
//! live product price afterwards.

use crate::errors::{AppError, Result};
use crate::models::price::{format_price, parse_price};
use crate::models::{Order, OrderItem, OrderStatus};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
  pub product_id: i64,
  pub quantity: i64,
  /// Unit price as shown to the customer, decimal string ("49.99").
  pub price: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
  pub customer_name: String,
  pub customer_email: String,
  #[serde(default)]
  pub customer_phone: Option<String>,
  pub shipping_address: String,
  pub items: Vec<OrderItemInput>,
}

/// An order row together with its frozen line items.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
  #[serde(flatten)]
  pub order: Order,
  pub items: Vec<OrderItem>,
}

/// Validates the submitted lines and returns (price_cents, quantity) pairs.
fn parse_lines(items: &[OrderItemInput]) -> Result<Vec<(i64, i64)>> {
  items
    .iter()
    .map(|item| {
      if item.quantity <= 0 {
        return Err(AppError::Validation("Quantity must be a positive number.".to_string()));
      }
      let price_cents = parse_price(&item.price)?;
      Ok((price_cents, item.quantity))
    })
    .collect()
}

/// total = Σ(price × quantity), exact in cents.
fn order_total_cents(lines: &[(i64, i64)]) -> Result<i64> {
  lines.iter().try_fold(0_i64, |total, (price_cents, quantity)| {
    price_cents
      .checked_mul(*quantity)
      .and_then(|line_total| total.checked_add(line_total))
      .ok_or_else(|| AppError::Validation("Order total out of range.".to_string()))
  })
}

/// Creates an order with status `pending` and one order_items row per
/// submitted line. The inserts share one transaction: a failure on any
/// line rolls the whole order back. Clearing the cart is the caller's
/// separate call.
#[instrument(name = "order_service::create_order", skip(pool, request), fields(item_count = request.items.len()))]
pub async fn create_order(pool: &SqlitePool, user_id: i64, request: &CreateOrderRequest) -> Result<(i64, i64)> {
  let lines = parse_lines(&request.items)?;
  let total_price_cents = order_total_cents(&lines)?;
  let now = Utc::now();

  let mut tx = pool.begin().await?;

  let result = sqlx::query(
    "INSERT INTO orders (user_id, status, total_price_cents, customer_name, customer_email, customer_phone, shipping_address, created_at, updated_at)
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
  )
  .bind(user_id)
  .bind(OrderStatus::Pending)
  .bind(total_price_cents)
  .bind(&request.customer_name)
  .bind(&request.customer_email)
  .bind(&request.customer_phone)
  .bind(&request.shipping_address)
  .bind(now)
  .bind(now)
  .execute(&mut *tx)
  .await?;
  let order_id = result.last_insert_rowid();

  for (item, (price_cents, quantity)) in request.items.iter().zip(&lines) {
    sqlx::query("INSERT INTO order_items (order_id, product_id, quantity, price_cents) VALUES (?, ?, ?, ?)")
      .bind(order_id)
      .bind(item.product_id)
      .bind(quantity)
      .bind(price_cents)
      .execute(&mut *tx)
      .await?;
  }

  tx.commit().await?;

  info!(
    "Order {} created for user {}. Total: {}",
    order_id,
    user_id,
    format_price(total_price_cents)
  );
  Ok((order_id, total_price_cents))
}

/// The caller's order history, newest first, each with its line items.
#[instrument(name = "order_service::get_user_orders", skip(pool))]
pub async fn get_user_orders(pool: &SqlitePool, user_id: i64) -> Result<Vec<OrderWithItems>> {
  let orders: Vec<Order> = sqlx::query_as(
    "SELECT id, user_id, status, total_price_cents, customer_name, customer_email, customer_phone, shipping_address, created_at, updated_at
     FROM orders WHERE user_id = ? ORDER BY created_at DESC, id DESC",
  )
  .bind(user_id)
  .fetch_all(pool)
  .await?;

  let mut with_items = Vec::with_capacity(orders.len());
  for order in orders {
    let items = items_for_order(pool, order.id).await?;
    with_items.push(OrderWithItems { order, items });
  }
  Ok(with_items)
}

#[instrument(name = "order_service::items_for_order", skip(pool))]
pub async fn items_for_order(pool: &SqlitePool, order_id: i64) -> Result<Vec<OrderItem>> {
  let items: Vec<OrderItem> = sqlx::query_as(
    "SELECT id, order_id, product_id, quantity, price_cents FROM order_items WHERE order_id = ? ORDER BY id ASC",
  )
  .bind(order_id)
  .fetch_all(pool)
  .await?;
  Ok(items)
}

/// Every order in the system, newest first. Admin gating happens at the
/// handler via auth_service.
#[instrument(name = "order_service::get_all_orders", skip(pool))]
pub async fn get_all_orders(pool: &SqlitePool) -> Result<Vec<Order>> {
  let orders: Vec<Order> = sqlx::query_as(
    "SELECT id, user_id, status, total_price_cents, customer_name, customer_email, customer_phone, shipping_address, created_at, updated_at
     FROM orders ORDER BY created_at DESC, id DESC",
  )
  .fetch_all(pool)
  .await?;
  Ok(orders)
}

/// Sets the status column. Transitions are unconstrained; any status may
/// follow any other.
#[instrument(name = "order_service::update_status", skip(pool))]
pub async fn update_status(pool: &SqlitePool, order_id: i64, status: OrderStatus) -> Result<()> {
  let result = sqlx::query("UPDATE orders SET status = ?, updated_at = ? WHERE id = ?")
    .bind(status)
    .bind(Utc::now())
    .bind(order_id)
    .execute(pool)
    .await?;
  if result.rows_affected() == 0 {
    warn!("Status update for unknown order {}.", order_id);
    return Err(AppError::NotFound(format!("Order with ID {} not found.", order_id)));
  }
  info!("Order {} status set to {:?}.", order_id, status);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn line(product_id: i64, quantity: i64, price: &str) -> OrderItemInput {
    OrderItemInput {
      product_id,
      quantity,
      price: price.to_string(),
    }
  }

  #[test]
  fn total_is_sum_of_line_totals() {
    let lines = parse_lines(&[line(1, 2, "19.99"), line(2, 1, "49.99"), line(3, 3, "0.50")]).unwrap();
    // 2*1999 + 1*4999 + 3*50 = 9147
    assert_eq!(order_total_cents(&lines).unwrap(), 9147);
  }

  #[test]
  fn empty_order_totals_zero() {
    assert_eq!(order_total_cents(&[]).unwrap(), 0);
  }

  #[test]
  fn non_positive_quantity_is_rejected() {
    assert!(parse_lines(&[line(1, 0, "10.00")]).is_err());
    assert!(parse_lines(&[line(1, -2, "10.00")]).is_err());
  }

  #[test]
  fn malformed_price_is_rejected() {
    assert!(parse_lines(&[line(1, 1, "ten dollars")]).is_err());
    assert!(parse_lines(&[line(1, 1, "-5.00")]).is_err());
  }

  #[test]
  fn overflowing_total_is_rejected() {
    let lines = vec![(i64::MAX / 2, 3)];
    assert!(order_total_cents(&lines).is_err());
  }
}
