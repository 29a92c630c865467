// src/models/order_item.rs

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
  pub id: i64,
  pub order_id: i64,
  pub product_id: i64,
  pub quantity: i64,
  /// Frozen copy of the unit price at order time, decoupled from the live
  /// product price.
  #[serde(rename = "price", serialize_with = "super::price::serialize_cents")]
  pub price_cents: i64,
}
