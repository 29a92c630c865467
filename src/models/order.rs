// src/models/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type as SqlxType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum OrderStatus {
  Pending,
  Paid,
  Shipped,
  Completed,
  Cancelled,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: i64,
  pub user_id: i64,
  pub status: OrderStatus,
  /// Sum of the order's line totals at creation time; never recomputed.
  #[serde(rename = "totalPrice", serialize_with = "super::price::serialize_cents")]
  pub total_price_cents: i64,
  pub customer_name: String,
  pub customer_email: String,
  pub customer_phone: Option<String>,
  pub shipping_address: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}
