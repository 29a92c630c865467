// src/models/product.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: Option<String>,
  #[serde(rename = "price", serialize_with = "super::price::serialize_cents")]
  pub price_cents: i64,
  pub category_id: i64,
  pub image_url: Option<String>,
  pub stock: i64,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// A concrete size/color combination of a product with its own stock.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariation {
  pub id: i64,
  pub product_id: i64,
  pub size_id: i64,
  pub color_id: i64,
  pub stock: i64,
}
