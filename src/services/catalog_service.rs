// src/services/catalog_service.rs

//! Read-only catalog lookups. Writes to the catalog happen out of band
//! (seeding or back-office tooling), so everything here is a plain SELECT.

use crate::errors::{AppError, Result};
use crate::models::{Category, Color, Product, ProductVariation, Size};
use sqlx::SqlitePool;
use tracing::instrument;

#[instrument(name = "catalog_service::list_products", skip(pool))]
pub async fn list_products(pool: &SqlitePool) -> Result<Vec<Product>> {
  let products: Vec<Product> = sqlx::query_as(
    "SELECT id, name, description, price_cents, category_id, image_url, stock, created_at, updated_at FROM products ORDER BY name ASC",
  )
  .fetch_all(pool)
  .await?;
  Ok(products)
}

/// Fetches one product together with its size/color variations.
#[instrument(name = "catalog_service::get_product", skip(pool))]
pub async fn get_product(pool: &SqlitePool, product_id: i64) -> Result<(Product, Vec<ProductVariation>)> {
  let product: Option<Product> = sqlx::query_as(
    "SELECT id, name, description, price_cents, category_id, image_url, stock, created_at, updated_at FROM products WHERE id = ?",
  )
  .bind(product_id)
  .fetch_optional(pool)
  .await?;
  let product = product.ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found.", product_id)))?;

  let variations: Vec<ProductVariation> = sqlx::query_as(
    "SELECT id, product_id, size_id, color_id, stock FROM product_variations WHERE product_id = ?",
  )
  .bind(product_id)
  .fetch_all(pool)
  .await?;

  Ok((product, variations))
}

#[instrument(name = "catalog_service::list_categories", skip(pool))]
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>> {
  let categories: Vec<Category> = sqlx::query_as("SELECT id, name, description, created_at FROM categories")
    .fetch_all(pool)
    .await?;
  Ok(categories)
}

#[instrument(name = "catalog_service::list_sizes", skip(pool))]
pub async fn list_sizes(pool: &SqlitePool) -> Result<Vec<Size>> {
  let sizes: Vec<Size> = sqlx::query_as("SELECT id, size FROM sizes").fetch_all(pool).await?;
  Ok(sizes)
}

#[instrument(name = "catalog_service::list_colors", skip(pool))]
pub async fn list_colors(pool: &SqlitePool) -> Result<Vec<Color>> {
  let colors: Vec<Color> = sqlx::query_as("SELECT id, name, hex_code FROM colors")
    .fetch_all(pool)
    .await?;
  Ok(colors)
}
