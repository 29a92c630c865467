// src/db/mod.rs

//! Database plumbing: pool construction, schema bootstrap and the optional
//! demo seed behind the `SEED_DB` flag.

use crate::errors::Result;
use crate::models::Role;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const SCHEMA: &str = include_str!("schema.sql");

pub async fn connect(database_url: &str) -> Result<SqlitePool> {
  let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
  let pool = SqlitePoolOptions::new().connect_with(options).await?;
  Ok(pool)
}

/// Applies the embedded schema. Statements are IF NOT EXISTS, so this is
/// safe to run on every startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
  sqlx::raw_sql(SCHEMA).execute(pool).await?;
  tracing::info!("Database schema is up to date.");
  Ok(())
}

/// Seeds a small demo catalog plus an admin account. Skipped when the
/// products table already has rows.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<()> {
  let product_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
    .fetch_one(pool)
    .await?;
  if product_count > 0 {
    tracing::info!("Database already seeded, skipping.");
    return Ok(());
  }

  let now = Utc::now();

  sqlx::query(
    "INSERT OR IGNORE INTO users (open_id, name, email, role, created_at, updated_at, last_signed_in)
     VALUES (?, ?, ?, ?, ?, ?, ?)",
  )
  .bind("seed-admin")
  .bind("Store Admin")
  .bind("admin@example.com")
  .bind(Role::Admin)
  .bind(now)
  .bind(now)
  .bind(now)
  .execute(pool)
  .await?;

  for (name, description) in [
    ("T-Shirts", "Short-sleeved tops"),
    ("Hoodies", "Warm layers"),
    ("Accessories", "Everything else"),
  ] {
    sqlx::query("INSERT INTO categories (name, description, created_at) VALUES (?, ?, ?)")
      .bind(name)
      .bind(description)
      .bind(now)
      .execute(pool)
      .await?;
  }

  for size in ["XS", "S", "M", "L", "XL"] {
    sqlx::query("INSERT OR IGNORE INTO sizes (size) VALUES (?)")
      .bind(size)
      .execute(pool)
      .await?;
  }

  for (name, hex) in [("Black", "#000000"), ("White", "#ffffff"), ("Navy", "#001f3f")] {
    sqlx::query("INSERT OR IGNORE INTO colors (name, hex_code) VALUES (?, ?)")
      .bind(name)
      .bind(hex)
      .execute(pool)
      .await?;
  }

  for (name, description, price_cents, category_id, stock) in [
    ("Classic Tee", "Plain cotton tee", 1999_i64, 1_i64, 50_i64),
    ("Logo Hoodie", "Fleece-lined hoodie", 4999, 2, 20),
    ("Canvas Tote", "Everyday tote bag", 1499, 3, 35),
  ] {
    sqlx::query(
      "INSERT INTO products (name, description, price_cents, category_id, stock, created_at, updated_at)
       VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(name)
    .bind(description)
    .bind(price_cents)
    .bind(category_id)
    .bind(stock)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;
  }

  // Size/color variations for the first product
  for (size_id, color_id, stock) in [(2_i64, 1_i64, 10_i64), (3, 1, 12), (3, 2, 8)] {
    sqlx::query("INSERT INTO product_variations (product_id, size_id, color_id, stock) VALUES (1, ?, ?, ?)")
      .bind(size_id)
      .bind(color_id)
      .bind(stock)
      .execute(pool)
      .await?;
  }

  tracing::info!("Demo data seeded.");
  Ok(())
}
