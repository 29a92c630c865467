// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;

use storefront::config::AppConfig;
use storefront::db;
use storefront::models::Role;
use storefront::state::AppState;

/// Single-connection in-memory pool. More connections would each open
/// their own empty database.
pub async fn test_pool() -> SqlitePool {
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .idle_timeout(None)
    .max_lifetime(None)
    .connect("sqlite::memory:")
    .await
    .expect("failed to open in-memory database");
  db::run_migrations(&pool).await.expect("failed to apply schema");
  pool
}

pub fn test_state(pool: SqlitePool) -> AppState {
  AppState {
    db_pool: pool,
    config: Arc::new(AppConfig {
      server_host: "127.0.0.1".to_string(),
      server_port: 0,
      database_url: "sqlite::memory:".to_string(),
      seed_db: false,
    }),
  }
}

// --- Row fixtures ---

pub async fn insert_user(pool: &SqlitePool, open_id: &str, role: Role) -> i64 {
  let now = Utc::now();
  let result = sqlx::query(
    "INSERT INTO users (open_id, name, email, role, created_at, updated_at, last_signed_in) VALUES (?, ?, ?, ?, ?, ?, ?)",
  )
  .bind(open_id)
  .bind("Test User")
  .bind("test@example.com")
  .bind(role)
  .bind(now)
  .bind(now)
  .bind(now)
  .execute(pool)
  .await
  .expect("failed to insert user");
  result.last_insert_rowid()
}

pub async fn insert_category(pool: &SqlitePool, name: &str) -> i64 {
  let result = sqlx::query("INSERT INTO categories (name, description, created_at) VALUES (?, NULL, ?)")
    .bind(name)
    .bind(Utc::now())
    .execute(pool)
    .await
    .expect("failed to insert category");
  result.last_insert_rowid()
}

pub async fn insert_product(pool: &SqlitePool, name: &str, price_cents: i64, category_id: i64, stock: i64) -> i64 {
  let now = Utc::now();
  let result = sqlx::query(
    "INSERT INTO products (name, description, price_cents, category_id, stock, created_at, updated_at) VALUES (?, NULL, ?, ?, ?, ?, ?)",
  )
  .bind(name)
  .bind(price_cents)
  .bind(category_id)
  .bind(stock)
  .bind(now)
  .bind(now)
  .execute(pool)
  .await
  .expect("failed to insert product");
  result.last_insert_rowid()
}

pub async fn insert_size(pool: &SqlitePool, size: &str) -> i64 {
  let result = sqlx::query("INSERT INTO sizes (size) VALUES (?)")
    .bind(size)
    .execute(pool)
    .await
    .expect("failed to insert size");
  result.last_insert_rowid()
}

pub async fn insert_color(pool: &SqlitePool, name: &str, hex_code: &str) -> i64 {
  let result = sqlx::query("INSERT INTO colors (name, hex_code) VALUES (?, ?)")
    .bind(name)
    .bind(hex_code)
    .execute(pool)
    .await
    .expect("failed to insert color");
  result.last_insert_rowid()
}

pub async fn insert_variation(pool: &SqlitePool, product_id: i64, size_id: i64, color_id: i64, stock: i64) -> i64 {
  let result = sqlx::query("INSERT INTO product_variations (product_id, size_id, color_id, stock) VALUES (?, ?, ?, ?)")
    .bind(product_id)
    .bind(size_id)
    .bind(color_id)
    .bind(stock)
    .execute(pool)
    .await
    .expect("failed to insert variation");
  result.last_insert_rowid()
}
