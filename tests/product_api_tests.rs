// tests/product_api_tests.rs
mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::Value;

use common::*;
use storefront::web::configure_app_routes;

#[actix_web::test]
async fn test_health_check_responds_ok() {
  let pool = test_pool().await;
  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(test_state(pool)))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/api/v1/health").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_lists_all_products() {
  let pool = test_pool().await;
  let category_id = insert_category(&pool, "T-Shirts").await;
  insert_product(&pool, "Classic Tee", 1999, category_id, 50).await;
  insert_product(&pool, "Logo Hoodie", 4999, category_id, 20).await;

  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(test_state(pool)))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/api/v1/products").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body: Value = test::read_body_json(resp).await;
  let products = body["products"].as_array().expect("products array");
  assert_eq!(products.len(), 2);
  // Ordered by name; money is a two-decimal string on the wire
  assert_eq!(products[0]["name"], "Classic Tee");
  assert_eq!(products[0]["price"], "19.99");
  assert_eq!(products[1]["price"], "49.99");
}

#[actix_web::test]
async fn test_gets_product_by_id_with_variations() {
  let pool = test_pool().await;
  let category_id = insert_category(&pool, "T-Shirts").await;
  let product_id = insert_product(&pool, "Classic Tee", 1999, category_id, 50).await;
  let size_id = insert_size(&pool, "M").await;
  let color_id = insert_color(&pool, "Black", "#000000").await;
  insert_variation(&pool, product_id, size_id, color_id, 10).await;

  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(test_state(pool)))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get()
    .uri(&format!("/api/v1/products/{}", product_id))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["product"]["id"], product_id);
  assert_eq!(body["product"]["categoryId"], category_id);
  let variations = body["variations"].as_array().expect("variations array");
  assert_eq!(variations.len(), 1);
  assert_eq!(variations[0]["sizeId"], size_id);
  assert_eq!(variations[0]["colorId"], color_id);
}

#[actix_web::test]
async fn test_unknown_product_is_not_found() {
  let pool = test_pool().await;
  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(test_state(pool)))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/api/v1/products/999").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_lists_categories_sizes_and_colors() {
  let pool = test_pool().await;
  insert_category(&pool, "T-Shirts").await;
  insert_category(&pool, "Hoodies").await;
  insert_size(&pool, "S").await;
  insert_size(&pool, "M").await;
  insert_color(&pool, "Black", "#000000").await;

  let app = test::init_service(
    App::new()
      .app_data(web::Data::new(test_state(pool)))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/api/v1/products/categories").to_request();
  let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
  assert_eq!(body["categories"].as_array().expect("categories array").len(), 2);

  let req = test::TestRequest::get().uri("/api/v1/products/sizes").to_request();
  let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
  assert_eq!(body["sizes"].as_array().expect("sizes array").len(), 2);

  let req = test::TestRequest::get().uri("/api/v1/products/colors").to_request();
  let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
  let colors = body["colors"].as_array().expect("colors array");
  assert_eq!(colors.len(), 1);
  assert_eq!(colors[0]["hexCode"], "#000000");
}
