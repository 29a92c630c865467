// src/web/routes.rs

use actix_web::web;

// Liveness probe; DB connectivity problems surface on the real endpoints.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Authentication Routes
      .service(
        web::scope("/auth").route("/me", web::get().to(crate::web::handlers::auth_handlers::me_handler)),
      )
      // Catalog Routes (fixed paths registered before the id catch-all)
      .service(
        web::scope("/products")
          .route(
            "",
            web::get().to(crate::web::handlers::product_handlers::list_products_handler),
          )
          .route(
            "/categories",
            web::get().to(crate::web::handlers::product_handlers::list_categories_handler),
          )
          .route(
            "/sizes",
            web::get().to(crate::web::handlers::product_handlers::list_sizes_handler),
          )
          .route(
            "/colors",
            web::get().to(crate::web::handlers::product_handlers::list_colors_handler),
          )
          .route(
            "/{product_id}",
            web::get().to(crate::web::handlers::product_handlers::get_product_handler),
          ),
      )
      // Cart Routes
      .service(
        web::scope("/cart")
          .service(
            web::resource("")
              .route(web::get().to(crate::web::handlers::cart_handlers::get_cart_handler))
              .route(web::delete().to(crate::web::handlers::cart_handlers::clear_cart_handler)),
          )
          .route(
            "/add",
            web::post().to(crate::web::handlers::cart_handlers::add_to_cart_handler),
          )
          .route(
            "/items/{item_id}",
            web::delete().to(crate::web::handlers::cart_handlers::remove_cart_item_handler),
          ),
      )
      // Order Routes
      .service(
        web::scope("/orders")
          .service(
            web::resource("")
              .route(web::get().to(crate::web::handlers::order_handlers::get_user_orders_handler))
              .route(web::post().to(crate::web::handlers::order_handlers::create_order_handler)),
          )
          .route(
            "/all",
            web::get().to(crate::web::handlers::order_handlers::get_all_orders_handler),
          )
          .route(
            "/{order_id}/status",
            web::patch().to(crate::web::handlers::order_handlers::update_order_status_handler),
          ),
      ),
  );
}
