use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use color_eyre::eyre::{Context, eyre};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::{
    database::Database,
    http_server::{http_routes, state::AppState},
};

pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/restaurants", get(http_routes::restaurants::list_restaurants))
        .route(
            "/restaurants/{id}",
            get(http_routes::restaurants::get_restaurant)
                .delete(http_routes::restaurants::delete_restaurant),
        )
        .route("/pizzas", get(http_routes::pizzas::list_pizzas))
        .route(
            "/restaurant_pizzas",
            post(http_routes::restaurant_pizzas::create_restaurant_pizza),
        )
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(app_state)
}

pub async fn start(port: u16, database: Database) -> color_eyre::Result<()> {
    let app_state = Arc::new(AppState {
        db: Arc::new(database),
    });

    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .wrap_err_with(|| eyre!("Failed to bind to port {}", port))?;
    log::info!(
        "Listening on {}",
        listener.local_addr().wrap_err("Failed to read local address")?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Failed to start HTTP server")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        // Never resolve, the server keeps running without graceful shutdown
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
