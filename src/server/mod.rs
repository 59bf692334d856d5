mod handlers;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};

use crate::api::{DynAPI, API};
use crate::server::handlers::{hello, venues};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/Hello", get(hello::hello).post(hello::hello))
        .route("/Venues", get(venues::find_all))
        .route("/GetVenuesWithinDistance", get(venues::find_within_distance))
        .route("/GetVenuesWithTag", get(venues::find_with_tag))
        .layer(Extension(api))
}

pub async fn serve<T: API + Send + Sync + 'static>(api: T) {
    let api = Arc::new(api) as DynAPI;

    let app = router(api);

    let port = env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3000);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
