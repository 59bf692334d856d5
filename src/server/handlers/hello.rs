use axum::extract::{Json, Query};
use serde::Deserialize;

const DEFAULT_GREETING: &str = "This HTTP triggered function executed successfully. \
    Pass a name in the query string or in the request body for a personalized response.";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct HelloParams {
    pub name: Option<String>,
}

pub async fn hello(
    Query(query): Query<HelloParams>,
    body: Option<Json<HelloParams>>,
) -> String {
    let name = query
        .name
        .or(body.and_then(|Json(body)| body.name))
        .filter(|name| !name.is_empty());

    match name {
        Some(name) => format!("Hello, {}", name),
        None => DEFAULT_GREETING.into(),
    }
}
