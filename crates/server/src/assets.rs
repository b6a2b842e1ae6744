//! Static files bundled into the binary.

use axum::{http::header, response::IntoResponse};

const STYLE: &str = include_str!("../assets/style.css");

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE)
}
