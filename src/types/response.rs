use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Created response helper (201 with the resource as body)
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// Created response without a body
pub struct CreatedEmpty;

impl IntoResponse for CreatedEmpty {
    fn into_response(self) -> axum::response::Response {
        StatusCode::CREATED.into_response()
    }
}
