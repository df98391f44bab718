use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq)]
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
}

impl<T: Serialize> Response<T> {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Response::OK(_) => StatusCode::OK,
            Response::Created(_) => StatusCode::CREATED,
        }
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        let status = self.status_code();
        match self {
            Response::OK(body) | Response::Created(body) => (status, Json(body)).into_response(),
        }
    }
}
