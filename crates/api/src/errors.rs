use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const DOMAIN_REQUIRED: &str = "domain required";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    DomainRequired,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::DomainRequired => (StatusCode::BAD_REQUEST, DOMAIN_REQUIRED).into_response(),
        }
    }
}
