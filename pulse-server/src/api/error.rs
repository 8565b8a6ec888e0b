use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pulse_types::ErrorResponse;

pub type ApiResult<T> = Result<T, ApiError>;

/// The dashboard serves read-only, in-memory data, so the only failing
/// requests are the deliberately unimplemented actions.
#[derive(Debug)]
pub enum ApiError {
    NotImplemented(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::NotImplemented(msg) => {
                (StatusCode::NOT_IMPLEMENTED, "Not Implemented", Some(msg))
            }
        };

        let error_response = ErrorResponse {
            error: message.to_string(),
            details,
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_maps_to_501_envelope() {
        let response =
            ApiError::NotImplemented("Report export is not available".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }
}
