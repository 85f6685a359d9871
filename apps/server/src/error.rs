use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use freightquote_core::errors::Error as CoreError;
use freightquote_core::quotes::QuoteError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

fn quote_status(err: &QuoteError) -> StatusCode {
    if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else if err.is_lookup_miss() {
        StatusCode::NOT_FOUND
    } else if matches!(err, QuoteError::PricingUnavailable) {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::Quote(e)) => quote_status(e),
            ApiError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use freightquote_core::errors::DatabaseError;

    #[test]
    fn test_quote_errors_map_to_status_codes() {
        let validation = ApiError::from(CoreError::Quote(QuoteError::IncompleteRequest {
            missing: vec!["zone".to_string()],
        }));
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let miss = ApiError::from(CoreError::Quote(QuoteError::DepotNotFound("X".into())));
        assert_eq!(miss.status(), StatusCode::NOT_FOUND);

        let unpriced = ApiError::from(CoreError::Quote(QuoteError::PricingUnavailable));
        assert_eq!(unpriced.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let db = ApiError::from(CoreError::Database(DatabaseError::QueryFailed("x".into())));
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
