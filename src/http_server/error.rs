use axum::{
    Json,
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::ServiceError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Rendered as `{"error": "..."}`
    #[error(transparent)]
    Lookup(ServiceError),
    /// Rendered as `{"errors": ["..."]}`
    #[error(transparent)]
    Submission(ServiceError),
    /// A `{id}` segment that isn't an integer can't name a restaurant
    #[error("Restaurant not found")]
    UnknownRestaurantPath,
    #[error("{0}")]
    InvalidBody(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Lookup(err) | ApiError::Submission(err) => match err {
                ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
                ServiceError::RestaurantNotFound(_) | ServiceError::PizzaNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::UnknownRestaurantPath => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// Tell axum how to convert `ApiError` into a response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response<Body> {
        let status = self.status();

        let message = if status.is_server_error() {
            log::error!("{self:?}");
            "Something went wrong".to_string()
        } else {
            log::debug!("Request failed with {status}: {self}");
            self.to_string()
        };

        let body = match self {
            ApiError::Lookup(_) | ApiError::UnknownRestaurantPath => {
                json!({ "error": message })
            }
            ApiError::Submission(_) | ApiError::InvalidBody(_) => json!({ "errors": [message] }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use sea_orm::DbErr;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Lookup(ServiceError::RestaurantNotFound(1)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Submission(ServiceError::PizzaNotFound(1)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Submission(ServiceError::Validation(
                ValidationError::PriceOutOfRange(50.0)
            ))
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Lookup(ServiceError::Database(DbErr::Custom("boom".into()))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::UnknownRestaurantPath.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InvalidBody("missing field".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::Lookup(ServiceError::RestaurantNotFound(1)).to_string(),
            "Restaurant not found"
        );
        assert_eq!(
            ApiError::Submission(ServiceError::PizzaNotFound(1)).to_string(),
            "Pizza not found"
        );
        assert_eq!(
            ApiError::Submission(ServiceError::Validation(
                ValidationError::PriceOutOfRange(0.0)
            ))
            .to_string(),
            "Price must be between 1 and 30"
        );
    }
}
