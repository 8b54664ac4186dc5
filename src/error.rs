use sea_orm::DbErr;

use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Restaurant not found")]
    RestaurantNotFound(i64),
    #[error("Pizza not found")]
    PizzaNotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
