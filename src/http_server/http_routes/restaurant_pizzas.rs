use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::entities;
use crate::http_server::{error::ApiError, state::AppState};
use crate::services::restaurant_pizza::{NewRestaurantPizza, RestaurantPizzaService};

#[derive(Debug, Deserialize)]
pub struct CreateRestaurantPizzaRequest {
    pub price: f64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RestaurantPizzaResponse {
    pub id: i64,
    pub price: f64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

impl From<entities::restaurant_pizza::Model> for RestaurantPizzaResponse {
    fn from(restaurant_pizza: entities::restaurant_pizza::Model) -> Self {
        Self {
            id: restaurant_pizza.id,
            price: restaurant_pizza.price,
            restaurant_id: restaurant_pizza.restaurant_id,
            pizza_id: restaurant_pizza.pizza_id,
        }
    }
}

pub async fn create_restaurant_pizza(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaResponse>), ApiError> {
    let Json(payload) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    let created = RestaurantPizzaService::new(app_state.db.clone())
        .create(NewRestaurantPizza {
            price: payload.price,
            restaurant_id: payload.restaurant_id,
            pizza_id: payload.pizza_id,
        })
        .await
        .map_err(ApiError::Submission)?;

    Ok((StatusCode::CREATED, Json(created.into())))
}
