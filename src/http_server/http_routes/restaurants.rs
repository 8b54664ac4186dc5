use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use serde::Serialize;

use crate::entities;
use crate::http_server::{error::ApiError, http_routes::pizzas::PizzaResponse, state::AppState};
use crate::services::restaurant::{RestaurantService, RestaurantWithPizzas};

#[derive(Debug, Serialize, PartialEq)]
pub struct RestaurantResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
}

impl From<entities::restaurant::Model> for RestaurantResponse {
    fn from(restaurant: entities::restaurant::Model) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RestaurantDetailResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub pizzas: Vec<PizzaResponse>,
}

impl From<RestaurantWithPizzas> for RestaurantDetailResponse {
    fn from(RestaurantWithPizzas { restaurant, pizzas }: RestaurantWithPizzas) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            pizzas: pizzas.into_iter().map(PizzaResponse::from).collect(),
        }
    }
}

fn restaurant_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| {
            log::debug!("Rejected restaurant path: {}", rejection.body_text());
            ApiError::UnknownRestaurantPath
        })
}

pub async fn list_restaurants(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<RestaurantResponse>>, ApiError> {
    let restaurants = RestaurantService::new(app_state.db.clone())
        .list()
        .await
        .map_err(ApiError::Lookup)?;

    Ok(Json(
        restaurants
            .into_iter()
            .map(RestaurantResponse::from)
            .collect(),
    ))
}

pub async fn get_restaurant(
    State(app_state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<RestaurantDetailResponse>, ApiError> {
    let id = restaurant_id(path)?;

    let restaurant = RestaurantService::new(app_state.db.clone())
        .get_with_pizzas(id)
        .await
        .map_err(ApiError::Lookup)?;

    Ok(Json(restaurant.into()))
}

pub async fn delete_restaurant(
    State(app_state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = restaurant_id(path)?;

    RestaurantService::new(app_state.db.clone())
        .delete(id)
        .await
        .map_err(ApiError::Lookup)?;

    Ok(StatusCode::NO_CONTENT)
}
