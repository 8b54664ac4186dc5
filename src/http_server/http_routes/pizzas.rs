use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::entities;
use crate::http_server::{error::ApiError, state::AppState};
use crate::services::pizza::PizzaService;

#[derive(Debug, Serialize, PartialEq)]
pub struct PizzaResponse {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

impl From<entities::pizza::Model> for PizzaResponse {
    fn from(pizza: entities::pizza::Model) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name,
            ingredients: pizza.ingredients,
        }
    }
}

pub async fn list_pizzas(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<PizzaResponse>>, ApiError> {
    let pizzas = PizzaService::new(app_state.db.clone())
        .list()
        .await
        .map_err(ApiError::Lookup)?;

    Ok(Json(pizzas.into_iter().map(PizzaResponse::from).collect()))
}
