use std::sync::Arc;

use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};

use crate::database::Database;
use crate::entities;
use crate::error::{ServiceError, ServiceResult};
use crate::validation::validate_price;

#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurantPizza {
    pub price: f64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

pub struct RestaurantPizzaService {
    db: Arc<Database>,
}

impl RestaurantPizzaService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Price is validated before storage is touched. The restaurant is looked up before the
    /// pizza, so a request where both are missing reports the restaurant.
    pub async fn create(
        &self,
        new: NewRestaurantPizza,
    ) -> ServiceResult<entities::restaurant_pizza::Model> {
        let price = validate_price(new.price)?;

        let txn = self.db.conn.begin().await?;

        entities::restaurant::Entity::find_by_id(new.restaurant_id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::RestaurantNotFound(new.restaurant_id))?;

        entities::pizza::Entity::find_by_id(new.pizza_id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::PizzaNotFound(new.pizza_id))?;

        let model = entities::restaurant_pizza::ActiveModel {
            price: Set(price),
            restaurant_id: Set(new.restaurant_id),
            pizza_id: Set(new.pizza_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        log::info!(
            "Restaurant {} now offers pizza {} at {} (restaurant_pizza {})",
            model.restaurant_id,
            model.pizza_id,
            model.price,
            model.id
        );
        Ok(model)
    }
}
