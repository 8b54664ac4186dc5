use std::sync::Arc;

use sea_orm::{
    ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::database::Database;
use crate::entities;
use crate::error::{ServiceError, ServiceResult};

pub struct RestaurantWithPizzas {
    pub restaurant: entities::restaurant::Model,
    /// One entry per association row, in association order
    pub pizzas: Vec<entities::pizza::Model>,
}

pub struct RestaurantService {
    db: Arc<Database>,
}

impl RestaurantService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> ServiceResult<Vec<entities::restaurant::Model>> {
        let restaurants = entities::restaurant::Entity::find()
            .order_by_asc(entities::restaurant::Column::Id)
            .all(&self.db.conn)
            .await?;

        log::debug!("Loaded {} restaurants", restaurants.len());
        Ok(restaurants)
    }

    pub async fn get_with_pizzas(&self, id: i64) -> ServiceResult<RestaurantWithPizzas> {
        let restaurant = entities::restaurant::Entity::find_by_id(id)
            .one(&self.db.conn)
            .await?
            .ok_or(ServiceError::RestaurantNotFound(id))?;

        // Joined through restaurant_pizzas, so a pair offered twice shows up twice
        let pizzas = restaurant
            .find_related(entities::pizza::Entity)
            .order_by_asc(entities::restaurant_pizza::Column::Id)
            .all(&self.db.conn)
            .await?;

        log::debug!(
            "Loaded restaurant {} with {} pizzas",
            restaurant.id,
            pizzas.len()
        );
        Ok(RestaurantWithPizzas { restaurant, pizzas })
    }

    /// Removes the restaurant's associations and then the restaurant in one transaction.
    /// Pizzas are never touched.
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        let txn = self.db.conn.begin().await?;

        // Dropping `txn` without commit rolls back
        entities::restaurant::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::RestaurantNotFound(id))?;

        let associations = entities::restaurant_pizza::Entity::delete_many()
            .filter(entities::restaurant_pizza::Column::RestaurantId.eq(id))
            .exec(&txn)
            .await?;

        entities::restaurant::Entity::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        log::info!(
            "Deleted restaurant {} and {} restaurant_pizzas",
            id,
            associations.rows_affected
        );
        Ok(())
    }
}
