use std::sync::Arc;

use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database as SeaDatabase, Set};

use crate::database::Database;
use crate::entities;

pub async fn test_db() -> Arc<Database> {
    let conn = SeaDatabase::connect("sqlite::memory:").await.unwrap();

    migration::Migrator::up(&conn, None)
        .await
        .unwrap_or_else(|e| panic!("Failed to run migrations: {}", e));

    Arc::new(Database { conn })
}

pub async fn insert_restaurant(
    db: &Database,
    name: &str,
    address: &str,
) -> entities::restaurant::Model {
    let restaurant = entities::restaurant::ActiveModel {
        name: Set(name.into()),
        address: Set(address.into()),
        ..Default::default()
    };
    restaurant.insert(&db.conn).await.unwrap()
}

pub async fn insert_pizza(db: &Database, name: &str, ingredients: &str) -> entities::pizza::Model {
    let pizza = entities::pizza::ActiveModel {
        name: Set(name.into()),
        ingredients: Set(ingredients.into()),
        ..Default::default()
    };
    pizza.insert(&db.conn).await.unwrap()
}

pub async fn insert_restaurant_pizza(
    db: &Database,
    price: f64,
    restaurant_id: i64,
    pizza_id: i64,
) -> entities::restaurant_pizza::Model {
    let restaurant_pizza = entities::restaurant_pizza::ActiveModel {
        price: Set(price),
        restaurant_id: Set(restaurant_id),
        pizza_id: Set(pizza_id),
        ..Default::default()
    };
    restaurant_pizza.insert(&db.conn).await.unwrap()
}
