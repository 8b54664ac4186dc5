use color_eyre::{Result, eyre::Context};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};

use crate::database::Database;
use crate::entities;
use crate::validation::validate_price;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (price, restaurant index, pizza index)
const OFFERINGS: &[(f64, usize, usize)] = &[(1.0, 0, 0), (4.0, 1, 1), (5.0, 2, 2)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Replaces the contents of every table with the fixed data set above.
pub async fn seed(db: &Database) -> Result<SeedSummary> {
    let txn = db.conn.begin().await.wrap_err("Failed to begin transaction")?;

    log::debug!("Clearing existing data");
    entities::restaurant_pizza::Entity::delete_many()
        .exec(&txn)
        .await
        .wrap_err("Failed to clear restaurant_pizzas")?;
    entities::restaurant::Entity::delete_many()
        .exec(&txn)
        .await
        .wrap_err("Failed to clear restaurants")?;
    entities::pizza::Entity::delete_many()
        .exec(&txn)
        .await
        .wrap_err("Failed to clear pizzas")?;

    let mut restaurant_ids = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let restaurant = entities::restaurant::ActiveModel {
            name: Set(name.to_string()),
            address: Set(address.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .wrap_err_with(|| format!("Failed to insert restaurant {}", name))?;
        restaurant_ids.push(restaurant.id);
    }

    let mut pizza_ids = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let pizza = entities::pizza::ActiveModel {
            name: Set(name.to_string()),
            ingredients: Set(ingredients.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .wrap_err_with(|| format!("Failed to insert pizza {}", name))?;
        pizza_ids.push(pizza.id);
    }

    for &(price, restaurant, pizza) in OFFERINGS {
        entities::restaurant_pizza::ActiveModel {
            price: Set(validate_price(price)?),
            restaurant_id: Set(restaurant_ids[restaurant]),
            pizza_id: Set(pizza_ids[pizza]),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .wrap_err("Failed to insert restaurant_pizza")?;
    }

    txn.commit().await.wrap_err("Failed to commit seed data")?;

    let summary = SeedSummary {
        restaurants: restaurant_ids.len(),
        pizzas: pizza_ids.len(),
        restaurant_pizzas: OFFERINGS.len(),
    };
    log::info!("Seeded {:?}", summary);
    Ok(summary)
}
