use color_eyre::{Result, eyre::Context};
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection};
use std::time::Duration;

pub struct Database {
    pub conn: DatabaseConnection,
}

impl Database {
    /// Connect to the database at `url` and bring its schema up to date
    pub async fn open(url: &str) -> Result<Self> {
        log::debug!("Opening database at: {}", url);

        // SQLite allows one writer. Transactions read before they write, and two overlapping
        // ones fail with SQLITE_BUSY instead of waiting, so requests queue on one connection.
        let mut opt = ConnectOptions::new(url.to_owned());
        opt.max_connections(1)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(8))
            .acquire_timeout(Duration::from_secs(30))
            .sqlx_logging(false);

        let conn = SeaDatabase::connect(opt)
            .await
            .wrap_err_with(|| format!("Failed to open database: {}", url))?;

        // Run migrations
        log::debug!("Running database migrations");
        migration::Migrator::up(&conn, None)
            .await
            .wrap_err("Failed to run database migrations")?;

        log::info!("Database ready at: {}", url);
        Ok(Database { conn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities;
    use crate::services::restaurant::RestaurantService;
    use crate::services::restaurant_pizza::{NewRestaurantPizza, RestaurantPizzaService};
    use crate::test_utils::{insert_pizza, insert_restaurant};
    use sea_orm::{EntityTrait, PaginatorTrait};
    use std::sync::Arc;

    async fn file_db(dir: &tempfile::TempDir) -> Arc<Database> {
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("pizza_restaurants.db").display()
        );
        Arc::new(Database::open(&url).await.unwrap())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let db = file_db(&dir).await;
        let restaurant = insert_restaurant(&db, "Dough Boys", "1 Main St").await;
        let pizza = insert_pizza(&db, "Cheese", "Dough, Cheese").await;
        let (restaurant_id, pizza_id) = (restaurant.id, pizza.id);

        let handles: Vec<_> = (0..64)
            .map(|_| {
                let service = RestaurantPizzaService::new(db.clone());
                tokio::spawn(async move {
                    service
                        .create(NewRestaurantPizza {
                            price: 10.0,
                            restaurant_id,
                            pizza_id,
                        })
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let count = entities::restaurant_pizza::Entity::find()
            .count(&db.conn)
            .await
            .unwrap();
        assert_eq!(count, 64);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_and_deletes_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let db = file_db(&dir).await;
        let pizza = insert_pizza(&db, "Cheese", "Dough, Cheese").await;
        let kept = insert_restaurant(&db, "Slice Palace", "2 Elm St").await;
        let mut doomed = Vec::new();
        for i in 0..16 {
            doomed.push(insert_restaurant(&db, &format!("Closing {i}"), "3 Oak St").await);
        }

        let mut handles = Vec::new();
        for restaurant in &doomed {
            let id = restaurant.id;
            let creates = RestaurantPizzaService::new(db.clone());
            let deletes = RestaurantService::new(db.clone());
            let kept_id = kept.id;
            let pizza_id = pizza.id;
            handles.push(tokio::spawn(async move {
                creates
                    .create(NewRestaurantPizza {
                        price: 12.0,
                        restaurant_id: kept_id,
                        pizza_id,
                    })
                    .await
                    .map(|_| ())
            }));
            handles.push(tokio::spawn(async move { deletes.delete(id).await }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let restaurants = entities::restaurant::Entity::find()
            .count(&db.conn)
            .await
            .unwrap();
        assert_eq!(restaurants, 1);
        let associations = entities::restaurant_pizza::Entity::find()
            .count(&db.conn)
            .await
            .unwrap();
        assert_eq!(associations, 16);
    }
}
