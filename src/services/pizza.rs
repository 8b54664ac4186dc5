use std::sync::Arc;

use sea_orm::{EntityTrait, QueryOrder};

use crate::database::Database;
use crate::entities;
use crate::error::ServiceResult;

pub struct PizzaService {
    db: Arc<Database>,
}

impl PizzaService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> ServiceResult<Vec<entities::pizza::Model>> {
        let pizzas = entities::pizza::Entity::find()
            .order_by_asc(entities::pizza::Column::Id)
            .all(&self.db.conn)
            .await?;

        log::debug!("Loaded {} pizzas", pizzas.len());
        Ok(pizzas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{insert_pizza, test_db};

    #[tokio::test]
    async fn test_list_empty() {
        let db = test_db().await;
        let service = PizzaService::new(db);

        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list() {
        let db = test_db().await;
        insert_pizza(&db, "Cheese", "Dough, Cheese").await;
        insert_pizza(&db, "Pepperoni", "Dough, Cheese, Pepperoni").await;

        let service = PizzaService::new(db);
        let pizzas = service.list().await.unwrap();

        assert_eq!(pizzas.len(), 2);
        assert_eq!(pizzas[0].name, "Cheese");
        assert_eq!(pizzas[0].ingredients, "Dough, Cheese");
        assert_eq!(pizzas[1].name, "Pepperoni");
    }
}
