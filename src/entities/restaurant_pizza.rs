use sea_orm::entity::prelude::*;

/// "This restaurant offers this pizza at this price."
/// The same restaurant/pizza pair may appear more than once.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurant_pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Always within 1..=30, see `validation::validate_price`
    pub price: f64,
    pub restaurant_id: i64,
    pub pizza_id: i64,

    #[sea_orm(belongs_to, from = "restaurant_id", to = "id")]
    pub restaurant: HasOne<super::restaurant::Entity>,
    #[sea_orm(belongs_to, from = "pizza_id", to = "id")]
    pub pizza: HasOne<super::pizza::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
