use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// Free-text, comma separated
    pub ingredients: String,

    #[sea_orm(has_many)]
    pub restaurant_pizzas: HasMany<super::restaurant_pizza::Entity>,

    #[sea_orm(has_many, via = "restaurant_pizza")]
    pub restaurants: HasMany<super::restaurant::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
