use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub address: String,

    #[sea_orm(has_many)]
    pub restaurant_pizzas: HasMany<super::restaurant_pizza::Entity>,

    #[sea_orm(has_many, via = "restaurant_pizza")]
    pub pizzas: HasMany<super::pizza::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
