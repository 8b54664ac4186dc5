use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create restaurants table
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Restaurant::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Restaurant::Name).string().not_null())
                    .col(ColumnDef::new(Restaurant::Address).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create pizzas table
        manager
            .create_table(
                Table::create()
                    .table(Pizza::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pizza::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pizza::Name).string().not_null())
                    .col(ColumnDef::new(Pizza::Ingredients).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create restaurant_pizzas association table.
        // No ON DELETE CASCADE: restaurant deletion removes these rows itself.
        manager
            .create_table(
                Table::create()
                    .table(RestaurantPizza::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RestaurantPizza::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RestaurantPizza::Price).double().not_null())
                    .col(
                        ColumnDef::new(RestaurantPizza::RestaurantId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RestaurantPizza::PizzaId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_pizzas_restaurant_id_restaurants")
                            .from(RestaurantPizza::Table, RestaurantPizza::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_pizzas_pizza_id_pizzas")
                            .from(RestaurantPizza::Table, RestaurantPizza::PizzaId)
                            .to(Pizza::Table, Pizza::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_pizzas_restaurant_id")
                    .table(RestaurantPizza::Table)
                    .col(RestaurantPizza::RestaurantId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order
        manager
            .drop_table(Table::drop().table(RestaurantPizza::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pizza::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Restaurant::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Restaurant {
    #[sea_orm(iden = "restaurants")]
    Table,
    Id,
    Name,
    Address,
}

#[derive(DeriveIden)]
enum Pizza {
    #[sea_orm(iden = "pizzas")]
    Table,
    Id,
    Name,
    Ingredients,
}

#[derive(DeriveIden)]
enum RestaurantPizza {
    #[sea_orm(iden = "restaurant_pizzas")]
    Table,
    Id,
    Price,
    RestaurantId,
    PizzaId,
}
