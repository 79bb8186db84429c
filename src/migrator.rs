use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_catalog_tables::Migration),
            Box::new(m20240601_000002_create_cart_items_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240601_000001_create_catalog_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000001_create_catalog_tables"
        }
    }

    /// Columns shared by every catalog table.
    fn catalog_table<T: Iden + 'static>(table: T) -> TableCreateStatement {
        let mut stmt = Table::create();
        stmt.table(table)
            .if_not_exists()
            .col(
                ColumnDef::new(Product::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Product::Category).string().not_null())
            .col(
                ColumnDef::new(Product::WarehouseLocation)
                    .string_len(16)
                    .not_null(),
            )
            .col(ColumnDef::new(Product::ModelNo).string().not_null())
            .col(
                ColumnDef::new(Product::StockLevel)
                    .integer()
                    .not_null()
                    .default(0),
            )
            .col(ColumnDef::new(Product::Price).decimal_len(16, 4).not_null())
            .col(ColumnDef::new(Product::Material).string().not_null())
            .col(ColumnDef::new(Product::Width).double().not_null())
            .col(ColumnDef::new(Product::Height).double().not_null())
            .col(ColumnDef::new(Product::Depth).double().not_null());
        stmt
    }

    fn unique_model_no<T: Iden + 'static>(name: &str, table: T) -> IndexCreateStatement {
        Index::create()
            .if_not_exists()
            .name(name)
            .table(table)
            .col(Product::ModelNo)
            .unique()
            .to_owned()
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let mut chairs = catalog_table(Chairs::Table);
            chairs
                .col(ColumnDef::new(Chairs::HasArmrests).boolean().not_null())
                .col(ColumnDef::new(Chairs::MaxWeight).double().not_null())
                .col(ColumnDef::new(Chairs::HasSittingPad).boolean().not_null());
            manager.create_table(chairs).await?;
            manager
                .create_index(unique_model_no("idx_chairs_model_no", Chairs::Table))
                .await?;

            let mut beds = catalog_table(Beds::Table);
            beds.col(ColumnDef::new(Beds::BedSize).string().not_null())
                .col(ColumnDef::new(Beds::HasHeadboard).boolean().not_null());
            manager.create_table(beds).await?;
            manager
                .create_index(unique_model_no("idx_beds_model_no", Beds::Table))
                .await?;

            let mut bookshelves = catalog_table(Bookshelves::Table);
            bookshelves
                .col(ColumnDef::new(Bookshelves::ShelfLayers).integer().not_null())
                .col(ColumnDef::new(Bookshelves::MaximumWeight).double().not_null());
            manager.create_table(bookshelves).await?;
            manager
                .create_index(unique_model_no(
                    "idx_bookshelves_model_no",
                    Bookshelves::Table,
                ))
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Bookshelves::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Beds::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Chairs::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Product {
        Id,
        Category,
        WarehouseLocation,
        ModelNo,
        StockLevel,
        Price,
        Material,
        Width,
        Height,
        Depth,
    }

    #[derive(DeriveIden)]
    enum Chairs {
        Table,
        HasArmrests,
        MaxWeight,
        HasSittingPad,
    }

    #[derive(DeriveIden)]
    enum Beds {
        Table,
        BedSize,
        HasHeadboard,
    }

    #[derive(DeriveIden)]
    enum Bookshelves {
        Table,
        ShelfLayers,
        MaximumWeight,
    }
}

mod m20240601_000002_create_cart_items_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000002_create_cart_items_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(CartItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CartItems::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(CartItems::CartId).string().not_null())
                        .col(
                            ColumnDef::new(CartItems::ProductType)
                                .string_len(16)
                                .not_null(),
                        )
                        .col(ColumnDef::new(CartItems::ModelNo).string().not_null())
                        .col(ColumnDef::new(CartItems::ProductId).integer().not_null())
                        .col(ColumnDef::new(CartItems::Quantity).integer().not_null())
                        .col(
                            ColumnDef::new(CartItems::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CartItems::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_cart_items_cart_product")
                        .table(CartItems::Table)
                        .col(CartItems::CartId)
                        .col(CartItems::ProductType)
                        .col(CartItems::ModelNo)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_cart_items_cart_id")
                        .table(CartItems::Table)
                        .col(CartItems::CartId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(CartItems::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum CartItems {
        Table,
        Id,
        CartId,
        ProductType,
        ModelNo,
        ProductId,
        Quantity,
        CreatedAt,
        UpdatedAt,
    }
}
