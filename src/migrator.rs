#![allow(elided_lifetimes_in_paths)]

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_catalog_tables::Migration),
            Box::new(m20240101_000002_create_stock_tables::Migration),
            Box::new(m20240101_000003_create_party_tables::Migration),
            Box::new(m20240101_000004_create_workers_table::Migration),
            Box::new(m20240101_000005_create_note_tables::Migration),
            Box::new(m20240101_000006_create_billing_tables::Migration),
        ]
    }
}

// Migration implementations

mod m20240101_000001_create_catalog_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_catalog_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Manufacturers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Manufacturers::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Manufacturers::Name).string().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Categories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Categories::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Categories::Name).string().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Products::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Products::Name).string().not_null())
                        .col(ColumnDef::new(Products::Group).string().not_null())
                        .col(ColumnDef::new(Products::Code).string().not_null())
                        .col(ColumnDef::new(Products::BatchNumber).string().not_null())
                        .col(ColumnDef::new(Products::Unit).string().not_null())
                        .col(
                            ColumnDef::new(Products::PurchasePrice)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Products::SalesPriceNet)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Products::TaxRate).integer().not_null())
                        .col(ColumnDef::new(Products::BestBeforeDate).date().not_null())
                        .col(ColumnDef::new(Products::Description).string().not_null())
                        .col(
                            ColumnDef::new(Products::ManufacturerId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Products::CategoryId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Products::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Products::UpdatedAt).timestamp().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_products_manufacturer")
                                .from(Products::Table, Products::ManufacturerId)
                                .to(Manufacturers::Table, Manufacturers::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_products_category")
                                .from(Products::Table, Products::CategoryId)
                                .to(Categories::Table, Categories::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_code")
                        .table(Products::Table)
                        .col(Products::Code)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_manufacturer_id")
                        .table(Products::Table)
                        .col(Products::ManufacturerId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_category_id")
                        .table(Products::Table)
                        .col(Products::CategoryId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Categories::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Manufacturers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Manufacturers {
        Table,
        Id,
        Name,
    }

    #[derive(DeriveIden)]
    pub enum Categories {
        Table,
        Id,
        Name,
    }

    #[derive(DeriveIden)]
    pub enum Products {
        Table,
        Id,
        Name,
        Group,
        Code,
        BatchNumber,
        Unit,
        PurchasePrice,
        SalesPriceNet,
        TaxRate,
        BestBeforeDate,
        Description,
        ManufacturerId,
        CategoryId,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000002_create_stock_tables {

    use sea_orm_migration::prelude::*;

    use super::m20240101_000001_create_catalog_tables::Products;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_stock_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Stocks::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Stocks::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Stocks::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(StockPositions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(StockPositions::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(StockPositions::StockId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(StockPositions::ProductId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(StockPositions::Quantity)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(StockPositions::MinimalQuantity)
                                .decimal_len(10, 2)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(StockPositions::AverageSupplyTime)
                                .decimal_len(10, 2)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(StockPositions::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(StockPositions::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_stock_positions_stock")
                                .from(StockPositions::Table, StockPositions::StockId)
                                .to(Stocks::Table, Stocks::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_stock_positions_product")
                                .from(StockPositions::Table, StockPositions::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_stock_positions_stock_product")
                        .table(StockPositions::Table)
                        .col(StockPositions::StockId)
                        .col(StockPositions::ProductId)
                        .unique()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(StockPositions::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Stocks::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Stocks {
        Table,
        Id,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub enum StockPositions {
        Table,
        Id,
        StockId,
        ProductId,
        Quantity,
        MinimalQuantity,
        AverageSupplyTime,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000003_create_party_tables {

    use sea_orm_migration::prelude::*;

    use super::m20240101_000002_create_stock_tables::Stocks;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_party_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Contractors::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Contractors::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Contractors::Kind).string().not_null())
                        .col(ColumnDef::new(Contractors::CompanyName).string().null())
                        .col(ColumnDef::new(Contractors::Address).string().not_null())
                        .col(ColumnDef::new(Contractors::PostalCode).string().not_null())
                        .col(ColumnDef::new(Contractors::City).string().not_null())
                        .col(ColumnDef::new(Contractors::FirstName).string().not_null())
                        .col(ColumnDef::new(Contractors::LastName).string().not_null())
                        .col(ColumnDef::new(Contractors::Email).string().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_contractors_kind")
                        .table(Contractors::Table)
                        .col(Contractors::Kind)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Stores::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Stores::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Stores::Name).string().not_null())
                        .col(ColumnDef::new(Stores::Address).string().not_null())
                        .col(ColumnDef::new(Stores::PostalCode).string().not_null())
                        .col(ColumnDef::new(Stores::City).string().not_null())
                        .col(
                            ColumnDef::new(Stores::StockId)
                                .big_integer()
                                .not_null()
                                .unique_key(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_stores_stock")
                                .from(Stores::Table, Stores::StockId)
                                .to(Stocks::Table, Stocks::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Shops::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Shops::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Shops::Name).string().not_null())
                        .col(ColumnDef::new(Shops::Address).string().not_null())
                        .col(ColumnDef::new(Shops::PostalCode).string().not_null())
                        .col(ColumnDef::new(Shops::City).string().not_null())
                        .col(
                            ColumnDef::new(Shops::StockId)
                                .big_integer()
                                .not_null()
                                .unique_key(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_shops_stock")
                                .from(Shops::Table, Shops::StockId)
                                .to(Stocks::Table, Stocks::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Shops::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Stores::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Contractors::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Contractors {
        Table,
        Id,
        Kind,
        CompanyName,
        Address,
        PostalCode,
        City,
        FirstName,
        LastName,
        Email,
    }

    #[derive(DeriveIden)]
    pub enum Stores {
        Table,
        Id,
        Name,
        Address,
        PostalCode,
        City,
        StockId,
    }

    #[derive(DeriveIden)]
    pub enum Shops {
        Table,
        Id,
        Name,
        Address,
        PostalCode,
        City,
        StockId,
    }
}

mod m20240101_000004_create_workers_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_workers_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Workers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Workers::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Workers::FirstName).string().not_null())
                        .col(ColumnDef::new(Workers::LastName).string().not_null())
                        .col(ColumnDef::new(Workers::Position).string().not_null())
                        .col(ColumnDef::new(Workers::Email).string().not_null())
                        .col(
                            ColumnDef::new(Workers::Active)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Workers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Workers {
        Table,
        Id,
        FirstName,
        LastName,
        Position,
        Email,
        Active,
    }
}

mod m20240101_000005_create_note_tables {

    use sea_orm_migration::prelude::*;

    use super::m20240101_000001_create_catalog_tables::Products;
    use super::m20240101_000003_create_party_tables::{Contractors, Shops, Stores};
    use super::m20240101_000004_create_workers_table::Workers;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_note_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Notes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Notes::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Notes::Kind).string().not_null())
                        .col(ColumnDef::new(Notes::Handover).string().not_null())
                        .col(
                            ColumnDef::new(Notes::Number)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Notes::FromStoreId).big_integer().null())
                        .col(ColumnDef::new(Notes::FromShopId).big_integer().null())
                        .col(
                            ColumnDef::new(Notes::FromContractorId)
                                .big_integer()
                                .null(),
                        )
                        .col(ColumnDef::new(Notes::ToStoreId).big_integer().null())
                        .col(ColumnDef::new(Notes::ToShopId).big_integer().null())
                        .col(ColumnDef::new(Notes::ToContractorId).big_integer().null())
                        .col(ColumnDef::new(Notes::WorkerId).big_integer().null())
                        .col(
                            ColumnDef::new(Notes::ValueNet)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Notes::TaxValue)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Notes::ValueGross)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Notes::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Notes::UpdatedAt).timestamp().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_notes_from_store")
                                .from(Notes::Table, Notes::FromStoreId)
                                .to(Stores::Table, Stores::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_notes_from_shop")
                                .from(Notes::Table, Notes::FromShopId)
                                .to(Shops::Table, Shops::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_notes_from_contractor")
                                .from(Notes::Table, Notes::FromContractorId)
                                .to(Contractors::Table, Contractors::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_notes_to_store")
                                .from(Notes::Table, Notes::ToStoreId)
                                .to(Stores::Table, Stores::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_notes_to_shop")
                                .from(Notes::Table, Notes::ToShopId)
                                .to(Shops::Table, Shops::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_notes_to_contractor")
                                .from(Notes::Table, Notes::ToContractorId)
                                .to(Contractors::Table, Contractors::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_notes_worker")
                                .from(Notes::Table, Notes::WorkerId)
                                .to(Workers::Table, Workers::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_notes_kind_handover")
                        .table(Notes::Table)
                        .col(Notes::Kind)
                        .col(Notes::Handover)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(NotePositions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(NotePositions::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(NotePositions::NoteId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(NotePositions::ProductId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(NotePositions::Quantity)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(NotePositions::PriceNet)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(NotePositions::TaxRate)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(NotePositions::DiscountValue)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(NotePositions::ValueNet)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(NotePositions::TaxValue)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(NotePositions::ValueGross)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_note_positions_note")
                                .from(NotePositions::Table, NotePositions::NoteId)
                                .to(Notes::Table, Notes::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_note_positions_product")
                                .from(NotePositions::Table, NotePositions::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_note_positions_note_id")
                        .table(NotePositions::Table)
                        .col(NotePositions::NoteId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(NotePositions::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Notes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Notes {
        Table,
        Id,
        Kind,
        Handover,
        Number,
        FromStoreId,
        FromShopId,
        FromContractorId,
        ToStoreId,
        ToShopId,
        ToContractorId,
        WorkerId,
        ValueNet,
        TaxValue,
        ValueGross,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    pub enum NotePositions {
        Table,
        Id,
        NoteId,
        ProductId,
        Quantity,
        PriceNet,
        TaxRate,
        DiscountValue,
        ValueNet,
        TaxValue,
        ValueGross,
    }
}

mod m20240101_000006_create_billing_tables {

    use sea_orm_migration::prelude::*;

    use super::m20240101_000004_create_workers_table::Workers;
    use super::m20240101_000005_create_note_tables::Notes;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000006_create_billing_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Receipts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Receipts::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Receipts::NoteId)
                                .big_integer()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Receipts::ValueNet)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Receipts::TaxValue)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Receipts::ValueGross)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Receipts::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Receipts::UpdatedAt).timestamp().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_receipts_note")
                                .from(Receipts::Table, Receipts::NoteId)
                                .to(Notes::Table, Notes::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Invoices::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Invoices::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Invoices::NoteId)
                                .big_integer()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Invoices::WorkerId).big_integer().not_null())
                        .col(
                            ColumnDef::new(Invoices::State)
                                .string()
                                .not_null()
                                .default("in_progress"),
                        )
                        .col(ColumnDef::new(Invoices::SupplyDate).date().not_null())
                        .col(ColumnDef::new(Invoices::Maturity).date().not_null())
                        .col(
                            ColumnDef::new(Invoices::ValueNet)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Invoices::TaxValue)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Invoices::ValueGross)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Invoices::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Invoices::UpdatedAt).timestamp().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_invoices_note")
                                .from(Invoices::Table, Invoices::NoteId)
                                .to(Notes::Table, Notes::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_invoices_worker")
                                .from(Invoices::Table, Invoices::WorkerId)
                                .to(Workers::Table, Workers::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(AdvanceInvoices::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(AdvanceInvoices::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(AdvanceInvoices::NoteId)
                                .big_integer()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(AdvanceInvoices::WorkerId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AdvanceInvoices::State)
                                .string()
                                .not_null()
                                .default("in_progress"),
                        )
                        .col(
                            ColumnDef::new(AdvanceInvoices::SupplyDate)
                                .date()
                                .not_null(),
                        )
                        .col(ColumnDef::new(AdvanceInvoices::Maturity).date().not_null())
                        .col(
                            ColumnDef::new(AdvanceInvoices::AdvanceValue)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(AdvanceInvoices::ValueNet)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(AdvanceInvoices::TaxValue)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(AdvanceInvoices::ValueGross)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(AdvanceInvoices::RestValueNet)
                                .decimal_len(10, 2)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(AdvanceInvoices::RestTaxValue)
                                .decimal_len(10, 2)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(AdvanceInvoices::RestValueGross)
                                .decimal_len(10, 2)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(AdvanceInvoices::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AdvanceInvoices::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_advance_invoices_note")
                                .from(AdvanceInvoices::Table, AdvanceInvoices::NoteId)
                                .to(Notes::Table, Notes::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_advance_invoices_worker")
                                .from(AdvanceInvoices::Table, AdvanceInvoices::WorkerId)
                                .to(Workers::Table, Workers::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Payments::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Payments::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Payments::NoteId).big_integer().not_null())
                        .col(
                            ColumnDef::new(Payments::ReceiptId)
                                .big_integer()
                                .null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Payments::InvoiceId)
                                .big_integer()
                                .null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Payments::AdvanceInvoiceId)
                                .big_integer()
                                .null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Payments::Method).string().null())
                        .col(
                            ColumnDef::new(Payments::Advance)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Payments::Paid)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(Payments::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Payments::UpdatedAt).timestamp().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_payments_note")
                                .from(Payments::Table, Payments::NoteId)
                                .to(Notes::Table, Notes::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_payments_receipt")
                                .from(Payments::Table, Payments::ReceiptId)
                                .to(Receipts::Table, Receipts::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_payments_invoice")
                                .from(Payments::Table, Payments::InvoiceId)
                                .to(Invoices::Table, Invoices::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_payments_advance_invoice")
                                .from(Payments::Table, Payments::AdvanceInvoiceId)
                                .to(AdvanceInvoices::Table, AdvanceInvoices::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_payments_note_id")
                        .table(Payments::Table)
                        .col(Payments::NoteId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Payments::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(AdvanceInvoices::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Invoices::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Receipts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Receipts {
        Table,
        Id,
        NoteId,
        ValueNet,
        TaxValue,
        ValueGross,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    pub enum Invoices {
        Table,
        Id,
        NoteId,
        WorkerId,
        State,
        SupplyDate,
        Maturity,
        ValueNet,
        TaxValue,
        ValueGross,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    pub enum AdvanceInvoices {
        Table,
        Id,
        NoteId,
        WorkerId,
        State,
        SupplyDate,
        Maturity,
        AdvanceValue,
        ValueNet,
        TaxValue,
        ValueGross,
        RestValueNet,
        RestTaxValue,
        RestValueGross,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    pub enum Payments {
        Table,
        Id,
        NoteId,
        ReceiptId,
        InvoiceId,
        AdvanceInvoiceId,
        Method,
        Advance,
        Paid,
        CreatedAt,
        UpdatedAt,
    }
}
