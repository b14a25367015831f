//! Secondary indexes for the catalog read paths.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing by category filters on category_id AND is_active
        manager
            .create_index(
                Index::create()
                    .name("idx_product_category_active")
                    .table(Product::Table)
                    .col(Product::CategoryId)
                    .col(Product::IsActive)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_product_category_active")
                    .table(Product::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    CategoryId,
    IsActive,
}
