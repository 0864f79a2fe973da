//! Migration: Create jewellery_items table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE jewellery_items (
                    id UUID PRIMARY KEY,
                    name VARCHAR(300) NOT NULL,
                    price DOUBLE PRECISION NOT NULL,
                    discounted_price DOUBLE PRECISION,
                    status VARCHAR(20) NOT NULL DEFAULT 'Available'
                        CHECK (status IN ('Available', 'Out of Stock', 'Coming Soon')),
                    main_image_url VARCHAR(2000) NOT NULL,
                    -- secondary image URLs; count is capped in the admin form only
                    other_image_urls JSONB NOT NULL DEFAULT '[]',
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_jewellery_items_created_at ON jewellery_items(created_at DESC);
                CREATE INDEX idx_jewellery_items_status ON jewellery_items(status);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS jewellery_items;")
            .await?;

        Ok(())
    }
}
