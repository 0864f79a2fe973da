//! Migration: Create contacts table.

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
                CREATE TABLE contacts (
                    id UUID PRIMARY KEY, -- UUIDv7 for time-ordered sorting
                    full_name VARCHAR(200) NOT NULL,
                    email VARCHAR(320) NOT NULL,
                    phone VARCHAR(50),
                    subject VARCHAR(200),
                    message TEXT NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                -- Admin listing reads newest-first
                CREATE INDEX idx_contacts_created_at ON contacts(created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS contacts;")
            .await?;

        Ok(())
    }
}
