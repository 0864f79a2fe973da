//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20260712_000001_create_contacts;
mod m20260712_000002_create_testimonials;
mod m20260712_000003_create_trending_videos;
mod m20260712_000004_create_celebrity_videos;
mod m20260712_000005_create_jewellery_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_000001_create_contacts::Migration),
            Box::new(m20260712_000002_create_testimonials::Migration),
            Box::new(m20260712_000003_create_trending_videos::Migration),
            Box::new(m20260712_000004_create_celebrity_videos::Migration),
            Box::new(m20260712_000005_create_jewellery_items::Migration),
        ]
    }
}
