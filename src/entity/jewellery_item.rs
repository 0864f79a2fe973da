//! Jewellery catalogue item entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "jewellery_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub discounted_price: Option<f64>,
    /// 'Available', 'Out of Stock' or 'Coming Soon' (CHECK-constrained)
    pub status: String,
    pub main_image_url: String,
    /// JSON array of secondary image URLs. The admin form caps this at 5;
    /// the server stores whatever it is given.
    pub other_image_urls: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
