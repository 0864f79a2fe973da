//! SeaORM entity definitions.

pub mod celebrity_video;
pub mod contact;
pub mod jewellery_item;
pub mod testimonial;
pub mod trending_video;
