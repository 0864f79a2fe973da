//! API endpoint modules.

pub mod chat;
pub mod contacts;
pub mod health;
pub mod jewellery;
pub mod openapi;
pub mod testimonials;
pub mod videos;

pub use chat::configure_routes as configure_chat_routes;
pub use contacts::configure_routes as configure_contact_routes;
pub use health::configure_health_routes;
pub use jewellery::configure_routes as configure_jewellery_routes;
pub use openapi::ApiDoc;
pub use testimonials::configure_routes as configure_testimonial_routes;
pub use videos::configure_routes as configure_video_routes;
