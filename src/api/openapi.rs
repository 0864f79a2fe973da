//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models, services};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Yaritu API Server",
        version = "0.3.0",
        description = "API server for the Yaritu storefront: file uploads, catalogue and content CRUD, contact form and chat"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Uploads
        services::upload::upload_file,
        // Contacts
        api::contacts::list_contacts,
        api::contacts::create_contact,
        // Testimonials
        api::testimonials::list_testimonials,
        api::testimonials::create_testimonial,
        api::testimonials::update_testimonial,
        api::testimonials::delete_testimonial,
        // Videos
        api::videos::list_trending,
        api::videos::create_trending,
        api::videos::delete_trending,
        api::videos::list_celebrity,
        api::videos::create_celebrity,
        api::videos::delete_celebrity,
        // Jewellery
        api::jewellery::list_items,
        api::jewellery::create_item,
        api::jewellery::update_item,
        api::jewellery::delete_item,
        // Chat
        api::chat::chat,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Uploads
            services::storage::StoredObject,
            // Contacts
            models::ContactRequest,
            models::ContactResponse,
            models::ContactCreated,
            // Testimonials
            models::TestimonialRequest,
            models::TestimonialResponse,
            // Videos
            models::VideoRequest,
            models::VideoResponse,
            // Jewellery
            models::JewelleryStatus,
            models::JewelleryRequest,
            models::JewelleryResponse,
            // Chat
            models::ChatRequest,
            models::ChatData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Uploads", description = "File uploads to object storage"),
        (name = "Contacts", description = "Contact form submissions"),
        (name = "Testimonials", description = "Customer testimonials"),
        (name = "Videos", description = "Trending and celebrity video collections"),
        (name = "Jewellery", description = "Jewellery catalogue"),
        (name = "Chat", description = "Storefront chat widget")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Add admin key security scheme.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_key",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Header(
                        utoipa::openapi::security::ApiKeyValue::new("X-Admin-Key"),
                    ),
                ),
            );
        }
    }
}
