//! Business logic services.

pub mod chat;
pub mod notifier;
pub mod storage;
pub mod upload;

pub use chat::ChatService;
pub use notifier::Notifier;
pub use storage::{ObjectStorage, StorageState, StoredObject, UploadPayload};
pub use upload::configure_routes as configure_upload_routes;
