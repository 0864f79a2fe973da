//! API test suite.
//!
//! Drives the handlers end-to-end through `actix_web::test` with a mock
//! database connection and a recording storage backend, so no external
//! services are needed.
//!
//! Run with: cargo test --test api

mod test_helpers;

mod test_chat;
mod test_contacts;
mod test_entities;
mod test_uploads;
