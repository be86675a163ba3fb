//! Data models exchanged with the service

mod auth;
mod record;

pub use auth::{AuthToken, LoginRequest};
pub use record::{Collection, RecordId, RemoteRecord};
