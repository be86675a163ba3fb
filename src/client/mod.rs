//! Client for the job-hunt REST API
//!
//! The API surface is split into focused traits (see [`api`]) so the loader
//! can run against [`ServiceClient`] in production and an in-memory mock in
//! tests.

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod service;

pub use api::{AuthApi, CollectionApi, RawApi, RawResponse};
pub use models::{AuthToken, Collection, RecordId, RemoteRecord};
pub use service::ServiceClient;
