//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login
//! - [`CollectionApi`] - List, create and delete records in a collection
//! - [`RawApi`] - Free-form requests for interactive exploration

mod auth;
mod collection;
mod raw;

pub use auth::AuthApi;
pub use collection::CollectionApi;
pub use raw::{RawApi, RawResponse};
