//! Client-side resource stores for the hospital information board.
//!
//! SYSTEM CONTEXT
//! ==============
//! The web application exposes news articles and cooperating-hospital
//! listings over a REST API. Each resource kind is mirrored locally by a
//! [`ListResourceStore`]: operations go out through a [`Transport`], their
//! responses are adapted into a [`Settlement`] at the edge, and a pure reducer
//! folds the outcome into the next immutable [`ListResourceState`] snapshot.

pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod mock;
pub mod paging;
pub mod reducer;
pub mod resources;
pub mod state;
pub mod store;
pub mod transport;
pub mod validate;

#[cfg(test)]
mod test_support;

pub use config::ApiConfig;
pub use envelope::Settlement;
pub use error::StoreError;
pub use http::HttpTransport;
pub use paging::{ListQuery, Paging};
pub use state::{ListResourceState, Record, ResourceData};
pub use store::ListResourceStore;
pub use transport::{ApiRequest, Transport};
