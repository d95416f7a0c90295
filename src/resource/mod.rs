//! Resource trait and REST integration.
//!
//! A resource is a remote collection reachable through a URL template. It
//! supports two verbs: `query` for the whole collection and `get` for a
//! single item. Controllers depend on the [`Resource`] trait so the HTTP
//! implementation can be swapped out in tests.

pub mod client;
pub mod params;
pub mod template;

use async_trait::async_trait;
use thiserror::Error;

pub use client::{RestResource, http_client, user_resource};
pub use params::Params;
pub use template::{TemplateError, UrlTemplate};

/// Errors from resource calls.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} not found")]
    NotFound { url: String },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing required parameter: {0}")]
    MissingParam(String),

    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl ResourceError {
    /// Whether the server answered 404 for the requested item.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A remote collection of `Item`s.
#[async_trait]
pub trait Resource: Send + Sync {
    type Item: Send;

    /// Fetch the whole collection. An empty collection is not an error.
    async fn query(&self) -> Result<Vec<Self::Item>, ResourceError>;

    /// Fetch one item. `params` must carry an `id`.
    async fn get(&self, params: &Params) -> Result<Self::Item, ResourceError>;
}
