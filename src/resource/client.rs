//! HTTP implementation of [`Resource`] on top of reqwest.

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use super::params::ID;
use super::{Params, Resource, ResourceError, UrlTemplate};
use crate::constants::USER_AGENT;
use crate::models::User;

/// Build the shared HTTP client used by every resource.
///
/// No timeout is configured; a request stays pending until the server
/// answers or the connection fails.
pub fn http_client() -> Result<reqwest::Client, ResourceError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(ResourceError::Client)
}

/// Build the `User` resource for `base_url` and `template`.
pub fn user_resource(
    http: reqwest::Client,
    base_url: &str,
    template: &str,
) -> Result<RestResource<User>, ResourceError> {
    let base = Url::parse(base_url).map_err(|e| ResourceError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;
    let template = UrlTemplate::parse(template)?;
    RestResource::new(http, base, template)
}

/// A REST collection whose items deserialize as `T`.
///
/// All paths are resolved relative to `base`. Nothing is cached: every
/// call issues a fresh `GET`.
pub struct RestResource<T> {
    http: reqwest::Client,
    base: Url,
    template: UrlTemplate,
    _item: PhantomData<fn() -> T>,
}

impl<T> std::fmt::Debug for RestResource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestResource")
            .field("base", &self.base.as_str())
            .field("template", &self.template.as_str())
            .finish()
    }
}

impl<T: DeserializeOwned> RestResource<T> {
    pub fn new(
        http: reqwest::Client,
        base: Url,
        template: UrlTemplate,
    ) -> Result<Self, ResourceError> {
        // Fails here rather than on the first call when `base` cannot hold a path.
        template.resolve(&base, &Params::new())?;
        Ok(Self {
            http,
            base,
            template,
            _item: PhantomData,
        })
    }

    /// The URL a call with `params` would hit.
    pub fn url_for(&self, params: &Params) -> Result<Url, ResourceError> {
        Ok(self.template.resolve(&self.base, params)?)
    }

    /// Collection fetch with extra parameters. Parameters not consumed by
    /// the template are sent in the query string.
    pub async fn query_with(&self, params: &Params) -> Result<Vec<T>, ResourceError> {
        let url = self.url_for(params)?;
        self.fetch(url).await
    }

    async fn fetch<R: DeserializeOwned>(&self, url: Url) -> Result<R, ResourceError> {
        tracing::debug!(method = "GET", %url, "issuing request");

        let response = self
            .http
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|source| ResourceError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        tracing::debug!(%status, %url, "response received");

        if status == StatusCode::NOT_FOUND {
            return Err(ResourceError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ResourceError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ResourceError::Transport {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| ResourceError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl<T> Resource for RestResource<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Item = T;

    async fn query(&self) -> Result<Vec<T>, ResourceError> {
        self.query_with(&Params::new()).await
    }

    async fn get(&self, params: &Params) -> Result<T, ResourceError> {
        if !params.contains(ID) {
            return Err(ResourceError::MissingParam(ID.to_string()));
        }
        let url = self.url_for(params)?;
        self.fetch(url).await
    }
}
