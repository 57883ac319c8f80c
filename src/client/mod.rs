// Client module - key issuance and body list API client
pub mod api;

pub use api::PlanetClient;

use async_trait::async_trait;
use std::fmt;

use crate::error::Result;
use crate::models::Body;

/// Short-lived API key returned by the key endpoint.
///
/// Held by whoever drives the fetch pipeline and passed explicitly into the
/// body request; it is never stored globally.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep the key itself out of `{:?}` output.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"***").finish()
    }
}

/// Where the viewer gets its key and body list from.
#[async_trait]
pub trait BodySource: Send + Sync {
    async fn fetch_key(&self) -> Result<Credential>;
    async fn fetch_bodies(&self, credential: &Credential) -> Result<Vec<Body>>;
}
