//! REST API helpers for the designs backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, each bounded by the
//! configured request timeout.
//! Host builds: stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, undecodable bodies, and timeouts all
//! map to `PanelError::Fetch` for listing and `PanelError::Delete` for
//! deletion, so callers only branch on success or failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Design, DesignId};
use crate::config::PanelConfig;
use crate::error::PanelError;

/// Operations the panel needs from the designs backend.
#[async_trait(?Send)]
pub trait DesignsApi {
    /// List the current user's saved designs in backend order.
    async fn list_designs(&self, token: &str) -> Result<Vec<Design>, PanelError>;

    /// Delete one design by id.
    async fn delete_design(&self, id: &DesignId, token: &str) -> Result<(), PanelError>;
}

fn user_designs_endpoint(api_base: &str) -> String {
    format!("{api_base}/get-user-designs")
}

fn delete_design_endpoint(api_base: &str, id: &DesignId) -> String {
    format!("{api_base}/delete-design?id={}", urlencoding::encode(id.as_str()))
}

#[cfg(any(test, feature = "csr"))]
fn list_request_failed_message(status: u16) -> String {
    format!("list request failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn delete_request_failed_message(status: u16) -> String {
    format!("delete request failed: {status}")
}

/// `gloo-net` backed implementation talking to `PanelConfig::api_base`.
#[derive(Clone, Debug)]
pub struct HttpDesignsApi {
    config: PanelConfig,
}

impl HttpDesignsApi {
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn list_url(&self) -> String {
        user_designs_endpoint(&self.config.api_base)
    }

    #[must_use]
    pub fn delete_url(&self, id: &DesignId) -> String {
        delete_design_endpoint(&self.config.api_base, id)
    }
}

#[async_trait(?Send)]
impl DesignsApi for HttpDesignsApi {
    async fn list_designs(&self, token: &str) -> Result<Vec<Design>, PanelError> {
        #[cfg(feature = "csr")]
        {
            use super::types::DesignListResponse;
            use crate::util::timeout::with_timeout;

            let url = self.list_url();
            let request = async {
                let resp = gloo_net::http::Request::get(&url)
                    .header("Authorization", token)
                    .send()
                    .await
                    .map_err(|e| PanelError::Fetch(e.to_string()))?;
                if !resp.ok() {
                    return Err(PanelError::Fetch(list_request_failed_message(resp.status())));
                }
                let body: DesignListResponse = resp.json().await.map_err(|e| PanelError::Fetch(e.to_string()))?;
                Ok::<_, PanelError>(body.data)
            };
            with_timeout(request, self.config.request_timeout_ms)
                .await
                .map_err(|e| PanelError::Fetch(e.to_string()))?
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(PanelError::Fetch("not available outside the browser".to_owned()))
        }
    }

    async fn delete_design(&self, id: &DesignId, token: &str) -> Result<(), PanelError> {
        #[cfg(feature = "csr")]
        {
            use crate::util::timeout::with_timeout;

            let url = self.delete_url(id);
            let request = async {
                let resp = gloo_net::http::Request::delete(&url)
                    .header("Authorization", token)
                    .send()
                    .await
                    .map_err(|e| PanelError::Delete(e.to_string()))?;
                if !resp.ok() {
                    return Err(PanelError::Delete(delete_request_failed_message(resp.status())));
                }
                Ok::<_, PanelError>(())
            };
            with_timeout(request, self.config.request_timeout_ms)
                .await
                .map_err(|e| PanelError::Delete(e.to_string()))?
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, token);
            Err(PanelError::Delete("not available outside the browser".to_owned()))
        }
    }
}
