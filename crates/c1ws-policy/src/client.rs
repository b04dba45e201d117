//! HTTP client for the Workload Security policy API
//!
//! Every call carries the headers from [`auth_headers`]. Any status other
//! than 200 is returned as an error holding the raw response body; nothing is
//! retried.

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{PolicyError, Result};
use crate::headers::auth_headers;
use crate::model::{Policy, PolicyId, PolicyList};
use crate::resolver::resolve_by_name;

/// Base URL for a Cloud One region, e.g. `de-1`.
pub fn base_url_for_region(region: &str) -> String {
    format!("https://workload.{}.cloudone.trendmicro.com/api", region)
}

#[derive(Debug, Clone)]
pub struct PolicyClient {
    base_url: String,
    headers: HashMap<String, String>,
    http: Client,
}

impl PolicyClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: &str,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(PolicyClient {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers: auth_headers(api_key),
            http: builder.build()?,
        })
    }

    pub fn for_region(region: &str, api_key: &str, timeout: Option<Duration>) -> Result<Self> {
        Self::new(base_url_for_region(region), api_key, timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "policy API request");

        self.headers
            .iter()
            .fold(self.http.request(method, url), |req, (name, value)| {
                req.header(name.as_str(), value.as_str())
            })
    }

    /// `GET /policies`
    pub async fn list_policies(&self) -> Result<Vec<Policy>> {
        let resp = self.request(Method::GET, "/policies").send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(status = status.as_u16(), "list policies response");

        if status != StatusCode::OK {
            return Err(PolicyError::ListFailed {
                status: status.as_u16(),
                body,
            });
        }

        let list: PolicyList = serde_json::from_str(&body)?;
        tracing::info!("Listed {} policies", list.policies.len());
        Ok(list.policies)
    }

    /// `GET /policies/{id}`, returned verbatim
    pub async fn get_policy(&self, id: PolicyId) -> Result<Value> {
        let resp = self
            .request(Method::GET, &format!("/policies/{}", id))
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(status = status.as_u16(), %id, "get policy response");

        if status != StatusCode::OK {
            return Err(PolicyError::DetailsFailed {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// `POST /policies/{id}` with `payload` as the JSON body.
    ///
    /// The outcome is returned whatever the status so callers can report it;
    /// use [`UpdateOutcome::into_result`] to turn a rejection into an error.
    pub async fn update_policy(&self, id: PolicyId, payload: &Value) -> Result<UpdateOutcome> {
        let resp = self
            .request(Method::POST, &format!("/policies/{}", id))
            .body(serde_json::to_string(payload)?)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        tracing::debug!(status, %id, "update policy response");

        Ok(UpdateOutcome { id, status, body })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub id: PolicyId,
    pub status: u16,
    pub body: String,
}

impl UpdateOutcome {
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }

    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(PolicyError::UpdateFailed {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// List, resolve `name`, then fetch the full record.
pub async fn fetch_policy_details(client: &PolicyClient, name: &str) -> Result<Value> {
    let policies = client.list_policies().await?;
    let policy = resolve_by_name(&policies, name)?;
    tracing::info!("Resolved '{}' to {}", name, policy.label());

    let id = policy
        .id
        .ok_or_else(|| PolicyError::MissingId(name.to_string()))?;
    client.get_policy(id).await
}
