// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity service client.
//!
//! Handles:
//! - Catalog fetching (`GET /activities`)
//! - Signups (`POST /activities/{name}/signup?email=...`)
//! - Participant removal (`DELETE /activities/{name}/participants?email=...`)
//!
//! Activity names and emails are percent-encoded into the URL. Replies that
//! are not JSON are treated as transport failures.

use crate::config::Config;
use crate::error::{BoardError, Result};
use crate::models::{ActivityCatalog, ServiceReply};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// The three calls the board makes against the activity service.
///
/// `signup` and `remove_participant` resolve to the server's success
/// `message`, when it sent one.
pub trait ActivityApi: Send + Sync {
    fn fetch_catalog(&self) -> impl Future<Output = Result<ActivityCatalog>> + Send;

    fn signup(
        &self,
        activity: &str,
        email: &str,
    ) -> impl Future<Output = Result<Option<String>>> + Send;

    fn remove_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> impl Future<Output = Result<Option<String>>> + Send;
}

impl<T: ActivityApi> ActivityApi for Arc<T> {
    fn fetch_catalog(&self) -> impl Future<Output = Result<ActivityCatalog>> + Send {
        (**self).fetch_catalog()
    }

    fn signup(
        &self,
        activity: &str,
        email: &str,
    ) -> impl Future<Output = Result<Option<String>>> + Send {
        (**self).signup(activity, email)
    }

    fn remove_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> impl Future<Output = Result<Option<String>>> + Send {
        (**self).remove_participant(activity, email)
    }
}

/// HTTP client for the activity service.
#[derive(Clone)]
pub struct HttpActivityService {
    http: reqwest::Client,
    base_url: String,
}

impl HttpActivityService {
    /// Create a client for the service at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.service_url.clone(), config.request_timeout)
    }

    fn catalog_url(&self) -> String {
        format!("{}/activities", self.base_url)
    }

    fn signup_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base_url,
            urlencoding::encode(activity),
            urlencoding::encode(email)
        )
    }

    fn participants_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/participants?email={}",
            self.base_url,
            urlencoding::encode(activity),
            urlencoding::encode(email)
        )
    }

    /// Read a signup/removal reply into its success message or an error.
    async fn read_reply(response: reqwest::Response) -> Result<Option<String>> {
        let status = response.status();
        let body = response.text().await?;

        let reply: ServiceReply = serde_json::from_str(&body)
            .map_err(|e| BoardError::Transport(format!("JSON parse error: {}", e)))?;

        if status.is_success() {
            Ok(reply.message_text())
        } else {
            Err(BoardError::Application {
                status: status.as_u16(),
                detail: reply.failure_text(),
            })
        }
    }
}

impl ActivityApi for HttpActivityService {
    async fn fetch_catalog(&self) -> Result<ActivityCatalog> {
        let url = self.catalog_url();
        tracing::debug!(url = %url, "Fetching activity catalog");

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ServiceReply>(&body)
                .ok()
                .and_then(|reply| reply.failure_text());
            return Err(BoardError::Application {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| BoardError::Transport(format!("JSON parse error: {}", e)))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<Option<String>> {
        tracing::debug!(activity = %activity, "Submitting signup");
        let response = self
            .http
            .post(self.signup_url(activity, email))
            .send()
            .await?;

        Self::read_reply(response).await
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<Option<String>> {
        tracing::debug!(activity = %activity, "Removing participant");
        let response = self
            .http
            .delete(self.participants_url(activity, email))
            .send()
            .await?;

        Self::read_reply(response).await
    }
}
