// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The activity board: render the catalog, submit changes, re-render.
//!
//! Each operation is one request/response cycle with two results: success
//! re-fetches the whole catalog and re-renders it, failure shows an inline
//! message and leaves the list alone. Nothing here is fatal.
//!
//! Loads may overlap. Every load takes a sequence number and its response is
//! applied only if no newer load has been applied already.

use crate::error::BoardError;
use crate::models::Message;
use crate::page::Page;
use crate::render;
use crate::services::ActivityApi;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// How long signup results stay on screen.
pub const SIGNUP_MESSAGE_TTL: Duration = Duration::from_secs(5);
/// How long a removal confirmation stays on screen.
pub const REMOVAL_MESSAGE_TTL: Duration = Duration::from_secs(3);

pub const SIGNUP_FALLBACK_ERROR: &str = "An error occurred";
pub const SIGNUP_TRANSPORT_ERROR: &str = "Failed to sign up. Please try again.";
pub const REMOVAL_FALLBACK_SUCCESS: &str = "Participant removed";
pub const REMOVAL_FALLBACK_ERROR: &str = "Failed to remove participant";
pub const REMOVAL_TRANSPORT_ERROR: &str = "Failed to remove participant. Please try again.";

/// Result of [`ActivityBoard::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The catalog was rendered.
    Rendered { activities: usize },
    /// The list shows the load failure text.
    Failed,
    /// A newer load had already rendered; this response was dropped.
    Superseded,
}

/// Result of a signup or removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The server accepted the change and the catalog was reloaded.
    Completed,
    /// The server refused the change (non-2xx).
    Rejected,
    /// The server could not be reached or answered garbage.
    Failed,
    /// Required input was missing; nothing was sent.
    Invalid,
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
}

/// Render-and-resubmit loop bound to one page.
pub struct ActivityBoard<A, P> {
    api: A,
    page: Arc<P>,
    issued_loads: AtomicU64,
    applied_load: Mutex<u64>,
}

impl<A: ActivityApi, P: Page> ActivityBoard<A, P> {
    pub fn new(api: A, page: Arc<P>) -> Self {
        Self {
            api,
            page,
            issued_loads: AtomicU64::new(0),
            applied_load: Mutex::new(0),
        }
    }

    pub fn page(&self) -> &Arc<P> {
        &self.page
    }

    /// Fetch the catalog and replace the list and the selector options.
    pub async fn load(&self) -> LoadOutcome {
        let sequence = self.issued_loads.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.api.fetch_catalog().await;

        let mut applied = self
            .applied_load
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *applied > sequence {
            tracing::debug!(
                sequence,
                applied = *applied,
                "Dropping stale catalog response"
            );
            return LoadOutcome::Superseded;
        }
        *applied = sequence;

        match result {
            Ok(catalog) => {
                self.page.render_activities(render::activity_list(&catalog));
                self.page
                    .set_activity_options(catalog.names().map(str::to_string).collect());
                tracing::debug!(activities = catalog.len(), "Rendered activity catalog");
                LoadOutcome::Rendered {
                    activities: catalog.len(),
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching activities");
                self.page.render_activities(render::load_failure());
                LoadOutcome::Failed
            }
        }
    }

    /// Sign `email` up for `activity`.
    ///
    /// On success the form is cleared and the catalog reloaded once. On
    /// failure the catalog is left as it is.
    pub async fn submit_signup(&self, activity: &str, email: &str) -> ActionOutcome {
        if activity.is_empty() || email.is_empty() {
            return ActionOutcome::Invalid;
        }

        match self.api.signup(activity, email).await {
            Ok(message) => {
                tracing::info!(activity = %activity, "Signup accepted");
                let text = message
                    .unwrap_or_else(|| format!("Signed up {} for {}", email, activity));
                self.flash(Message::success(text), Some(SIGNUP_MESSAGE_TTL));
                self.page.reset_form();
                self.load().await;
                ActionOutcome::Completed
            }
            Err(err @ BoardError::Transport(_)) => {
                tracing::error!(activity = %activity, error = %err, "Error signing up");
                self.flash(Message::error(SIGNUP_TRANSPORT_ERROR), None);
                ActionOutcome::Failed
            }
            Err(err) => {
                tracing::warn!(activity = %activity, error = %err, "Signup rejected");
                let text = err.detail().unwrap_or(SIGNUP_FALLBACK_ERROR);
                self.flash(Message::error(text), Some(SIGNUP_MESSAGE_TTL));
                ActionOutcome::Rejected
            }
        }
    }

    /// Remove `email` from `activity` after the user confirms.
    pub async fn remove_participant(&self, activity: &str, email: &str) -> ActionOutcome {
        if activity.is_empty() || email.is_empty() {
            return ActionOutcome::Invalid;
        }

        if !self.page.confirm(&render::removal_prompt(activity, email)) {
            return ActionOutcome::Cancelled;
        }

        match self.api.remove_participant(activity, email).await {
            Ok(message) => {
                tracing::info!(activity = %activity, "Participant removed");
                self.load().await;
                let text = message.unwrap_or_else(|| REMOVAL_FALLBACK_SUCCESS.to_string());
                self.flash(Message::success(text), Some(REMOVAL_MESSAGE_TTL));
                ActionOutcome::Completed
            }
            Err(err @ BoardError::Transport(_)) => {
                tracing::error!(
                    activity = %activity,
                    error = %err,
                    "Error removing participant"
                );
                self.flash(Message::error(REMOVAL_TRANSPORT_ERROR), None);
                ActionOutcome::Failed
            }
            Err(err) => {
                tracing::warn!(activity = %activity, error = %err, "Removal rejected");
                let text = err.detail().unwrap_or(REMOVAL_FALLBACK_ERROR);
                self.flash(Message::error(text), None);
                ActionOutcome::Rejected
            }
        }
    }

    /// Click handler of a `.participant-remove` control.
    ///
    /// Takes the raw `data-activity` and `data-email` values.
    pub async fn remove_from_control(
        &self,
        data_activity: &str,
        data_email: &str,
    ) -> ActionOutcome {
        let decoded = render::decode_data_attribute(data_activity)
            .zip(render::decode_data_attribute(data_email));

        match decoded {
            Some((activity, email)) => self.remove_participant(&activity, &email).await,
            None => {
                tracing::warn!("Undecodable remove control attributes");
                ActionOutcome::Invalid
            }
        }
    }

    /// Show a message, hiding it again after `ttl` unless replaced first.
    fn flash(&self, message: Message, ttl: Option<Duration>) {
        let ticket = self.page.show_message(message, ttl);
        if self.page.expires_messages() {
            return;
        }

        if let Some(ttl) = ttl {
            let page = Arc::clone(&self.page);
            tokio::spawn(async move {
                tokio::time::sleep(ttl).await;
                page.hide_message(ticket);
            });
        }
    }
}
