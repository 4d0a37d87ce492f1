// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The page the board renders into.
//!
//! [`Page`] is the fixed DOM contract: the `#activities-list` container, the
//! `#activity` selector, the `#signup-form` fields and the `#message` area.
//! [`Document`] is an in-memory page used by the HTTP host and by tests.

use crate::models::Message;
use maud::Markup;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Identifies one shown message, so a timer can hide exactly that message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTicket(u64);

/// Everything the board writes to or asks of the page.
pub trait Page: Send + Sync + 'static {
    /// Replace the contents of `#activities-list`.
    fn render_activities(&self, list: Markup);

    /// Replace the `#activity` options that follow the placeholder option.
    fn set_activity_options(&self, names: Vec<String>);

    /// Show `message` in `#message`, replacing whatever was there.
    ///
    /// `hide_after` is how long the message should stay on screen, `None`
    /// until replaced.
    fn show_message(&self, message: Message, hide_after: Option<Duration>) -> MessageTicket;

    /// Hide `#message` if it still shows the message behind `ticket`.
    fn hide_message(&self, ticket: MessageTicket);

    /// Clear the signup form.
    fn reset_form(&self);

    /// Ask the user to confirm a destructive action.
    fn confirm(&self, prompt: &str) -> bool;

    /// Whether the page hides timed messages by itself. No hide timer is
    /// started for such a page.
    fn expires_messages(&self) -> bool {
        false
    }
}

/// Point-in-time copy of a [`Document`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentState {
    /// Inner HTML of `#activities-list`
    pub activities_html: String,
    /// `#activity` options, excluding the placeholder
    pub activity_options: Vec<String>,
    /// Selected `#activity` value ("" for the placeholder)
    pub selected_activity: String,
    /// `#email` value
    pub email: String,
    /// Last message shown in `#message`
    pub message: Option<Message>,
    /// Whether `#message` is visible
    pub message_visible: bool,
    /// How long the current message stays on screen
    pub message_ttl: Option<Duration>,
    /// Confirmation prompts asked so far
    pub prompts: Vec<String>,
    /// Number of list renders applied
    pub renders: u64,
    message_serial: u64,
}

impl DocumentState {
    /// The message currently on screen, if any.
    pub fn visible_message(&self) -> Option<&Message> {
        self.message.as_ref().filter(|_| self.message_visible)
    }
}

/// In-memory page.
///
/// A document built with [`Document::new`] lives as long as its board and
/// relies on the board's hide timers. One built with
/// [`Document::for_response`] is rendered once, and the markup carries each
/// message's lifetime instead.
#[derive(Debug)]
pub struct Document {
    state: Mutex<DocumentState>,
    confirm_answer: bool,
    rendered_once: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document whose confirmation prompts are answered "yes".
    pub fn new() -> Self {
        Self::with_confirmation(true)
    }

    /// Empty document that answers every confirmation prompt with `answer`.
    pub fn with_confirmation(answer: bool) -> Self {
        Self {
            state: Mutex::new(DocumentState::default()),
            confirm_answer: answer,
            rendered_once: false,
        }
    }

    /// Document for a single HTTP response, answering prompts with `answer`.
    pub fn for_response(answer: bool) -> Self {
        Self {
            rendered_once: true,
            ..Self::with_confirmation(answer)
        }
    }

    fn lock(&self) -> MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Fill the signup form as the user would.
    pub fn fill_form(&self, activity: &str, email: &str) {
        let mut state = self.lock();
        state.selected_activity = activity.to_string();
        state.email = email.to_string();
    }

    pub fn snapshot(&self) -> DocumentState {
        self.lock().clone()
    }
}

impl Page for Document {
    fn render_activities(&self, list: Markup) {
        let mut state = self.lock();
        state.activities_html = list.into_string();
        state.renders += 1;
    }

    fn set_activity_options(&self, names: Vec<String>) {
        let mut state = self.lock();
        if !names.contains(&state.selected_activity) {
            state.selected_activity.clear();
        }
        state.activity_options = names;
    }

    fn show_message(&self, message: Message, hide_after: Option<Duration>) -> MessageTicket {
        let mut state = self.lock();
        state.message_serial += 1;
        state.message = Some(message);
        state.message_visible = true;
        state.message_ttl = hide_after;
        MessageTicket(state.message_serial)
    }

    fn hide_message(&self, ticket: MessageTicket) {
        let mut state = self.lock();
        if state.message_serial == ticket.0 {
            state.message_visible = false;
        }
    }

    fn reset_form(&self) {
        let mut state = self.lock();
        state.selected_activity.clear();
        state.email.clear();
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.lock().prompts.push(prompt.to_string());
        self.confirm_answer
    }

    fn expires_messages(&self) -> bool {
        self.rendered_once
    }
}
