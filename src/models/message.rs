// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Inline status messages and the reply bodies they are built from.

use serde::Deserialize;
use serde_json::Value;

/// Styling of the message area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// Class attribute for the `#message` element.
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "message success",
            MessageKind::Error => "message error",
        }
    }
}

/// The single message shown in the `#message` area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

/// JSON body of a signup or removal reply.
///
/// Success replies carry `message`, failures carry `detail`. `detail` is kept
/// as raw JSON because validation failures send an array of objects there.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceReply {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ServiceReply {
    /// `message` if it is a non-empty string.
    pub fn message_text(&self) -> Option<String> {
        non_empty_string(self.message.as_ref())
    }

    /// Text to surface for a failed request: `detail`, else `message`.
    pub fn failure_text(&self) -> Option<String> {
        non_empty_string(self.detail.as_ref()).or_else(|| self.message_text())
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}
