// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod message;

pub use activity::{Activity, ActivityCatalog};
pub use message::{Message, MessageKind, ServiceReply};
