// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - activity service access.

pub mod activity_service;

pub use activity_service::{ActivityApi, HttpActivityService};
