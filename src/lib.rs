// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity Board: sign students up for extracurricular activities
//!
//! This crate renders the activity catalog served by the activity service,
//! and turns signup and removal actions into requests back to it. The
//! catalog is always re-fetched after a successful change; nothing is
//! cached between renders.

pub mod board;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod page;
pub mod render;
pub mod routes;
pub mod services;

use services::HttpActivityService;

/// Shared application state.
pub struct AppState {
    pub activity_service: HttpActivityService,
}
