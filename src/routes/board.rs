// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Board page routes.
//!
//! Each request gets a fresh [`Document`]: the page is loaded first, exactly
//! as a browser would on open, then the submitted action runs against it and
//! the resulting document is rendered.

use crate::board::{ActionOutcome, ActivityBoard};
use crate::models::Message;
use crate::page::{Document, Page};
use crate::render;
use crate::services::HttpActivityService;
use crate::AppState;
use axum::{
    extract::{Form, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

const INCOMPLETE_FORM_TEXT: &str = "Please fill out all required fields.";
const INVALID_PARTICIPANT_TEXT: &str = "Invalid participant.";

/// Board routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(show_board))
        .route(render::SIGNUP_ACTION, post(signup))
        .route(render::REMOVE_ACTION, post(remove_participant))
        .route("/styles.css", get(stylesheet))
}

type HostedBoard = ActivityBoard<HttpActivityService, Document>;

/// Board over a one-shot document that answers prompts with `confirmed`.
///
/// Handlers load the board before running an action, as a browser does on
/// open, so a rejected action still renders the current list. A successful
/// action loads it a second time.
fn open_board(state: &AppState, confirmed: bool) -> HostedBoard {
    let document = Document::for_response(confirmed);
    ActivityBoard::new(state.activity_service.clone(), Arc::new(document))
}

fn render_page(board: &HostedBoard, status: StatusCode) -> Response {
    let markup = render::page(&board.page().snapshot());
    (status, Html(markup.into_string())).into_response()
}

/// Open the board.
async fn show_board(State(state): State<Arc<AppState>>) -> Response {
    let board = open_board(&state, true);
    board.load().await;
    render_page(&board, StatusCode::OK)
}

/// `#signup-form` submission.
#[derive(Deserialize)]
struct SignupForm {
    #[serde(default)]
    activity: String,
    #[serde(default)]
    email: String,
}

async fn signup(State(state): State<Arc<AppState>>, Form(form): Form<SignupForm>) -> Response {
    let board = open_board(&state, true);
    board.load().await;
    board.page().fill_form(&form.activity, &form.email);

    match board.submit_signup(&form.activity, &form.email).await {
        ActionOutcome::Invalid => {
            board
                .page()
                .show_message(Message::error(INCOMPLETE_FORM_TEXT), None);
            render_page(&board, StatusCode::BAD_REQUEST)
        }
        _ => render_page(&board, StatusCode::OK),
    }
}

/// Remove control submission. `activity` and `email` are still percent-encoded.
#[derive(Deserialize)]
struct RemoveForm {
    #[serde(default)]
    activity: String,
    #[serde(default)]
    email: String,
    confirmed: Option<String>,
}

async fn remove_participant(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RemoveForm>,
) -> Response {
    let confirmed = form.confirmed.as_deref() == Some("yes");
    let board = open_board(&state, confirmed);

    if !confirmed {
        let outcome = board
            .remove_from_control(&form.activity, &form.email)
            .await;
        if outcome == ActionOutcome::Cancelled {
            // Both values decoded, or the prompt would not have been asked.
            let activity = render::decode_data_attribute(&form.activity).unwrap_or_default();
            let email = render::decode_data_attribute(&form.email).unwrap_or_default();
            let markup = render::confirm_removal(&activity, &email);
            return Html(markup.into_string()).into_response();
        }
        board.load().await;
        board
            .page()
            .show_message(Message::error(INVALID_PARTICIPANT_TEXT), None);
        return render_page(&board, StatusCode::BAD_REQUEST);
    }

    board.load().await;
    match board.remove_from_control(&form.activity, &form.email).await {
        ActionOutcome::Invalid => {
            board
                .page()
                .show_message(Message::error(INVALID_PARTICIPANT_TEXT), None);
            render_page(&board, StatusCode::BAD_REQUEST)
        }
        _ => render_page(&board, StatusCode::OK),
    }
}

async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        render::STYLESHEET,
    )
}
