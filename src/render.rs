// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTML rendering for the activity board.
//!
//! Text is always HTML-escaped by maud. Activity names and emails placed in
//! `data-*` attributes and hidden form fields are additionally
//! percent-encoded, and must go through [`decode_data_attribute`] before use.

use crate::models::{Activity, ActivityCatalog};
use crate::page::DocumentState;
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Replaces the list when the catalog cannot be fetched.
pub const LOAD_FAILURE_TEXT: &str = "Failed to load activities. Please try again later.";

/// First, always-present option of `#activity`.
pub const PLACEHOLDER_OPTION: &str = "-- Select an activity --";

/// Form endpoint behind every remove control.
pub const REMOVE_ACTION: &str = "/participants/remove";

/// Form endpoint of `#signup-form`.
pub const SIGNUP_ACTION: &str = "/signup";

const PAGE_TITLE: &str = "Extracurricular Activities";

/// Board stylesheet, served at `/styles.css`.
pub const STYLESHEET: &str = r#"body { font-family: system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif; margin: 0; color: #222; background: #f5f5f5; }
header { background: #1a237e; color: #fff; padding: 1rem 2rem; }
main { display: flex; flex-wrap: wrap; gap: 2rem; padding: 2rem; }
section { background: #fff; border-radius: 6px; padding: 1.5rem; flex: 1 1 320px; }
.activity-card { border: 1px solid #ddd; border-radius: 4px; padding: 1rem; margin-bottom: 1rem; }
.participants-list { list-style: none; padding-left: 0; }
.participants-list li { display: flex; align-items: center; gap: 0.5rem; }
.participant-remove-form { display: inline; margin: 0; }
.participant-remove { border: none; background: none; color: #c62828; cursor: pointer; }
.no-participants { color: #777; font-style: italic; }
.form-group { margin-bottom: 1rem; display: flex; flex-direction: column; }
.message { margin-top: 1rem; padding: 0.75rem; border-radius: 4px; }
.message.success { background: #e8f5e9; color: #2e7d32; }
.message.error { background: #ffebee; color: #c62828; }
.message-dismiss { float: right; color: inherit; text-decoration: none; margin-left: 1rem; }
.message[data-ttl] { animation: message-expire 0.4s ease-in forwards; }
.message[data-ttl="3"] { animation-delay: 3s; }
.message[data-ttl="5"] { animation-delay: 5s; }
@keyframes message-expire { to { opacity: 0; visibility: hidden; } }
.hidden { display: none; }
"#;

/// Percent-encode a value for a `data-*` attribute or hidden field.
pub fn encode_data_attribute(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Reverse [`encode_data_attribute`]. `None` if the bytes are not UTF-8.
pub fn decode_data_attribute(value: &str) -> Option<String> {
    urlencoding::decode(value).ok().map(|decoded| decoded.into_owned())
}

/// Remove control for one participant row.
///
/// The button is wrapped in a small form so it also works without script.
fn remove_control(activity: &str, email: &str) -> Markup {
    let data_activity = encode_data_attribute(activity);
    let data_email = encode_data_attribute(email);

    html! {
        form.participant-remove-form method="post" action=(REMOVE_ACTION) {
            input type="hidden" name="activity" value=(data_activity);
            input type="hidden" name="email" value=(data_email);
            button.participant-remove type="submit"
                data-activity=(data_activity)
                data-email=(data_email)
                title="Remove participant" { "✖" }
        }
    }
}

/// One `.activity-card`.
pub fn activity_card(name: &str, activity: &Activity) -> Markup {
    html! {
        div.activity-card {
            h4 { (name) }
            p { (activity.description) }
            p { strong { "Schedule:" } " " (activity.schedule) }
            p { strong { "Availability:" } " " (activity.spots_left()) " spots left" }
            @if activity.participants.is_empty() {
                p.no-participants { "No participants yet" }
            } @else {
                div.participants-section {
                    h5 { "Current Participants:" }
                    ul.participants-list {
                        @for email in &activity.participants {
                            li {
                                span.participant-email { (email) }
                                (remove_control(name, email))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Contents of `#activities-list` for a catalog, in server order.
pub fn activity_list(catalog: &ActivityCatalog) -> Markup {
    html! {
        @for (name, activity) in catalog.iter() {
            (activity_card(name, activity))
        }
    }
}

/// Contents of `#activities-list` when the catalog could not be loaded.
pub fn load_failure() -> Markup {
    html! {
        p { (LOAD_FAILURE_TEXT) }
    }
}

/// `#message`. A visible timed message carries its lifetime in whole
/// seconds as `data-ttl`, which the stylesheet turns into a fade-out.
fn message_area(state: &DocumentState) -> Markup {
    let Some(message) = state.visible_message() else {
        let class = match &state.message {
            Some(message) => format!("{} hidden", message.kind.css_class()),
            None => "message hidden".to_string(),
        };
        let text = state.message.as_ref().map_or("", |m| m.text.as_str());
        return html! {
            div #message class=(class) { span.message-text { (text) } }
        };
    };

    let ttl = state.message_ttl.map(|ttl| ttl.as_secs());
    html! {
        div #message class=(message.kind.css_class()) data-ttl=[ttl] role="status" {
            a.message-dismiss href="/" title="Dismiss" { "×" }
            span.message-text { (message.text) }
        }
    }
}

fn layout(body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PAGE_TITLE) }
                link rel="stylesheet" href="/styles.css";
            }
            body {
                header {
                    h1 { (PAGE_TITLE) }
                }
                main { (body) }
            }
        }
    }
}

/// The whole board page for a document.
pub fn page(state: &DocumentState) -> Markup {
    layout(html! {
        section #activities-container {
            h3 { "Available Activities" }
            div #activities-list {
                (PreEscaped(state.activities_html.as_str()))
            }
        }
        section #signup-container {
            h3 { "Sign Up for an Activity" }
            form #signup-form method="post" action=(SIGNUP_ACTION) {
                div.form-group {
                    label for="email" { "Student Email:" }
                    input #email type="email" name="email" required
                        placeholder="your-email@school.edu" value=(state.email);
                }
                div.form-group {
                    label for="activity" { "Select Activity:" }
                    select #activity name="activity" required {
                        option value="" { (PLACEHOLDER_OPTION) }
                        @for name in &state.activity_options {
                            option value=(name) selected[*name == state.selected_activity] { (name) }
                        }
                    }
                }
                button type="submit" { "Sign Up" }
            }
            (message_area(state))
        }
    })
}

/// Question asked before removing a participant.
pub fn removal_prompt(activity: &str, email: &str) -> String {
    format!("Remove {} from {}?", email, activity)
}

/// Confirmation page for removing `email` from `activity`.
pub fn confirm_removal(activity: &str, email: &str) -> Markup {
    layout(html! {
        section #confirm-removal {
            p.confirm-prompt { (removal_prompt(activity, email)) }
            form method="post" action=(REMOVE_ACTION) {
                input type="hidden" name="activity" value=(encode_data_attribute(activity));
                input type="hidden" name="email" value=(encode_data_attribute(email));
                input type="hidden" name="confirmed" value="yes";
                button type="submit" { "Remove" }
                " "
                a href="/" { "Cancel" }
            }
        }
    })
}
