// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_board::config::Config;
use activity_board::error::{BoardError, Result};
use activity_board::models::{Activity, ActivityCatalog};
use activity_board::routes::create_router;
use activity_board::services::{ActivityApi, HttpActivityService};
use activity_board::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Build an activity with the given capacity and roster.
#[allow(dead_code)]
pub fn activity(max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        description: "Learn strategies and compete in tournaments".to_string(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The single-card catalog used across tests.
#[allow(dead_code)]
pub fn chess_catalog() -> ActivityCatalog {
    [("Chess Club", activity(10, &["a@x.com"]))]
        .into_iter()
        .collect()
}

// ─── Scripted in-memory service ──────────────────────────────

/// In-memory `ActivityApi` with canned replies and call recording.
#[allow(dead_code)]
pub struct ScriptedApi {
    catalog: Mutex<Result<ActivityCatalog>>,
    signup_reply: Mutex<Result<Option<String>>>,
    removal_reply: Mutex<Result<Option<String>>>,
    gates: Mutex<VecDeque<oneshot::Receiver<Result<ActivityCatalog>>>>,
    fetches: AtomicUsize,
    signups: Mutex<Vec<(String, String)>>,
    removals: Mutex<Vec<(String, String)>>,
}

#[allow(dead_code)]
impl ScriptedApi {
    pub fn new(catalog: ActivityCatalog) -> Arc<Self> {
        Arc::new(Self {
            catalog: Mutex::new(Ok(catalog)),
            signup_reply: Mutex::new(Ok(Some("Signed up".to_string()))),
            removal_reply: Mutex::new(Ok(Some("Unregistered".to_string()))),
            gates: Mutex::new(VecDeque::new()),
            fetches: AtomicUsize::new(0),
            signups: Mutex::new(Vec::new()),
            removals: Mutex::new(Vec::new()),
        })
    }

    pub fn set_catalog(&self, catalog: Result<ActivityCatalog>) {
        *self.catalog.lock().unwrap() = catalog;
    }

    pub fn set_signup_reply(&self, reply: Result<Option<String>>) {
        *self.signup_reply.lock().unwrap() = reply;
    }

    pub fn set_removal_reply(&self, reply: Result<Option<String>>) {
        *self.removal_reply.lock().unwrap() = reply;
    }

    /// Make the next unclaimed catalog fetch wait for the returned sender.
    pub fn gate_next_fetch(&self) -> oneshot::Sender<Result<ActivityCatalog>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn signups(&self) -> Vec<(String, String)> {
        self.signups.lock().unwrap().clone()
    }

    pub fn removals(&self) -> Vec<(String, String)> {
        self.removals.lock().unwrap().clone()
    }
}

impl ActivityApi for ScriptedApi {
    async fn fetch_catalog(&self) -> Result<ActivityCatalog> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().pop_front();
        if let Some(rx) = gate {
            return rx
                .await
                .unwrap_or_else(|_| Err(BoardError::Transport("gate dropped".to_string())));
        }
        let catalog = self.catalog.lock().unwrap().clone();
        catalog
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<Option<String>> {
        self.signups
            .lock()
            .unwrap()
            .push((activity.to_string(), email.to_string()));
        self.signup_reply.lock().unwrap().clone()
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<Option<String>> {
        self.removals
            .lock()
            .unwrap()
            .push((activity.to_string(), email.to_string()));
        self.removal_reply.lock().unwrap().clone()
    }
}

// ─── Fake activity service over HTTP ─────────────────────────

/// State of the fake HTTP activity service.
#[allow(dead_code)]
pub struct FakeService {
    pub catalog: Mutex<ActivityCatalog>,
    pub catalog_requests: AtomicUsize,
}

#[allow(dead_code)]
impl FakeService {
    pub fn catalog_requests(&self) -> usize {
        self.catalog_requests.load(Ordering::SeqCst)
    }

    pub fn participants(&self, activity: &str) -> Vec<String> {
        self.catalog
            .lock()
            .unwrap()
            .get(activity)
            .map(|a| a.participants.clone())
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

async fn fake_catalog(State(service): State<Arc<FakeService>>) -> Json<ActivityCatalog> {
    service.catalog_requests.fetch_add(1, Ordering::SeqCst);
    Json(service.catalog.lock().unwrap().clone())
}

async fn fake_signup(
    State(service): State<Arc<FakeService>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> (StatusCode, Json<Value>) {
    let mut catalog = service.catalog.lock().unwrap();
    let Some(existing) = catalog.get(&name).cloned() else {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Activity not found"})));
    };
    if existing.participants.contains(&query.email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Student is already signed up"})),
        );
    }

    let mut updated = existing;
    updated.participants.push(query.email.clone());
    catalog.insert(name.clone(), updated);

    (
        StatusCode::OK,
        Json(json!({"message": format!("Signed up {} for {}", query.email, name)})),
    )
}

async fn fake_unregister(
    State(service): State<Arc<FakeService>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> (StatusCode, Json<Value>) {
    let mut catalog = service.catalog.lock().unwrap();
    let Some(existing) = catalog.get(&name).cloned() else {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Activity not found"})));
    };
    if !existing.participants.contains(&query.email) {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "not found"})));
    }

    let mut updated = existing;
    updated.participants.retain(|p| *p != query.email);
    catalog.insert(name.clone(), updated);

    (
        StatusCode::OK,
        Json(json!({"message": format!("Unregistered {} from {}", query.email, name)})),
    )
}

/// Serve `app` on an ephemeral local port and return its base URL.
#[allow(dead_code)]
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Start a fake activity service holding `catalog`.
#[allow(dead_code)]
pub async fn spawn_fake_service(catalog: ActivityCatalog) -> (String, Arc<FakeService>) {
    let service = Arc::new(FakeService {
        catalog: Mutex::new(catalog),
        catalog_requests: AtomicUsize::new(0),
    });

    let app = Router::new()
        .route("/activities", get(fake_catalog))
        .route("/activities/{name}/signup", post(fake_signup))
        .route("/activities/{name}/participants", delete(fake_unregister))
        .with_state(service.clone());

    (serve(app).await, service)
}

/// Start a service that answers every request with `status` and a plain-text body.
#[allow(dead_code)]
pub async fn spawn_garbage_service(status: StatusCode) -> String {
    let app = Router::new().fallback(move || async move { (status, "<html>upstream error</html>") });
    serve(app).await
}

/// A base URL nothing listens on.
#[allow(dead_code)]
pub async fn unreachable_service_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Create a board host pointed at `service_url`.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(service_url: &str) -> (Router, Arc<AppState>) {
    let mut config = Config::test_default();
    config.service_url = service_url.to_string();

    let activity_service =
        HttpActivityService::from_config(&config).expect("Failed to build test client");

    let state = Arc::new(AppState { activity_service });

    (create_router(state.clone()), state)
}
