//! Stand-in for the Random.org `GET /integers/` endpoint.
//!
//! Answers with plain-text integers the way the real service does, records
//! every request it receives, and can be scripted to misbehave (fixed bodies,
//! error statuses, slow responses) so client failure paths can be exercised
//! over real HTTP.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
    time::Duration,
};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use rand::Rng;
use tokio::net::TcpListener;

const LIMIT: i64 = 1_000_000_000;

/// How the server answers the next requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// A uniformly random integer within the requested range.
    Random,
    /// Always this number, regardless of the range.
    Number(i64),
    /// Status 200 with this exact body.
    Body(String),
    /// This status with a Random.org-style error body.
    Status(u16),
    /// Wait, then answer as the inner behavior.
    Delay(Duration, Box<Behavior>),
}

/// One request as seen by the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub query: HashMap<String, String>,
    pub user_agent: Option<String>,
}

/// Shared, scriptable server state.
#[derive(Clone, Debug)]
pub struct MockState {
    behavior: Arc<RwLock<Behavior>>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl Default for MockState {
    fn default() -> Self {
        Self::new(Behavior::Random)
    }
}

impl MockState {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior: Arc::new(RwLock::new(behavior)),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn set_behavior(&self, behavior: Behavior) {
        *self.behavior.write().unwrap_or_else(|e| e.into_inner()) = behavior;
    }

    pub fn behavior(&self) -> Behavior {
        self.behavior.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn clear_requests(&self) {
        self.requests.write().unwrap_or_else(|e| e.into_inner()).clear();
    }

    fn record(&self, request: RecordedRequest) {
        self.requests.write().unwrap_or_else(|e| e.into_inner()).push(request);
    }
}

pub fn app() -> Router {
    app_with_state(MockState::default())
}

pub fn app_with_state(state: MockState) -> Router {
    Router::new()
        .route("/integers/", get(integers))
        .route("/integers", get(integers))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_state(listener, MockState::default()).await
}

pub async fn run_with_state(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

async fn integers(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    tracing::info!(?query, ?user_agent, "GET /integers/");
    state.record(RecordedRequest {
        query: query.clone(),
        user_agent,
    });

    let mut behavior = state.behavior();
    while let Behavior::Delay(wait, inner) = behavior {
        tokio::time::sleep(wait).await;
        behavior = *inner;
    }

    match behavior {
        Behavior::Random => match parse_range(&query) {
            Ok((min, max)) => plain(StatusCode::OK, format!("{}\n", rand::thread_rng().gen_range(min..=max))),
            Err(message) => plain(StatusCode::BAD_REQUEST, format!("Error: {message}\n")),
        },
        Behavior::Number(n) => plain(StatusCode::OK, format!("{n}\n")),
        Behavior::Body(body) => plain(StatusCode::OK, body),
        Behavior::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            plain(status, format!("Error: {}\n", status.canonical_reason().unwrap_or("unknown")))
        }
        Behavior::Delay(..) => unreachable!("delays are unwrapped above"),
    }
}

fn plain(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "text/plain;charset=UTF-8")], body).into_response()
}

/// Extract `[min, max]` from the query, rejecting what the real service rejects.
fn parse_range(query: &HashMap<String, String>) -> Result<(i64, i64), String> {
    let bound = |name: &str| -> Result<i64, String> {
        let raw = query
            .get(name)
            .ok_or_else(|| format!("The {name} parameter is missing"))?;
        let value: i64 = raw
            .parse()
            .map_err(|_| format!("The {name} value must be an integer"))?;
        if !(-LIMIT..=LIMIT).contains(&value) {
            return Err(format!("The {name} value must be in the [-1e9,1e9] interval"));
        }
        Ok(value)
    };
    let min = bound("min")?;
    let max = bound("max")?;
    if min > max {
        return Err("The maximum value must be greater than or equal to the minimum value".to_string());
    }
    Ok((min, max))
}
