use axum::extract::{RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Local stand-in for the product API, serving one canned response
pub struct StubBackend {
    pub base_url: String,
    state: StubState,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    hits: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl StubBackend {
    /// Number of requests served on `/api/products`
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// Raw query strings of the requests received so far
    pub fn queries(&self) -> Vec<String> {
        self.state.queries.lock().unwrap().clone()
    }
}

pub async fn spawn_backend(body: &str) -> StubBackend {
    spawn_backend_with_status(StatusCode::OK, body).await
}

pub async fn spawn_backend_with_status(status: StatusCode, body: &str) -> StubBackend {
    let state = StubState {
        status,
        body: body.to_string(),
        hits: Arc::new(AtomicUsize::new(0)),
        queries: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/api/products", get(serve_products))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBackend {
        base_url: format!("http://{}", addr),
        state,
    }
}

async fn serve_products(
    State(state): State<StubState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.queries.lock().unwrap().push(query.unwrap_or_default());

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Base URL of a port that was bound and released, so nothing listens there
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
