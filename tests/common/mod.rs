#![allow(dead_code)]

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use serde_json::{Value, json};
use vibecheck::config::Config;

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";
pub const ACCESS_TOKEN: &str = "mock-token";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub authorization: Option<String>,
    pub params: HashMap<String, String>,
}

/// In-process stand-in for the Spotify token, search and recommendation
/// endpoints.
#[derive(Clone)]
pub struct MockSpotify {
    pub token_status: StatusCode,
    pub search_status: StatusCode,
    pub recommendations_status: StatusCode,
    pub artist_ids: Vec<String>,
    pub tracks: Vec<Value>,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Default for MockSpotify {
    fn default() -> Self {
        MockSpotify {
            token_status: StatusCode::OK,
            search_status: StatusCode::OK,
            recommendations_status: StatusCode::OK,
            artist_ids: Vec::new(),
            tracks: Vec::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockServer {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    pub fn config(&self, moods_file: PathBuf) -> Config {
        Config {
            client_id: CLIENT_ID.to_string(),
            client_secret: CLIENT_SECRET.to_string(),
            token_url: format!("{}/api/token", self.base_url),
            api_url: self.base_url.clone(),
            moods_file,
        }
    }
}

impl MockSpotify {
    pub fn with_tracks(mut self, tracks: Vec<Value>) -> Self {
        self.tracks = tracks;
        self
    }

    pub fn with_artist(mut self, id: &str) -> Self {
        self.artist_ids.push(id.to_string());
        self
    }

    pub fn start(self) -> MockServer {
        let requests = Arc::clone(&self.requests);
        let app = Router::new()
            .route("/api/token", post(token))
            .route("/search", get(search))
            .route("/recommendations", get(recommendations))
            .with_state(Arc::new(self));

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        MockServer {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    fn record(&self, path: &str, headers: &HeaderMap, params: HashMap<String, String>) {
        let authorization = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.lock().unwrap().push(Recorded {
            path: path.to_string(),
            authorization,
            params,
        });
    }
}

async fn token(
    State(mock): State<Arc<MockSpotify>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    mock.record("/api/token", &headers, form);
    if !mock.token_status.is_success() {
        return (mock.token_status, Json(json!({ "error": "invalid_client" })));
    }
    (
        StatusCode::OK,
        Json(json!({
            "access_token": ACCESS_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600
        })),
    )
}

async fn search(
    State(mock): State<Arc<MockSpotify>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    mock.record("/search", &headers, params);
    if !mock.search_status.is_success() {
        return (mock.search_status, Json(json!({ "error": "search failed" })));
    }
    let items: Vec<Value> = mock
        .artist_ids
        .iter()
        .map(|id| json!({ "id": id, "name": format!("Artist {}", id) }))
        .collect();
    (StatusCode::OK, Json(json!({ "artists": { "items": items } })))
}

async fn recommendations(
    State(mock): State<Arc<MockSpotify>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    mock.record("/recommendations", &headers, params);
    if !mock.recommendations_status.is_success() {
        return (
            mock.recommendations_status,
            Json(json!({ "error": "unavailable" })),
        );
    }
    (StatusCode::OK, Json(json!({ "tracks": mock.tracks })))
}

pub fn track_json(name: &str, artists: &[&str], url: &str) -> Value {
    let artists: Vec<Value> = artists.iter().map(|a| json!({ "name": a })).collect();
    json!({
        "name": name,
        "artists": artists,
        "external_urls": { "spotify": url }
    })
}

pub fn bundled_moods() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("moods.json")
}
