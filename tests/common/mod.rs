// In-process stand-in for the PaperMC build API

#![allow(dead_code)]

use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use tokio::net::TcpListener;

pub const ARTIFACT_SIZE: usize = 256 * 1024;

pub const VERSIONS_JSON: &str = r#"{
    "project": { "id": "paper", "name": "Paper" },
    "versions": [
        { "version": { "id": "1.20.1" }, "builds": [1, 2] },
        { "version": { "id": "1.21" }, "builds": [5] }
    ]
}"#;

/// Deterministic artifact bytes
pub fn artifact() -> Vec<u8> {
    (0..ARTIFACT_SIZE).map(|i| (i % 251) as u8).collect()
}

fn builds_json(base: &str) -> String {
    format!(
        r#"[
            {{ "id": 1, "channel": "STABLE", "downloads": {{ "server:default": {{ "name": "paper-1.20.1-1.jar", "url": "{base}/objects/paper-1.20.1-1.jar" }} }} }},
            {{ "id": 2, "channel": "STABLE", "downloads": {{ "server:default": {{ "name": "paper-1.20.1-2.jar", "url": "{base}/objects/missing.jar" }} }} }}
        ]"#
    )
}

fn json(status: StatusCode, headers: &HeaderMap, body: String) -> axum::response::Response {
    let accepts_json = headers
        .get(header::ACCEPT)
        .and_then(|h| h.to_str().ok())
        .map(|h| h.contains("application/json"))
        .unwrap_or(false);
    if !accepts_json {
        return StatusCode::NOT_ACCEPTABLE.into_response();
    }
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

pub struct MockApi {
    /// Base URL of the `paper` project, as passed to `PaperApiClient::new`
    pub base_url: String,
    /// Server root, for the misbehaving endpoints under `/broken` and `/empty`
    pub root: String,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockApi {
    pub fn artifact_url(&self) -> String {
        format!("{}/objects/paper-1.20.1-1.jar", self.root)
    }

    pub fn missing_url(&self) -> String {
        format!("{}/objects/missing.jar", self.root)
    }
}

pub async fn start_server() -> MockApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let root = format!("http://{}", addr);
    let builds = builds_json(&root);

    let app = Router::new()
        .route(
            "/paper/versions",
            get(|headers: HeaderMap| async move {
                json(StatusCode::OK, &headers, VERSIONS_JSON.to_string())
            }),
        )
        .route(
            "/paper/versions/1.20.1/builds",
            get(move |headers: HeaderMap| {
                let builds = builds.clone();
                async move { json(StatusCode::OK, &headers, builds) }
            }),
        )
        .route(
            "/paper/versions/1.21/builds",
            get(|headers: HeaderMap| async move {
                json(StatusCode::OK, &headers, "[]".to_string())
            }),
        )
        .route(
            "/broken/versions",
            get(|headers: HeaderMap| async move {
                json(StatusCode::OK, &headers, "<html>maintenance</html>".to_string())
            }),
        )
        .route(
            "/empty/versions",
            get(|headers: HeaderMap| async move {
                json(StatusCode::OK, &headers, r#"{ "versions": [] }"#.to_string())
            }),
        )
        .route(
            "/objects/paper-1.20.1-1.jar",
            get(|| async {
                (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, "application/java-archive")],
                    artifact(),
                )
            }),
        );

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        base_url: format!("{}/paper", root),
        root,
        _handle: handle,
    }
}

/// An address nothing listens on
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Serve one response that promises `promised` bytes, send `sent`, then hang up.
pub async fn truncated_artifact_url(promised: usize, sent: usize) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // Drain the request head so closing does not reset the connection early.
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/java-archive\r\nContent-Length: {}\r\n\r\n",
            promised
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(&artifact()[..sent]).await.unwrap();
        socket.flush().await.unwrap();
        // Dropping the socket closes the connection mid-body.
    });

    format!("http://{}/objects/paper.jar", addr)
}
