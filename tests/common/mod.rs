//! Shared setup for the integration tests: an in-process server over the
//! in-memory store, and a variant bound to a real local port for the tests
//! that go through reqwest (client, cache, proxy).
#![allow(dead_code)]

use agriviet_backend::config::AppState;
use agriviet_backend::routes::api_router;
use axum_test::TestServer;
use tempfile::TempDir;

pub struct TestApi {
    pub server: TestServer,
    pub state: AppState,
    // Uploads land here; dropped with the harness.
    _uploads: TempDir,
}

pub fn test_api() -> TestApi {
    let uploads = tempfile::tempdir().expect("create uploads dir");
    let state = AppState::in_memory(uploads.path().to_path_buf());
    let server = TestServer::new(api_router(state.clone())).expect("start test server");
    TestApi {
        server,
        state,
        _uploads: uploads,
    }
}

/// The API served on 127.0.0.1 so real HTTP clients can reach it.
pub struct RemoteApi {
    pub base_url: String,
    pub state: AppState,
    _uploads: TempDir,
}

pub async fn spawn_api() -> RemoteApi {
    let uploads = tempfile::tempdir().expect("create uploads dir");
    let state = AppState::in_memory(uploads.path().to_path_buf());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");

    let app = api_router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server exited");
    });

    RemoteApi {
        base_url: format!("http://{addr}"),
        state,
        _uploads: uploads,
    }
}

pub const MULTIPART_BOUNDARY: &str = "agriviet-test-boundary";

/// Hand-rolled multipart body with a known boundary; returns the
/// content-type header value and the encoded body.
pub fn multipart_image(field: &str, filename: &str, payload: &[u8]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    let content_type = format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}");
    (content_type, body)
}
