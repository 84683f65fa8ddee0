//! Integration tests for the info service.
//!
//! These tests bind a real listener on an ephemeral loopback port.
//! Run with: cargo test --test integration

use std::net::SocketAddr;
use std::time::Duration;

use devops_info_service::api::{self, AppState};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Running server plus the handles needed to stop it.
struct TestServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(api::serve(listener, AppState::new(), async move {
            rx.await.ok();
        }));

        Self {
            addr,
            shutdown,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(self) {
        self.shutdown.send(()).ok();
        let result = tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("server did not shut down")
            .unwrap();
        assert!(result.is_ok(), "server error: {:?}", result.err());
    }
}

async fn get_json(url: &str) -> (reqwest::StatusCode, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_index_over_tcp_reports_peer_and_agent() {
    let server = TestServer::start().await;

    let response = reqwest::Client::new()
        .get(server.url("/"))
        .header(reqwest::header::USER_AGENT, "integration-agent")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["request"]["client_ip"], "127.0.0.1");
    assert_eq!(body["request"]["user_agent"], "integration-agent");
    assert_eq!(body["request"]["method"], "GET");
    assert_eq!(body["request"]["path"], "/");
    assert_eq!(body["service"]["name"], "devops-info-service");
    assert!(body["runtime"]["current_time"].as_str().unwrap().ends_with('Z'));

    server.stop().await;
}

#[tokio::test]
async fn test_health_uptime_is_non_decreasing() {
    let server = TestServer::start().await;

    let (status, first) = get_json(&server.url("/health")).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(first["status"], "healthy");
    let first_uptime = first["uptime_seconds"].as_u64().unwrap();
    assert!(first_uptime <= 1);

    tokio::time::sleep(Duration::from_secs(1)).await;

    let (_, second) = get_json(&server.url("/health")).await;
    let second_uptime = second["uptime_seconds"].as_u64().unwrap();
    assert!(second_uptime >= first_uptime);
    assert!(second_uptime >= 1);

    server.stop().await;
}

#[tokio::test]
async fn test_unknown_route_over_tcp() {
    let server = TestServer::start().await;

    let (status, body) = get_json(&server.url("/non-existent")).await;
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "Endpoint does not exist");

    server.stop().await;
}

#[tokio::test]
async fn test_index_runtime_seconds_is_non_decreasing() {
    let server = TestServer::start().await;

    let (status, first) = get_json(&server.url("/")).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    let first_seconds = first["runtime"]["seconds"].as_u64().unwrap();

    tokio::time::sleep(Duration::from_secs(1)).await;

    let (_, second) = get_json(&server.url("/")).await;
    let second_seconds = second["runtime"]["seconds"].as_u64().unwrap();
    assert!(second_seconds >= first_seconds);
    assert!(second_seconds >= 1);

    server.stop().await;
}
