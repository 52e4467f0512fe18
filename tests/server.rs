use std::net::SocketAddr;

use hello_world_rs::web::{self, Environment, WebConfig};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn start(config: WebConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            web::run(listener, &config, async {
                let _ = rx.await;
            })
            .await
            .unwrap();
        });
        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap();
    }
}

fn test_config() -> WebConfig {
    WebConfig {
        environment: Environment::Test,
        ..WebConfig::default()
    }
}

#[tokio::test]
async fn serves_hello_and_health_over_tcp() {
    let server = TestServer::start(test_config()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/hello?name=Grace%20Hopper"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "application/json; charset=utf-8"
    );
    let payload: Value = response.json().await.unwrap();
    assert_eq!(payload["message"], "Hello, Grace Hopper!");

    let health: Value = client
        .get(server.url("/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["port"], server.addr.port());
    assert_eq!(health["environment"], "test");

    server.stop().await;
}

#[tokio::test]
async fn unknown_routes_negotiate_on_accept() {
    let server = TestServer::start(test_config()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/does-not-exist"))
        .header("accept", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let payload: Value = response.json().await.unwrap();
    assert_eq!(
        payload["error"]["message"],
        "Route GET /does-not-exist not found"
    );

    let response = client
        .get(server.url("/does-not-exist"))
        .header("accept", "text/html")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body = response.text().await.unwrap();
    assert!(body.contains("404 - Page Not Found"));

    server.stop().await;
}

#[tokio::test]
async fn static_dir_index_overrides_builtin_page() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<p>custom landing</p>").unwrap();
    std::fs::write(dir.path().join("robots.txt"), "User-agent: *").unwrap();
    let server = TestServer::start(WebConfig {
        static_dir: Some(dir.path().to_path_buf()),
        ..test_config()
    })
    .await;
    let client = reqwest::Client::new();

    let body = client
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "<p>custom landing</p>");

    let robots = client.get(server.url("/robots.txt")).send().await.unwrap();
    assert_eq!(robots.status(), 200);
    assert_eq!(robots.text().await.unwrap(), "User-agent: *");

    let missing = client
        .get(server.url("/nope.txt"))
        .header("accept", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);

    server.stop().await;
}
