//! Shared utilities for integration tests.
//!
//! Provides helpers for starting the server on an ephemeral port and for
//! running mock upstream README backends.

use std::net::SocketAddr;

use govanity::{PackageConfig, SiteConfig, create_router};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Starts the vanity server on an ephemeral loopback port.
///
/// The server runs on a spawned task until the test runtime shuts down.
///
/// # Arguments
///
/// * `site`: Site configuration to serve
///
/// # Returns
///
/// Bound socket address of the running server
#[allow(dead_code)]
pub async fn start_server(site: SiteConfig) -> SocketAddr {
    let app = create_router(site);
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind ephemeral port");
    let addr = listener.local_addr().expect("Listener should have address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server should run");
    });

    addr
}

/// Starts a mock backend that answers every request with a fixed body.
///
/// # Arguments
///
/// * `body`: Response body returned for every request
///
/// # Returns
///
/// Bound socket address of the mock backend
#[allow(dead_code)]
pub async fn start_mock_backend(body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind ephemeral port");
    let addr = listener.local_addr().expect("Listener should have address");

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;

                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Builds a site configuration with a single package.
#[allow(dead_code)]
pub fn single_package_site(pkg: &str, repo: &str, readme: Option<String>) -> SiteConfig {
    SiteConfig {
        avatar: "https://example.com/avatar.png".to_string(),
        description: "Test packages".to_string(),
        packages: vec![PackageConfig {
            pkg: pkg.to_string(),
            repo: repo.to_string(),
            readme,
        }],
    }
}

/// Builds a ureq agent that reports HTTP error statuses as responses.
#[allow(dead_code)]
pub fn http_agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .into()
}
