//! Mock HTTP server setup for integration tests

#![allow(dead_code)]

use mockito::{Mock, Server, ServerGuard};
use relaywarden::RelayWardenClient;

pub const TEST_TOKEN: &str = "test-token";

/// Test fixture that owns a mock server and builds clients pointed at it
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client against the mock server with the given retry budget
    pub fn client(&self, max_retries: u32) -> RelayWardenClient {
        RelayWardenClient::builder()
            .base_url(&self.base_url)
            .token(TEST_TOKEN)
            .max_retries(max_retries)
            .build()
            .expect("client should build")
    }

    /// JSON response for `method path`
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Error envelope response, optionally carrying `Retry-After`
    pub async fn mock_error(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        error_body: &str,
        retry_after: Option<&str>,
        hits: usize,
    ) -> Mock {
        let mut mock = self
            .server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(error_body)
            .expect(hits);
        if let Some(value) = retry_after {
            mock = mock.with_header("retry-after", value);
        }
        mock.create_async().await
    }
}

/// Base URL on which nothing is listening
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}
