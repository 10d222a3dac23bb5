//! Common test utilities for sales-service integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::collections::HashSet;

use axum::Router;
use axum_test::TestServer;
use serde_json::Value;

use sales_service::{create_router, AppState, ServiceConfig};

/// Test harness wrapping a server over the default generated dataset.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
}

impl TestHarness {
    /// Create a harness with the built-in catalog and default seed.
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a harness from an explicit configuration.
    pub fn with_config(config: ServiceConfig) -> Self {
        let state = AppState::from_config(config).expect("Failed to build dataset");
        let router: Router = create_router(state);
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server }
    }

    /// GET a path and return the JSON body, asserting 200.
    pub async fn get_json(&self, path: &str) -> Value {
        let response = self.server.get(path).await;
        response.assert_status_ok();
        response.json()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration suitable for in-process tests.
pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        listen_addr: "127.0.0.1:0".into(),
        ..ServiceConfig::default()
    }
}

/// Borrow a JSON array field, panicking with the field name if absent.
pub fn array<'a>(body: &'a Value, field: &str) -> &'a Vec<Value> {
    body[field]
        .as_array()
        .unwrap_or_else(|| panic!("`{field}` is not an array: {body}"))
}

/// Collect the `id` fields of a JSON array.
pub fn ids(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

/// Numeric suffix of an `acc_<N>` / `con_<N>` id.
pub fn sequence(id: &str) -> u32 {
    id.split_once('_').unwrap().1.parse().unwrap()
}

/// Collect a string field of a JSON array into a set.
pub fn field_set(items: &[Value], field: &str) -> HashSet<String> {
    items
        .iter()
        .map(|item| item[field].as_str().unwrap().to_string())
        .collect()
}
