//! Shared harness: embedded RocksDB in a temp dir + the full router

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use restaurant_server::auth::{JwtConfig, JwtService};
use restaurant_server::core::{Config, ServerState};
use restaurant_server::db::DbService;
use restaurant_server::build_app;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
    pub token: String,
    _dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_work_dir(dir.path().to_string_lossy(), JwtConfig::for_tests());
    config.ensure_work_dir_structure().unwrap();

    let db = DbService::open(&config.database_dir(), "test", "test")
        .await
        .unwrap();
    let jwt = Arc::new(JwtService::with_config(config.jwt.clone()));
    let token = jwt
        .issue_tokens("staff@example.com", "Test", "Staff", "000000000000000000000000")
        .unwrap()
        .token;

    let state = ServerState::new(config, db.db, jwt);
    TestApp {
        app: build_app(state.clone()),
        state,
        token,
        _dir: dir,
    }
}

impl TestApp {
    /// Send a request with the test bearer token
    pub async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let token = self.token.clone();
        self.call_as(Some(&token), method, uri, body).await
    }

    pub async fn call_as(
        &self,
        token: Option<&str>,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    /// POST and return the inserted natural key
    pub async fn create(&self, uri: &str, body: Value) -> String {
        let (status, value) = self.call("POST", uri, Some(body)).await;
        assert_eq!(status, StatusCode::OK, "POST {uri} failed: {value}");
        value["inserted_id"].as_str().unwrap().to_string()
    }

    pub async fn create_menu(&self) -> String {
        let start = chrono::Utc::now() + chrono::Duration::days(1);
        let end = start + chrono::Duration::days(30);
        self.create(
            "/menus",
            json!({
                "name": "Dinner",
                "category": "main",
                "start_date": start,
                "end_date": end,
            }),
        )
        .await
    }

    pub async fn create_food(&self, menu_id: &str, name: &str, price: f64) -> String {
        self.create(
            "/foods",
            json!({
                "name": name,
                "price": price,
                "food_image": format!("{name}.png"),
                "menu_id": menu_id,
            }),
        )
        .await
    }

    pub async fn create_table(&self, table_number: i32) -> String {
        self.create(
            "/tables",
            json!({ "number_of_guests": 4, "table_number": table_number }),
        )
        .await
    }
}
