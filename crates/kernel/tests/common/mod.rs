#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! This module provides test infrastructure that uses the REAL kernel code,
//! not mock implementations. Every [`TestApp`] owns a private in-memory
//! SQLite database and session store, so tests never share state.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use sitewright_kernel::{AppState, Config};
use sitewright_test_utils::unique_email;

pub const TEST_PASSWORD: &str = "test-password-123";

/// Test application wrapper using the REAL kernel routes and state.
pub struct TestApp {
    router: Router,
    pub db: SqlitePool,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with full kernel initialization.
    pub async fn new() -> Self {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            cookie_secure: false,
            ..Config::default()
        };

        let state = AppState::new(&config)
            .await
            .expect("Failed to initialize AppState");
        let db = state.db().clone();

        // The REAL router with every layer (must match main.rs)
        let router = sitewright_kernel::app(state.clone(), &config);

        Self { router, db, state }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// Send a request with an optional JSON body and session cookies.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        cookies: &str,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if !cookies.is_empty() {
            builder = builder.header(header::COOKIE, cookies);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.request(request).await
    }

    pub async fn get(&self, uri: &str, cookies: &str) -> Response {
        self.send(Method::GET, uri, None, cookies).await
    }

    pub async fn post(&self, uri: &str, body: Value, cookies: &str) -> Response {
        self.send(Method::POST, uri, Some(body), cookies).await
    }

    pub async fn put(&self, uri: &str, body: Value, cookies: &str) -> Response {
        self.send(Method::PUT, uri, Some(body), cookies).await
    }

    pub async fn delete(&self, uri: &str, cookies: &str) -> Response {
        self.send(Method::DELETE, uri, None, cookies).await
    }

    /// Login via JSON API and return session cookies.
    ///
    /// # Panics
    ///
    /// Panics if the login response is not 200 OK.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post(
                "/api/auth/login",
                serde_json::json!({ "email": email, "password": password }),
                "",
            )
            .await;

        assert_eq!(
            response.status(),
            StatusCode::OK,
            "Login failed for '{email}' (status {})",
            response.status()
        );

        extract_cookies(&response)
    }

    /// Create a user with `role` and return (user id, session cookies).
    pub async fn login_as(&self, role: &str) -> (i64, String) {
        let email = unique_email(role);
        let id = self.create_test_user(&email, TEST_PASSWORD, role).await;
        let cookies = self.login(&email, TEST_PASSWORD).await;
        (id, cookies)
    }

    /// Create a test user directly in the database.
    pub async fn create_test_user(&self, email: &str, password: &str, role: &str) -> i64 {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        // Minimal Argon2 params for test speed; the hash records its params
        // so normal verification still works.
        let password = password.to_owned();
        let password_hash = tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            let params = argon2::Params::new(4 * 1024, 1, 1, None)
                .expect("test Argon2 params are valid");
            let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .expect("Failed to hash password")
                .to_string()
        })
        .await
        .expect("Argon2 hashing task panicked");

        let now = chrono::Utc::now();
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (email, name, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(email)
        .bind("Test User")
        .bind(&password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.db)
        .await
        .expect("Failed to create test user");

        sqlx::query("INSERT INTO user_roles (user_id, role) VALUES (?, ?)")
            .bind(id)
            .bind(role)
            .execute(&self.db)
            .await
            .expect("Failed to assign test role");

        id
    }
}

/// Extract Set-Cookie headers from a response for use in subsequent requests.
pub fn extract_cookies(response: &Response) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|cookie| {
            // Extract just the cookie name=value, ignoring attributes
            cookie.split(';').next()
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is not JSON")
}

/// Read a response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
