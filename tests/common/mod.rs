#![allow(dead_code)]

use knights::config::Config;
use knights::state::AppState;
use knights::{db, routes};
use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

pub const ADMIN_EMAIL: &str = "admin@example.org";
pub const ADMIN_PASSWORD: &str = "testingsite";

/// A running server on an ephemeral port backed by a temporary database.
pub struct TestApp {
    pub base_url: String,
    pub client: Client,
    _data_dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/api/admin/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("login request failed")
    }

    /// Log in with the seeded credential and return the bearer token.
    pub async fn admin_token(&self) -> String {
        let response = self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        body["access_token"].as_str().unwrap().to_string()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(customize: impl FnOnce(&mut Config)) -> TestApp {
    let data_dir = TempDir::new().unwrap();

    let mut config = Config::default();
    config.database.path = Some(data_dir.path().join("test.db"));
    config.auth.bcrypt_cost = 4;
    config.admin.email = ADMIN_EMAIL.to_string();
    config.admin.password = ADMIN_PASSWORD.to_string();
    customize(&mut config);

    let pool = db::create_pool(&config.db_path()).expect("Failed to create test database");
    db::run_migrations(&pool).expect("Failed to run migrations");
    db::seed_defaults(&pool, &config).expect("Failed to seed defaults");

    let app = routes::app(AppState { db: pool, config });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        base_url: format!("http://{}", addr),
        client: Client::new(),
        _data_dir: data_dir,
    }
}
