mod common;

use common::{spawn_app, spawn_app_with, ADMIN_EMAIL, ADMIN_PASSWORD};
use serde_json::{json, Value};

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let app = spawn_app().await;

    let response = app.login(ADMIN_EMAIL, "not-the-password").await;
    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Incorrect email or password");
}

#[tokio::test]
async fn login_with_unknown_email_fails() {
    let app = spawn_app().await;
    let response = app.login("someone@example.org", ADMIN_PASSWORD).await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn login_returns_usable_bearer_token() {
    let app = spawn_app().await;

    let response = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["token_type"], "bearer");
    let token = body["access_token"].as_str().unwrap();
    assert_eq!(token.len(), 64);

    let session = app
        .client
        .get(app.url("/api/admin/session"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(session.status(), 200);
    let session: Value = session.json().await.unwrap();
    assert_eq!(session["email"], ADMIN_EMAIL);
}

#[tokio::test]
async fn login_email_is_case_insensitive() {
    let app = spawn_app().await;
    let response = app.login(" Admin@Example.org ", ADMIN_PASSWORD).await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn admin_routes_reject_missing_and_unknown_tokens() {
    let app = spawn_app().await;

    let missing = app
        .client
        .get(app.url("/api/contact/individual"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 401);
    assert_eq!(missing.headers()["www-authenticate"], "Bearer");

    let unknown = app
        .client
        .put(app.url("/api/about-us"))
        .bearer_auth("deadbeef")
        .json(&json!({ "content": "Hijacked" }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), 401);
    let body: Value = unknown.json().await.unwrap();
    assert_eq!(body["detail"], "Invalid authentication credentials");
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let app = spawn_app_with(|config| config.auth.session_hours = 0).await;
    let token = app.admin_token().await;

    let response = app
        .client
        .get(app.url("/api/admin/session"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn logout_revokes_token() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let logout = app
        .client
        .post(app.url("/api/admin/logout"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(logout.status(), 200);

    let after = app
        .client
        .get(app.url("/api/admin/session"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(after.status(), 401);
}

#[tokio::test]
async fn credential_update_requires_current_password() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let response = app
        .client
        .post(app.url("/api/admin/update"))
        .bearer_auth(&token)
        .json(&json!({ "current_password": "wrong", "new_password": "n3w-pass" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Current password is incorrect");

    // Old password still works
    assert_eq!(app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.status(), 200);
}

#[tokio::test]
async fn credential_update_replaces_password() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let other_session = app.admin_token().await;

    let response = app
        .client
        .post(app.url("/api/admin/update"))
        .bearer_auth(&token)
        .json(&json!({ "current_password": ADMIN_PASSWORD, "new_password": "n3w-pass" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Admin credentials updated successfully");

    assert_eq!(app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.status(), 401);
    assert_eq!(app.login(ADMIN_EMAIL, "n3w-pass").await.status(), 200);

    // The session that made the change survives, other sessions do not
    let current = app
        .client
        .get(app.url("/api/admin/session"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(current.status(), 200);
    let other = app
        .client
        .get(app.url("/api/admin/session"))
        .bearer_auth(&other_session)
        .send()
        .await
        .unwrap();
    assert_eq!(other.status(), 401);
}

#[tokio::test]
async fn credential_update_changes_email() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let response = app
        .client
        .post(app.url("/api/admin/update"))
        .bearer_auth(&token)
        .json(&json!({ "email": "board@example.org", "current_password": ADMIN_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    assert_eq!(app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.status(), 401);
    assert_eq!(
        app.login("board@example.org", ADMIN_PASSWORD).await.status(),
        200
    );
}

#[tokio::test]
async fn credential_update_rejects_bad_email_and_empty_change() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let bad_email = app
        .client
        .post(app.url("/api/admin/update"))
        .bearer_auth(&token)
        .json(&json!({ "email": "not-an-email", "current_password": ADMIN_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_email.status(), 400);

    let nothing = app
        .client
        .post(app.url("/api/admin/update"))
        .bearer_auth(&token)
        .json(&json!({ "current_password": ADMIN_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(nothing.status(), 400);
}

#[tokio::test]
async fn credential_update_rejects_blank_and_oversized_passwords() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let blank = app
        .client
        .post(app.url("/api/admin/update"))
        .bearer_auth(&token)
        .json(&json!({ "current_password": ADMIN_PASSWORD, "new_password": "     " }))
        .send()
        .await
        .unwrap();
    assert_eq!(blank.status(), 400);
    let body: Value = blank.json().await.unwrap();
    assert_eq!(body["detail"], "Provide a new email or a new password");

    let oversized = app
        .client
        .post(app.url("/api/admin/update"))
        .bearer_auth(&token)
        .json(&json!({ "current_password": ADMIN_PASSWORD, "new_password": "x".repeat(73) }))
        .send()
        .await
        .unwrap();
    assert_eq!(oversized.status(), 400);

    // Old password still works after both rejections
    assert_eq!(app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.status(), 200);
}

#[tokio::test]
async fn login_with_malformed_body_gets_json_error() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/admin/login"))
        .header("Content-Type", "application/json")
        .body("{\"email\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].is_string());
}
