mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn register_login_whoami_round_trip() -> Result<()> {
    if !common::db_available() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (username, token) = common::register_and_login(server, "auth_rt", "student").await?;

    let res = client
        .get(format!("{}/api/auth/whoami", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["username"], username.as_str());
    assert_eq!(body["data"]["role"], "student");

    Ok(())
}

#[tokio::test]
async fn duplicate_username_is_conflict() -> Result<()> {
    if !common::db_available() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let username = common::unique_name("auth_dup");
    let payload = serde_json::json!({
        "username": username,
        "email": format!("{}@example.com", username),
        "password": "some password",
    });

    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn wrong_password_is_unauthorized() -> Result<()> {
    if !common::db_available() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (username, _token) = common::register_and_login(server, "auth_pw", "student").await?;

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&serde_json::json!({ "username": username, "password": "wrong" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn register_validates_fields() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&serde_json::json!({
            "username": "",
            "email": "not-an-email",
            "password": "",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["username"].is_string());
    assert!(body["field_errors"]["email"].is_string());

    Ok(())
}
