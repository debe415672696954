// Exact sequential-number semantics. This file holds a single test so this
// binary's freshly provisioned database sees no other writers and the posts
// table genuinely starts empty.

mod common;

use anyhow::{Context, Result};
use reqwest::StatusCode;

async fn create_post(
    server: &common::TestServer,
    token: &str,
    title: &str,
) -> Result<serde_json::Value> {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/post/new", server.base_url))
        .bearer_auth(token)
        .json(&serde_json::json!({ "title": title, "content": "Some role description" }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::CREATED, "create failed: {}", res.status());
    let body = res.json::<serde_json::Value>().await?;
    Ok(body["data"].clone())
}

async fn delete_post(server: &common::TestServer, token: &str, id: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let res = client
        .delete(format!("{}/post/{}/delete", server.base_url, id))
        .bearer_auth(token)
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::NO_CONTENT, "delete failed: {}", res.status());
    Ok(())
}

#[tokio::test]
async fn numbers_run_one_to_n_and_revert_when_all_posts_are_gone() -> Result<()> {
    if !common::db_available() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    if !server.isolated_db {
        eprintln!("no isolated database for this run; skipping exact-sequence test");
        return Ok(());
    }
    let (_user, token) = common::register_and_login(server, "seq", "staff").await?;

    let number = |post: &serde_json::Value| -> Result<i64> {
        post["unique_number"].as_i64().context("missing unique_number")
    };

    // First post ever gets 1, the next gets 2
    let a = create_post(server, &token, "Post A").await?;
    assert_eq!(number(&a)?, 1);
    let b = create_post(server, &token, "Post B").await?;
    assert_eq!(number(&b)?, 2);

    // Deleting A does not free its number: assignment follows the maximum
    // still on record
    delete_post(server, &token, a["id"].as_str().unwrap()).await?;
    let c = create_post(server, &token, "Post C").await?;
    assert_eq!(number(&c)?, 3);

    // With every post gone the sequence starts over at 1
    delete_post(server, &token, b["id"].as_str().unwrap()).await?;
    delete_post(server, &token, c["id"].as_str().unwrap()).await?;
    let d = create_post(server, &token, "Post D").await?;
    assert_eq!(number(&d)?, 1);

    Ok(())
}
