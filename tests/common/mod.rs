use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::OnceCell;

static SERVER: OnceCell<TestServer> = OnceCell::const_new();

pub struct TestServer {
    #[allow(dead_code)]
    pub port: u16,
    pub base_url: String,
    /// True when this run got its own freshly created database; tests that
    /// need an initially empty posts table check this before asserting
    pub isolated_db: bool,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    async fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Each test binary gets its own database when possible, so runs never
        // observe each other's rows
        let database = match std::env::var("DATABASE_URL") {
            Ok(admin_url) => match provision_database(&admin_url).await {
                Ok(url) => Some((url, true)),
                Err(e) => {
                    eprintln!("could not provision a test database ({}); reusing DATABASE_URL", e);
                    Some((admin_url, false))
                }
            },
            Err(_) => None,
        };

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/jobboard-api");
        cmd.env("JOBBOARD_API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let isolated_db = match &database {
            Some((url, isolated)) => {
                // The server migrates the fresh database at startup
                cmd.env("DATABASE_URL", url);
                *isolated
            }
            None => false,
        };

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, isolated_db, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                // Consider server ready on any non-404 response
                if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_try_init(TestServer::spawn).await?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Create an empty per-run database and return a connection URL pointing at it
async fn provision_database(admin_url: &str) -> Result<String> {
    let db_name = format!("jobboard_test_{}_{}", std::process::id(), nanos());

    let admin_pool = PgPoolOptions::new().max_connections(1).connect(admin_url).await?;
    sqlx::query(&format!("CREATE DATABASE \"{}\"", db_name))
        .execute(&admin_pool)
        .await?;
    admin_pool.close().await;

    // Swap the database name in the URL path
    let mut url = url::Url::parse(admin_url).context("invalid DATABASE_URL")?;
    url.set_path(&format!("/{}", db_name));
    Ok(url.to_string())
}

/// Database-backed tests bail out quietly on machines without Postgres
#[allow(dead_code)]
pub fn db_available() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL not set; skipping database-backed test");
        return false;
    }
    true
}

fn nanos() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock")
        .as_nanos()
}

/// Unique per-invocation name so repeated test runs never collide on
/// the username UNIQUE constraint
#[allow(dead_code)]
pub fn unique_name(prefix: &str) -> String {
    format!("{}_{}_{}", prefix, std::process::id(), nanos())
}

/// Register a fresh user and log them in, returning (username, token)
#[allow(dead_code)]
pub async fn register_and_login(
    server: &TestServer,
    prefix: &str,
    role: &str,
) -> Result<(String, String)> {
    let client = reqwest::Client::new();
    let username = unique_name(prefix);
    let password = "correct horse battery staple";

    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&serde_json::json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": password,
            "role": role,
        }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == reqwest::StatusCode::CREATED, "register failed: {}", res.status());

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await?;
    anyhow::ensure!(res.status().is_success(), "login failed: {}", res.status());

    let body = res.json::<serde_json::Value>().await?;
    let token = body["data"]["token"]
        .as_str()
        .context("login response missing token")?
        .to_string();

    Ok((username, token))
}
