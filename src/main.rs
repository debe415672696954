use axum::{
    routing::{delete, get, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod auth;
mod config;
mod database;
mod error;
mod handlers;
mod middleware;
mod services;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = crate::config::config();
    tracing::info!("Starting jobboard API in {:?} mode", config.environment);

    // Apply pending migrations; the server still starts without a database so
    // /health can report the degraded state.
    if let Err(e) = crate::database::manager::DatabaseManager::migrate().await {
        tracing::warn!("Migrations not applied: {}", e);
    }

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("JOBBOARD_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("jobboard API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        // Protected (JWT required)
        .merge(protected_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn public_routes() -> Router {
    use handlers::public::{auth, pages, user_posts};

    Router::new()
        // Token acquisition
        .route("/auth/register", post(auth::register_post))
        .route("/auth/login", post(auth::login_post))
        // Static informational pages
        .route("/about", get(pages::about_get))
        .route("/event", get(pages::event_get))
        .route("/resource", get(pages::resource_get))
        .route("/form-success", get(pages::form_success_get))
        // Posts by a given author
        .route("/user/:username", get(user_posts::user_posts_get))
}

fn protected_routes() -> Router {
    use axum::middleware::from_fn;
    use handlers::protected::{apply, auth, contact, posts};

    Router::new()
        .route("/home", get(posts::home_get))
        .route("/post/new", post(posts::create_post))
        .route("/post/:id", get(posts::detail_get))
        .route("/post/:id/update", put(posts::update_put))
        .route("/post/:id/delete", delete(posts::delete_post))
        .route("/post/:id/apply", post(apply::apply_post))
        .route("/contact", post(contact::contact_post))
        .route("/api/auth/whoami", get(auth::whoami_get))
        .route_layer(from_fn(middleware::jwt_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Jobboard API",
            "version": version,
            "description": "Job-posting board backend API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "auth": "/auth/register, /auth/login (public - token acquisition)",
                "pages": "/about, /event, /resource, /form-success (public)",
                "user_posts": "/user/:username (public)",
                "posts": "/home, /post/new, /post/:id[/update|/delete|/apply] (protected)",
                "contact": "/contact (protected)",
                "whoami": "/api/auth/whoami (protected)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
