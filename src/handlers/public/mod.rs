// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition, static informational pages, and the per-author post
// listing. No user context is available here; everything is validated.

pub mod auth;
pub mod pages;
pub mod user_posts;
