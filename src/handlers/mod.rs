// handlers/mod.rs - Two-tier handler architecture
//
// Public (no auth) -> Protected (JWT auth required)

pub mod public; // No authentication required (/auth/*, static pages, /user/*)
pub mod protected; // JWT authentication required (posts, apply, contact)
pub mod validate;
