// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Every route in this tier sits behind jwt_auth_middleware, which injects the
// AuthUser extension the handlers consume.

pub mod apply; // POST /post/:id/apply
pub mod auth; // GET /api/auth/whoami
pub mod contact; // POST /contact
pub mod posts; // /home, /post/*
