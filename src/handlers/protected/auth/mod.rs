// handlers/protected/auth/mod.rs - authenticated user endpoints

pub mod whoami;

pub use whoami::whoami_get;
