use std::env;

pub mod cors;

pub use cors::create_cors_layer;

pub struct Config {
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            // 3001 is the port the frontend's API client targets.
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string()),
        }
    }
}
