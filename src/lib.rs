pub mod config;
pub mod garage;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod utils;
