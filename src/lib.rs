pub mod api;
pub mod board;
pub mod client;
pub mod config;
pub mod models;
pub mod render;
