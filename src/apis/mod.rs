//! Upstream HTTP API clients

pub mod client;
pub mod raydium;

pub use client::HttpClient;
pub use raydium::RaydiumClient;
