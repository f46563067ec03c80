//! HTTP API: routing, request/response mapping and runtime configuration.

pub mod app;
pub mod config;
