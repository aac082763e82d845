//! Middleware for the HTTP API.

pub mod cors;
pub mod request_id;
