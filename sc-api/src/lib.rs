//! Shotcut API - HTTP client for the Shotcut.in URL shortener REST API.
//!
//! This crate provides a typed HTTP client covering all nine REST API
//! resource categories exposed by Shotcut.in: account, links, QR codes,
//! campaigns, branded domains, channels, tracking pixels, splash pages, and
//! CTA overlays. It handles Bearer authentication, query/body serialization,
//! response interpretation, and rate-limit detection.
//!
//! Every endpoint method returns the server's decoded JSON payload verbatim
//! or exactly one [`sc_core::ScError`]; the client never reshapes the remote
//! schema. Retries are a caller concern: a rate-limit error carries the
//! window reset time so callers can sleep and retry if they choose.

pub mod client;
pub mod endpoints;
pub mod models;
pub mod response;
pub mod validate;

// Re-export key types
pub use client::ApiClient;
pub use sc_core::{ClientConfig, RateLimitReset, ScError, ScResult};
