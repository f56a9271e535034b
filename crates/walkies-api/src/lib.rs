//! Typed HTTP client for the Walkies marketplace API.
//!
//! One shared client carries every feature's requests: it attaches the
//! bearer token, serializes JSON bodies, parses responses and turns non-2xx
//! statuses into structured errors. No retry, no backoff, no caching.

mod client;
mod endpoints;

pub use client::{ApiClient, DEFAULT_BASE_URL};
