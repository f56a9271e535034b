//! Endpoint groups, one module per feature area.
//!
//! Each module implements the matching core gateway trait for [`ApiClient`]
//! and keeps its wire-only DTOs private.

mod auth;
mod bookings;
mod chat;
mod pets;
mod walkers;
