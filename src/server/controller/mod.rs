//! HTTP request handlers.
//!
//! Controllers translate HTTP requests into service calls: they run the auth
//! guard for protected routes, validate and convert request DTOs into
//! parameter models, and map service results back to status codes and
//! response DTOs.

pub mod auth;
pub mod menu;
pub mod restaurant;
pub mod user;
