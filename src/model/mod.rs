//! Wire-level data transfer objects shared by the API surface.
//!
//! These types define the JSON request and response bodies of the HTTP API.
//! Multi-word fields serialize in camelCase to match the public API contract.

pub mod api;
pub mod menu;
pub mod restaurant;
pub mod user;
