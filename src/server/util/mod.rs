//! Small self-contained helpers used across the server.

pub mod password;
pub mod validate;
