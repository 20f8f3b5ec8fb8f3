//! Data Transfer Objects
//!
//! Wire representations that do not map one-to-one onto domain types:
//! - `github`: request/response bodies of the provider's create-repository API
//! - `repository`: the service's per-item result shape

pub mod github;
pub mod repository;
