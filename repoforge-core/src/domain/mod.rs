//! Core domain types
//!
//! These types describe one repository creation and a batch of them. They are
//! shared between the server (which produces them) and the client/CLI (which
//! consume them over HTTP).

pub mod batch;
pub mod error;
pub mod repository;
