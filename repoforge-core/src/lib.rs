//! Repoforge Core
//!
//! Core types shared by the Repoforge service, its provider client and the CLI.
//!
//! This crate contains:
//! - Domain types: creation requests, created repositories, per-item results and batches
//! - DTOs: wire representations for the provider API and the service API

pub mod domain;
pub mod dto;
