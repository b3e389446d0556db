//! Core building blocks for workspace-subset
//!
//! - **config**: subset.toml parsing with contract-matching defaults
//! - **context**: unified per-invocation workspace context
//! - **error**: error types with contextual help messages and exit codes
//! - **naming**: seed eligibility and companion-module identifiers
//! - **plan**: keep/unload partition and sink-facing apply actions

pub mod config;
pub mod context;
pub mod error;
pub mod naming;
pub mod plan;
