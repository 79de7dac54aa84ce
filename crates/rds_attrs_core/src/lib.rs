//! Shared snapshot-attribute domain primitives.
//!
//! This crate owns the request/response contracts and the deterministic
//! change-detection behavior. It intentionally excludes AWS SDK and CLI
//! concerns. See `crates/rds_attrs_core/README.md` for ownership boundaries.

pub mod contract;
pub mod mutation;
