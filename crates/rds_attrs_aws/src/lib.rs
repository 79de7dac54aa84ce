//! AWS-oriented adapters and handlers for snapshot attribute management.
//!
//! This crate owns runtime integration details (the RDS client adapter,
//! the attribute-change resolve handler, and the CLI binary) behind the
//! `SnapshotAttributeApi` boundary. Domain contracts and change detection
//! live in `rds_attrs_core`.
//! See `crates/rds_attrs_aws/README.md` for ownership boundaries.

pub mod adapters;
pub mod handlers;
