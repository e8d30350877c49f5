//! # roster-core
//!
//! Core types and the resource projector for Roster.
//!
//! This crate provides the foundational types shared across all Roster crates:
//! - Structured resource identifiers
//! - Flattened internal records for users and groups
//! - Canonical (multi-valued) resources exchanged with the provisioning engine
//! - Query filter and query parameter types
//! - Resource kind, comparison operator, and member-type policy enums
//! - The projector mapping canonical resources to internal records and back
//! - Cross-cutting error types

pub mod canonical;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod ids;
pub mod projection;
pub mod records;
