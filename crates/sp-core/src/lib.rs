//! # sp-core
//!
//! Core types, status enums, and error types for the study planner.
//!
//! This crate provides the foundational types shared across all planner crates:
//! - Entity structs for users, plans, tasks, and activity snapshots
//! - Status enums with state machine transitions
//! - Input validation and calendar-date helpers
//! - Cross-cutting error types
//! - CLI response types
//! - JSON schema registry for the public types

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod schema;
pub mod validation;
