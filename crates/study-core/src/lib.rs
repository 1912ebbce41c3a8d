//! # study-core
//!
//! Core types and error types for the StudyBuddy client.
//!
//! This crate provides the foundational types shared across all StudyBuddy crates:
//! - Entity structs for the backend data model (workspaces, upload results, chat turns)
//! - Status enums with state machine transitions for the stateful views
//! - The opaque workspace identifier
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
