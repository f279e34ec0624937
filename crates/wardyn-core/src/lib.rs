#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Wardyn Core Library
//!
//! Identity types shared across the Wardyn crates: workspace-scoped
//! identifiers and the principal types permissions are granted to.

pub mod types;

// Re-exports for convenience
pub use types::{AclId, GroupId, User, UserGroup, UserId, WorkspaceId};
