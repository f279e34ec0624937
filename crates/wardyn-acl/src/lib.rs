#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # wardyn-acl
//!
//! Object-level access control lists for multi-tenant workspace
//! applications:
//! - Three-level permission lattice (forbidden, read-only, full access)
//! - Direct per-user overrides with per-group fallback resolution
//! - Deep-copy snapshots for immutable permission baselines
//! - An async store contract with an in-memory reference implementation

pub mod acl;
pub mod entry;
pub mod error;
pub mod permission;
pub mod store;

mod proptests;

pub use acl::{Acl, AclTag};
pub use entry::{GroupEntry, UserEntry};
pub use error::{Error, Result};
pub use permission::Permission;
pub use store::{AclStore, MemoryStore};
