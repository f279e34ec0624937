//! Wardyn workspace access control — umbrella crate.
//!
//! This crate re-exports all Wardyn components for convenience.

#![doc = include_str!("../README.md")]

pub use wardyn_acl as acl;
pub use wardyn_core as core;
