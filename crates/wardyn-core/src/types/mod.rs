//! Core types for Wardyn access control.

mod ids;
mod principal;
mod proptests;

pub use ids::{AclId, GroupId, UserId, WorkspaceId};
pub use principal::{User, UserGroup};
