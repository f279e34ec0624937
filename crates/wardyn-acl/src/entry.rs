//! ACL entries: one permission binding per principal.

use std::sync::Arc;

use wardyn_core::{User, UserGroup};

use crate::acl::AclTag;
use crate::permission::Permission;

/// Permission binding for a single user.
///
/// Entries are immutable once created and only come into existence inside
/// an [`Acl`](crate::Acl), so the owner tag always names the aggregate an
/// entry currently belongs to. Principal references are shared, not copied:
/// principals are external identity data with their own lifecycle.
#[derive(Debug)]
pub struct UserEntry {
    pub(crate) owner: AclTag,
    pub(crate) principal: Arc<User>,
    pub(crate) permission: Permission,
}

impl UserEntry {
    pub(crate) fn new(owner: AclTag, principal: Arc<User>, permission: Permission) -> Self {
        Self {
            owner,
            principal,
            permission,
        }
    }

    /// Returns the instance tag of the ACL this entry belongs to.
    pub fn owner(&self) -> AclTag {
        self.owner
    }

    /// Returns the user this entry binds.
    pub fn principal(&self) -> &User {
        &self.principal
    }

    /// Returns the granted permission level.
    pub fn permission(&self) -> Permission {
        self.permission
    }
}

/// Permission binding for a whole user group.
///
/// Same ownership rules as [`UserEntry`]; the group's membership is a
/// materialized snapshot shared through the [`Arc`].
#[derive(Debug)]
pub struct GroupEntry {
    pub(crate) owner: AclTag,
    pub(crate) principal: Arc<UserGroup>,
    pub(crate) permission: Permission,
}

impl GroupEntry {
    pub(crate) fn new(owner: AclTag, principal: Arc<UserGroup>, permission: Permission) -> Self {
        Self {
            owner,
            principal,
            permission,
        }
    }

    /// Returns the instance tag of the ACL this entry belongs to.
    pub fn owner(&self) -> AclTag {
        self.owner
    }

    /// Returns the group this entry binds.
    pub fn principal(&self) -> &UserGroup {
        &self.principal
    }

    /// Returns the granted permission level.
    pub fn permission(&self) -> Permission {
        self.permission
    }
}
