//! The ACL aggregate: per-object access rules resolved over principals.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use uuid::Uuid;
use wardyn_core::{AclId, GroupId, User, UserGroup, UserId};

use crate::entry::{GroupEntry, UserEntry};
use crate::error::{Error, Result};
use crate::permission::Permission;

/// Process-local instance token naming one in-memory ACL aggregate.
///
/// Entry owner back-references use this tag rather than the persistence
/// identity: a never-saved ACL has no [`AclId`], and a snapshot must own its
/// entries even when its source is saved. Tags are never persisted and never
/// participate in ACL equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AclTag(Uuid);

impl AclTag {
    pub(crate) fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AclTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Access rules attached to a single business object.
///
/// An ACL pairs principals with [`Permission`] levels in two tiers, at most
/// one entry per principal. A direct user entry, when present, always
/// decides by itself; group entries are the fallback, granting as soon as
/// any group containing the user carries a sufficient level. With no
/// applicable entry the answer is denial.
///
/// Equality and hashing follow persistence identity alone: two ACLs with
/// the same assigned [`AclId`] are equal whatever their entries, and two
/// ACLs that were never saved (`id()` is `None`) are mutually
/// indistinguishable. Assign identity before relying on equality.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use wardyn_acl::{Acl, Permission};
/// use wardyn_core::{User, UserId, WorkspaceId};
///
/// let ws = WorkspaceId::new("docs");
/// let reviewer = Arc::new(User::new(UserId::new(ws, "reviewer")));
///
/// let mut acl = Acl::new();
/// assert!(!acl.has_read_access(&reviewer));
///
/// acl.add_user_entry(Arc::clone(&reviewer), Permission::ReadOnly);
/// assert!(acl.has_read_access(&reviewer));
/// assert!(!acl.has_write_access(&reviewer));
/// ```
#[derive(Debug)]
pub struct Acl {
    id: Option<AclId>,
    tag: AclTag,
    enabled: bool,
    user_entries: HashMap<UserId, UserEntry>,
    group_entries: HashMap<GroupId, GroupEntry>,
}

impl Acl {
    /// Creates an empty, enabled ACL with no persistence identity.
    pub fn new() -> Self {
        Self {
            id: None,
            tag: AclTag::fresh(),
            enabled: true,
            user_entries: HashMap::new(),
            group_entries: HashMap::new(),
        }
    }

    /// Returns the persistence identity, if one has been assigned.
    pub fn id(&self) -> Option<AclId> {
        self.id
    }

    /// Assigns the persistence identity.
    ///
    /// Identity is assigned exactly once, normally by the store at first
    /// save. Re-assignment is an error even with the same value.
    pub fn assign_id(&mut self, id: AclId) -> Result<()> {
        match self.id {
            Some(existing) => Err(Error::IdentityAlreadyAssigned {
                existing,
                attempted: id,
            }),
            None => {
                self.id = Some(id);
                Ok(())
            }
        }
    }

    /// Returns the instance tag owning this aggregate's entries.
    pub fn tag(&self) -> AclTag {
        self.tag
    }

    /// Returns the advisory enabled flag.
    ///
    /// The flag is bookkeeping for callers: [`Acl::has_read_access`] and
    /// [`Acl::has_write_access`] do not consult it. A caller that wants a
    /// disabled ACL to stop filtering must check the flag itself and fall
    /// back to its workspace-level rules.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets the advisory enabled flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns `true` if `user` may read the guarded object.
    ///
    /// A direct entry for the user, when present, decides alone. Otherwise
    /// any group entry whose group contains the user and whose level allows
    /// reading grants access. No applicable entry means denial.
    pub fn has_read_access(&self, user: &User) -> bool {
        match self.user_entries.get(user.id()) {
            Some(entry) => entry.permission.can_read(),
            None => self
                .group_entries
                .values()
                .any(|entry| entry.principal.is_member(user) && entry.permission.can_read()),
        }
    }

    /// Returns `true` if `user` may modify the guarded object.
    ///
    /// Same resolution shape as [`Acl::has_read_access`] with the write
    /// question: only [`Permission::FullAccess`] qualifies.
    pub fn has_write_access(&self, user: &User) -> bool {
        match self.user_entries.get(user.id()) {
            Some(entry) => entry.permission.can_write(),
            None => self
                .group_entries
                .values()
                .any(|entry| entry.principal.is_member(user) && entry.permission.can_write()),
        }
    }

    /// Grants `permission` to a single user, silently replacing any
    /// previous entry for the same user.
    pub fn add_user_entry(&mut self, user: Arc<User>, permission: Permission) {
        log::debug!("acl {}: set user entry {} -> {permission}", self.tag, user.id());
        self.insert_user_entry(user, permission);
    }

    /// Grants `permission` to the members of a group, silently replacing
    /// any previous entry for the same group.
    pub fn add_group_entry(&mut self, group: Arc<UserGroup>, permission: Permission) {
        log::debug!(
            "acl {}: set group entry {} -> {permission}",
            self.tag,
            group.id()
        );
        self.insert_group_entry(group, permission);
    }

    /// Removes the entry for `user`, if any.
    ///
    /// Removing an absent entry is a no-op.
    pub fn remove_user_entry(&mut self, user: &UserId) {
        if self.user_entries.remove(user).is_some() {
            log::debug!("acl {}: removed user entry {user}", self.tag);
        }
    }

    /// Removes the entry for `group`, if any.
    ///
    /// Removing an absent entry is a no-op.
    pub fn remove_group_entry(&mut self, group: &GroupId) {
        if self.group_entries.remove(group).is_some() {
            log::debug!("acl {}: removed group entry {group}", self.tag);
        }
    }

    /// Looks up the direct entry for a user.
    pub fn user_entry(&self, user: &UserId) -> Option<&UserEntry> {
        self.user_entries.get(user)
    }

    /// Looks up the entry for a group.
    pub fn group_entry(&self, group: &GroupId) -> Option<&GroupEntry> {
        self.group_entries.get(group)
    }

    /// Iterates over all user entries, in no particular order.
    pub fn user_entries(&self) -> impl Iterator<Item = &UserEntry> {
        self.user_entries.values()
    }

    /// Iterates over all group entries, in no particular order.
    pub fn group_entries(&self) -> impl Iterator<Item = &GroupEntry> {
        self.group_entries.values()
    }

    /// Returns the total number of entries, user and group combined.
    pub fn entry_count(&self) -> usize {
        self.user_entries.len() + self.group_entries.len()
    }

    /// Returns `true` if the ACL holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.user_entries.is_empty() && self.group_entries.is_empty()
    }

    /// Returns a structurally independent copy of this ACL.
    ///
    /// The copy has a fresh instance tag and no persistence identity; the
    /// enabled flag and every entry are carried over, with each copied
    /// entry rebound to the new tag. Principal references are shared, not
    /// duplicated. Mutating either ACL afterwards never affects the other.
    ///
    /// `Clone` is deliberately not implemented for [`Acl`]: a derived clone
    /// would alias the persistence identity and the owner tags.
    pub fn snapshot(&self) -> Acl {
        let mut copy = Acl::new();
        copy.enabled = self.enabled;
        for entry in self.user_entries.values() {
            copy.insert_user_entry(Arc::clone(&entry.principal), entry.permission);
        }
        for entry in self.group_entries.values() {
            copy.insert_group_entry(Arc::clone(&entry.principal), entry.permission);
        }
        debug_assert!(
            copy.user_entries.values().all(|e| e.owner == copy.tag)
                && copy.group_entries.values().all(|e| e.owner == copy.tag),
            "snapshot entries must be owned by the copy"
        );
        copy
    }

    pub(crate) fn insert_user_entry(&mut self, user: Arc<User>, permission: Permission) {
        let key = user.id().clone();
        self.user_entries
            .insert(key, UserEntry::new(self.tag, user, permission));
    }

    pub(crate) fn insert_group_entry(&mut self, group: Arc<UserGroup>, permission: Permission) {
        let key = group.id().clone();
        self.group_entries
            .insert(key, GroupEntry::new(self.tag, group, permission));
    }
}

impl Default for Acl {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Acl {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Acl {}

impl Hash for Acl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
