//! Principal types that permissions are granted to.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::{GroupId, UserId};

/// A user account inside a workspace.
///
/// Users are identity objects: equality and hashing use the [`UserId`]
/// only, so two values naming the same account compare equal regardless of
/// display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: Option<String>,
}

impl User {
    /// Creates a user with the given identity and no display name.
    pub fn new(id: UserId) -> Self {
        Self { id, name: None }
    }

    /// Sets the display name.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the user's identity.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name, if one is set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A named set of users inside a workspace.
///
/// Membership is a materialized set of user IDs, so [`UserGroup::is_member`]
/// is a cheap synchronous lookup. Equality and hashing use the [`GroupId`]
/// only; membership content never participates.
///
/// # Examples
///
/// ```
/// use wardyn_core::{GroupId, User, UserGroup, UserId, WorkspaceId};
///
/// let ws = WorkspaceId::new("plant");
/// let ana = User::new(UserId::new(ws.clone(), "ana"));
/// let operators = UserGroup::new(GroupId::new(ws, "operators"))
///     .with_member(ana.id().clone());
/// assert!(operators.is_member(&ana));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserGroup {
    id: GroupId,
    members: HashSet<UserId>,
}

impl UserGroup {
    /// Creates an empty group with the given identity.
    pub fn new(id: GroupId) -> Self {
        Self {
            id,
            members: HashSet::new(),
        }
    }

    /// Adds a member, builder-style.
    pub fn with_member(mut self, member: UserId) -> Self {
        self.members.insert(member);
        self
    }

    /// Returns the group's identity.
    pub fn id(&self) -> &GroupId {
        &self.id
    }

    /// Adds a member. Returns `false` if the user was already a member.
    pub fn add_member(&mut self, member: UserId) -> bool {
        self.members.insert(member)
    }

    /// Removes a member. Returns `false` if the user was not a member.
    pub fn remove_member(&mut self, member: &UserId) -> bool {
        self.members.remove(member)
    }

    /// Returns `true` if `user` belongs to this group.
    pub fn is_member(&self, user: &User) -> bool {
        self.members.contains(user.id())
    }

    /// Iterates over the member IDs, in no particular order.
    pub fn members(&self) -> impl Iterator<Item = &UserId> {
        self.members.iter()
    }

    /// Returns the number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl PartialEq for UserGroup {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for UserGroup {}

impl Hash for UserGroup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for UserGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::WorkspaceId;
    use std::collections::HashSet;

    fn uid(login: &str) -> UserId {
        UserId::new(WorkspaceId::new("plant"), login)
    }

    fn gid(name: &str) -> GroupId {
        GroupId::new(WorkspaceId::new("plant"), name)
    }

    #[test]
    fn test_user_builder() {
        let user = User::new(uid("ana")).with_name("Ana Torres");
        assert_eq!(user.id().login(), "ana");
        assert_eq!(user.name(), Some("Ana Torres"));
    }

    #[test]
    fn test_user_equality_follows_identity() {
        let plain = User::new(uid("ana"));
        let named = User::new(uid("ana")).with_name("Ana Torres");
        let other = User::new(uid("bo"));
        assert_eq!(plain, named, "Display metadata must not affect equality");
        assert_ne!(plain, other);
    }

    #[test]
    fn test_user_hash_follows_identity() {
        let mut set = HashSet::new();
        set.insert(User::new(uid("ana")));
        set.insert(User::new(uid("ana")).with_name("Ana Torres"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_group_membership() {
        let mut group = UserGroup::new(gid("operators"));
        assert!(group.is_empty());

        assert!(group.add_member(uid("ana")));
        assert!(!group.add_member(uid("ana")), "Re-adding is a no-op");
        assert_eq!(group.member_count(), 1);

        let ana = User::new(uid("ana"));
        let bo = User::new(uid("bo"));
        assert!(group.is_member(&ana));
        assert!(!group.is_member(&bo));

        assert!(group.remove_member(&uid("ana")));
    }

    #[test]
    fn test_group_remove_member() {
        let mut group = UserGroup::new(gid("operators")).with_member(uid("ana"));
        assert!(group.remove_member(&uid("ana")));
        assert!(!group.remove_member(&uid("ana")), "Removal is idempotent");
        assert!(!group.is_member(&User::new(uid("ana"))));
    }

    #[test]
    fn test_group_equality_follows_identity() {
        let empty = UserGroup::new(gid("operators"));
        let staffed = UserGroup::new(gid("operators")).with_member(uid("ana"));
        assert_eq!(empty, staffed, "Membership must not affect equality");
        assert_ne!(empty, UserGroup::new(gid("managers")));
    }

    #[test]
    fn test_group_members_iterator() {
        let group = UserGroup::new(gid("operators"))
            .with_member(uid("ana"))
            .with_member(uid("bo"));
        let logins: HashSet<&str> = group.members().map(UserId::login).collect();
        assert_eq!(logins, HashSet::from(["ana", "bo"]));
    }

    #[test]
    fn test_user_roundtrip_serialization() {
        let user = User::new(uid("ana")).with_name("Ana Torres");
        let json = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user.id(), deserialized.id());
        assert_eq!(user.name(), deserialized.name());
    }

    #[test]
    fn test_group_roundtrip_serialization() {
        let group = UserGroup::new(gid("operators")).with_member(uid("ana"));
        let json = serde_json::to_string(&group).unwrap();
        let deserialized: UserGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(group.id(), deserialized.id());
        assert_eq!(deserialized.member_count(), 1);
    }
}
