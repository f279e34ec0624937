//! Workspace-scoped identifier types for principals and ACLs.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a workspace, the tenancy boundary for all access control.
///
/// Workspace IDs are human-readable strings like "engineering" or
/// "acme-docs".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    /// Creates a workspace ID from a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use wardyn_core::WorkspaceId;
    ///
    /// let id = WorkspaceId::new("engineering");
    /// assert_eq!(id.as_str(), "engineering");
    /// ```
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Returns the workspace ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WorkspaceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WorkspaceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for WorkspaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of a user account, unique within its workspace.
///
/// Users are keyed by `(workspace, login)`: the same login in two different
/// workspaces names two distinct principals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId {
    workspace: WorkspaceId,
    login: String,
}

impl UserId {
    /// Creates a user ID from a workspace and a login.
    ///
    /// # Examples
    ///
    /// ```
    /// use wardyn_core::{UserId, WorkspaceId};
    ///
    /// let id = UserId::new(WorkspaceId::new("engineering"), "mkato");
    /// assert_eq!(id.login(), "mkato");
    /// ```
    pub fn new<S: Into<String>>(workspace: WorkspaceId, login: S) -> Self {
        Self {
            workspace,
            login: login.into(),
        }
    }

    /// Returns the workspace this user belongs to.
    pub fn workspace(&self) -> &WorkspaceId {
        &self.workspace
    }

    /// Returns the login name.
    pub fn login(&self) -> &str {
        &self.login
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.workspace, self.login)
    }
}

/// Identifier of a user group, unique within its workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId {
    workspace: WorkspaceId,
    name: String,
}

impl GroupId {
    /// Creates a group ID from a workspace and a group name.
    pub fn new<S: Into<String>>(workspace: WorkspaceId, name: S) -> Self {
        Self {
            workspace,
            name: name.into(),
        }
    }

    /// Returns the workspace this group belongs to.
    pub fn workspace(&self) -> &WorkspaceId {
        &self.workspace
    }

    /// Returns the group name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.workspace, self.name)
    }
}

/// Persistence identity of an ACL aggregate.
///
/// Internally represented as a UUID v4. Stores assign one to each ACL at
/// first save; the identity then stays stable for the aggregate's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AclId(Uuid);

impl AclId {
    /// Creates a new random ACL ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use wardyn_core::AclId;
    ///
    /// let id = AclId::new();
    /// println!("ACL ID: {}", id);
    /// ```
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an ACL ID from a UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Converts to the inner UUID.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for AclId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for AclId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<AclId> for Uuid {
    fn from(id: AclId) -> Self {
        id.0
    }
}

impl std::str::FromStr for AclId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
