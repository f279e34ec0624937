//! Storage boundary for ACL aggregates.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use wardyn_core::{AclId, User, UserGroup};

use crate::acl::Acl;
use crate::error::Result;
use crate::permission::Permission;

/// Persistence contract for ACL aggregates.
///
/// The engine never stores itself; implementations bridge it to a real
/// backend. Two obligations beyond the obvious shape:
///
/// - [`AclStore::save`] assigns the persistence identity on first save and
///   keeps it stable afterwards.
/// - Deleting an ACL must cascade over both entry collections, keyed by the
///   ACL's identity, leaving no orphan entry rows. The targeted
///   [`AclStore::remove_user_entries`] and
///   [`AclStore::remove_group_entries`] operations expose the same two
///   cascades individually.
#[async_trait]
pub trait AclStore: Send + Sync {
    /// Persists the ACL, assigning its identity on first save.
    ///
    /// Saving an already-identified ACL replaces its stored rows wholesale.
    async fn save(&self, acl: &mut Acl) -> Result<AclId>;

    /// Loads a detached copy of the ACL with the given identity.
    ///
    /// Every call materializes a fresh aggregate; copies loaded
    /// independently compare equal through identity equality.
    async fn find(&self, id: AclId) -> Result<Option<Acl>>;

    /// Deletes the ACL and cascades over both entry collections.
    ///
    /// Deleting an unknown identity is a no-op.
    async fn delete(&self, id: AclId) -> Result<()>;

    /// Removes every stored user entry of the ACL, returning the number
    /// removed.
    async fn remove_user_entries(&self, id: AclId) -> Result<usize>;

    /// Removes every stored group entry of the ACL, returning the number
    /// removed.
    async fn remove_group_entries(&self, id: AclId) -> Result<usize>;
}

/// In-memory [`AclStore`] for tests and single-process embedding.
///
/// Aggregates and their entries live in separate row tables, keyed by
/// [`AclId`], so the delete cascade behaves like a real backend's.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    acls: HashMap<AclId, AclRow>,
    user_entries: HashMap<AclId, Vec<UserEntryRow>>,
    group_entries: HashMap<AclId, Vec<GroupEntryRow>>,
}

#[derive(Debug)]
struct AclRow {
    enabled: bool,
}

#[derive(Debug)]
struct UserEntryRow {
    principal: Arc<User>,
    permission: Permission,
}

#[derive(Debug)]
struct GroupEntryRow {
    principal: Arc<UserGroup>,
    permission: Permission,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored ACLs.
    pub async fn len(&self) -> usize {
        self.inner.read().await.acls.len()
    }

    /// Returns `true` if no ACLs are stored.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.acls.is_empty()
    }

    /// Returns the number of entry rows stored for `id`, user and group
    /// combined. Lets embedders audit the delete cascade.
    pub async fn entry_rows(&self, id: AclId) -> usize {
        let inner = self.inner.read().await;
        inner.user_entries.get(&id).map_or(0, |rows| rows.len())
            + inner.group_entries.get(&id).map_or(0, |rows| rows.len())
    }
}

#[async_trait]
impl AclStore for MemoryStore {
    async fn save(&self, acl: &mut Acl) -> Result<AclId> {
        let id = match acl.id() {
            Some(id) => id,
            None => {
                let id = AclId::new();
                acl.assign_id(id)?;
                log::info!("acl store: assigned identity {id}");
                id
            }
        };

        let user_rows: Vec<UserEntryRow> = acl
            .user_entries()
            .map(|entry| UserEntryRow {
                principal: Arc::clone(&entry.principal),
                permission: entry.permission(),
            })
            .collect();
        let group_rows: Vec<GroupEntryRow> = acl
            .group_entries()
            .map(|entry| GroupEntryRow {
                principal: Arc::clone(&entry.principal),
                permission: entry.permission(),
            })
            .collect();

        let mut inner = self.inner.write().await;
        inner.acls.insert(
            id,
            AclRow {
                enabled: acl.is_enabled(),
            },
        );
        inner.user_entries.insert(id, user_rows);
        inner.group_entries.insert(id, group_rows);
        log::debug!("acl store: saved {id} ({} entries)", acl.entry_count());
        Ok(id)
    }

    async fn find(&self, id: AclId) -> Result<Option<Acl>> {
        let inner = self.inner.read().await;
        let Some(row) = inner.acls.get(&id) else {
            return Ok(None);
        };

        let mut acl = Acl::new();
        acl.assign_id(id)?;
        acl.set_enabled(row.enabled);
        if let Some(rows) = inner.user_entries.get(&id) {
            for row in rows {
                acl.insert_user_entry(Arc::clone(&row.principal), row.permission);
            }
        }
        if let Some(rows) = inner.group_entries.get(&id) {
            for row in rows {
                acl.insert_group_entry(Arc::clone(&row.principal), row.permission);
            }
        }
        Ok(Some(acl))
    }

    async fn delete(&self, id: AclId) -> Result<()> {
        let mut inner = self.inner.write().await;
        let users = inner.user_entries.remove(&id).map_or(0, |rows| rows.len());
        let groups = inner.group_entries.remove(&id).map_or(0, |rows| rows.len());
        if inner.acls.remove(&id).is_some() {
            log::info!("acl store: deleted {id} ({users} user entries, {groups} group entries)");
        }
        Ok(())
    }

    async fn remove_user_entries(&self, id: AclId) -> Result<usize> {
        let mut inner = self.inner.write().await;
        let removed = inner.user_entries.remove(&id).map_or(0, |rows| rows.len());
        log::debug!("acl store: removed {removed} user entries for {id}");
        Ok(removed)
    }

    async fn remove_group_entries(&self, id: AclId) -> Result<usize> {
        let mut inner = self.inner.write().await;
        let removed = inner.group_entries.remove(&id).map_or(0, |rows| rows.len());
        log::debug!("acl store: removed {removed} group entries for {id}");
        Ok(removed)
    }
}
