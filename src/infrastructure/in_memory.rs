use crate::domain::ports::UserRepository;
use crate::domain::user::{User, UserId};
use crate::error::{CoreError, Result};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct UserTable {
    users: BTreeMap<UserId, User>,
    last_id: u64,
}

/// A thread-safe in-memory store for users.
///
/// Uses `Arc<RwLock<..>>` so clones share the same table. Identities start at 1
/// and are never reused after a delete; saving a record under an explicit id
/// advances the sequence past it. Ideal for testing or one-shot runs where
/// persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    /// Creates a new, empty in-memory user store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, UserTable>> {
        self.table
            .read()
            .map_err(|_| CoreError::StorageError("user table lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, UserTable>> {
        self.table
            .write()
            .map_err(|_| CoreError::StorageError("user table lock poisoned".to_string()))
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save(&self, user: User) -> Result<User> {
        let mut table = self.write()?;
        let id = match user.id() {
            Some(id) => {
                table.last_id = table.last_id.max(id.0);
                id
            }
            None => {
                table.last_id += 1;
                UserId(table.last_id)
            }
        };
        let user = user.with_id(id);
        table.users.insert(id, user.clone());
        Ok(user)
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    fn exists_by_id(&self, id: UserId) -> Result<bool> {
        Ok(self.read()?.users.contains_key(&id))
    }

    fn delete_by_id(&self, id: UserId) -> Result<()> {
        self.write()?.users.remove(&id);
        Ok(())
    }
}
