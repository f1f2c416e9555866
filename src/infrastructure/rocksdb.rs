use crate::domain::ports::UserRepository;
use crate::domain::user::{User, UserId};
use crate::error::{CoreError, Result};
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options, WriteBatch};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Column Family for storing user records.
pub const CF_USERS: &str = "users";
/// Column Family for bookkeeping such as the identity sequence.
pub const CF_META: &str = "meta";

const NEXT_USER_ID_KEY: &[u8] = b"next_user_id";

/// A persistent user store implementation using RocksDB.
///
/// Users are JSON-encoded under big-endian id keys, so iteration yields them
/// in ascending id order. The identity sequence lives in its own column family
/// and is advanced in the same write batch as the insert it belongs to, including
/// saves that carry an explicit id beyond the current sequence.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbUserRepository {
    db: Arc<DB>,
    sequence: Arc<Mutex<()>>,
}

impl RocksDbUserRepository {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the required column families ("users" and "meta") exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_users = ColumnFamilyDescriptor::new(CF_USERS, Options::default());
        let cf_meta = ColumnFamilyDescriptor::new(CF_META, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_users, cf_meta])
            .map_err(storage_error)?;

        Ok(Self {
            db: Arc::new(db),
            sequence: Arc::new(Mutex::new(())),
        })
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| CoreError::StorageError(format!("{name} column family not found")))
    }

    fn last_id(&self) -> Result<u64> {
        let meta = self.cf(CF_META)?;
        match self.db.get_cf(meta, NEXT_USER_ID_KEY).map_err(storage_error)? {
            Some(bytes) => {
                let raw: [u8; 8] = bytes.as_slice().try_into().map_err(|_| {
                    CoreError::StorageError("corrupt user id sequence".to_string())
                })?;
                Ok(u64::from_be_bytes(raw))
            }
            None => Ok(0),
        }
    }
}

fn storage_error(e: rocksdb::Error) -> CoreError {
    CoreError::StorageError(e.to_string())
}

fn encode(user: &User) -> Result<Vec<u8>> {
    serde_json::to_vec(user)
        .map_err(|e| CoreError::StorageError(format!("Serialization error: {e}")))
}

fn decode(bytes: &[u8]) -> Result<User> {
    serde_json::from_slice(bytes)
        .map_err(|e| CoreError::StorageError(format!("Deserialization error: {e}")))
}

impl UserRepository for RocksDbUserRepository {
    fn save(&self, user: User) -> Result<User> {
        let users = self.cf(CF_USERS)?;
        let mut batch = WriteBatch::default();

        let _guard = self
            .sequence
            .lock()
            .map_err(|_| CoreError::StorageError("id sequence lock poisoned".to_string()))?;

        let last_id = self.last_id()?;
        let id = match user.id() {
            Some(id) => id,
            None => UserId(last_id + 1),
        };
        if id.0 > last_id {
            batch.put_cf(self.cf(CF_META)?, NEXT_USER_ID_KEY, id.0.to_be_bytes());
        }

        let user = user.with_id(id);
        batch.put_cf(users, id.0.to_be_bytes(), encode(&user)?);
        self.db.write(batch).map_err(storage_error)?;

        Ok(user)
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        let users = self.cf(CF_USERS)?;
        self.db
            .get_cf(users, id.0.to_be_bytes())
            .map_err(storage_error)?
            .map(|bytes| decode(&bytes))
            .transpose()
    }

    fn find_all(&self) -> Result<Vec<User>> {
        let users = self.cf(CF_USERS)?;
        self.db
            .iterator_cf(users, rocksdb::IteratorMode::Start)
            .map(|item| {
                let (_key, value) = item.map_err(storage_error)?;
                decode(&value)
            })
            .collect()
    }

    fn exists_by_id(&self, id: UserId) -> Result<bool> {
        let users = self.cf(CF_USERS)?;
        // Just check if the key exists without copying the value out
        let result = self
            .db
            .get_pinned_cf(users, id.0.to_be_bytes())
            .map_err(storage_error)?;
        Ok(result.is_some())
    }

    fn delete_by_id(&self, id: UserId) -> Result<()> {
        let users = self.cf(CF_USERS)?;
        self.db
            .delete_cf(users, id.0.to_be_bytes())
            .map_err(storage_error)
    }
}
