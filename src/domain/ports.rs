use super::user::{Email, User, UserId};
use crate::error::Result;

/// Persistence collaborator owning user storage.
///
/// `save` on a user that already carries an identity updates that record in
/// place; otherwise the store assigns a fresh identity. Fresh identities are
/// greater than any identity the store has already seen, so they never collide
/// with a record saved under an explicit id.
pub trait UserRepository: Send + Sync {
    fn save(&self, user: User) -> Result<User>;
    fn find_by_id(&self, id: UserId) -> Result<Option<User>>;
    fn find_all(&self) -> Result<Vec<User>>;
    fn exists_by_id(&self, id: UserId) -> Result<bool>;
    fn delete_by_id(&self, id: UserId) -> Result<()>;
}

/// Notification collaborator used after a user is created.
pub trait Notifier: Send + Sync {
    fn send_welcome_email(&self, address: &Email) -> Result<()>;
}

pub type UserRepositoryBox = Box<dyn UserRepository>;
pub type NotifierBox = Box<dyn Notifier>;

/// Factory for creating user repository instances.
pub type UserRepositoryFactory = Box<dyn Fn() -> UserRepositoryBox + Send + Sync>;
