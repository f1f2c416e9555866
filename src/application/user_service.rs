use crate::domain::ports::{NotifierBox, UserRepositoryBox};
use crate::domain::user::{Email, User, UserId, Username};
use crate::error::{CoreError, Result};
use tracing::{debug, info, instrument, warn};

/// Orchestrates the user lifecycle over the persistence and notification ports.
///
/// The service holds no state of its own; the repository is the single source
/// of truth. Every step of an operation runs to completion before the next one
/// starts and no error from the repository is retried.
pub struct UserService {
    repository: UserRepositoryBox,
    notifier: NotifierBox,
}

impl UserService {
    /// Creates a new `UserService`.
    ///
    /// # Arguments
    ///
    /// * `repository` - The store owning user records.
    /// * `notifier` - The collaborator sending welcome emails.
    pub fn new(repository: UserRepositoryBox, notifier: NotifierBox) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Validates and persists a new user, then sends the welcome email.
    ///
    /// The saved record is returned even if the notifier fails: persistence is
    /// authoritative and the notification is best-effort.
    #[instrument(skip(self))]
    pub fn create(&self, username: &str, email: &str) -> Result<User> {
        let username = Username::new(username)?;
        let email = Email::new(email)?;

        let saved = self.repository.save(User::new(username, email))?;
        info!(user_id = ?saved.id(), "user created");

        if let Err(error) = self.notifier.send_welcome_email(saved.email()) {
            warn!(user_id = ?saved.id(), %error, "welcome email failed");
        }

        Ok(saved)
    }

    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        debug!("looking up user");
        self.repository.find_by_id(id)
    }

    #[instrument(skip(self))]
    pub fn find_all(&self) -> Result<Vec<User>> {
        debug!("listing users");
        self.repository.find_all()
    }

    /// Applies the supplied fields to an existing user.
    ///
    /// `None` and blank values leave the current field untouched. A supplied
    /// email must pass the same checks as on creation.
    #[instrument(skip(self))]
    pub fn update(&self, id: UserId, username: Option<&str>, email: Option<&str>) -> Result<User> {
        let mut user = self.find_by_id(id)?.ok_or(CoreError::NotFound(id))?;

        let username = supplied(username).map(Username::new).transpose()?;
        let email = supplied(email).map(Email::new).transpose()?;

        if let Some(username) = username {
            user.rename(username);
        }
        if let Some(email) = email {
            user.change_email(email);
        }

        let saved = self.repository.save(user)?;
        info!("user updated");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: UserId) -> Result<()> {
        if !self.repository.exists_by_id(id)? {
            return Err(CoreError::NotFound(id));
        }
        self.repository.delete_by_id(id)?;
        info!("user deleted");
        Ok(())
    }
}

fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
