use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex};
use validated_core::domain::ports::{Notifier, UserRepository};
use validated_core::domain::user::{Email, User, UserId};
use validated_core::error::{CoreError, Result};

/// Notifier fake that remembers every address it was asked to greet.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn send_welcome_email(&self, address: &Email) -> Result<()> {
        self.sent.lock().unwrap().push(address.to_string());
        Ok(())
    }
}

/// Notifier fake whose delivery always fails.
#[derive(Default, Clone, Copy)]
pub struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn send_welcome_email(&self, _address: &Email) -> Result<()> {
        Err(CoreError::NotificationError("smtp unavailable".to_string()))
    }
}

/// Repository fake whose every call fails as if the backing store were down.
#[derive(Default, Clone, Copy)]
pub struct FailingRepository;

fn store_down() -> CoreError {
    CoreError::StorageError("store unavailable".to_string())
}

impl UserRepository for FailingRepository {
    fn save(&self, _user: User) -> Result<User> {
        Err(store_down())
    }

    fn find_by_id(&self, _id: UserId) -> Result<Option<User>> {
        Err(store_down())
    }

    fn find_all(&self) -> Result<Vec<User>> {
        Err(store_down())
    }

    fn exists_by_id(&self, _id: UserId) -> Result<bool> {
        Err(store_down())
    }

    fn delete_by_id(&self, _id: UserId) -> Result<()> {
        Err(store_down())
    }
}

pub fn generate_csv(path: &Path, rows: usize) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(file);

    for i in 1..=rows {
        let value = i.to_string();
        wtr.write_record(["add", value.as_str(), "1"])?;
    }

    wtr.flush()?;
    Ok(())
}
