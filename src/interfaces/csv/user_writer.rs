use crate::domain::user::User;
use crate::error::Result;
use std::io::Write;

/// Writes users as `id,username,email` CSV rows.
pub struct UserWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> UserWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_users<I>(&mut self, users: I) -> Result<()>
    where
        I: IntoIterator<Item = User>,
    {
        self.writer.write_record(["id", "username", "email"])?;
        for user in users {
            let id = user.id().map(|id| id.to_string()).unwrap_or_default();
            self.writer
                .write_record([id.as_str(), user.username().as_str(), user.email().as_str()])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
