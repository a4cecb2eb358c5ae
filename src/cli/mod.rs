pub mod follow_ups;
pub mod reminders;
pub mod status;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

use rapport::schedule::Connection;

/// One evaluation of the connection list: where to read it and the instant
/// every connection is judged against.
pub struct Pass {
    pub file: PathBuf,
    pub now: DateTime<Utc>,
    pub json: bool,
}

impl Pass {
    pub fn load(&self) -> Result<Vec<Connection>> {
        rapport::records::load_connections(&self.file)
            .with_context(|| format!("failed to load connections from {}", self.file.display()))
    }
}
