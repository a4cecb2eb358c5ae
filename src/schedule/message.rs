use chrono::{DateTime, Utc};

use super::status::classify;
use super::types::{Connection, Health};

/// Overdue by more than this many days switches to the "reconnect" wording.
const LONG_OVERDUE_DAYS: i64 = 30;

/// Human-readable reminder for a connection, or `None` when it is healthy.
pub fn message(connection: &Connection, now: DateTime<Utc>) -> Option<String> {
    let name = &connection.name;
    match classify(connection, now).health {
        Health::Healthy => None,
        Health::Overdue { overdue_by } if overdue_by > LONG_OVERDUE_DAYS => {
            Some(format!("It's been a while. Reconnect with {name}?"))
        }
        Health::Overdue { .. } => {
            // Echo what the user configured; only an unset cadence shows the default.
            let frequency = connection
                .frequency_days
                .unwrap_or_else(|| connection.effective_frequency());
            Some(format!(
                "You wanted to catch up with {name} every {frequency} days."
            ))
        }
        Health::DueSoon { due_in } => {
            Some(format!("Follow-up with {name} is due in {due_in} days."))
        }
    }
}

/// Row label for the follow-ups listing.
///
/// `None` for connections without a positive cadence. Zero or negative
/// remaining days read as overdue.
pub fn due_label(connection: &Connection, now: DateTime<Utc>) -> Option<String> {
    let frequency = connection.scheduled_frequency()?;
    let until = frequency - classify(connection, now).days_since_contact;
    if until > 0 {
        Some(format!("Due in {until} days"))
    } else {
        Some(format!("{} days overdue", until.abs()))
    }
}
