use chrono::{DateTime, Utc};

use super::types::{Connection, Health, StatusResult, DUE_SOON_WINDOW_DAYS};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days between two instants, rounded up.
///
/// Direction is ignored, so a timestamp in the future counts the same as one
/// equally far in the past.
pub fn days_between(now: DateTime<Utc>, then: DateTime<Utc>) -> i64 {
    let millis = (now - then).num_milliseconds().abs();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

/// Classify a connection's relationship health at `now`.
///
/// Never-contacted connections are always healthy. Otherwise the elapsed days
/// are compared against the effective cadence: strictly past it is overdue,
/// inside the fixed due-soon window before it is due soon.
pub fn classify(connection: &Connection, now: DateTime<Utc>) -> StatusResult {
    let Some(last_contact) = connection.last_contact_at else {
        return StatusResult {
            health: Health::Healthy,
            days_since_contact: 0,
        };
    };

    let frequency = connection.effective_frequency();
    let days = days_between(now, last_contact);

    let health = if days > frequency {
        Health::Overdue {
            overdue_by: days - frequency,
        }
    } else if days > frequency - DUE_SOON_WINDOW_DAYS {
        Health::DueSoon {
            due_in: frequency - days,
        }
    } else {
        Health::Healthy
    };

    StatusResult {
        health,
        days_since_contact: days,
    }
}
