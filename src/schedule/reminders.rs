use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;

use super::message::message;
use super::status::classify;
use super::types::{Connection, Health, StatusResult};

/// How many smart reminders the dashboard shows by default.
pub const DEFAULT_REMINDER_LIMIT: usize = 3;

/// One entry in the smart reminders widget.
#[derive(Debug, Clone, Serialize)]
pub struct RankedReminder<'a> {
    pub connection: &'a Connection,
    #[serde(flatten)]
    pub status: StatusResult,
    /// The reminder sentence, precomputed against the same `now`.
    pub message: Option<String>,
}

/// Pick the most urgent overdue and due-soon connections.
///
/// Overdue entries come first, most overdue leading; due-soon entries follow,
/// soonest due leading. Ties keep input order. Returns at most `limit` entries
/// and nothing at all when no connection needs attention.
pub fn rank<'a>(
    connections: &'a [Connection],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<RankedReminder<'a>> {
    let mut candidates: Vec<RankedReminder<'a>> = connections
        .iter()
        .map(|connection| (connection, classify(connection, now)))
        .filter(|(_, status)| status.needs_attention())
        .map(|(connection, status)| RankedReminder {
            connection,
            status,
            message: message(connection, now),
        })
        .collect();

    candidates.sort_by(|a, b| compare_urgency(&a.status, &b.status));
    candidates.truncate(limit);

    tracing::debug!(
        total = connections.len(),
        returned = candidates.len(),
        limit,
        "ranked smart reminders"
    );
    candidates
}

/// Number of connections that are overdue or due soon, uncapped.
pub fn count_upcoming(connections: &[Connection], now: DateTime<Utc>) -> usize {
    connections
        .iter()
        .filter(|connection| classify(connection, now).needs_attention())
        .count()
}

fn compare_urgency(a: &StatusResult, b: &StatusResult) -> Ordering {
    match (a.health, b.health) {
        (Health::Overdue { overdue_by: x }, Health::Overdue { overdue_by: y }) => y.cmp(&x),
        (Health::DueSoon { due_in: x }, Health::DueSoon { due_in: y }) => x.cmp(&y),
        _ => a
            .status()
            .urgency_rank()
            .cmp(&b.status().urgency_rank()),
    }
}
