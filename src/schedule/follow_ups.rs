use chrono::{DateTime, Utc};
use serde::Serialize;

use super::status::classify;
use super::types::{Connection, HealthStatus};

/// Days-until-due at or below which a connection is due this week.
pub const WEEK_HORIZON_DAYS: i64 = 7;
/// Days-until-due at or below which a connection is due this month.
pub const MONTH_HORIZON_DAYS: i64 = 30;

/// One tab of the follow-ups screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpBucket {
    Overdue,
    Week,
    Month,
    NoSchedule,
}

impl FollowUpBucket {
    pub const ALL: [FollowUpBucket; 4] = [
        FollowUpBucket::Overdue,
        FollowUpBucket::Week,
        FollowUpBucket::Month,
        FollowUpBucket::NoSchedule,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::Week => "Coming Week",
            Self::Month => "Coming Month",
            Self::NoSchedule => "No Schedule",
        }
    }
}

impl std::fmt::Display for FollowUpBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Connections grouped for the follow-ups screen, each bucket in input order.
///
/// Buckets never overlap, but healthy connections more than a month from due
/// appear in none of them.
#[derive(Debug, Default, Serialize)]
pub struct FollowUps<'a> {
    pub overdue: Vec<&'a Connection>,
    pub week: Vec<&'a Connection>,
    pub month: Vec<&'a Connection>,
    pub no_schedule: Vec<&'a Connection>,
}

impl<'a> FollowUps<'a> {
    pub fn bucket(&self, bucket: FollowUpBucket) -> &[&'a Connection] {
        match bucket {
            FollowUpBucket::Overdue => &self.overdue,
            FollowUpBucket::Week => &self.week,
            FollowUpBucket::Month => &self.month,
            FollowUpBucket::NoSchedule => &self.no_schedule,
        }
    }

    /// Per-bucket sizes in tab order.
    pub fn counts(&self) -> [(FollowUpBucket, usize); 4] {
        FollowUpBucket::ALL.map(|bucket| (bucket, self.bucket(bucket).len()))
    }

    fn push(&mut self, bucket: FollowUpBucket, connection: &'a Connection) {
        match bucket {
            FollowUpBucket::Overdue => self.overdue.push(connection),
            FollowUpBucket::Week => self.week.push(connection),
            FollowUpBucket::Month => self.month.push(connection),
            FollowUpBucket::NoSchedule => self.no_schedule.push(connection),
        }
    }
}

/// Which bucket a connection belongs in, or `None` if it is not yet actionable.
pub fn bucket_for(connection: &Connection, now: DateTime<Utc>) -> Option<FollowUpBucket> {
    let Some(frequency) = connection.scheduled_frequency() else {
        return Some(FollowUpBucket::NoSchedule);
    };

    let status = classify(connection, now);
    if status.status() == HealthStatus::Overdue {
        return Some(FollowUpBucket::Overdue);
    }

    let until = frequency - status.days_since_contact;
    if until <= WEEK_HORIZON_DAYS {
        Some(FollowUpBucket::Week)
    } else if until <= MONTH_HORIZON_DAYS {
        Some(FollowUpBucket::Month)
    } else {
        None
    }
}

/// Split connections into the four follow-up buckets.
pub fn categorize(connections: &[Connection], now: DateTime<Utc>) -> FollowUps<'_> {
    let mut follow_ups = FollowUps::default();
    let mut unlisted = 0usize;
    for connection in connections {
        match bucket_for(connection, now) {
            Some(bucket) => follow_ups.push(bucket, connection),
            None => unlisted += 1,
        }
    }
    tracing::debug!(
        overdue = follow_ups.overdue.len(),
        week = follow_ups.week.len(),
        month = follow_ups.month.len(),
        no_schedule = follow_ups.no_schedule.len(),
        unlisted,
        "categorized follow-ups"
    );
    follow_ups
}
