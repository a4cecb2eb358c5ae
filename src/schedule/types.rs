//! Core scheduling type definitions.
//!
//! Defines [`Connection`] (a tracked contact as read from the backend),
//! [`HealthStatus`] (the three relationship health tags), [`Health`] (a status
//! carrying its day counter), and [`StatusResult`] (one classification).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cadence used when a connection has no positive `frequency_days`.
pub const DEFAULT_FREQUENCY_DAYS: i64 = 90;

/// How many days before the cadence lapses a connection becomes due soon.
pub const DUE_SOON_WINDOW_DAYS: i64 = 14;

/// A tracked contact, validated at the record boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Opaque backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// When the user last reached out, or `None` if never.
    pub last_contact_at: Option<DateTime<Utc>>,
    /// Configured cadence in days. Non-positive or absent means "use default".
    pub frequency_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Connection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last_contact_at: None,
            frequency_days: None,
            company: None,
            role: None,
        }
    }

    pub fn with_last_contact(mut self, at: DateTime<Utc>) -> Self {
        self.last_contact_at = Some(at);
        self
    }

    pub fn with_frequency(mut self, days: i64) -> Self {
        self.frequency_days = Some(days);
        self
    }

    /// The configured cadence if it is a positive number of days.
    pub fn scheduled_frequency(&self) -> Option<i64> {
        self.frequency_days.filter(|days| *days > 0)
    }

    /// The cadence actually used for classification.
    pub fn effective_frequency(&self) -> i64 {
        self.scheduled_frequency().unwrap_or(DEFAULT_FREQUENCY_DAYS)
    }

    /// "role at company", "company", or `None` when no company is known.
    pub fn affiliation(&self) -> Option<String> {
        let company = self.company.as_deref().filter(|c| !c.is_empty())?;
        match self.role.as_deref().filter(|r| !r.is_empty()) {
            Some(role) => Some(format!("{role} at {company}")),
            None => Some(company.to_string()),
        }
    }
}

/// Relationship health tag, without the per-status counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    DueSoon,
    Overdue,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::DueSoon => "due_soon",
            Self::Overdue => "overdue",
        }
    }

    /// Lower sorts first when ranking reminders.
    pub fn urgency_rank(&self) -> u8 {
        match self {
            Self::Overdue => 0,
            Self::DueSoon => 1,
            Self::Healthy => 2,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HealthStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthy" => Ok(Self::Healthy),
            "due_soon" => Ok(Self::DueSoon),
            "overdue" => Ok(Self::Overdue),
            _ => Err(format!("unknown health status: {s}")),
        }
    }
}

/// A health status together with the counter that is meaningful for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Health {
    Healthy,
    /// Within the due-soon window; `due_in` days until the cadence lapses.
    DueSoon { due_in: i64 },
    /// Past the cadence by `overdue_by` days.
    Overdue { overdue_by: i64 },
}

impl Health {
    pub fn status(&self) -> HealthStatus {
        match self {
            Self::Healthy => HealthStatus::Healthy,
            Self::DueSoon { .. } => HealthStatus::DueSoon,
            Self::Overdue { .. } => HealthStatus::Overdue,
        }
    }
}

/// One classification of a connection against a fixed `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusResult {
    #[serde(flatten)]
    pub health: Health,
    /// Whole calendar days since last contact, rounded up. `0` if never contacted.
    pub days_since_contact: i64,
}

impl StatusResult {
    pub fn status(&self) -> HealthStatus {
        self.health.status()
    }

    pub fn overdue_by(&self) -> Option<i64> {
        match self.health {
            Health::Overdue { overdue_by } => Some(overdue_by),
            _ => None,
        }
    }

    pub fn due_in(&self) -> Option<i64> {
        match self.health {
            Health::DueSoon { due_in } => Some(due_in),
            _ => None,
        }
    }

    /// True for the statuses surfaced as reminders.
    pub fn needs_attention(&self) -> bool {
        !matches!(self.health, Health::Healthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_frequency_fall_back_to_default() {
        let base = Connection::new("c1", "Ada");
        assert_eq!(base.effective_frequency(), DEFAULT_FREQUENCY_DAYS);
        assert_eq!(base.clone().with_frequency(0).effective_frequency(), 90);
        assert_eq!(base.clone().with_frequency(-5).effective_frequency(), 90);
        assert_eq!(base.with_frequency(30).effective_frequency(), 30);
    }

    #[test]
    fn health_status_round_trips_through_str() {
        for status in [HealthStatus::Healthy, HealthStatus::DueSoon, HealthStatus::Overdue] {
            assert_eq!(status.as_str().parse::<HealthStatus>().unwrap(), status);
        }
        assert!("stale".parse::<HealthStatus>().is_err());
    }

    #[test]
    fn status_result_serializes_flat() {
        let result = StatusResult {
            health: Health::Overdue { overdue_by: 12 },
            days_since_contact: 42,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["status"], "overdue");
        assert_eq!(json["overdue_by"], 12);
        assert_eq!(json["days_since_contact"], 42);
        assert!(json.get("due_in").is_none());
    }

    #[test]
    fn affiliation_formats_role_and_company() {
        let mut conn = Connection::new("c1", "Ada");
        assert_eq!(conn.affiliation(), None);
        conn.company = Some("Analytical Engines".into());
        assert_eq!(conn.affiliation().as_deref(), Some("Analytical Engines"));
        conn.role = Some("Engineer".into());
        assert_eq!(
            conn.affiliation().as_deref(),
            Some("Engineer at Analytical Engines")
        );
    }
}
