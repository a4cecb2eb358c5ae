pub mod follow_ups;
pub mod message;
pub mod reminders;
pub mod status;
pub mod types;

pub use follow_ups::{bucket_for, categorize, FollowUpBucket, FollowUps};
pub use message::{due_label, message};
pub use reminders::{count_upcoming, rank, RankedReminder, DEFAULT_REMINDER_LIMIT};
pub use status::classify;
pub use types::{Connection, Health, HealthStatus, StatusResult};
