#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use rapport::schedule::Connection;

/// Fixed reference instant shared by every pass in a test.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 9, 30, 0).unwrap()
}

/// A connection last contacted `days_ago` whole days before [`now`].
pub fn contacted(name: &str, days_ago: i64, frequency: Option<i64>) -> Connection {
    let mut conn = Connection::new(name.to_lowercase(), name)
        .with_last_contact(now() - Duration::days(days_ago));
    conn.frequency_days = frequency;
    conn
}

/// A connection that has never been contacted.
pub fn never_contacted(name: &str, frequency: Option<i64>) -> Connection {
    let mut conn = Connection::new(name.to_lowercase(), name);
    conn.frequency_days = frequency;
    conn
}

/// A spread of connections covering every status and bucket.
pub fn mixed_network() -> Vec<Connection> {
    vec![
        contacted("Ana", 100, Some(30)),   // overdue by 70
        contacted("Ben", 20, Some(30)),    // due in 10
        contacted("Cleo", 10, Some(30)),   // healthy, due in 20
        contacted("Dev", 45, Some(30)),    // overdue by 15
        contacted("Eli", 28, Some(30)),    // due in 2
        never_contacted("Fay", Some(90)),  // healthy, 90 out
        contacted("Gus", 95, None),        // overdue by 5 against the default
        contacted("Hal", 17, Some(30)),    // due in 13
        contacted("Ivy", 5, Some(180)),    // healthy, far out
        contacted("Jo", 200, Some(0)),     // overdue, unscheduled
    ]
}
