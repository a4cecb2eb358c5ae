mod helpers;

use helpers::{contacted, mixed_network, never_contacted, now};
use rapport::schedule::{bucket_for, categorize, classify, FollowUpBucket, HealthStatus};
use std::collections::HashSet;

fn names(bucket: &[&rapport::schedule::Connection]) -> Vec<String> {
    bucket.iter().map(|c| c.name.clone()).collect()
}

#[test]
fn mixed_network_buckets() {
    let network = mixed_network();
    let follow_ups = categorize(&network, now());
    assert_eq!(names(&follow_ups.overdue), vec!["Ana", "Dev"]);
    assert_eq!(names(&follow_ups.week), vec!["Eli"]);
    assert_eq!(names(&follow_ups.month), vec!["Ben", "Cleo", "Hal"]);
    assert_eq!(names(&follow_ups.no_schedule), vec!["Gus", "Jo"]);
}

#[test]
fn far_from_due_is_in_no_bucket() {
    let network = mixed_network();
    let follow_ups = categorize(&network, now());
    let listed: HashSet<&str> = follow_ups
        .counts()
        .iter()
        .flat_map(|(bucket, _)| follow_ups.bucket(*bucket).iter().map(|c| c.name.as_str()))
        .collect();
    assert!(!listed.contains("Fay"));
    assert!(!listed.contains("Ivy"));
    assert_eq!(listed.len(), network.len() - 2);
}

#[test]
fn buckets_are_disjoint_and_respect_rules() {
    let frequencies = [None, Some(0), Some(-1), Some(7), Some(30), Some(45), Some(90)];
    let network: Vec<_> = (0..120)
        .map(|i| contacted(&format!("P{i}"), (i * 3) % 130, frequencies[i as usize % 7]))
        .chain((0..7).map(|i| never_contacted(&format!("N{i}"), frequencies[i])))
        .collect();
    let follow_ups = categorize(&network, now());

    let mut seen = HashSet::new();
    for bucket in FollowUpBucket::ALL {
        for conn in follow_ups.bucket(bucket) {
            assert!(seen.insert(conn.id.clone()), "{} listed twice", conn.id);
        }
    }

    for conn in &network {
        let expected = bucket_for(conn, now());
        if conn.frequency_days.filter(|f| *f > 0).is_none() {
            assert_eq!(expected, Some(FollowUpBucket::NoSchedule));
        } else if classify(conn, now()).status() == HealthStatus::Overdue {
            assert_eq!(expected, Some(FollowUpBucket::Overdue));
        }
        if let Some(bucket) = expected {
            assert!(follow_ups.bucket(bucket).iter().any(|c| c.id == conn.id));
        } else {
            assert!(!seen.contains(&conn.id));
        }
    }
}

#[test]
fn empty_input_gives_empty_buckets() {
    let follow_ups = categorize(&[], now());
    assert!(follow_ups.counts().iter().all(|(_, n)| *n == 0));
}

#[test]
fn due_soon_beyond_a_week_is_this_month() {
    let conn = contacted("Ben", 20, Some(30));
    assert_eq!(bucket_for(&conn, now()), Some(FollowUpBucket::Month));
}
