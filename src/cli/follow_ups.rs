//! CLI `follow-ups` command: connections grouped by when they are due.

use anyhow::Result;

use super::Pass;
use rapport::schedule::{categorize, due_label, FollowUpBucket};

/// Print each follow-up bucket with its connections.
pub fn follow_ups(pass: &Pass) -> Result<()> {
    let connections = pass.load()?;
    let follow_ups = categorize(&connections, pass.now);

    if pass.json {
        println!("{}", serde_json::to_string_pretty(&follow_ups)?);
        return Ok(());
    }

    for (i, bucket) in FollowUpBucket::ALL.iter().enumerate() {
        let members = follow_ups.bucket(*bucket);
        if i > 0 {
            println!();
        }
        println!("{} ({})", bucket.label(), members.len());
        println!("{}", "-".repeat(40));
        if members.is_empty() {
            println!("  No connections in this category");
            continue;
        }
        for connection in members {
            let detail = connection.affiliation().unwrap_or_default();
            let due = due_label(connection, pass.now).unwrap_or_default();
            println!("  {:<24} {:<28} {}", connection.name, detail, due);
        }
    }

    Ok(())
}
