//! CLI `status` command: health of every connection.

use anyhow::Result;
use serde::Serialize;

use super::Pass;
use rapport::schedule::{classify, message, Connection, StatusResult};

#[derive(Serialize)]
struct StatusRow<'a> {
    connection: &'a Connection,
    #[serde(flatten)]
    status: StatusResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Print the classification and reminder text for each connection.
pub fn status(pass: &Pass) -> Result<()> {
    let connections = pass.load()?;
    let rows: Vec<StatusRow> = connections
        .iter()
        .map(|connection| StatusRow {
            connection,
            status: classify(connection, pass.now),
            message: message(connection, pass.now),
        })
        .collect();

    if pass.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Connection Health ({})", pass.now.format("%Y-%m-%d %H:%M UTC"));
    println!("{}", "=".repeat(60));
    for row in &rows {
        let last = if row.connection.last_contact_at.is_some() {
            format!("{}d ago", row.status.days_since_contact)
        } else {
            "never".to_string()
        };
        println!(
            "  {:<24} {:<10} {:>10}",
            row.connection.name,
            row.status.status().as_str(),
            last
        );
        if let Some(ref msg) = row.message {
            println!("    {msg}");
        }
    }
    if rows.is_empty() {
        println!("  No connections.");
    }

    Ok(())
}
