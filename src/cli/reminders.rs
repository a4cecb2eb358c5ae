use anyhow::Result;

use super::Pass;
use rapport::schedule::{count_upcoming, rank, Health};

/// Print the top smart reminders. Prints nothing when none qualify.
pub fn reminders(pass: &Pass, limit: usize) -> Result<()> {
    let connections = pass.load()?;
    let ranked = rank(&connections, pass.now, limit);

    if pass.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }
    if ranked.is_empty() {
        return Ok(());
    }

    println!(
        "Smart Reminders ({} of {} upcoming)",
        ranked.len(),
        count_upcoming(&connections, pass.now)
    );
    println!("{}", "=".repeat(40));
    for reminder in &ranked {
        let urgency = match reminder.status.health {
            Health::Overdue { overdue_by } => format!("{overdue_by}d overdue"),
            Health::DueSoon { due_in } => format!("due in {due_in}d"),
            Health::Healthy => String::new(),
        };
        println!("  {:<24} {}", reminder.connection.name, urgency);
        if let Some(ref msg) = reminder.message {
            println!("    {msg}");
        }
    }

    Ok(())
}
