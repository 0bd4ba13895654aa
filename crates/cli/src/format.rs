//! Output → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): aligned text with trait emoji and bars
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use bigfive_core::{Rating, TraitDescription};
use bigfive_engine::StoredTestResult;
use bigfive_executor::{
    Notice, PageView, ProfileState, ResultsReport, SCALE_HIGH_LABEL, SCALE_LOW_LABEL,
};

use crate::state::Output;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(output)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        OutputMode::Human => format_human(output),
    }
}

/// Format a user-facing notice.
pub fn format_notice(notice: &Notice, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": notice
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", notice.message)),
        OutputMode::Human => format!("({}) {}", notice.title, notice.message),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Questions { pages } => pages
            .iter()
            .map(format_page)
            .collect::<Vec<_>>()
            .join("\n\n"),
        Output::Traits { traits } => traits
            .iter()
            .map(format_trait)
            .collect::<Vec<_>>()
            .join("\n\n"),
        Output::Results { report, saved } => {
            let mut s = format_report(report);
            if let Some(id) = saved {
                s.push_str(&format!("\n\nSaved as {}", id));
            }
            s
        }
        Output::SignedIn { user } => format!(
            "Signed in as {}",
            user.email.as_deref().unwrap_or(user.uid.as_str())
        ),
        Output::SignedOut => "Signed out".to_string(),
        Output::Profile { profile } => format_profile(profile),
        Output::History { tests } => format_history(tests),
        Output::Deleted { id } => format!("Deleted {}", id),
        Output::Renamed { name } => format!("Display name set to {}", name),
        Output::Aborted => "(cancelled)".to_string(),
    }
}

/// One page of questions with the current selections.
pub fn format_page(view: &PageView) -> String {
    let mut lines = vec![format!(
        "Page {}/{}  (1 = {}, 5 = {})",
        view.page, view.page_count, SCALE_LOW_LABEL, SCALE_HIGH_LABEL
    )];
    for q in &view.items {
        lines.push(format!(
            "{:>4}. [{}] {}",
            q.id,
            q.selected.map(Rating::get).map_or(" ".to_string(), |r| r.to_string()),
            q.text
        ));
    }
    lines.join("\n")
}

fn format_trait(d: &TraitDescription) -> String {
    format!(
        "{} {} ({})  {}\n   {}\n   High: {}\n   Low:  {}",
        d.emoji,
        d.label(),
        d.trait_.letter(),
        d.color,
        d.summary,
        d.high,
        d.low
    )
}

fn bar(value: i32) -> String {
    let cells = (value.clamp(0, 100) / 5) as usize;
    format!("{}{}", "█".repeat(cells), "·".repeat(20 - cells))
}

fn format_report(report: &ResultsReport) -> String {
    let mut lines = vec![report.headline(), String::new()];
    for row in &report.rows {
        lines.push(format!(
            "{} {:<18} {:>4}%  {}",
            row.emoji,
            row.label,
            row.value,
            bar(row.value)
        ));
    }
    lines.join("\n")
}

fn format_profile(profile: &ProfileState) -> String {
    let Some(user) = &profile.user else {
        return "Not signed in. Use `login` or `signup`.".to_string();
    };
    format!(
        "Email: {}\nName:  {}\n\n{}",
        user.email,
        user.name_label(),
        format_history(&profile.history)
    )
}

fn format_history(tests: &[StoredTestResult]) -> String {
    if tests.is_empty() {
        return "No tests taken yet.".to_string();
    }
    tests
        .iter()
        .map(|t| {
            let when = t
                .created_at
                .to_datetime()
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| t.created_at.to_string());
            let scores = t
                .scores
                .iter()
                .map(|(tr, v)| format!("{}:{}", tr.letter(), v))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}  {}  {}", t.id, when, scores)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
