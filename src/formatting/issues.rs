use colored::*;
use crate::models::{Issue, WorkflowState};
use super::markdown::format_markdown;
use super::theme::{helpers::{priority_color, status_color}, theme_color, SemanticColor, ThemedColorize};
use super::utils::{color_hex, parse_hex_color, priority_label};

/// Workflow state name in its Linear color, falling back to the theme's status color.
pub fn format_state(state: &WorkflowState) -> ColoredString {
    if state.color.as_deref().and_then(parse_hex_color).is_some() {
        return color_hex(&state.name, state.color.as_deref());
    }
    let semantic = state
        .state_type
        .as_deref()
        .map(status_color)
        .unwrap_or(SemanticColor::Primary);
    state.name.color(theme_color(semantic))
}

/// `<title>: <state>` header shown by `issue --verbose`.
pub fn format_issue_heading(issue: &Issue) -> String {
    format!("{}: {}", issue.title.bold(), format_state(&issue.state))
}

pub fn format_description(issue: &Issue) -> String {
    match issue.description.as_deref().map(str::trim) {
        Some(desc) if !desc.is_empty() => format_markdown(desc),
        _ => "No description.".with_theme(SemanticColor::Muted).to_string(),
    }
}

pub fn print_issue_details(issue: &Issue) {
    println!("{}\n", format_issue_heading(issue));
    println!("{}", format_description(issue));
}

pub fn print_issue_summary(issue: &Issue) {
    println!(
        "{} {} [{}]",
        issue.identifier.as_str().with_theme(SemanticColor::Identifier).bold(),
        issue.title,
        format_state(&issue.state)
    );

    let assignee = issue
        .assignee
        .as_ref()
        .map(|a| a.name.as_str())
        .unwrap_or("Unassigned");
    println!(
        "{}: {} | {}: {}",
        "Priority".dimmed(),
        priority_label(issue.priority).color(theme_color(priority_color(issue.priority))),
        "Assignee".dimmed(),
        assignee
    );
    println!("{}: {}", "Branch".dimmed(), issue.branch_name);
    println!("{}: {}", "URL".dimmed(), issue.url.as_str().with_theme(SemanticColor::Link).underline());
}
