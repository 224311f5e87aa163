use clap::ArgMatches;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{MultiSelect, Select};

use crate::cli_context::CliContext;
use crate::config::ListConfig;
use crate::error::{ErrorContext, LinearError, LinearResult};
use crate::filtering::{AssigneeFilter, IssueFilter};
use crate::formatting::{IssueTable, SemanticColor, ThemedColorize, terminal_width};
use crate::logging::log_info;
use crate::models::{Team, WorkflowState};

pub async fn handle_list(context: &mut CliContext, matches: &ArgMatches) -> LinearResult<()> {
    match matches.subcommand() {
        Some(("setup", _)) => handle_list_setup(context).await,
        _ => list_issues(context, terminal_width()).await,
    }
}

/// Prints the saved-filter issue table sized for `width` columns.
pub async fn list_issues(context: &mut CliContext, width: usize) -> LinearResult<()> {
    let client = context.verified_client()?;
    let filter = IssueFilter::from(context.list_settings()?);

    let issues = client
        .get_filtered_issues(&filter)
        .await
        .context("Failed to fetch issues")?;
    log_info(&format!("Fetched {} issues for team {}", issues.len(), filter.team_id));

    let table = IssueTable::new(&issues, width);
    if table.is_empty() {
        println!("No issues found.");
        return Ok(());
    }

    println!("{}", table);
    Ok(())
}

pub async fn handle_list_setup(context: &mut CliContext) -> LinearResult<()> {
    let client = context.verified_client()?;
    let theme = ColorfulTheme::default();

    // Step 1: team and assignee filter
    let teams = client
        .get_viewer_teams()
        .await
        .context("failed to fetch teams")?;
    if teams.is_empty() {
        return Err(LinearError::InvalidInput("no teams found for your account".to_string()));
    }

    let team_names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
    let team_index = Select::with_theme(&theme)
        .with_prompt("Select your team")
        .items(&team_names)
        .default(0)
        .interact()?;
    let team = &teams[team_index];

    let assignee_labels: Vec<&str> = AssigneeFilter::ALL.iter().map(|a| a.label()).collect();
    let assignee_index = Select::with_theme(&theme)
        .with_prompt("Show which issues")
        .items(&assignee_labels)
        .default(0)
        .interact()?;
    let assignee = AssigneeFilter::ALL[assignee_index];

    // Step 2: states of the chosen team
    let states = client
        .get_team_states(&team.id)
        .await
        .context("failed to fetch states")?;

    let state_names: Vec<&str> = states.iter().map(|s| s.name.as_str()).collect();
    let selected = MultiSelect::with_theme(&theme)
        .with_prompt("Select states to include")
        .items(&state_names)
        .interact()?;

    let list = build_list_config(team, assignee, &states, &selected)?;
    let summary = setup_summary(&list, &states);
    context
        .set_list_settings(list)
        .context("failed to save config")?;

    println!("\n{}", summary.with_theme(SemanticColor::Success));
    Ok(())
}

/// Turns wizard selections into the saved config, keeping state ids in team order.
pub fn build_list_config(
    team: &Team,
    assignee: AssigneeFilter,
    states: &[WorkflowState],
    selected: &[usize],
) -> LinearResult<ListConfig> {
    let state_ids: Vec<String> = states
        .iter()
        .enumerate()
        .filter(|(i, _)| selected.contains(i))
        .map(|(_, s)| s.id.clone())
        .collect();

    if state_ids.is_empty() {
        return Err(LinearError::InvalidInput("select at least one state".to_string()));
    }

    Ok(ListConfig {
        team_id: team.id.clone(),
        team_name: team.name.clone(),
        assignee_filter: assignee,
        state_ids,
    })
}

pub fn setup_summary(list: &ListConfig, states: &[WorkflowState]) -> String {
    let state_names: Vec<&str> = states
        .iter()
        .filter(|s| list.state_ids.contains(&s.id))
        .map(|s| s.name.as_str())
        .collect();

    format!(
        "Saved! `list` will show {} issues on team \"{}\" in states: {}",
        list.assignee_filter,
        list.team_name,
        state_names.join(", ")
    )
}
