use std::path::Path;

use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::client::LinearClient;
use crate::constants::IN_PROGRESS_STATE;
use crate::error::{ErrorContext, LinearError, LinearResult};
use crate::logging::log_info;
use crate::models::{IssueUpdateInput, WorkflowState};
use super::git::checkout_branch_in;
use super::issue_id::parse_issue_id;

/// Resolved steps of `start <id>`. Assigning the viewer always happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartPlan {
    pub issue_id: String,
    pub update_status: bool,
    pub checkout: bool,
}

impl StartPlan {
    /// `turbo` implies both `status` and `checkout`.
    pub fn new(issue_id: impl Into<String>, turbo: bool, status: bool, checkout: bool) -> Self {
        Self {
            issue_id: issue_id.into(),
            update_status: status || turbo,
            checkout: checkout || turbo,
        }
    }

    pub fn from_matches(matches: &ArgMatches) -> LinearResult<Self> {
        let identifier = matches
            .get_one::<String>("identifier")
            .ok_or_else(|| LinearError::InvalidInput("Issue identifier is required".to_string()))?;

        Ok(Self::new(
            parse_issue_id(identifier)?,
            matches.get_flag("turbo"),
            matches.get_flag("status"),
            matches.get_flag("checkout"),
        ))
    }
}

pub async fn handle_start(context: &mut CliContext, matches: &ArgMatches) -> LinearResult<()> {
    let plan = StartPlan::from_matches(matches)?;
    run_start(context, &plan).await
}

/// Runs assign, then status, then checkout; the first failure stops the rest.
pub async fn run_start(context: &mut CliContext, plan: &StartPlan) -> LinearResult<()> {
    run_start_in(context, plan, None).await
}

/// Like [`run_start`], creating the branch in `workdir` when given.
pub async fn run_start_in(
    context: &mut CliContext,
    plan: &StartPlan,
    workdir: Option<&Path>,
) -> LinearResult<()> {
    let client = context.verified_client()?;

    assign_viewer(&client, &plan.issue_id).await?;

    if plan.update_status {
        move_to_in_progress(&client, &plan.issue_id).await?;
    }

    if plan.checkout {
        let issue = client
            .get_issue(&plan.issue_id)
            .await
            .context("Error fetching issue")?;
        checkout_branch_in(workdir, &issue.branch_name)?;
    }

    Ok(())
}

async fn assign_viewer(client: &LinearClient, issue_id: &str) -> LinearResult<()> {
    let viewer = client.get_viewer().await?;
    let issue = client
        .update_issue(issue_id, &IssueUpdateInput::assign_to(viewer.id.clone()))
        .await?;

    log_info(&format!("Assigned {} to {}", viewer.email, issue.identifier));
    println!("Success! Assigned {} to {}", viewer.name, issue.title);
    Ok(())
}

async fn move_to_in_progress(client: &LinearClient, issue_id: &str) -> LinearResult<()> {
    let states = client.get_issue_team_states(issue_id).await?;
    let state = find_state(&states, IN_PROGRESS_STATE).ok_or_else(|| {
        LinearError::InvalidInput(format!("No '{}' state found for this issue's team", IN_PROGRESS_STATE))
    })?;

    let issue = client
        .update_issue(issue_id, &IssueUpdateInput::move_to_state(state.id.clone()))
        .await?;

    log_info(&format!("Moved {} to {}", issue.identifier, issue.state.name));
    println!("Success! Updated {} to {}", issue.title, issue.state.name);
    Ok(())
}

/// Exact name match first, then a case-insensitive one.
pub fn find_state<'a>(states: &'a [WorkflowState], name: &str) -> Option<&'a WorkflowState> {
    states
        .iter()
        .find(|s| s.name == name)
        .or_else(|| states.iter().find(|s| s.name.eq_ignore_ascii_case(name)))
}
