use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, LinearError, LinearResult};
use crate::formatting::{print_issue_details, print_issue_summary, SemanticColor, ThemedColorize};
use crate::logging::{log_error, log_info};
use super::clipboard::copy_to_clipboard;
use super::git::checkout_branch;
use super::issue_id::parse_issue_id;

/// Flags of `issue <id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueOptions {
    pub issue_id: String,
    pub copy_url: bool,
    pub copy_branch: bool,
    pub checkout: bool,
    pub verbose: bool,
}

/// What `issue` copies to the clipboard; the url wins when both flags are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardTarget {
    Url,
    BranchName,
}

impl IssueOptions {
    pub fn from_matches(matches: &ArgMatches) -> LinearResult<Self> {
        let identifier = matches
            .get_one::<String>("identifier")
            .ok_or_else(|| LinearError::InvalidInput("Issue identifier is required".to_string()))?;

        Ok(Self {
            issue_id: parse_issue_id(identifier)?,
            copy_url: matches.get_flag("url"),
            copy_branch: matches.get_flag("branch"),
            checkout: matches.get_flag("checkout"),
            verbose: matches.get_flag("verbose"),
        })
    }

    pub fn clipboard_target(&self) -> Option<ClipboardTarget> {
        if self.copy_url {
            Some(ClipboardTarget::Url)
        } else if self.copy_branch {
            Some(ClipboardTarget::BranchName)
        } else {
            None
        }
    }

    /// No action flag given: just print a summary.
    pub fn is_summary(&self) -> bool {
        !(self.copy_url || self.copy_branch || self.checkout || self.verbose)
    }
}

pub async fn handle_issue(context: &mut CliContext, matches: &ArgMatches) -> LinearResult<()> {
    let options = IssueOptions::from_matches(matches)?;
    run_issue(context, &options).await
}

pub async fn run_issue(context: &mut CliContext, options: &IssueOptions) -> LinearResult<()> {
    let client = context.verified_client()?;

    let issue = client
        .get_issue(&options.issue_id)
        .await
        .with_context(|| format!("Failed to fetch issue {}", options.issue_id))?;
    log_info(&format!("Fetched issue {}", issue.identifier));

    if options.is_summary() {
        print_issue_summary(&issue);
        return Ok(());
    }

    if options.verbose {
        print_issue_details(&issue);
    }

    match options.clipboard_target() {
        Some(ClipboardTarget::Url) => copy_and_report(&issue.url, "Copied issue url to clipboard"),
        Some(ClipboardTarget::BranchName) => copy_and_report(&issue.branch_name, "Copied branch name to clipboard"),
        None => {}
    }

    if options.checkout {
        checkout_branch(&issue.branch_name)?;
    }

    Ok(())
}

fn copy_and_report(text: &str, message: &str) {
    match copy_to_clipboard(text) {
        Ok(()) => println!("{}", message),
        Err(e) => {
            log_error(&e.to_string());
            eprintln!("{} {}", "Warning:".with_theme(SemanticColor::Warning), e);
        }
    }
}
