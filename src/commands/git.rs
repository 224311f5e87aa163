use std::path::Path;
use std::process::Command;

use crate::error::{LinearError, LinearResult};
use crate::formatting::{SemanticColor, ThemedColorize};
use crate::linear_error;
use crate::logging::{log_error, log_info};

/// Creates `branch_name` and switches to it in the current directory.
pub fn checkout_branch(branch_name: &str) -> LinearResult<()> {
    checkout_branch_in(None, branch_name)
}

/// Runs `git switch -c <branch_name>`, in `workdir` when given.
pub fn checkout_branch_in(workdir: Option<&Path>, branch_name: &str) -> LinearResult<()> {
    let branch_name = branch_name.trim();
    if branch_name.is_empty() {
        return Err(LinearError::InvalidInput("Issue has no branch name".to_string()));
    }

    let mut command = Command::new("git");
    command.args(["switch", "-c", branch_name]);
    if let Some(dir) = workdir {
        command.current_dir(dir);
    }

    let output = command
        .output()
        .map_err(|e| linear_error!(GitError, "failed to run git: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log_error(&format!("git switch -c {} failed: {}", branch_name, stderr));
        return Err(linear_error!(GitError, "could not create branch {}: {}", branch_name, stderr));
    }

    log_info(&format!("Switched to new branch {}", branch_name));
    println!("Success! Now working on {}", branch_name.with_theme(SemanticColor::Success));
    Ok(())
}
