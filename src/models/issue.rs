use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Issue {
    pub id: String,
    pub identifier: String,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub priority: f64,
    #[serde(rename = "branchName")]
    pub branch_name: String,
    pub state: WorkflowState,
    pub assignee: Option<super::User>,
}

/// Row of the `list` table, also returned by `issueUpdate`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IssueSummary {
    pub id: String,
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub priority: f64,
    pub state: WorkflowState,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WorkflowState {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(rename = "type", default)]
    pub state_type: Option<String>,
}

/// Fields accepted by the `issueUpdate` mutation that this tool sets.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
}

impl IssueUpdateInput {
    pub fn assign_to(user_id: impl Into<String>) -> Self {
        Self {
            assignee_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    pub fn move_to_state(state_id: impl Into<String>) -> Self {
        Self {
            state_id: Some(state_id.into()),
            ..Self::default()
        }
    }
}
