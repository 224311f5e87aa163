use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

use crate::config::ListConfig;
use crate::error::LinearError;
use crate::logging::log_info;

/// Which assignees the `list` command shows. A missing or unrecognised
/// saved value means no assignee clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssigneeFilter {
    Me,
    Unassigned,
    #[default]
    All,
}

impl AssigneeFilter {
    pub const ALL: [AssigneeFilter; 3] = [Self::Me, Self::Unassigned, Self::All];

    /// Label shown by the setup wizard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Me => "Assigned to me",
            Self::Unassigned => "Unassigned",
            Self::All => "All",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::Unassigned => "unassigned",
            Self::All => "all",
        }
    }

    /// GraphQL `NullableUserFilter` clause, or `None` when every assignee matches.
    fn to_graphql(self) -> Option<Value> {
        match self {
            Self::Me => Some(json!({ "isMe": { "eq": true } })),
            Self::Unassigned => Some(json!({ "null": true })),
            Self::All => None,
        }
    }
}

impl fmt::Display for AssigneeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssigneeFilter {
    type Err = LinearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "me" => Ok(Self::Me),
            "unassigned" => Ok(Self::Unassigned),
            "all" => Ok(Self::All),
            other => Err(LinearError::InvalidInput(format!(
                "unknown assignee filter '{}' (expected me, unassigned or all)",
                other
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for AssigneeFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw {
            Some(value) => value.parse().unwrap_or_else(|e: LinearError| {
                log_info(&format!("{}; showing all assignees", e));
                Self::All
            }),
            None => Self::All,
        })
    }
}

/// Filter sent to `issues(filter:)`.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueFilter {
    pub team_id: String,
    pub state_ids: Vec<String>,
    pub assignee: AssigneeFilter,
}

impl IssueFilter {
    pub fn new(team_id: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            state_ids: Vec::new(),
            assignee: AssigneeFilter::All,
        }
    }

    pub fn with_states<I, S>(mut self, state_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state_ids = state_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_assignee(mut self, assignee: AssigneeFilter) -> Self {
        self.assignee = assignee;
        self
    }

    pub fn to_graphql(&self) -> Value {
        let mut filter = json!({
            "team": { "id": { "eq": self.team_id } },
            "state": { "id": { "in": self.state_ids } },
        });

        if let Some(assignee) = self.assignee.to_graphql() {
            filter["assignee"] = assignee;
        }

        filter
    }
}

impl From<&ListConfig> for IssueFilter {
    fn from(list: &ListConfig) -> Self {
        IssueFilter::new(list.team_id.clone())
            .with_states(list.state_ids.iter().cloned())
            .with_assignee(list.assignee_filter)
    }
}
