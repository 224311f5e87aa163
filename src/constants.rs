pub const LINEAR_API_URL: &str = "https://api.linear.app/graphql";
pub const APP_NAME: &str = "quick-branch";
pub const CONFIG_FILE: &str = "config.yaml";
pub const API_KEY_ENV: &str = "LINEAR_API_KEY";
pub const CLIPBOARD_DAEMON_ENV: &str = "QUICK_BRANCH_CLIPBOARD_DAEMON";

/// Workflow state that `start --status` moves an issue into.
pub const IN_PROGRESS_STATE: &str = "In Progress";

/// Used when the terminal width can't be determined.
pub const DEFAULT_TERMINAL_WIDTH: usize = 100;

/// Page size for the filtered issue list.
pub const ISSUE_PAGE_SIZE: i32 = 100;

// GraphQL documents
pub const ME_QUERY: &str = r#"
    query Me {
        viewer {
            id
            name
            email
        }
    }
"#;

pub const ISSUE_QUERY: &str = r#"
    query Issue($id: String!) {
        issue(id: $id) {
            id
            identifier
            title
            description
            url
            priority
            branchName
            state { id name color type }
            assignee { id name email }
        }
    }
"#;

pub const VIEWER_TEAMS_QUERY: &str = r#"
    query ViewerTeams {
        viewer {
            teams {
                nodes {
                    id
                    name
                    key
                }
            }
        }
    }
"#;

pub const TEAM_STATES_BY_ID_QUERY: &str = r#"
    query TeamStatesById($id: String!) {
        team(id: $id) {
            states {
                nodes { id name color type }
            }
        }
    }
"#;

pub const ISSUE_TEAM_STATES_QUERY: &str = r#"
    query TeamStates($id: String!) {
        issue(id: $id) {
            team {
                states {
                    nodes { id name color type }
                }
            }
        }
    }
"#;

pub const FILTERED_ISSUES_QUERY: &str = r#"
    query FilteredIssues($filter: IssueFilter, $first: Int) {
        issues(filter: $filter, first: $first) {
            nodes {
                id
                identifier
                title
                priority
                state { id name color type }
            }
        }
    }
"#;

pub const ISSUE_UPDATE_MUTATION: &str = r#"
    mutation IssueUpdate($id: String!, $input: IssueUpdateInput!) {
        issueUpdate(id: $id, input: $input) {
            success
            issue {
                id
                identifier
                title
                priority
                state { id name color type }
            }
        }
    }
"#;
