use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::{
    FILTERED_ISSUES_QUERY, ISSUE_PAGE_SIZE, ISSUE_QUERY, ISSUE_TEAM_STATES_QUERY,
    ISSUE_UPDATE_MUTATION, LINEAR_API_URL, ME_QUERY, TEAM_STATES_BY_ID_QUERY, VIEWER_TEAMS_QUERY,
};
use crate::error::{LinearError, LinearResult};
use crate::filtering::IssueFilter;
use crate::logging::log_debug;
use crate::models::graphql::{
    IssueData, IssueTeamStatesData, IssueUpdateData, IssuesData, TeamStatesData, ViewerData,
    ViewerTeamsData,
};
use crate::models::*;

pub struct LinearClient {
    client: reqwest::Client,
    api_url: String,
}

impl LinearClient {
    pub fn new(api_key: &str) -> LinearResult<Self> {
        Self::with_api_url(api_key, LINEAR_API_URL)
    }

    pub fn with_api_url(api_key: &str, api_url: &str) -> LinearResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(api_key)
                .map_err(|_| LinearError::InvalidInput("API key contains invalid characters".to_string()))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn execute_query<T: for<'de> Deserialize<'de>>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> LinearResult<T> {
        let body = match variables {
            Some(vars) => json!({ "query": query, "variables": vars }),
            None => json!({ "query": query }),
        };

        log_debug(&format!("POST {} {}", self.api_url, operation_name(query)));

        let response = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LinearError::ApiError(format!(
                "HTTP {}: {}",
                status,
                error_text.trim()
            )));
        }

        let graphql_response: GraphQLResponse<T> = response.json().await?;

        if let Some(errors) = graphql_response.errors {
            if !errors.is_empty() {
                let error_messages: Vec<String> = errors.iter().map(|e| e.message.clone()).collect();
                return Err(LinearError::GraphQLError(error_messages.join(", ")));
            }
        }

        graphql_response
            .data
            .ok_or_else(|| LinearError::GraphQLError("No data returned from GraphQL query".to_string()))
    }

    pub async fn get_viewer(&self) -> LinearResult<User> {
        let data: ViewerData = self.execute_query(ME_QUERY, None).await?;
        Ok(data.viewer)
    }

    pub async fn get_issue(&self, identifier: &str) -> LinearResult<Issue> {
        let variables = json!({ "id": identifier });

        let data: IssueData = self.execute_query(ISSUE_QUERY, Some(variables)).await?;
        Ok(data.issue)
    }

    pub async fn get_viewer_teams(&self) -> LinearResult<Vec<Team>> {
        let data: ViewerTeamsData = self.execute_query(VIEWER_TEAMS_QUERY, None).await?;
        Ok(data.viewer.teams.nodes)
    }

    pub async fn get_team_states(&self, team_id: &str) -> LinearResult<Vec<WorkflowState>> {
        let variables = json!({ "id": team_id });

        let data: TeamStatesData = self.execute_query(TEAM_STATES_BY_ID_QUERY, Some(variables)).await?;
        Ok(data.team.states.nodes)
    }

    /// Workflow states of the team that owns `issue_id`.
    pub async fn get_issue_team_states(&self, issue_id: &str) -> LinearResult<Vec<WorkflowState>> {
        let variables = json!({ "id": issue_id });

        let data: IssueTeamStatesData = self.execute_query(ISSUE_TEAM_STATES_QUERY, Some(variables)).await?;
        Ok(data.issue.team.states.nodes)
    }

    pub async fn get_filtered_issues(&self, filter: &IssueFilter) -> LinearResult<Vec<IssueSummary>> {
        let variables = json!({
            "filter": filter.to_graphql(),
            "first": ISSUE_PAGE_SIZE,
        });

        let data: IssuesData = self.execute_query(FILTERED_ISSUES_QUERY, Some(variables)).await?;
        Ok(data.issues.nodes)
    }

    pub async fn update_issue(&self, issue_id: &str, input: &IssueUpdateInput) -> LinearResult<IssueSummary> {
        let variables = json!({
            "id": issue_id,
            "input": input,
        });

        let data: IssueUpdateData = self.execute_query(ISSUE_UPDATE_MUTATION, Some(variables)).await?;
        Self::check_success(data.issue_update.success, data.issue_update.issue, "Failed to update issue")
    }

    fn check_success<T>(success: bool, data: Option<T>, error_msg: &str) -> LinearResult<T> {
        if !success {
            return Err(LinearError::ApiError(error_msg.to_string()));
        }
        data.ok_or_else(|| LinearError::ApiError(format!("{} but no data returned", error_msg)))
    }
}

/// Operation name of a GraphQL document, for log lines.
fn operation_name(document: &str) -> &str {
    document
        .split_whitespace()
        .skip_while(|word| *word != "query" && *word != "mutation")
        .nth(1)
        .map(|name| name.split('(').next().unwrap_or(name))
        .unwrap_or("anonymous")
}
