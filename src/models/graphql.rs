use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

// Viewer data structures
#[derive(Debug, Deserialize)]
pub struct ViewerData {
    pub viewer: super::User,
}

#[derive(Debug, Deserialize)]
pub struct ViewerTeamsData {
    pub viewer: ViewerTeams,
}

#[derive(Debug, Deserialize)]
pub struct ViewerTeams {
    pub teams: super::Connection<super::Team>,
}

// Issue data structures
#[derive(Debug, Deserialize)]
pub struct IssueData {
    pub issue: super::Issue,
}

#[derive(Debug, Deserialize)]
pub struct IssuesData {
    pub issues: super::Connection<super::IssueSummary>,
}

// Team state data structures
#[derive(Debug, Deserialize)]
pub struct TeamStatesData {
    pub team: TeamWithStates,
}

#[derive(Debug, Deserialize)]
pub struct IssueTeamStatesData {
    pub issue: IssueWithTeam,
}

#[derive(Debug, Deserialize)]
pub struct IssueWithTeam {
    pub team: TeamWithStates,
}

#[derive(Debug, Deserialize)]
pub struct TeamWithStates {
    pub states: super::Connection<super::WorkflowState>,
}

// Mutation response structures
#[derive(Debug, Deserialize)]
pub struct IssueMutationPayload {
    pub success: bool,
    pub issue: Option<super::IssueSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdateData {
    pub issue_update: IssueMutationPayload,
}
