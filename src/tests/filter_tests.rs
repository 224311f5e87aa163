use serde_json::json;

use crate::config::ListConfig;
use crate::error::LinearError;
use crate::filtering::{AssigneeFilter, IssueFilter};

#[test]
fn test_assigned_to_me_filter() {
    let filter = IssueFilter::new("team-1")
        .with_states(["s1", "s2"])
        .with_assignee(AssigneeFilter::Me);

    assert_eq!(
        filter.to_graphql(),
        json!({
            "team": { "id": { "eq": "team-1" } },
            "state": { "id": { "in": ["s1", "s2"] } },
            "assignee": { "isMe": { "eq": true } },
        })
    );
}

#[test]
fn test_unassigned_filter() {
    let filter = IssueFilter::new("team-1")
        .with_states(["s1"])
        .with_assignee(AssigneeFilter::Unassigned);

    assert_eq!(filter.to_graphql()["assignee"], json!({ "null": true }));
}

#[test]
fn test_all_assignees_has_no_assignee_clause() {
    let filter = IssueFilter::new("team-1").with_states(["s1"]);

    assert!(filter.to_graphql().get("assignee").is_none());
}

#[test]
fn test_filter_from_saved_settings() {
    let list = ListConfig {
        team_id: "team-7".to_string(),
        team_name: "Design".to_string(),
        assignee_filter: AssigneeFilter::Unassigned,
        state_ids: vec!["a".to_string(), "b".to_string()],
    };

    let filter = IssueFilter::from(&list);
    assert_eq!(filter.team_id, "team-7");
    assert_eq!(filter.state_ids, vec!["a", "b"]);
    assert_eq!(filter.assignee, AssigneeFilter::Unassigned);
}

#[test]
fn test_assignee_filter_parsing() {
    assert_eq!("me".parse::<AssigneeFilter>().unwrap(), AssigneeFilter::Me);
    assert_eq!(" Unassigned ".parse::<AssigneeFilter>().unwrap(), AssigneeFilter::Unassigned);
    assert_eq!("ALL".parse::<AssigneeFilter>().unwrap(), AssigneeFilter::All);
    assert!(matches!("nobody".parse::<AssigneeFilter>(), Err(LinearError::InvalidInput(_))));
}

#[test]
fn test_assignee_filter_names() {
    assert_eq!(AssigneeFilter::Me.to_string(), "me");
    assert_eq!(AssigneeFilter::Unassigned.label(), "Unassigned");
    assert_eq!(AssigneeFilter::Me.label(), "Assigned to me");
    assert_eq!(serde_yaml::to_string(&AssigneeFilter::All).unwrap().trim(), "all");
}
