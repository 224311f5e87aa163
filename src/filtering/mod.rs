pub mod issue_filter;

pub use issue_filter::{AssigneeFilter, IssueFilter};
