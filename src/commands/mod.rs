pub mod auth;
pub mod clipboard;
pub mod git;
pub mod issue;
pub mod issue_id;
pub mod list;
pub mod start;

pub use auth::handle_auth;
pub use issue::handle_issue;
pub use list::handle_list;
pub use start::handle_start;
