pub mod issues;
pub mod markdown;
pub mod table;
pub mod theme;
pub mod utils;

pub use issues::{format_description, format_issue_heading, format_state, print_issue_details, print_issue_summary};
pub use markdown::{format_inline_markdown, format_markdown};
pub use table::{IssueTable, terminal_width};
pub use theme::{SemanticColor, ThemedColorize};
pub use utils::{display_width, mask_api_key, priority_display, truncate};
