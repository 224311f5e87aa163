use crate::formatting::table::{IssueTable, FIXED_WIDTH, MIN_TABLE_WIDTH, title_budget};
use crate::formatting::utils::{display_width, truncate};
use crate::models::{IssueSummary, WorkflowState};

fn issue(identifier: &str, title: &str, priority: f64, state: &str) -> IssueSummary {
    IssueSummary {
        id: format!("id-{}", identifier),
        identifier: identifier.to_string(),
        title: title.to_string(),
        priority,
        state: WorkflowState {
            id: format!("state-{}", state),
            name: state.to_string(),
            color: Some("#f2c94c".to_string()),
            state_type: Some("started".to_string()),
        },
    }
}

fn titles() -> Vec<String> {
    vec![
        String::new(),
        "Fix".to_string(),
        "Handle “curly quotes” in the importer".to_string(),
        "x".repeat(500),
        "日本語のタイトルがとても長い場合の表示を確認する".repeat(4),
        "Emoji 🚀🚀🚀 in titles should not break the table layout".to_string(),
        "Tabs\tand\nnewlines in titles".to_string(),
    ]
}

#[test]
fn test_table_never_exceeds_terminal_width() {
    for width in (MIN_TABLE_WIDTH..=220).step_by(7) {
        for title in titles() {
            let issues = vec![
                issue("ENG-1", &title, 2.0, "In Progress"),
                issue("SWEAT-1009", "Short", 0.0, "Todo"),
            ];
            let table = IssueTable::new(&issues, width);

            assert!(table.width() <= width, "table {} > terminal {}", table.width(), width);
            for line in table.render_plain() {
                assert!(
                    display_width(&line) <= width,
                    "line of width {} exceeds {}: {}",
                    display_width(&line),
                    width,
                    line
                );
            }
        }
    }
}

#[test]
fn test_narrow_terminal_uses_minimum_table() {
    let issues = vec![issue("ENG-1", &"long title ".repeat(20), 1.0, "Todo")];

    for width in [0, 20, 40, MIN_TABLE_WIDTH - 1] {
        let table = IssueTable::new(&issues, width);
        assert_eq!(table.width(), MIN_TABLE_WIDTH);
        for line in table.render_plain() {
            assert_eq!(display_width(&line), MIN_TABLE_WIDTH);
        }
    }
}

#[test]
fn test_title_column_sizes_to_content() {
    let issues = vec![issue("ENG-1", "Short title", 3.0, "Todo")];
    let table = IssueTable::new(&issues, 200);

    assert_eq!(table.width(), FIXED_WIDTH + "Short title".len());
    let lines = table.render_plain();
    assert!(lines.iter().any(|l| l.contains(" Short title ")));
}

#[test]
fn test_long_title_is_truncated_with_ellipsis() {
    let title = "a".repeat(300);
    let issues = vec![issue("ENG-1", &title, 0.0, "Todo")];
    let table = IssueTable::new(&issues, 100);

    assert_eq!(table.width(), 100);
    let row = table
        .render_plain()
        .into_iter()
        .find(|l| l.contains("ENG-1"))
        .unwrap();
    assert!(row.contains('…'));
}

#[test]
fn test_all_lines_have_equal_width() {
    let issues = vec![
        issue("ENG-1", "One", 1.0, "Backlog"),
        issue("ENG-22", "Two is a bit longer", 4.0, "A very long state name"),
        issue("ENG-333", "Three", 7.0, "Done"),
    ];
    let table = IssueTable::new(&issues, 120);
    let lines = table.render_plain();

    // top, header, separator, 3 rows, 2 spacers, bottom
    assert_eq!(lines.len(), 9);
    for line in &lines {
        assert_eq!(display_width(line), table.width());
    }
    assert!(lines[0].starts_with('┌') && lines[0].ends_with('┐'));
    assert!(lines[1].contains("TITLE") && lines[1].contains("STATE"));
    assert!(lines[8].starts_with('└'));
}

#[test]
fn test_priority_glyphs_in_rows() {
    let issues = vec![
        issue("ENG-1", "Urgent one", 1.0, "Todo"),
        issue("ENG-2", "No priority", 0.0, "Todo"),
    ];
    let lines = IssueTable::new(&issues, 120).render_plain();

    assert!(lines.iter().any(|l| l.contains("⚠⚠⚠") && l.contains("ENG-1")));
    assert!(lines.iter().any(|l| l.contains("---") && l.contains("ENG-2")));
}

#[test]
fn test_title_budget() {
    assert_eq!(title_budget(100), 100 - FIXED_WIDTH);
    assert_eq!(title_budget(10), 10);
    assert_eq!(title_budget(0), 10);
}

#[test]
fn test_truncate_respects_width() {
    for title in titles() {
        for max in 0..60 {
            let truncated = truncate(&title, max);
            assert!(display_width(&truncated) <= max, "{:?} at {}", truncated, max);
            if display_width(&title) <= max {
                assert_eq!(truncated, title);
            } else if max > 0 {
                assert!(truncated.ends_with('…'));
            }
        }
    }
}

#[test]
fn test_empty_table() {
    let table = IssueTable::new(&[], 100);
    assert!(table.is_empty());
    assert!(!IssueTable::new(&[issue("ENG-1", "One", 1.0, "Todo")], 100).is_empty());
}
