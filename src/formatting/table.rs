//! Bordered issue table for `list`.
//!
//! Fixed columns are pinned; the title column is sized to its widest cell so
//! titles are never wrapped. Titles are truncated up front so that the whole
//! table fits the terminal.

use colored::*;

use crate::constants::DEFAULT_TERMINAL_WIDTH;
use crate::models::IssueSummary;
use super::theme::{theme_color, SemanticColor};
use super::utils::{color_hex, display_width, pad_center, pad_right, priority_display, truncate};

// Content widths; each cell adds one space of padding on either side.
pub const PRIORITY_WIDTH: usize = 6;
pub const ID_WIDTH: usize = 12;
pub const STATE_WIDTH: usize = 13;
const BORDERS: usize = 5;

/// Everything except the title column's content.
pub const FIXED_WIDTH: usize = (PRIORITY_WIDTH + 2) + (ID_WIDTH + 2) + (STATE_WIDTH + 2) + BORDERS + 2;
pub const MIN_TITLE_WIDTH: usize = 10;

/// Narrowest table the renderer produces.
pub const MIN_TABLE_WIDTH: usize = FIXED_WIDTH + MIN_TITLE_WIDTH;

const HEADERS: [&str; 4] = ["◌", "ID", "TITLE", "STATE"];

/// Current terminal width, or the default when it can't be determined.
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => cols as usize,
        _ => DEFAULT_TERMINAL_WIDTH,
    }
}

/// Display columns available to a title on a terminal `terminal_width` wide.
pub fn title_budget(terminal_width: usize) -> usize {
    terminal_width.saturating_sub(FIXED_WIDTH).max(MIN_TITLE_WIDTH)
}

#[derive(Debug, Clone, Copy)]
enum Cell<'a> {
    Border,
    Header,
    Text,
    State(Option<&'a str>),
}

#[derive(Debug, Clone)]
struct TableRow {
    priority: String,
    identifier: String,
    title: String,
    state: String,
    state_color: Option<String>,
}

#[derive(Debug, Clone)]
pub struct IssueTable {
    rows: Vec<TableRow>,
    widths: [usize; 4],
}

impl IssueTable {
    pub fn new(issues: &[IssueSummary], terminal_width: usize) -> Self {
        let title_max = title_budget(terminal_width);

        let rows: Vec<TableRow> = issues
            .iter()
            .map(|issue| TableRow {
                priority: truncate(&priority_display(issue.priority), PRIORITY_WIDTH),
                identifier: truncate(&single_line(&issue.identifier), ID_WIDTH),
                title: truncate(&single_line(&issue.title), title_max),
                state: truncate(&single_line(&issue.state.name), STATE_WIDTH),
                state_color: issue.state.color.clone(),
            })
            .collect();

        let title_width = rows
            .iter()
            .map(|row| display_width(&row.title))
            .chain(std::iter::once(display_width(HEADERS[2])))
            .max()
            .unwrap_or(0);

        Self {
            rows,
            widths: [PRIORITY_WIDTH, ID_WIDTH, title_width, STATE_WIDTH],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of every rendered line.
    pub fn width(&self) -> usize {
        self.widths.iter().map(|w| w + 2).sum::<usize>() + BORDERS
    }

    /// Lines without color codes.
    pub fn render_plain(&self) -> Vec<String> {
        self.render_with(|text, _| text.to_string())
    }

    /// Lines colored with the current theme.
    pub fn render(&self) -> Vec<String> {
        self.render_with(|text, cell| match cell {
            Cell::Border => text.color(theme_color(SemanticColor::TableBorder)).to_string(),
            Cell::Header => text.color(theme_color(SemanticColor::TableHeader)).bold().to_string(),
            Cell::Text => text.color(theme_color(SemanticColor::TableText)).to_string(),
            Cell::State(hex) => {
                if hex.and_then(super::utils::parse_hex_color).is_some() {
                    color_hex(text, hex).to_string()
                } else {
                    text.color(theme_color(SemanticColor::TableText)).to_string()
                }
            }
        })
    }

    fn render_with<F>(&self, paint: F) -> Vec<String>
    where
        F: Fn(&str, Cell) -> String,
    {
        let mut lines = Vec::with_capacity(self.rows.len() * 2 + 4);

        lines.push(paint(&self.rule('┌', '┬', '┐'), Cell::Border));

        let header: Vec<(String, Cell)> = HEADERS
            .iter()
            .zip(self.widths.iter())
            .map(|(h, w)| (pad_center(h, *w), Cell::Header))
            .collect();
        lines.push(self.line(&header, &paint));

        lines.push(paint(&self.rule('├', '┼', '┤'), Cell::Border));

        for (i, row) in self.rows.iter().enumerate() {
            let cells = vec![
                (pad_right(&row.priority, self.widths[0]), Cell::Text),
                (pad_right(&row.identifier, self.widths[1]), Cell::Text),
                (pad_right(&row.title, self.widths[2]), Cell::Text),
                (pad_right(&row.state, self.widths[3]), Cell::State(row.state_color.as_deref())),
            ];
            lines.push(self.line(&cells, &paint));

            // Spacer between rows
            if i + 1 < self.rows.len() {
                let blank: Vec<(String, Cell)> = self
                    .widths
                    .iter()
                    .map(|w| (" ".repeat(*w), Cell::Text))
                    .collect();
                lines.push(self.line(&blank, &paint));
            }
        }

        lines.push(paint(&self.rule('└', '┴', '┘'), Cell::Border));
        lines
    }

    fn rule(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(&middle.to_string()), right)
    }

    fn line<F>(&self, cells: &[(String, Cell)], paint: &F) -> String
    where
        F: Fn(&str, Cell) -> String,
    {
        let mut out = paint("│", Cell::Border);
        for (text, cell) in cells {
            out.push_str(&paint(&format!(" {} ", text), *cell));
            out.push_str(&paint("│", Cell::Border));
        }
        out
    }
}

impl std::fmt::Display for IssueTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render().join("\n"))
    }
}

fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
