use colored::*;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex");
    static ref BOLD: Regex = Regex::new(r"\*\*([^*]+)\*\*|__([^_]+)__").expect("valid bold regex");
    static ref ITALIC: Regex = Regex::new(r"\*([^*\s][^*]*)\*|\b_([^_]+)_\b").expect("valid italic regex");
    static ref CODE: Regex = Regex::new(r"`([^`]+)`").expect("valid code regex");
    static ref NUMBERED: Regex = Regex::new(r"^(\d+)\.\s+(.*)$").expect("valid list regex");
    static ref CHECKBOX: Regex = Regex::new(r"^[-*]\s+\[([ xX])\]\s+(.*)$").expect("valid checkbox regex");
}

fn first_group<'a>(cap: &'a Captures) -> &'a str {
    cap.get(1)
        .or_else(|| cap.get(2))
        .map(|m| m.as_str())
        .unwrap_or("")
}

pub fn format_links(text: &str) -> String {
    LINK.replace_all(text, |cap: &Captures| {
        format!("{} ({})", cap[1].blue().underline(), cap[2].dimmed())
    })
    .into_owned()
}

pub fn format_bold(text: &str) -> String {
    BOLD.replace_all(text, |cap: &Captures| first_group(cap).bold().to_string())
        .into_owned()
}

pub fn format_italic(text: &str) -> String {
    ITALIC.replace_all(text, |cap: &Captures| first_group(cap).italic().to_string())
        .into_owned()
}

pub fn format_code(text: &str) -> String {
    CODE.replace_all(text, |cap: &Captures| cap[1].on_black().white().to_string())
        .into_owned()
}

pub fn format_inline_markdown(text: &str) -> String {
    // Code spans first so their contents aren't treated as emphasis.
    let mut parts = Vec::new();
    let mut last = 0;
    for m in CODE.find_iter(text) {
        parts.push(format_emphasis(&text[last..m.start()]));
        parts.push(format_code(m.as_str()));
        last = m.end();
    }
    parts.push(format_emphasis(&text[last..]));
    parts.concat()
}

fn format_emphasis(text: &str) -> String {
    // Bold must come before italic to handle ** correctly
    format_italic(&format_bold(&format_links(text)))
}

fn is_list_item(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("- ") || trimmed.starts_with("* ") || NUMBERED.is_match(trimmed)
}

/// Renders issue-description markdown for a terminal.
pub fn format_markdown(text: &str) -> String {
    let mut formatted = String::new();
    let lines: Vec<&str> = text.lines().collect();
    let mut in_code_block = false;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        let indent = " ".repeat(line.len() - line.trim_start().len());

        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            formatted.push_str(&format!("{}\n", "─".repeat(40).dimmed()));
            continue;
        }

        if in_code_block {
            formatted.push_str(&format!("  {}\n", line.dimmed()));
            continue;
        }

        if let Some(header) = trimmed.strip_prefix("# ") {
            formatted.push_str(&format!("\n{}\n{}\n", header.bold().blue(), "═".repeat(header.chars().count()).blue()));
            continue;
        } else if let Some(header) = trimmed.strip_prefix("## ") {
            formatted.push_str(&format!("\n{}\n{}\n", header.bold().cyan(), "─".repeat(header.chars().count()).cyan()));
            continue;
        } else if let Some(header) = trimmed.strip_prefix("### ") {
            formatted.push_str(&format!("\n{}\n", header.bold().green()));
            continue;
        }

        if let Some(cap) = CHECKBOX.captures(trimmed) {
            let mark = if &cap[1] == " " { "☐".normal() } else { "☑".green() };
            formatted.push_str(&format!("{}{} {}\n", indent, mark, format_inline_markdown(&cap[2])));
            continue;
        }

        if let Some(item) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
            formatted.push_str(&format!("{}• {}\n", indent, format_inline_markdown(item.trim())));
            continue;
        }

        if let Some(cap) = NUMBERED.captures(trimmed) {
            formatted.push_str(&format!("{}{}. {}\n", indent, cap[1].cyan(), format_inline_markdown(&cap[2])));
            continue;
        }

        if let Some(quote) = trimmed.strip_prefix('>') {
            formatted.push_str(&format!("│ {}\n", format_inline_markdown(quote.trim()).dimmed()));
            continue;
        }

        if trimmed == "---" || trimmed == "***" || trimmed == "___" {
            formatted.push_str(&format!("{}\n", "─".repeat(40).dimmed()));
            continue;
        }

        if trimmed.is_empty() {
            // Keep lists tight
            let between_list_items = i > 0
                && i + 1 < lines.len()
                && is_list_item(lines[i - 1])
                && is_list_item(lines[i + 1]);
            if !between_list_items {
                formatted.push('\n');
            }
            continue;
        }

        formatted.push_str(&format_inline_markdown(line));
        formatted.push('\n');
    }

    while formatted.ends_with('\n') {
        formatted.pop();
    }

    formatted
}
