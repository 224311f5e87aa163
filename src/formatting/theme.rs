use colored::{Color, Colorize};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::RwLock;

/// Semantic color definitions for consistent theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    // Status colors
    StatusBacklog,
    StatusUnstarted,
    StatusStarted,
    StatusCompleted,
    StatusCanceled,

    // Priority colors
    PriorityNone,
    PriorityUrgent,
    PriorityHigh,
    PriorityMedium,
    PriorityLow,

    // Table colors
    TableHeader,
    TableBorder,
    TableText,

    // Message colors
    Identifier,
    Error,
    Warning,
    Success,

    // Text colors
    Primary,
    Muted,
    Link,
}

/// Theme configuration for the CLI
#[derive(Debug, Clone)]
pub struct ColorTheme {
    colors: HashMap<SemanticColor, Color>,
}

impl ColorTheme {
    pub fn new() -> Self {
        let mut colors = HashMap::new();

        colors.insert(SemanticColor::StatusBacklog, Color::TrueColor { r: 124, g: 124, b: 124 });
        colors.insert(SemanticColor::StatusUnstarted, Color::Blue);
        colors.insert(SemanticColor::StatusStarted, Color::Yellow);
        colors.insert(SemanticColor::StatusCompleted, Color::Green);
        colors.insert(SemanticColor::StatusCanceled, Color::Red);

        colors.insert(SemanticColor::PriorityNone, Color::TrueColor { r: 90, g: 90, b: 90 });
        colors.insert(SemanticColor::PriorityUrgent, Color::BrightRed);
        colors.insert(SemanticColor::PriorityHigh, Color::Red);
        colors.insert(SemanticColor::PriorityMedium, Color::Yellow);
        colors.insert(SemanticColor::PriorityLow, Color::Blue);

        // Kanagawa palette
        colors.insert(SemanticColor::TableHeader, Color::TrueColor { r: 0x95, g: 0x7F, b: 0xB8 });
        colors.insert(SemanticColor::TableBorder, Color::TrueColor { r: 0x54, g: 0x54, b: 0x6D });
        colors.insert(SemanticColor::TableText, Color::TrueColor { r: 0xDC, g: 0xD7, b: 0xBA });

        colors.insert(SemanticColor::Identifier, Color::Blue);
        colors.insert(SemanticColor::Error, Color::Red);
        colors.insert(SemanticColor::Warning, Color::Yellow);
        colors.insert(SemanticColor::Success, Color::Green);

        colors.insert(SemanticColor::Primary, Color::White);
        colors.insert(SemanticColor::Muted, Color::TrueColor { r: 90, g: 90, b: 90 });
        colors.insert(SemanticColor::Link, Color::Blue);

        Self { colors }
    }

    /// Get a color for a semantic meaning
    pub fn get(&self, semantic: SemanticColor) -> Color {
        self.colors.get(&semantic).copied().unwrap_or(Color::White)
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref THEME: RwLock<ColorTheme> = RwLock::new(ColorTheme::new());
}

/// Get a color from the current theme
pub fn theme_color(semantic: SemanticColor) -> Color {
    THEME
        .read()
        .map(|theme| theme.get(semantic))
        .unwrap_or(Color::White)
}

/// Extension trait for colorizing strings with semantic colors
pub trait ThemedColorize {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString;
}

impl ThemedColorize for &str {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

impl ThemedColorize for String {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

/// Helper functions for common color applications
pub mod helpers {
    use super::*;

    pub fn status_color(status_type: &str) -> SemanticColor {
        match status_type.to_lowercase().as_str() {
            "backlog" => SemanticColor::StatusBacklog,
            "unstarted" | "triage" | "todo" => SemanticColor::StatusUnstarted,
            "started" | "in_progress" | "in progress" => SemanticColor::StatusStarted,
            "completed" | "done" => SemanticColor::StatusCompleted,
            "canceled" | "cancelled" => SemanticColor::StatusCanceled,
            _ => SemanticColor::Primary,
        }
    }

    /// Linear priorities: 0 none, 1 urgent, 2 high, 3 medium, 4 low.
    pub fn priority_color(priority: f64) -> SemanticColor {
        match priority as i64 {
            1 => SemanticColor::PriorityUrgent,
            2 => SemanticColor::PriorityHigh,
            3 => SemanticColor::PriorityMedium,
            4 => SemanticColor::PriorityLow,
            _ => SemanticColor::PriorityNone,
        }
    }
}
