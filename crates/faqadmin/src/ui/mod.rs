//! Interactive admin screen for faqadmin.
//!
//! This module provides the terminal surface the administrator works in:
//!
//! - **Navigation selector**: a menu offering exactly the four FAQ actions
//!   (view, add, edit, delete), modeled as the [`Action`] variant and
//!   dispatched to one independent handler function each.
//!
//! - **Stateless actions**: every handler re-reads the collection through
//!   the store; nothing is cached between menu selections, so the screen
//!   always reflects the file on disk.
//!
//! - **Testable I/O**: [`AdminScreen`] is generic over its reader and
//!   writer, so tests drive whole sessions through in-memory buffers.
//!
//! # Example
//!
//! ```
//! use faqadmin::ui::Action;
//!
//! assert_eq!(Action::parse("2"), Some(Action::Add));
//! assert_eq!(Action::parse("view"), Some(Action::View));
//! assert_eq!(Action::parse("bogus"), None);
//! ```

mod screen;
mod table;

pub use screen::AdminScreen;
pub use table::render_table;

/// One of the four selectable admin actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// List all entries as a table.
    View,
    /// Create a new entry.
    Add,
    /// Overwrite the fields of an existing entry.
    Edit,
    /// Remove an existing entry.
    Delete,
}

impl Action {
    /// Parse a menu selection.
    ///
    /// Accepts the menu number or the action name (case-insensitive), plus
    /// the name's first letter as a shortcut.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "v" | "view" => Some(Self::View),
            "2" | "a" | "add" => Some(Self::Add),
            "3" | "e" | "edit" => Some(Self::Edit),
            "4" | "d" | "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::View => write!(f, "view"),
            Self::Add => write!(f, "add"),
            Self::Edit => write!(f, "edit"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parse_numbers() {
        assert_eq!(Action::parse("1"), Some(Action::View));
        assert_eq!(Action::parse("2"), Some(Action::Add));
        assert_eq!(Action::parse("3"), Some(Action::Edit));
        assert_eq!(Action::parse("4"), Some(Action::Delete));
    }

    #[test]
    fn test_action_parse_names() {
        assert_eq!(Action::parse("view"), Some(Action::View));
        assert_eq!(Action::parse("ADD"), Some(Action::Add));
        assert_eq!(Action::parse(" edit "), Some(Action::Edit));
        assert_eq!(Action::parse("d"), Some(Action::Delete));
    }

    #[test]
    fn test_action_parse_rejects_unknown() {
        assert_eq!(Action::parse("5"), None);
        assert_eq!(Action::parse(""), None);
        assert_eq!(Action::parse("remove"), None);
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::View.to_string(), "view");
        assert_eq!(Action::Add.to_string(), "add");
        assert_eq!(Action::Edit.to_string(), "edit");
        assert_eq!(Action::Delete.to_string(), "delete");
    }
}
