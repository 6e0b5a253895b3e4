//! Centralized UI formatting and color utilities
//!
//! Icons, colors and small text helpers shared by the deporder commands.

use colored::{ColoredString, Colorize};

use crate::engine::Section;

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("DEPORDER_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored icon for a checked list.
///
/// Icons:
/// - clean: ✓ (green)
/// - violations: ✗ (red)
pub fn section_icon(section: &Section) -> ColoredString {
    if section.is_clean() {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Icon for a single violation line.
pub fn violation_symbol() -> ColoredString {
    "→".red()
}

/// Color scheme for report output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Red for errors/violations
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (paths, coordinates)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// `1 violation`, `3 violations`
    pub fn count(n: usize, singular: &str, plural: &str) -> String {
        format!("{} {}", n, if n == 1 { singular } else { plural })
    }
}
