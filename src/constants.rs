//! Common constants used throughout the Plater application.

/// The full token vocabulary; names with no supplied value resolve to ""
pub const TOKEN_NAMES: [&str; 8] =
    ["PROJECT", "AUTHOR", "EMAIL", "URL", "YEAR", "TODAY", "DATE", "ORGANIZATION"];

/// Reserved template subtree holding optional fragments.
/// Matched case-insensitively and never copied by the generic walk.
pub const OPTIONAL_DIR: &str = "Optional";

/// Root-level names that are never overwritten when the destination
/// already has them (case-insensitive)
pub const IGNORABLE_ROOT_ITEMS: [&str; 2] = ["readme.md", "license"];
