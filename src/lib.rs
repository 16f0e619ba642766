//! Plater materializes parameterized project skeletons.
//! Given a template tree whose file names and contents carry `{TOKEN}`
//! placeholders, it writes a fully substituted copy into a destination
//! directory, including only the optional fragments selected by feature flags.

/// Command-line interface module for the Plater application
pub mod cli;

/// Common constants: token vocabulary, optional subtree, ignorable root items
pub mod constants;

/// Error types and handling for the Plater application
pub mod error;

/// Optional fragment declarations and feature-flag selection
/// Decides which `Optional/` files join the output and under which names
pub mod fragments;

/// Logger initialization
pub mod logger;

/// Core materialization orchestration
/// Walks the template tree and writes the substituted copy
pub mod processor;

/// Token substitution over template strings
pub mod render;

/// The resolved token table consumed by substitution
pub mod tokens;
