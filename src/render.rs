//! Token substitution over template strings.
//! Replaces `{NAME}` markers with the values of a [`TokenTable`] in a
//! single left-to-right pass.

use crate::tokens::TokenTable;

/// Substitutes every `{NAME}` marker in `input` with its resolved value.
///
/// The scan never revisits emitted output, so a replacement value that
/// itself contains marker syntax is written verbatim and substitution
/// always terminates. Markers whose name is not in the table are kept
/// unchanged; leaving them in place is a deliberate permissive policy,
/// not an error.
pub fn substitute(input: &str, tokens: &TokenTable) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];

        match marker_name(rest) {
            Some(name) => {
                let marker_len = name.len() + 2;
                match tokens.get(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&rest[..marker_len]),
                }
                rest = &rest[marker_len..];
            }
            None => {
                // Unterminated or nested brace; emit it and keep scanning
                out.push('{');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Returns the name of the marker at the start of `s` (which begins with
/// `{`), or `None` when no `}` closes it before another `{` opens.
fn marker_name(s: &str) -> Option<&str> {
    let close = s[1..].find('}')?;
    let name = &s[1..1 + close];
    if name.contains('{') {
        return None;
    }
    Some(name)
}
