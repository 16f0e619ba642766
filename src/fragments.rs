//! Optional fragment declarations and feature-flag selection.
//! Fragments live under the template's `Optional/` subtree and are copied
//! to fixed destination names only when their feature flags are enabled.

use indexmap::{IndexMap, IndexSet};
use log::debug;

/// The set of feature flags enabled for a run.
#[derive(Debug, Default, Clone)]
pub struct FeatureFlags {
    enabled: IndexSet<String>,
}

impl FeatureFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self, flag: &str) {
        self.enabled.insert(flag.to_string());
    }

    pub fn is_enabled(&self, flag: &str) -> bool {
        self.enabled.contains(flag)
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureFlags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { enabled: iter.into_iter().map(Into::into).collect() }
    }
}

/// An optional template file and the conditions under which it applies.
#[derive(Debug, Clone)]
pub struct Fragment {
    /// File name under the optional subtree
    pub source: String,
    /// Fixed name the fragment is written to at the destination root
    pub dest: String,
    /// Flags that must all be enabled for the fragment to apply
    pub requires: Vec<String>,
}

impl Fragment {
    pub fn new(source: &str, dest: &str, requires: &[&str]) -> Self {
        Self {
            source: source.to_string(),
            dest: dest.to_string(),
            requires: requires.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn applies(&self, flags: &FeatureFlags) -> bool {
        self.requires.iter().all(|flag| flags.is_enabled(flag))
    }
}

/// The resolved set of fragments to materialize, keyed by destination name.
///
/// At most one fragment per destination; entries iterate in selection order.
pub type InclusionPlan = IndexMap<String, String>;

/// Evaluates fragments in declared order and keeps the first applicable
/// one per destination name; later matches for the same destination are
/// dropped silently. Declaring combined variants before single-flag
/// variants makes the combined file win when both flags are set.
pub fn select(flags: &FeatureFlags, fragments: &[Fragment]) -> InclusionPlan {
    let mut plan = InclusionPlan::new();
    for fragment in fragments {
        if !fragment.applies(flags) {
            continue;
        }
        if plan.contains_key(&fragment.dest) {
            debug!("Dropping '{}': '{}' already claimed", fragment.source, fragment.dest);
            continue;
        }
        debug!("Including '{}' as '{}'", fragment.source, fragment.dest);
        plan.insert(fragment.dest.clone(), fragment.source.clone());
    }
    plan
}

/// The fragments plater's bundled template declares, in priority order.
pub fn builtin_fragments() -> Vec<Fragment> {
    vec![
        Fragment::new("Podfile-quick+nimble", "Podfile", &["cocoapods", "quick-nimble"]),
        Fragment::new("Podfile", "Podfile", &["cocoapods"]),
        Fragment::new(
            "ExampleTests-quick+nimble.swift",
            "ExampleTests.swift",
            &["quick-nimble"],
        ),
    ]
}
