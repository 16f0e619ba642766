//! Core materialization orchestration.
//! Walks the template tree and writes a substituted copy under the
//! destination root, then places the fragments chosen by the inclusion plan.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::OPTIONAL_DIR;
use crate::error::{Error, Result};
use crate::fragments::InclusionPlan;
use crate::render::substitute;
use crate::tokens::TokenTable;

/// Walks a template root and materializes it into a destination root.
///
/// The template is only ever read; every write targets the destination, so
/// a run never invalidates paths it still has to visit and the same
/// template can be materialized any number of times. All paths are held
/// explicitly; nothing here depends on the process working directory.
pub struct Materializer<'a> {
    template_root: &'a Path,
    output_root: &'a Path,
    tokens: &'a TokenTable,
    plan: &'a InclusionPlan,
    ignorable: &'a [&'a str],
}

impl<'a> Materializer<'a> {
    pub fn new(
        template_root: &'a Path,
        output_root: &'a Path,
        tokens: &'a TokenTable,
        plan: &'a InclusionPlan,
        ignorable: &'a [&'a str],
    ) -> Self {
        Self { template_root, output_root, tokens, plan, ignorable }
    }

    /// Runs the full materialization: the fixed tree first, then the
    /// planned fragments. Any filesystem failure aborts the run with the
    /// failing path; the destination may be left incomplete.
    pub fn materialize(&self) -> Result<()> {
        if !self.template_root.is_dir() {
            return Err(Error::TemplateNotFound {
                template_dir: self.template_root.display().to_string(),
            });
        }
        if !self.output_root.is_dir() {
            return Err(Error::OutputDirInvalid {
                output_dir: self.output_root.display().to_string(),
            });
        }

        self.walk(self.template_root, self.output_root, true)?;
        self.place_fragments()
    }

    /// Copies one template directory level, recursing depth-first.
    ///
    /// Children are visited through their original source paths; the
    /// substituted name only ever shapes the destination path, so no
    /// descendant becomes unreachable mid-walk.
    fn walk(&self, source_dir: &Path, dest_dir: &Path, at_root: bool) -> Result<()> {
        let entries =
            fs::read_dir(source_dir).map_err(Error::unreadable(source_dir))?;

        for entry in entries {
            let entry = entry.map_err(Error::unreadable(source_dir))?;
            let source = entry.path();
            let raw_name = entry.file_name();
            let name = raw_name
                .to_str()
                .ok_or_else(|| Error::NonUnicodeName { path: source.clone() })?;

            if name.starts_with('.') {
                debug!("Skipping hidden entry '{}'", name);
                continue;
            }
            if at_root && name.eq_ignore_ascii_case(OPTIONAL_DIR) {
                // Reached only through the inclusion plan
                continue;
            }

            let resolved = substitute(name, self.tokens);
            if at_root && self.is_ignorable(&resolved) {
                debug!("Keeping existing '{}' at destination", resolved);
                continue;
            }

            let dest = dest_dir.join(&resolved);
            let file_type = entry.file_type().map_err(Error::unreadable(&source))?;
            if file_type.is_dir() {
                fs::create_dir_all(&dest).map_err(Error::unwritable(&dest))?;
                self.walk(&source, &dest, false)?;
            } else {
                self.copy_item(&source, &dest)?;
            }
        }
        Ok(())
    }

    /// Reads one planned fragment from the optional subtree and writes it
    /// to its fixed destination name at the destination root. Fragment
    /// names are policy, not templates; only their contents are
    /// substituted.
    fn place_fragments(&self) -> Result<()> {
        if self.plan.is_empty() {
            return Ok(());
        }
        let optional_root = self.optional_root()?;
        for (dest_name, source_name) in self.plan {
            let source = optional_root.join(source_name);
            let dest = self.output_root.join(dest_name);
            debug!("Placing fragment '{}' as '{}'", source_name, dest_name);
            self.copy_item(&source, &dest)?;
        }
        Ok(())
    }

    /// Finds the optional subtree's on-disk path. The walk reserves the
    /// subtree by case-insensitive name, so reads must use the same match
    /// or a lowercase `optional/` would be unreachable both ways.
    fn optional_root(&self) -> Result<PathBuf> {
        let entries =
            fs::read_dir(self.template_root).map_err(Error::unreadable(self.template_root))?;
        for entry in entries {
            let entry = entry.map_err(Error::unreadable(self.template_root))?;
            let name = entry.file_name();
            if name.to_str().is_some_and(|n| n.eq_ignore_ascii_case(OPTIONAL_DIR)) {
                return Ok(entry.path());
            }
        }
        Ok(self.template_root.join(OPTIONAL_DIR))
    }

    /// Writes one file to the destination. Text contents go through token
    /// substitution; contents that are not valid UTF-8 are copied
    /// byte-for-byte, so binary assets in a template survive untouched.
    fn copy_item(&self, source: &Path, dest: &Path) -> Result<()> {
        let bytes = fs::read(source).map_err(Error::unreadable(source))?;
        match String::from_utf8(bytes) {
            Ok(text) => {
                debug!("Writing file: {}", dest.display());
                let rendered = substitute(&text, self.tokens);
                fs::write(dest, rendered).map_err(Error::unwritable(dest))
            }
            Err(_) => {
                debug!("Copying binary file: {}", dest.display());
                fs::copy(source, dest).map(|_| ()).map_err(Error::unwritable(dest))
            }
        }
    }

    /// A root item is ignorable when its resolved name is in the
    /// configured set (case-insensitive) and the destination already has it.
    fn is_ignorable(&self, resolved_name: &str) -> bool {
        self.ignorable.iter().any(|item| item.eq_ignore_ascii_case(resolved_name))
            && self.output_root.join(resolved_name).exists()
    }
}
