//! Per-file regeneration.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;

use syn::Item;
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use crate::block::Markers;
use crate::classify::{classify, Eligibility};
use crate::config::Config;
use crate::emit::emit;
use crate::error::{Error, Result};
use crate::plan::plan;
use crate::walk;

/// Result of regenerating one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regenerated {
    pub content: String,
    /// Exported names of the records in the generated block, in file order.
    pub records: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rewritten,
    /// The regenerated content matched the file, which was left untouched.
    Unchanged,
}

pub struct Generator {
    config: Config,
    markers: Markers,
}

impl Generator {
    pub fn new(config: Config) -> Result<Self> {
        let markers = Markers::new(&config)?;
        Ok(Self { config, markers })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Strips the old generated block, re-parses what remains and appends a
    /// fresh block for every raw record. Any error aborts the whole file.
    pub fn regenerate(&self, source: &str) -> Result<Regenerated> {
        let stripped = self.markers.strip(source)?;
        let file = syn::parse_file(&stripped)?;
        let declared = declared_types(&file);

        let mut blocks = Vec::new();
        let mut records = Vec::new();

        for item in &file.items {
            let Item::Struct(item) = item else {
                continue;
            };

            if let Eligibility::Ineligible(reason) = classify(item, &self.config) {
                debug!("not raw: {} ({})", item.ident, reason);
                continue;
            }

            let plan = plan(item, &self.config)?;
            if declared.contains(&plan.exported_name) {
                return Err(Error::NameConflict {
                    name: plan.raw_name,
                    exported: plan.exported_name,
                });
            }

            debug!("processing: {} -> {}", plan.raw_name, plan.exported_name);
            blocks.push(emit(&plan, &self.config));
            records.push(plan.exported_name);
        }

        let content = if blocks.is_empty() {
            format!("{}\n", stripped)
        } else {
            format!(
                "{}\n\n{}",
                stripped,
                self.markers.wrap(&blocks, &self.config.tool_name)
            )
        };

        Ok(Regenerated { content, records })
    }

    /// Regenerates a file in place.
    ///
    /// The new content is written to a temporary file next to the original
    /// and renamed over it, so an error never leaves a partial file behind.
    pub fn process(&self, path: &Path) -> Result<Outcome> {
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let regenerated = self.regenerate(&source).map_err(|e| e.in_file(path))?;
        if regenerated.content == source {
            trace!("unchanged: {}", path.display());
            return Ok(Outcome::Unchanged);
        }

        write_atomic(path, &regenerated.content)?;
        Ok(Outcome::Rewritten)
    }

    /// Whether the file at `path` imports the configured library.
    pub fn imports_library(&self, path: &Path) -> Result<bool> {
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = syn::parse_file(&source).map_err(|e| Error::from(e).in_file(path))?;
        Ok(walk::imports_library(&file, &self.config.library))
    }

    /// Walks `root` and regenerates every candidate file, one at a time.
    ///
    /// `on_file` is called after each file is processed. The first error
    /// stops the walk. Returns the number of files processed.
    pub fn run<F>(&self, root: &Path, mut on_file: F) -> Result<usize>
    where
        F: FnMut(&Path, Outcome),
    {
        let mut processed = 0;

        walk::walk(root, &mut |path: &Path| {
            if !walk::has_extension(path, &self.config.extension) {
                trace!("skipping: not a .{} file", self.config.extension);
                return Ok(());
            }
            if !self.imports_library(path)? {
                trace!("skipping: does not import {}", self.config.library);
                return Ok(());
            }

            let outcome = self.process(path)?;
            on_file(path, outcome);
            processed += 1;
            Ok(())
        })?;

        Ok(processed)
    }
}

/// Names in the type namespace declared at the top level of a file.
fn declared_types(file: &syn::File) -> HashSet<String> {
    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Struct(i) => Some(i.ident.to_string()),
            Item::Enum(i) => Some(i.ident.to_string()),
            Item::Union(i) => Some(i.ident.to_string()),
            Item::Type(i) => Some(i.ident.to_string()),
            Item::Trait(i) => Some(i.ident.to_string()),
            _ => None,
        })
        .collect()
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    // Replace the link target, not the link.
    let target = if fs::symlink_metadata(path)
        .map_err(write_err)?
        .file_type()
        .is_symlink()
    {
        fs::canonicalize(path).map_err(write_err)?
    } else {
        path.to_path_buf()
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(&target).map_err(write_err)?.permissions();

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().set_permissions(permissions).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(&target).map_err(|e| write_err(e.error))?;

    Ok(())
}
