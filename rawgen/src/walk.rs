//! Tree walking and candidate file detection.

use std::fs;
use std::path::Path;

use syn::{Item, ItemUse, UseTree};
use tracing::trace;

use crate::error::{Error, Result};

/// Visits `root` and, if it is a directory, every entry below it in sorted
/// order. Directories themselves are not passed to `visit`. Symlinks below
/// the root are visited as files and never descended into.
pub fn walk<F>(root: &Path, visit: &mut F) -> Result<()>
where
    F: FnMut(&Path) -> Result<()>,
{
    let meta = fs::metadata(root).map_err(|source| Error::NotFound {
        path: root.to_path_buf(),
        source,
    })?;
    if meta.is_dir() {
        walk_dir(root, visit)
    } else {
        trace!("walk: {}", root.display());
        visit(root)
    }
}

fn walk_dir<F>(dir: &Path, visit: &mut F) -> Result<()>
where
    F: FnMut(&Path) -> Result<()>,
{
    trace!("walk: {}", dir.display());
    trace!("skipping: is directory");

    let io_err = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = fs::read_dir(dir)
        .map_err(io_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(io_err)?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

        if file_type.is_dir() {
            walk_dir(&path, visit)?;
        } else {
            trace!("walk: {}", path.display());
            visit(&path)?;
        }
    }

    Ok(())
}

pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// Whether a parsed file imports `library` at the top level, through a `use`
/// item rooted at it or an `extern crate`. Every top-level import is traced.
pub fn imports_library(file: &syn::File, library: &str) -> bool {
    let mut found = false;

    for item in &file.items {
        match item {
            Item::Use(item) => {
                trace!("✓ imports {}", describe_use(item));
                found |= use_tree_roots_at(&item.tree, library);
            }
            Item::ExternCrate(item) => {
                trace!("✓ imports {}", item.ident);
                found |= item.ident == library;
            }
            _ => {}
        }
    }

    found
}

/// Renders a `use` item's path for logs: `raw::{Time, Duration}`.
pub fn describe_use(item: &ItemUse) -> String {
    let prefix = if item.leading_colon.is_some() { "::" } else { "" };
    format!("{}{}", prefix, use_path(&item.tree))
}

fn use_path(tree: &UseTree) -> String {
    match tree {
        UseTree::Path(p) => format!("{}::{}", p.ident, use_path(&p.tree)),
        UseTree::Name(n) => n.ident.to_string(),
        UseTree::Rename(r) => format!("{} as {}", r.ident, r.rename),
        UseTree::Glob(_) => "*".to_string(),
        UseTree::Group(g) => format!(
            "{{{}}}",
            g.items.iter().map(use_path).collect::<Vec<_>>().join(", ")
        ),
    }
}

fn use_tree_roots_at(tree: &UseTree, library: &str) -> bool {
    match tree {
        UseTree::Path(p) => p.ident == library,
        UseTree::Name(n) => n.ident == library,
        UseTree::Rename(r) => r.ident == library,
        UseTree::Group(g) => g.items.iter().any(|t| use_tree_roots_at(t, library)),
        UseTree::Glob(_) => false,
    }
}
