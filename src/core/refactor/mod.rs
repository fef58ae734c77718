//! Icon rename passes.
//!
//! Rebuilds the resource-collection file from its backup with full asset paths
//! renamed, then rewrites bare icon filenames across the source tree. Each pass
//! plans its edits in memory first and only touches disk when applied.

mod resource;
mod sources;
mod substitute;

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::defaults::Layout;
use crate::error::{Error, Result};
use crate::mapping::{self, MatchTarget};

pub use resource::{
    apply_resource_rewrite, generate_resource_rewrite, restore_backup, ResourceRewrite,
};
pub use sources::{
    apply_source_rewrites, find_source_files, generate_source_rewrites, FileEdit, SourceRewrite,
};
pub use substitute::{rewrite_line, rewrite_text, LineReplacement, TextRewrite};

/// Which passes to run and whether to write.
#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub dry_run: bool,
    pub resource: bool,
    pub sources: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            resource: true,
            sources: true,
        }
    }
}

/// Outcome of a full run.
#[derive(Debug, Clone, Serialize)]
pub struct RenameReport {
    pub root: String,
    pub layout: Layout,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<ResourceRewrite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<SourceRewrite>,
}

/// Run the enabled passes against `root`, resource file first.
pub fn rename_icons(
    root: &Path,
    layout: &Layout,
    options: &RenameOptions,
) -> Result<RenameReport> {
    let root = resolve_root(root)?;

    let resource = if options.resource {
        let mut result =
            generate_resource_rewrite(layout, &root, &mapping::table(MatchTarget::Path))?;
        if !options.dry_run {
            apply_resource_rewrite(&mut result, layout, &root)?;
        }
        Some(result)
    } else {
        None
    };

    let sources = if options.sources {
        let mut result =
            generate_source_rewrites(layout, &root, &mapping::table(MatchTarget::FileName))?;
        if !options.dry_run {
            apply_source_rewrites(&mut result, &root)?;
        }
        Some(result)
    } else {
        None
    };

    Ok(RenameReport {
        root: root.to_string_lossy().to_string(),
        layout: layout.clone(),
        dry_run: options.dry_run,
        resource,
        sources,
    })
}

fn resolve_root(root: &Path) -> Result<PathBuf> {
    if !root.is_dir() {
        return Err(Error::validation_invalid_argument(
            "root",
            "Project root is not a directory",
            Some(root.to_string_lossy().to_string()),
        )
        .with_hint("Pass --root pointing at the directory that contains rsc/ and src/"));
    }

    root.canonicalize().map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("resolve {}", root.display())),
        )
    })
}
