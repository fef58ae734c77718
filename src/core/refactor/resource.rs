//! Resource-collection pass: restore from backup, then rewrite full asset paths.

use serde::Serialize;
use std::path::Path;

use super::substitute::{rewrite_text, LineReplacement};
use crate::defaults::Layout;
use crate::error::Result;
use crate::mapping::IconRename;
use crate::utils::io;

/// Planned (or applied) rewrite of the resource-collection file.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceRewrite {
    /// Backup path relative to root.
    pub backup: String,
    /// Resource path relative to root.
    pub resource: String,
    /// Lines read from the backup.
    pub total_lines: usize,
    /// Lines whose text changed.
    pub replacements: Vec<LineReplacement>,
    /// Rewritten resource content.
    #[serde(skip)]
    pub new_content: String,
    /// Whether the resource file was written.
    pub applied: bool,
}

/// Overwrite the resource file with the backup's full contents.
pub fn restore_backup(layout: &Layout, root: &Path) -> Result<()> {
    let backup = root.join(&layout.backup);
    let resource = root.join(&layout.resource);
    io::copy_file(
        &backup,
        &resource,
        &format!("restore {} from {}", layout.resource, layout.backup),
    )?;
    log_status!(
        "resource",
        "Restored {} from {}",
        layout.resource,
        layout.backup
    );
    Ok(())
}

/// Compute the rewritten resource content from the backup without touching disk.
pub fn generate_resource_rewrite(
    layout: &Layout,
    root: &Path,
    table: &[IconRename],
) -> Result<ResourceRewrite> {
    let backup = root.join(&layout.backup);
    let content = io::read_file(&backup, &format!("read {}", layout.backup))?;
    let rewrite = rewrite_text(&content, table);

    Ok(ResourceRewrite {
        backup: layout.backup.clone(),
        resource: layout.resource.clone(),
        total_lines: rewrite.total_lines,
        replacements: rewrite.replacements,
        new_content: rewrite.content,
        applied: false,
    })
}

/// Restore the resource file from backup, then write the rewritten content.
///
/// The resource file is always written, even when no line changed, so a run
/// leaves it identical to the rewritten backup.
pub fn apply_resource_rewrite(
    result: &mut ResourceRewrite,
    layout: &Layout,
    root: &Path,
) -> Result<()> {
    restore_backup(layout, root)?;

    let resource = root.join(&result.resource);
    io::write_file(
        &resource,
        &result.new_content,
        &format!("write {}", result.resource),
    )?;
    log_status!(
        "resource",
        "Rewrote {} line(s) in {}",
        result.replacements.len(),
        result.resource
    );

    result.applied = true;
    Ok(())
}
