//! Source-tree pass: rewrite bare icon filenames in implementation and header files.

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::substitute::rewrite_text;
use crate::defaults::Layout;
use crate::error::{Error, Result};
use crate::mapping::IconRename;
use crate::utils::io;

/// An edit to apply to a source file's content.
#[derive(Debug, Clone, Serialize)]
pub struct FileEdit {
    /// File path relative to root.
    pub file: String,
    /// Number of lines rewritten in this file.
    pub replacements: usize,
    /// New content after all replacements.
    #[serde(skip)]
    pub new_content: String,
}

/// The full result of the source-tree pass.
#[derive(Debug, Clone, Serialize)]
pub struct SourceRewrite {
    /// Source files found.
    pub scanned: usize,
    /// Files whose content changed. Unchanged files never appear here.
    pub edits: Vec<FileEdit>,
    /// Total lines rewritten across all files.
    pub total_replacements: usize,
    /// Whether edits were written to disk.
    pub applied: bool,
}

/// Find source files under the layout's source directory.
///
/// Each extension is globbed recursively in turn, so every `.cpp` file is
/// listed before any `.h` file. Dot-prefixed files and directories below the
/// source directory are not matched.
pub fn find_source_files(layout: &Layout, root: &Path) -> Result<Vec<PathBuf>> {
    let base = root.join(&layout.source_dir);
    let base = glob::Pattern::escape(&base.to_string_lossy());
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };
    let mut files = Vec::new();

    for ext in &layout.source_extensions {
        let pattern = format!("{}/**/*.{}", base, ext);
        let paths = glob::glob_with(&pattern, options).map_err(|e| {
            Error::validation_invalid_argument(
                "source_extensions",
                format!("Invalid source pattern '{}': {}", pattern, e),
                Some(ext.clone()),
            )
        })?;

        for entry in paths {
            let path = entry.map_err(|e| {
                Error::internal_io(
                    e.error().to_string(),
                    Some(format!("scan {}", e.path().display())),
                )
            })?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// Compute edits for every source file whose content would change.
pub fn generate_source_rewrites(
    layout: &Layout,
    root: &Path,
    table: &[IconRename],
) -> Result<SourceRewrite> {
    let files = find_source_files(layout, root)?;
    log_status!("sources", "Found {} source file(s)", files.len());

    let mut edits = Vec::new();
    let mut total_replacements = 0;

    for file_path in &files {
        let relative = file_path
            .strip_prefix(root)
            .unwrap_or(file_path)
            .to_string_lossy()
            .to_string();

        let content = io::read_file(file_path, &format!("read {}", relative))?;
        let rewrite = rewrite_text(&content, table);

        if rewrite.content == content {
            continue;
        }

        total_replacements += rewrite.replacements.len();
        edits.push(FileEdit {
            file: relative,
            replacements: rewrite.replacements.len(),
            new_content: rewrite.content,
        });
    }

    Ok(SourceRewrite {
        scanned: files.len(),
        edits,
        total_replacements,
        applied: false,
    })
}

/// Write every planned edit to disk.
pub fn apply_source_rewrites(result: &mut SourceRewrite, root: &Path) -> Result<()> {
    for edit in &result.edits {
        let path = root.join(&edit.file);
        io::write_file(&path, &edit.new_content, &format!("write {}", edit.file))?;
        log_status!("sources", "Rewrote {} line(s) in {}", edit.replacements, edit.file);
    }

    result.applied = true;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{table, MatchTarget};
    use std::fs;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn finds_cpp_before_headers_recursively() {
        let dir = tempdir().unwrap();
        write(dir.path(), "src/editors/widget.h", "");
        write(dir.path(), "src/editors/widget.cpp", "");
        write(dir.path(), "src/main.cpp", "");
        write(dir.path(), "src/notes.txt", "");
        write(dir.path(), "other/outside.cpp", "");

        let files = find_source_files(&Layout::default(), dir.path()).unwrap();
        let files = relative(dir.path(), &files);

        assert_eq!(files.len(), 3);
        assert!(files[..2].iter().all(|f| f.ends_with(".cpp")));
        assert_eq!(files[2], "src/editors/widget.h");
        assert!(files.contains(&"src/main.cpp".to_string()));
    }

    #[test]
    fn hidden_entries_are_skipped() {
        let dir = tempdir().unwrap();
        write(dir.path(), "src/.cache/gen.cpp", "QIcon(\":/icons/add.png\");\n");
        write(dir.path(), "src/.hidden.h", "QIcon(\":/icons/add.png\");\n");
        write(dir.path(), "src/a.cpp", "QIcon(\":/icons/add.png\");\n");

        let files = find_source_files(&Layout::default(), dir.path()).unwrap();
        assert_eq!(relative(dir.path(), &files), vec!["src/a.cpp"]);
    }

    #[test]
    fn missing_source_dir_finds_nothing() {
        let dir = tempdir().unwrap();
        let files = find_source_files(&Layout::default(), dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn generate_only_lists_changed_files() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "src/mainwindow.cpp",
            "act->setIcon(QIcon(\":/icons/exchange.png\"));\n",
        );
        write(
            dir.path(),
            "src/identity.cpp",
            "act->setIcon(QIcon(\":/icons/help.png\"));\n",
        );
        write(dir.path(), "src/plain.h", "#pragma once\n");

        let result =
            generate_source_rewrites(&Layout::default(), dir.path(), &table(MatchTarget::FileName))
                .unwrap();

        assert_eq!(result.scanned, 3);
        assert_eq!(result.edits.len(), 1);
        assert_eq!(result.edits[0].file.replace('\\', "/"), "src/mainwindow.cpp");
        assert_eq!(
            result.edits[0].new_content,
            "act->setIcon(QIcon(\":/icons/switch.svg\"));\n"
        );
        assert_eq!(result.total_replacements, 1);
        assert!(!result.applied);

        // nothing written yet
        let on_disk = fs::read_to_string(dir.path().join("src/mainwindow.cpp")).unwrap();
        assert!(on_disk.contains("exchange.png"));
    }

    #[test]
    fn apply_writes_edits() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "src/model/navi.h",
            "// icon\nstatic const char* ICON = \":/icons/database.png\";\n",
        );

        let mut result =
            generate_source_rewrites(&Layout::default(), dir.path(), &table(MatchTarget::FileName))
                .unwrap();
        apply_source_rewrites(&mut result, dir.path()).unwrap();

        assert!(result.applied);
        let content = fs::read_to_string(dir.path().join("src/model/navi.h")).unwrap();
        assert_eq!(
            content,
            "// icon\nstatic const char* ICON = \":/icons/application-sql.svg\";\n"
        );
    }

    #[test]
    fn second_pass_finds_nothing() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "src/a.cpp",
            "QIcon(\":/icons/clock.png\");\nQIcon(\":/icons/ruler_pen.png\");\n",
        );
        let names = table(MatchTarget::FileName);

        let mut first = generate_source_rewrites(&Layout::default(), dir.path(), &names).unwrap();
        apply_source_rewrites(&mut first, dir.path()).unwrap();
        assert_eq!(first.total_replacements, 2);

        let second = generate_source_rewrites(&Layout::default(), dir.path(), &names).unwrap();
        assert!(second.edits.is_empty());
    }

    #[test]
    fn unreadable_file_is_io_error() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/binary.h"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err =
            generate_source_rewrites(&Layout::default(), dir.path(), &table(MatchTarget::FileName))
                .unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }
}
