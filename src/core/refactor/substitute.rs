//! Line-wise, first-match-wins substitution.
//!
//! Text is handled as an opaque sequence of lines. Each line is checked against
//! the table in order; the first entry whose old name occurs in the line has
//! every occurrence of that name replaced, and no further entries are tried for
//! that line. `\n`, `\r\n` and a lone `\r` all end a line, and each
//! terminator is carried through untouched.

use serde::Serialize;

use crate::mapping::IconRename;

/// A line whose text changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReplacement {
    /// Line number (1-indexed).
    pub line: usize,
    /// Old name that matched.
    pub from: String,
    /// What it was replaced with.
    pub to: String,
}

/// Result of rewriting a block of text.
#[derive(Debug, Clone)]
pub struct TextRewrite {
    pub content: String,
    pub total_lines: usize,
    pub replacements: Vec<LineReplacement>,
}

impl TextRewrite {
    pub fn is_changed(&self) -> bool {
        !self.replacements.is_empty()
    }
}

/// Rewrite a single line (terminator included).
///
/// Returns the entry that claimed the line, if any. An identity entry still
/// claims the line, so later entries are never consulted for it.
pub fn rewrite_line<'a>(
    line: &str,
    table: &'a [IconRename],
) -> (String, Option<&'a IconRename>) {
    match table.iter().find(|rename| line.contains(rename.from)) {
        Some(rename) => (line.replace(rename.from, rename.to), Some(rename)),
        None => (line.to_string(), None),
    }
}

/// Split `content` into lines, each keeping its terminator.
fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..=i]);
                start = i + 1;
            }
            b'\r' => {
                let end = if bytes.get(i + 1) == Some(&b'\n') { i + 1 } else { i };
                lines.push(&content[start..=end]);
                i = end;
                start = end + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Rewrite every line of `content`.
pub fn rewrite_text(content: &str, table: &[IconRename]) -> TextRewrite {
    let mut out = String::with_capacity(content.len());
    let mut replacements = Vec::new();
    let mut total_lines = 0;

    for (idx, line) in split_lines(content).into_iter().enumerate() {
        total_lines += 1;
        let (new_line, claimed) = rewrite_line(line, table);
        if let Some(rename) = claimed {
            if new_line != line {
                replacements.push(LineReplacement {
                    line: idx + 1,
                    from: rename.from.to_string(),
                    to: rename.to.to_string(),
                });
            }
        }
        out.push_str(&new_line);
    }

    TextRewrite {
        content: out,
        total_lines,
        replacements,
    }
}
