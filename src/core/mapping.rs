//! The embedded icon rename table.
//!
//! Entries are kept in the order they are matched: when more than one old name
//! occurs in a line, the entry listed first wins. Unchanged assets map to
//! themselves so that a match on them still claims the line.

use serde::Serialize;

/// One old → new icon asset rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconRename {
    pub from: &'static str,
    pub to: &'static str,
}

/// Which part of an asset path a table is matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTarget {
    /// Full relative path, e.g. `icons/add.png` (resource-collection file).
    Path,
    /// Filename component only, e.g. `add.png` (source files).
    FileName,
}

impl IconRename {
    const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }

    /// Project this rename onto the part of the path selected by `target`.
    pub fn project(&self, target: MatchTarget) -> IconRename {
        match target {
            MatchTarget::Path => *self,
            MatchTarget::FileName => IconRename {
                from: file_name(self.from),
                to: file_name(self.to),
            },
        }
    }
}

fn file_name(path: &'static str) -> &'static str {
    path.rsplit('/').next().unwrap_or(path)
}

pub const ICON_RENAMES: &[IconRename] = &[
    IconRename::new("icons/add.png", "icons/add-diagram.svg"),
    IconRename::new("icons/adjust.png", "icons/adjust.png"),
    IconRename::new("icons/adjust-2.png", "icons/tune.svg"),
    IconRename::new("icons/arrow.png", "icons/arrow.png"),
    IconRename::new("icons/clock.png", "icons/history.svg"),
    IconRename::new("icons/copy.png", "icons/copy.svg"),
    IconRename::new("icons/compare.png", "icons/diff.svg"),
    IconRename::new("icons/data.png", "icons/data.png"),
    IconRename::new("icons/electronic-clock.png", "icons/electronic-clock.png"),
    IconRename::new("icons/edit.png", "icons/edit.svg"),
    IconRename::new("icons/list.png", "icons/table.svg"),
    IconRename::new("icons/info.png", "icons/info.svg"),
    IconRename::new("icons/timetable.png", "icons/timetable.png"),
    IconRename::new("icons/search.png", "icons/search.svg"),
    IconRename::new("icons/ruler.png", "icons/ruler.svg"),
    IconRename::new("icons/polyline.png", "icons/polyline.png"),
    IconRename::new("icons/text.png", "icons/text.png"),
    IconRename::new("icons/identify.png", "icons/identify.png"),
    IconRename::new("icons/exchange.png", "icons/switch.svg"),
    IconRename::new("icons/rail.png", "icons/add-track.svg"),
    IconRename::new("icons/database.png", "icons/application-sql.svg"),
    IconRename::new("icons/excel.png", "icons/excel.png"),
    IconRename::new("icons/joint.png", "icons/joint.png"),
    IconRename::new("icons/forbid.png", "icons/forbid.png"),
    IconRename::new("icons/exchange1.png", "icons/exchange1.png"),
    IconRename::new("icons/new-file.png", "icons/new-file.png"),
    IconRename::new("icons/save1.png", "icons/save1.png"),
    IconRename::new("icons/saveas.png", "icons/saveas.png"),
    IconRename::new("icons/open.png", "icons/open.png"),
    IconRename::new("icons/ETRC-dynamic.png", "icons/ETRC-dynamic.png"),
    IconRename::new("icons/pdf.png", "icons/application-pdf.svg"),
    IconRename::new("icons/png.png", "icons/png.png"),
    IconRename::new("icons/refresh.png", "icons/refresh.png"),
    IconRename::new("icons/brush.png", "icons/brush.png"),
    IconRename::new("icons/close.png", "icons/close.png"),
    IconRename::new("icons/icon.ico", "icons/icon.ico"),
    IconRename::new("icons/help.png", "icons/help.png"),
    IconRename::new("icons/menu.png", "icons/menu.png"),
    IconRename::new("icons/h_expand.png", "icons/h_expand.png"),
    IconRename::new("icons/h_shrink.png", "icons/h_shrink.png"),
    IconRename::new("icons/v_expand.png", "icons/v_expand.png"),
    IconRename::new("icons/v_shrink.png", "icons/v_shrink.png"),
    IconRename::new("icons/add_train.png", "icons/add_train.png"),
    IconRename::new("icons/filter.png", "icons/filter.png"),
    IconRename::new("icons/config.png", "icons/config.png"),
    IconRename::new("icons/settings.png", "icons/settings.png"),
    IconRename::new("icons/zoom-in.png", "icons/zoom-in.png"),
    IconRename::new("icons/zoom-out.png", "icons/zoom-out.png"),
    IconRename::new("icons/counter.png", "icons/counter.png"),
    IconRename::new("icons/train.png", "icons/train.svg"),
    IconRename::new("icons/ruler_pen.png", "icons/toll.svg"),
    IconRename::new("icons/Graph-add.png", "icons/Graph-add.png"),
    IconRename::new("icons/diagram.png", "icons/diagram.png"),
    IconRename::new("icons/redo.png", "icons/redo.png"),
    IconRename::new("icons/undo.png", "icons/undo.png"),
    IconRename::new("icons/tick.png", "icons/tick.png"),
    IconRename::new("icons/trainline.png", "icons/trainline.png"),
    IconRename::new("icons/line-manage.png", "icons/line-manage.png"),
    IconRename::new("icons/weaken.png", "icons/weaken.png"),
    IconRename::new("icons/routing-diagram.png", "icons/routing-diagram.png"),
    IconRename::new("icons/mobile-icon.png", "icons/mobile-icon.png"),
    IconRename::new("icons/customize.svg", "icons/customize.svg"),
    IconRename::new("icons/icon-transparent.png", "icons/icon-transparent.png"),
];

/// The rename table projected onto `target`, in match order.
pub fn table(target: MatchTarget) -> Vec<IconRename> {
    ICON_RENAMES.iter().map(|r| r.project(target)).collect()
}

/// Entries whose old and new names differ.
pub fn changed() -> impl Iterator<Item = &'static IconRename> {
    ICON_RENAMES.iter().filter(|r| !r.is_identity())
}
