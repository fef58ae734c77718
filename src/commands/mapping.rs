use clap::Args;
use serde::Serialize;

use icon_rename::mapping::{self, IconRename, ICON_RENAMES};

use super::CmdResult;

#[derive(Args, Debug)]
pub struct MappingArgs {
    /// Only list icons whose name changes
    #[arg(long)]
    pub changed: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum MappingOutput {
    #[serde(rename = "mapping")]
    List {
        total: usize,
        changed: usize,
        entries: Vec<MappingEntry>,
    },
}

#[derive(Serialize)]
pub struct MappingEntry {
    pub from: &'static str,
    pub to: &'static str,
    pub changed: bool,
}

impl From<&IconRename> for MappingEntry {
    fn from(rename: &IconRename) -> Self {
        Self {
            from: rename.from,
            to: rename.to,
            changed: !rename.is_identity(),
        }
    }
}

pub fn run(args: MappingArgs) -> CmdResult<MappingOutput> {
    let entries: Vec<MappingEntry> = if args.changed {
        mapping::changed().map(MappingEntry::from).collect()
    } else {
        ICON_RENAMES.iter().map(MappingEntry::from).collect()
    };

    Ok((
        MappingOutput::List {
            total: ICON_RENAMES.len(),
            changed: mapping::changed().count(),
            entries,
        },
        0,
    ))
}
