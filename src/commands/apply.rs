use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use icon_rename::defaults::Layout;
use icon_rename::refactor::{self, RenameOptions, RenameReport};

use super::CmdResult;

#[derive(Args, Default, Debug)]
pub struct ApplyArgs {
    /// Project root containing rsc/ and src/ (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Report planned edits without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Skip rebuilding the resource-collection file
    #[arg(long)]
    pub skip_resource: bool,

    /// Skip rewriting .cpp/.h files
    #[arg(long)]
    pub skip_sources: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum ApplyOutput {
    #[serde(rename = "apply")]
    Apply {
        report: RenameReport,
        total_files: usize,
    },
}

pub fn run(args: ApplyArgs) -> CmdResult<ApplyOutput> {
    let root = args.root.unwrap_or_else(|| PathBuf::from("."));
    let options = RenameOptions {
        dry_run: args.dry_run,
        resource: !args.skip_resource,
        sources: !args.skip_sources,
    };

    let report = refactor::rename_icons(&root, &Layout::default(), &options)?;

    let resource_files = usize::from(report.resource.is_some());
    let source_files = report.sources.as_ref().map_or(0, |s| s.edits.len());

    Ok((
        ApplyOutput::Apply {
            report,
            total_files: resource_files + source_files,
        },
        0,
    ))
}
