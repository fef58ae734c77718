use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{apply, mapping};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "icon-rename")]
#[command(version = VERSION)]
#[command(about = "Rename icon assets in rsc/resource.qrc and src/**/*.{cpp,h}")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the resource file from backup and rewrite source files (default)
    Apply(apply::ApplyArgs),
    /// Show the embedded rename table
    Mapping(mapping::MappingArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Apply(apply::ApplyArgs::default()));

    let (json_result, exit_code) = commands::run_json(command);

    if output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
