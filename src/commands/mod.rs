pub type CmdResult<T> = icon_rename::Result<(T, i32)>;

pub mod apply;
pub mod mapping;

macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args))
    };
}

pub(crate) fn run_json(command: crate::Commands) -> (icon_rename::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Apply(args) => dispatch!(args, apply),
        crate::Commands::Mapping(args) => dispatch!(args, mapping),
    }
}
