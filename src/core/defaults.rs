use serde::Serialize;

/// Project-relative locations the rename passes read and write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Pristine copy of the resource-collection file.
    pub backup: String,
    /// Resource-collection file rebuilt from `backup` on every run.
    pub resource: String,
    /// Directory searched recursively for source files.
    pub source_dir: String,
    /// Source extensions, globbed in this order.
    pub source_extensions: Vec<String>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            backup: default_backup(),
            resource: default_resource(),
            source_dir: default_source_dir(),
            source_extensions: default_source_extensions(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_backup() -> String {
    "rsc/resource.bak".to_string()
}

fn default_resource() -> String {
    "rsc/resource.qrc".to_string()
}

fn default_source_dir() -> String {
    "src".to_string()
}

fn default_source_extensions() -> Vec<String> {
    vec!["cpp".to_string(), "h".to_string()]
}
