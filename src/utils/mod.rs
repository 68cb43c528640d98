pub mod environment;
pub mod logging;
pub mod paths;

pub use environment::{CONFIG_DIR_ENV, get_claude_dir, resolve_claude_dir};
pub use logging::init_logging;
pub use paths::{
    ClaudePaths, decode_project_dir, ensure_strictly_within, format_path_with_tilde,
    is_safe_path_segment,
};
