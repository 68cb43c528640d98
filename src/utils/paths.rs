use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

pub const HISTORY_FILE: &str = "history.jsonl";
pub const PROJECTS_DIR: &str = "projects";
pub const FILE_HISTORY_DIR: &str = "file-history";
pub const SESSION_EXTENSION: &str = ".jsonl";
/// Session files with this prefix belong to sub-agents and are not listed
pub const AGENT_SESSION_PREFIX: &str = "agent-";

/// Well-known locations inside a Claude configuration directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudePaths {
    root: PathBuf,
}

impl ClaudePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn history_file(&self) -> PathBuf {
        self.root.join(HISTORY_FILE)
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.root.join(PROJECTS_DIR)
    }

    pub fn file_history_dir(&self) -> PathBuf {
        self.root.join(FILE_HISTORY_DIR)
    }

    pub fn session_file(&self, project_dir: &str, session_id: &str) -> PathBuf {
        self.projects_dir().join(project_dir).join(format!("{}{}", session_id, SESSION_EXTENSION))
    }
}

/// Decodes a project directory name back into a project path
///
/// Claude stores the project path with every separator replaced by a dash, so the
/// name starts with a dash for absolute paths. The decoding is lossy: dashes that were
/// part of the original path also become slashes.
///
/// # Examples
///
/// ```
/// use ai_session_browser::decode_project_dir;
///
/// assert_eq!(decode_project_dir("-Users-alice-code-app"), "Users/alice/code/app");
/// ```
pub fn decode_project_dir(dir_name: &str) -> String {
    let slashed = dir_name.replace('-', "/");
    let mut chars = slashed.chars();
    chars.next();
    chars.as_str().to_string()
}

/// True if `segment` can be used as a single path component without escaping its parent
///
/// Rejects empty strings, forward slashes, backslashes and any `..` sequence.
pub fn is_safe_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.contains('/')
        && !segment.contains('\\')
        && !segment.contains("..")
}

/// Resolves `target` and checks that it lies strictly inside `base`
///
/// Both paths are canonicalized, so symlinks pointing outside `base` are caught.
/// Returns the canonical target path.
///
/// # Errors
///
/// Returns an error if either path cannot be resolved (including when it does not
/// exist), or if the resolved target is `base` itself or outside it.
pub fn ensure_strictly_within(base: &Path, target: &Path) -> Result<PathBuf> {
    let base = base
        .canonicalize()
        .with_context(|| format!("Failed to resolve directory: {}", base.display()))?;
    let resolved = target
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", target.display()))?;

    if resolved == base || !resolved.starts_with(&base) {
        bail!("Path escapes {}", base.display());
    }

    Ok(resolved)
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use ai_session_browser::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/.claude");
/// // Returns "~/.claude" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = if home_override.is_none() { env::var("HOME").ok() } else { None };
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
