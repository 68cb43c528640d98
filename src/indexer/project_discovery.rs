use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::utils::paths::{AGENT_SESSION_PREFIX, SESSION_EXTENSION};

/// One directory under `projects/` and the session transcripts it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    /// Directory name as stored on disk
    pub name: String,
    /// Session files, sorted by file name
    pub session_files: Vec<PathBuf>,
}

/// Discover all project directories and their session files
///
/// Returns an empty Vec if the projects directory doesn't exist (not an error).
/// Symlinked project directories are followed. Agent session files (`agent-*.jsonl`)
/// are excluded.
///
/// # Errors
///
/// Returns an error if the projects directory or one of its project directories
/// exists but cannot be read.
pub fn discover_projects(projects_dir: &Path) -> Result<Vec<ProjectDir>> {
    if !projects_dir.exists() {
        return Ok(Vec::new());
    }

    let mut projects = Vec::new();

    for entry in WalkDir::new(projects_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!("Failed to read projects directory: {}", projects_dir.display())
        })?;
        let path = entry.path();

        // Follows symlinks, unlike entry.file_type()
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let session_files = find_session_files(path)?;
        projects.push(ProjectDir { name, session_files });
    }

    Ok(projects)
}

fn find_session_files(project_path: &Path) -> Result<Vec<PathBuf>> {
    let mut session_files = Vec::new();

    for entry in WalkDir::new(project_path).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!("Failed to read project directory: {}", project_path.display())
        })?;

        let file_name = entry.file_name().to_string_lossy();
        if file_name.ends_with(SESSION_EXTENSION) && !file_name.starts_with(AGENT_SESSION_PREFIX) {
            session_files.push(entry.into_path());
        }
    }

    Ok(session_files)
}
