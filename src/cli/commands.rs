use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use crate::detail::get_session_details;
use crate::file_history::get_file_history_file;
use crate::indexer::{collect_stats, list_sessions};
use crate::models::{Message, Response, SessionRecord};
use crate::parsers::deserializers::timestamp_millis;
use crate::parsers::truncate_chars;
use crate::utils::{CONFIG_DIR_ENV, format_path_with_tilde, init_logging, resolve_claude_dir};

const PREVIEW_CHARS: usize = 80;

#[derive(Parser)]
#[command(name = "ai-session-browser")]
#[command(version = "0.1.0")]
#[command(about = "Browse Claude Code session transcripts", long_about = None)]
pub struct Cli {
    /// Claude configuration directory (defaults to ~/.claude)
    #[arg(long, global = true, env = CONFIG_DIR_ENV, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List sessions, newest first
    Sessions {
        /// Print the raw JSON response
        #[arg(long)]
        json: bool,

        /// Show at most this many sessions
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show the messages of one session
    Show {
        /// Session id (transcript file name without .jsonl)
        session_id: String,

        /// Project directory name under projects/
        #[arg(long, allow_hyphen_values = true)]
        project_dir: String,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },
    /// Print a file-history backup
    FileHistory {
        session_id: String,

        /// Backup file name under file-history/<session_id>/
        backup_file: String,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },
    /// Show statistics about the session data
    Stats,
}

pub fn run() -> Result<()> {
    init_logging("warn");
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let claude_dir = resolve_claude_dir(cli.config_dir)?;

    match command {
        Commands::Sessions { json, limit } => {
            let mut response = list_sessions(&claude_dir);
            if let (Some(limit), Response::Success(list)) = (limit, &mut response) {
                list.sessions.truncate(limit);
            }
            if json {
                return print_json(&response);
            }
            print_sessions(&unwrap_response(response)?.sessions);
        }
        Commands::Show { session_id, project_dir, json } => {
            let response = get_session_details(&claude_dir, &session_id, &project_dir);
            if json {
                return print_json(&response);
            }
            print_messages(&unwrap_response(response)?.messages);
        }
        Commands::FileHistory { session_id, backup_file, json } => {
            let response = get_file_history_file(&claude_dir, &session_id, &backup_file);
            if json {
                return print_json(&response);
            }
            let backup = unwrap_response(response)?;
            print!("{}", backup.content);
            if let Some(original_bytes) = backup.original_bytes {
                eprintln!("(truncated, original size {} bytes)", original_bytes);
            }
        }
        Commands::Stats => show_stats(&claude_dir)?,
    }

    Ok(())
}

fn unwrap_response<T>(response: Response<T>) -> Result<T> {
    match response.into_result() {
        Ok(value) => Ok(value),
        Err(error) => bail!(error),
    }
}

fn print_json<T: Serialize>(response: &Response<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

fn format_millis(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_timestamp(value: &Value) -> String {
    timestamp_millis(value).map(format_millis).unwrap_or_else(|| "-".to_string())
}

fn preview(text: &str) -> String {
    let first_line = text.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
    truncate_chars(first_line.trim(), PREVIEW_CHARS)
}

fn print_sessions(sessions: &[SessionRecord]) {
    if sessions.is_empty() {
        println!("No sessions found");
        return;
    }

    for session in sessions {
        println!(
            "{}  {}  ({} messages)",
            format_millis(session.timestamp),
            session.project,
            session.message_count
        );
        println!("  id: {}  dir: {}", session.id, session.project_dir);
        println!("  {}", preview(&session.display));
    }
}

fn print_messages(messages: &[Message]) {
    for message in messages {
        println!("[{}] {}", message.role.as_str(), format_timestamp(&message.timestamp));

        if !message.content.is_empty() {
            println!("{}", message.content);
        }
        for tool_use in message.tool_uses.iter().flatten() {
            let name = tool_use.get("name").and_then(Value::as_str).unwrap_or("unknown");
            println!("  -> tool: {}", name);
        }
        for snapshot in &message.file_history_snapshots {
            let files: Vec<&str> =
                snapshot.tracked_file_backups.keys().map(String::as_str).collect();
            println!("  snapshot ({} files): {}", files.len(), files.join(", "));
        }
        println!();
    }
}

fn show_stats(claude_dir: &Path) -> Result<()> {
    let stats = collect_stats(claude_dir)?;

    println!("Claude Code Session Statistics");
    println!("==============================");
    println!("History entries: {}", stats.history_entries);
    println!("Projects: {}", stats.projects);
    println!("Sessions: {}", stats.sessions);
    println!("  Messages: {}", stats.messages);
    println!();
    println!("Claude directory: {}", format_path_with_tilde(claude_dir));

    if let Some(oldest) = stats.oldest_session {
        println!("Oldest session: {}", format_millis(oldest));
    }
    if let Some(newest) = stats.newest_session {
        println!("Newest session: {}", format_millis(newest));
    }

    Ok(())
}
