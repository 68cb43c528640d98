use anyhow::Result;

fn main() -> Result<()> {
    ai_session_browser::cli::run()
}
