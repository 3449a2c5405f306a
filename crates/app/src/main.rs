use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use services::{ConsoleError, Flow, Trainer};
use storage::repository::Storage;
use storage::seed::{default_quizzes, seed_if_empty};
use tracing_subscriber::EnvFilter;

mod terminal;

use terminal::TerminalConsole;

const PROMPT: &str = "quiz > ";

/// Interactive question/answer trainer.
#[derive(Debug, Parser)]
#[command(name = "quiz", version, about = "Interactive quiz trainer")]
struct Args {
    /// SQLite database URL or path ("sqlite::memory:" for a throwaway store)
    #[arg(long, env = "QUIZ_DB_URL", default_value = "sqlite://quizzes.sqlite3")]
    db: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "QUIZ_LOG", default_value = "warn")]
    log_level: String,

    /// Do not insert the starter quizzes into an empty database
    #[arg(long)]
    no_seed: bool,

    /// Disable colored output (also honoured through NO_COLOR)
    #[arg(long)]
    no_color: bool,

    /// Fix the order in which `play` draws questions
    #[arg(long)]
    shuffle_seed: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
enum ArgsError {
    #[error("invalid --db value: {raw}")]
    InvalidDbUrl { raw: String },
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    // A private in-memory database per pooled connection would look empty to
    // every other connection, so share one cache.
    if trimmed == "sqlite::memory:" {
        return "sqlite:file:quiz?mode=memory&cache=shared".into();
    }
    if trimmed.starts_with("sqlite:file:") {
        return trimmed.to_string();
    }
    if let Some(rest) = trimmed.strip_prefix("sqlite://") {
        let (path, query) = match rest.find('?') {
            Some(at) => rest.split_at(at),
            None => (rest, ""),
        };
        if path.is_empty() {
            return trimmed.to_string();
        }
        return format!("sqlite://{}{query}", absolute(path).display());
    }

    let path = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    format!("sqlite://{}", absolute(path).display())
}

fn absolute(path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = db_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let db_url = normalize_sqlite_url(&args.db);
    prepare_sqlite_file(&db_url)?;
    let storage = Storage::sqlite(&db_url).await?;
    tracing::info!(db = %db_url, "quiz store opened");

    if !args.no_seed {
        seed_if_empty(storage.quizzes.as_ref(), default_quizzes()).await?;
    }

    let color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
    let console = Arc::new(TerminalConsole::new(color)?);
    let mut trainer = Trainer::new(Arc::clone(&storage.quizzes), console.clone());
    if let Some(seed) = args.shuffle_seed {
        trainer = trainer.with_seed(seed);
    }

    loop {
        let line = match console.next_command(PROMPT).await {
            Ok(line) => line,
            Err(ConsoleError::Closed | ConsoleError::Interrupted) => break,
            Err(err) => return Err(err.into()),
        };
        if trainer.execute_line(&line).await == Flow::Quit {
            break;
        }
    }

    tracing::info!("session ended");
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
