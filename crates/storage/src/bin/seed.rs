use clap::Parser;
use storage::repository::Storage;
use storage::seed::{default_quizzes, seed_if_empty};

/// Seed a quiz database with the starter questions.
#[derive(Debug, Parser)]
#[command(name = "seed", about = "Seed an empty quiz database")]
struct Args {
    /// SQLite URL of the database to seed
    #[arg(long, env = "QUIZ_DB_URL", default_value = "sqlite://quizzes.sqlite3?mode=rwc")]
    db: String,
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let storage = Storage::sqlite(&args.db).await?;
    let inserted = seed_if_empty(storage.quizzes.as_ref(), default_quizzes()).await?;

    if inserted == 0 {
        println!("{} already has quizzes; nothing seeded", args.db);
    } else {
        println!("Seeded {inserted} quizzes into {}", args.db);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
