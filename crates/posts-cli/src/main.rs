//! Posts database admin CLI.
//!
//! Provides the `postsctl` binary for preparing the SQLite database the HTTP
//! server reads: apply migrations, load sample data, and dump posts.
//!
//! Exit codes: 0 = success, 3 = storage or I/O error.

use std::process;

use clap::{Parser, Subcommand};

use posts_storage::{NewComment, NewPost, PostFilter, PostStore, SqliteStore, StorageError};

/// Posts database tools.
#[derive(Parser)]
#[command(name = "postsctl", about = "Posts database tools")]
struct Cli {
    /// Path to the posts database file.
    #[arg(short, long, default_value = "posts.db")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Create the database if needed and apply pending migrations.
    Migrate,
    /// Insert sample posts with comments.
    Seed,
    /// Print all posts as JSON.
    List {
        /// Only posts with exactly this title.
        #[arg(long)]
        title: Option<String>,
    },
}

/// Sample posts and the comments attached to each.
const SEED: &[(&str, &str, &[&str])] = &[
    (
        "Hello, world",
        "The first post on a fresh database.",
        &["Welcome!", "Glad to be here."],
    ),
    (
        "Release notes",
        "Comments now carry the title of the post they belong to.",
        &["Nice touch."],
    ),
    ("Drafts", "A post nobody has commented on yet.", &[]),
];

fn main() {
    let cli = Cli::parse();
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            3
        }
    };
    process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<(), StorageError> {
    // Opening the store applies migrations.
    let mut store = SqliteStore::new(&cli.db)?;

    match &cli.command {
        Commands::Migrate => {
            println!("{} is up to date", cli.db);
        }
        Commands::Seed => {
            let (posts, comments) = seed(&mut store)?;
            println!("inserted {} posts and {} comments into {}", posts, comments, cli.db);
        }
        Commands::List { title } => {
            let filter = PostFilter {
                title: title.clone(),
                contents: None,
            };
            let posts = store.find(&filter)?;
            let json = serde_json::to_string_pretty(&posts).unwrap_or_else(|e| {
                format!("{{\"error\": \"failed to serialize posts: {}\"}}", e)
            });
            println!("{}", json);
        }
    }
    Ok(())
}

/// Inserts [`SEED`]; returns (posts, comments) inserted.
fn seed(store: &mut dyn PostStore) -> Result<(usize, usize), StorageError> {
    let mut comment_count = 0;
    for (title, contents, comments) in SEED {
        let post = store.insert(&NewPost {
            title: title.to_string(),
            contents: contents.to_string(),
        })?;
        for text in comments.iter() {
            store.insert_comment(&NewComment {
                text: text.to_string(),
                post_id: post.id,
            })?;
            comment_count += 1;
        }
    }
    Ok((SEED.len(), comment_count))
}
