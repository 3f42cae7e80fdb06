use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.4.2" for releases, "0.4.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(version = get_version())]
#[command(about = "Command-line user-records manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new user
    #[command(alias = "a")]
    Add {
        name: String,
        email: String,
        phone: String,
        city: String,
    },

    /// List users
    #[command(alias = "ls")]
    List {
        /// Filter the listing by a search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a single user
    Show {
        /// Id of the user
        id: u64,
    },

    /// Edit fields of a user (unspecified fields are kept)
    #[command(alias = "e")]
    Edit {
        /// Id of the user
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        city: Option<String>,
    },

    /// Delete a user
    #[command(alias = "rm")]
    Delete {
        /// Id of the user
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Search users by name, email, city or phone
    Search { term: String },

    /// Import users from a JSON file (replaces the current list)
    Import {
        /// Path to a JSON array of users
        path: PathBuf,
    },

    /// Export users to a JSON file
    Export {
        /// Target path (defaults to the configured export file)
        path: Option<PathBuf>,
    },

    /// Delete all users
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (export-file, seed-sample-data)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
