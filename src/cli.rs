use calver_check::{CargoManifest, Date, GitTags, VersionFile};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "calver-check",
    author,
    version,
    about = "CalVer (YYYY.MM.DD.MICRO) version management CLI",
    long_about = None
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the git repository whose tags are read
    #[arg(long, default_value = ".", global = true)]
    pub repo: PathBuf,

    /// Cargo manifest holding the package version [default: <REPO>/Cargo.toml]
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    /// File holding a fallback version string [default: <REPO>/VERSION]
    #[arg(long, global = true)]
    pub version_file: Option<PathBuf>,

    /// Compute versions for this date instead of today (UTC)
    #[arg(long, value_name = "YYYY-MM-DD", global = true)]
    pub date: Option<Date>,

    /// Don't run `git fetch --tags` before reading tags
    #[arg(long, global = true)]
    pub no_fetch: bool,

    /// Log more to stderr. Repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Calculate next CalVer version
    Calc {
        /// Fail unless the calculated version is a valid CalVer
        #[arg(long)]
        validate: bool,

        /// Fail unless the calculated version is PEP 440 compliant
        #[arg(long)]
        pep440: bool,
    },

    /// Check current version from different sources
    Check,

    /// Validate version format and PEP 440 compliance
    Validate {
        /// Version string to validate
        version: Option<String>,
    },

    /// Compare two versions
    Compare {
        /// Two versions to compare
        versions: Vec<String>,
    },

    /// Show version information
    Info,
}

/// Everything a command needs, resolved from the command line.
pub struct Config {
    pub json: bool,
    pub date: Date,
    pub tags: GitTags,
    pub manifest: CargoManifest,
    pub version_file: VersionFile,
}

impl Cli {
    /// Resolves defaults. This is where "today" is read, once per run.
    pub fn config(&self) -> Config {
        let tags = GitTags::new(&self.repo);
        Config {
            json: self.json,
            date: self.date.unwrap_or_else(Date::utc_now),
            tags: if self.no_fetch {
                tags.without_fetch()
            } else {
                tags
            },
            manifest: CargoManifest::new(
                self.manifest
                    .clone()
                    .unwrap_or_else(|| self.repo.join("Cargo.toml")),
            ),
            version_file: VersionFile::new(
                self.version_file
                    .clone()
                    .unwrap_or_else(|| self.repo.join("VERSION")),
            ),
        }
    }
}
