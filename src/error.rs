use std::path::PathBuf;

/// Errors from building a [`CalVer`](crate::CalVer) through [`FromStr`](core::str::FromStr).
///
/// [`CalVer::parse`](crate::CalVer::parse) itself only reports absence. This type exists so that
/// callers who want a `Result` (e.g. argument parsing) get a message naming the input.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum VersionError {
    /// The string does not match `[v]YYYY.MM.DD.MICRO`, or one of its values is out of range.
    #[error("Invalid CalVer format: {version_string}")]
    Invalid {
        /// The string that failed to parse.
        version_string: String,
    },
}

/// Errors related to the date a version is computed for.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum DateError {
    /// Year, month, and day arguments do not name a real calendar date.
    #[error(
        "Explicit year ({year}), month ({month}), and day ({day}) arguments cannot be made into a \
         valid date"
    )]
    InvalidDateArguments {
        /// The year
        year: i32,
        /// The month
        month: u32,
        /// The day
        day: u32,
    },

    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("Unable to parse date `{date_string}`: {source}")]
    UnparseableDate {
        /// The string that failed to parse.
        date_string: String,
        /// The underlying chrono error.
        source: chrono::ParseError,
    },
}

/// Failures inside the tag, metadata, and version-file sources.
///
/// These never cross the source boundary: every public source method logs them and degrades to
/// "no data".
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    /// The `git` executable could not be started.
    #[error("Unable to run git {args:?}: {source}")]
    Spawn {
        /// Arguments passed to git.
        args: Vec<String>,
        /// The spawn error.
        source: std::io::Error,
    },

    /// git ran but exited unsuccessfully.
    #[error("git {args:?} failed: {stderr}")]
    GitFailed {
        /// Arguments passed to git.
        args: Vec<String>,
        /// Captured standard error.
        stderr: String,
    },

    /// A file could not be read.
    #[error("Unable to read `{}`: {source}", path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The io error.
        source: std::io::Error,
    },

    /// A manifest could not be deserialized.
    #[error("Unable to parse manifest `{}`: {source}", path.display())]
    Manifest {
        /// The manifest path.
        path: PathBuf,
        /// The toml error.
        source: toml::de::Error,
    },
}

/// Unexpected failures while running a command.
#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    /// A report could not be serialized.
    #[error("Unable to render output: {0}")]
    Render(#[from] serde_json::Error),
}
