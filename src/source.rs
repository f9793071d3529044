//! Where versions come from: git tags, a package manifest, and a plain version file.
//!
//! Every source here is best-effort. Failures are logged and reported as "no data", never as an
//! error, so callers cannot tell an unreachable source from an empty one.

use crate::error::SourceError;
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
    process::Command,
};
use tracing::debug;

/// Supplies the raw tag strings that existing versions are read from.
pub trait TagSource {
    /// Returns every tag, valid or not. Returns an empty list if the tags cannot be fetched.
    fn tags(&self) -> Vec<String>;
}

/// Supplies the version recorded in a package's metadata.
pub trait MetadataSource {
    /// Returns the recorded version, or `None` if there is none or it cannot be read.
    fn package_version(&self) -> Option<String>;
}

/// Tags of a git repository, read with the `git` executable.
#[derive(Debug, Clone)]
pub struct GitTags {
    repo: PathBuf,
    fetch: bool,
}

impl GitTags {
    /// Tags of the repository at `repo`. Remote tags are fetched first unless
    /// [Self::without_fetch] is used.
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.into(),
            fetch: true,
        }
    }

    /// Only read tags already present locally.
    pub fn without_fetch(self) -> Self {
        Self {
            fetch: false,
            ..self
        }
    }

    fn run_git(&self, args: &[&str]) -> Result<String, SourceError> {
        let to_owned_args =
            || -> Vec<String> { args.iter().map(|arg| (*arg).to_owned()).collect() };

        let out = Command::new("git")
            .args(args)
            .current_dir(&self.repo)
            // a fetch must never block on a credential prompt
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| SourceError::Spawn {
                args: to_owned_args(),
                source,
            })?;

        if out.status.success() {
            Ok(String::from_utf8_lossy(&out.stdout).into_owned())
        } else {
            Err(SourceError::GitFailed {
                args: to_owned_args(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_owned(),
            })
        }
    }

    fn try_tags(&self) -> Result<Vec<String>, SourceError> {
        if self.fetch {
            // the repo may simply have no remote
            if let Err(e) = self.run_git(&["fetch", "--tags"]) {
                debug!("skipping remote tags: {e}");
            }
        }

        let out = self.run_git(&["tag"])?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect())
    }
}

impl TagSource for GitTags {
    fn tags(&self) -> Vec<String> {
        match self.try_tags() {
            Ok(tags) => {
                debug!(repo = %self.repo.display(), count = tags.len(), "read git tags");
                tags
            }
            Err(e) => {
                debug!("no git tags available: {e}");
                Vec::new()
            }
        }
    }
}

#[derive(Deserialize)]
struct Manifest {
    package: Option<ManifestPackage>,
}

#[derive(Deserialize)]
struct ManifestPackage {
    // `{ workspace = true }` is a table, which we treat as "not recorded here"
    version: Option<toml::Value>,
}

/// The `[package] version` of a `Cargo.toml`.
#[derive(Debug, Clone)]
pub struct CargoManifest {
    path: PathBuf,
}

impl CargoManifest {
    /// The manifest at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn try_package_version(&self) -> Result<Option<String>, SourceError> {
        let Some(text) = read_optional(&self.path)? else {
            return Ok(None);
        };
        let manifest: Manifest =
            toml::from_str(&text).map_err(|source| SourceError::Manifest {
                path: self.path.clone(),
                source,
            })?;

        Ok(manifest
            .package
            .and_then(|package| package.version)
            .and_then(|version| version.as_str().map(str::to_owned)))
    }
}

impl MetadataSource for CargoManifest {
    fn package_version(&self) -> Option<String> {
        self.try_package_version().unwrap_or_else(|e| {
            debug!("no package version available: {e}");
            None
        })
    }
}

/// A file whose whole (trimmed) contents are a version string, e.g. `VERSION`.
#[derive(Debug, Clone)]
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    /// The file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the trimmed contents, or `None` if the file is missing, unreadable, or blank.
    pub fn version(&self) -> Option<String> {
        match read_optional(&self.path) {
            Ok(text) => text
                .map(|text| text.trim().to_owned())
                .filter(|text| !text.is_empty()),
            Err(e) => {
                debug!("ignoring version file: {e}");
                None
            }
        }
    }
}

/// Reads a file, treating a missing file as `None` rather than an error.
fn read_optional(path: &Path) -> Result<Option<String>, SourceError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "not found");
            Ok(None)
        }
        Err(source) => Err(SourceError::Read {
            path: path.to_owned(),
            source,
        }),
    }
}
