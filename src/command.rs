//! The commands of the `calver-check` binary, independent of argument parsing and of the process
//! they run in.
//!
//! Each command returns an [Outcome]: what to print where, and the exit code. Sources are passed
//! in as trait objects so commands can be run against fakes.

use crate::{
    calc::{latest, next_version},
    compliance::{Pep440, Standard},
    error::CommandError,
    report::{CalcReport, CheckReport, CompareReport, InfoReport, ValidateReport, Versions},
    source::{MetadataSource, TagSource, VersionFile},
    version::{CalVer, Date},
};
use serde::Serialize;
use std::fmt::Display;
use tracing::debug;

/// How a report is rendered on standard output.
enum Render {
    Text,
    Json,
    PrettyJson,
}

impl Render {
    fn new(json: bool, pretty: bool) -> Self {
        match (json, pretty) {
            (false, _) => Render::Text,
            (true, false) => Render::Json,
            (true, true) => Render::PrettyJson,
        }
    }

    fn render<R: Display + Serialize>(&self, report: &R) -> Result<String, CommandError> {
        Ok(match self {
            Render::Text => report.to_string(),
            Render::Json => serde_json::to_string(report)?,
            Render::PrettyJson => serde_json::to_string_pretty(report)?,
        })
    }
}

/// What a command printed, and how the process should exit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub exit_code: i32,
}

impl Outcome {
    fn success(stdout: String) -> Self {
        Self {
            stdout: Some(stdout),
            ..Self::default()
        }
    }

    fn failure(stderr: String) -> Self {
        Self {
            stderr: Some(stderr),
            exit_code: 1,
            ..Self::default()
        }
    }

    /// Output went to stdout, but the command still reports failure.
    fn failure_with_stdout(stdout: String) -> Self {
        Self {
            stdout: Some(stdout),
            exit_code: 1,
            ..Self::default()
        }
    }
}

/// Checks `calc` runs on the version it computed before printing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalcChecks {
    /// The version must parse back as a CalVer.
    pub validate: bool,
    /// The version must be PEP 440 compliant.
    pub pep440: bool,
}

impl CalcChecks {
    /// Returns the failure message of the first check `version` fails.
    fn failure(&self, version: &CalVer, standard: &dyn Standard) -> Option<String> {
        let version = version.to_string();
        if self.validate && !CalVer::is_valid(&version) {
            return Some(format!("Invalid version format: {version}"));
        }
        if self.pep440 && !standard.is_compliant(&version) {
            return Some(format!("Version not PEP 440 compliant: {version}"));
        }
        None
    }
}

/// Prints the next version for `date`.
pub fn calc(
    date: &Date,
    tags: &dyn TagSource,
    checks: CalcChecks,
    json: bool,
) -> Result<Outcome, CommandError> {
    let tags = tags.tags();
    debug!(count = tags.len(), %date, "computing next version");
    let report = CalcReport {
        version: next_version(date, &tags),
    };

    if let Some(message) = checks.failure(&report.version, &Pep440) {
        return Ok(Outcome::failure(message));
    }
    Ok(Outcome::success(Render::new(json, false).render(&report)?))
}

/// Prints the current version according to each source. Fails if no source has one.
pub fn check(
    metadata: &dyn MetadataSource,
    tags: &dyn TagSource,
    file: &VersionFile,
    json: bool,
) -> Result<Outcome, CommandError> {
    let git_tag = latest(tags.tags()).map(|(tag, _)| match tag.strip_prefix('v') {
        Some(stripped) => stripped.to_owned(),
        None => tag,
    });
    let report = CheckReport {
        versions: Versions {
            package: metadata.package_version(),
            git_tag,
            file: file.version(),
        },
    };

    let found = !report.versions.is_empty();
    if json {
        let rendered = Render::new(json, true).render(&report)?;
        return Ok(if found {
            Outcome::success(rendered)
        } else {
            Outcome::failure_with_stdout(rendered)
        });
    }

    Ok(if found {
        Outcome::success(report.to_string())
    } else {
        Outcome::failure("No version information found".to_owned())
    })
}

/// Checks that `version` is a valid CalVer, and compliant with PEP 440. An empty `version` counts
/// as missing.
pub fn validate(version: Option<&str>, json: bool) -> Result<Outcome, CommandError> {
    let Some(version) = version.filter(|version| !version.is_empty()) else {
        return Ok(Outcome::failure("Error: version argument required".to_owned()));
    };

    let valid_format = CalVer::is_valid(version);
    let report = ValidateReport {
        version: version.to_owned(),
        valid_format,
        pep440_compliant: valid_format && Pep440.is_compliant(version),
    };

    if json {
        let rendered = Render::new(json, false).render(&report)?;
        return Ok(if report.is_ok() {
            Outcome::success(rendered)
        } else {
            Outcome::failure_with_stdout(rendered)
        });
    }

    Ok(if report.is_ok() {
        Outcome::success(report.to_string())
    } else {
        Outcome::failure(report.to_string())
    })
}

/// Compares exactly two versions.
pub fn compare(versions: &[String], json: bool) -> Result<Outcome, CommandError> {
    let [version1, version2] = versions else {
        return Ok(Outcome::failure(
            "Error: exactly two versions required for comparison".to_owned(),
        ));
    };

    let parsed = [version1, version2].map(|version| CalVer::parse(version).ok_or(version));
    let (v1, v2) = match parsed {
        [Ok(v1), Ok(v2)] => (v1, v2),
        [Err(invalid), _] | [_, Err(invalid)] => {
            return Ok(Outcome::failure(format!(
                "Error: invalid version format: {invalid}"
            )));
        }
    };

    let report = CompareReport {
        version1: version1.clone(),
        version2: version2.clone(),
        comparison: v1.cmp(&v2).into(),
    };
    Ok(Outcome::success(Render::new(json, false).render(&report)?))
}

/// Prints the next version broken into its parts, along with the package's current version.
pub fn info(
    date: &Date,
    tags: &dyn TagSource,
    metadata: &dyn MetadataSource,
    json: bool,
) -> Result<Outcome, CommandError> {
    let report = InfoReport::new(next_version(date, tags.tags()), metadata.package_version());
    Ok(Outcome::success(Render::new(json, true).render(&report)?))
}
