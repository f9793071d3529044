//! Results of each command. Every report renders as text through [Display] and as JSON through
//! [Serialize], and both carry the same information.

use crate::version::CalVer;
use core::{
    cmp::Ordering,
    fmt::{self, Display},
};
use serde::Serialize;

/// The next version to release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalcReport {
    pub version: CalVer,
}

impl Display for CalcReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}

/// The current version as seen by each source. Absent sources are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Versions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Versions {
    /// Pairs of `(source name, version)` for the sources that are present, in output order.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("package", &self.package),
            ("git_tag", &self.git_tag),
            ("file", &self.file),
        ]
        .into_iter()
        .filter_map(|(name, version)| version.as_deref().map(|version| (name, version)))
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub versions: Versions,
}

impl Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Current versions:")?;
        for (source, version) in self.versions.present() {
            write!(f, "\n  {source}: {version}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateReport {
    pub version: String,
    pub valid_format: bool,
    pub pep440_compliant: bool,
}

impl ValidateReport {
    pub fn is_ok(&self) -> bool {
        self.valid_format && self.pep440_compliant
    }
}

impl Display for ValidateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid_format {
            write!(f, "Invalid CalVer format: {}", self.version)
        } else if !self.pep440_compliant {
            write!(f, "Version not PEP 440 compliant: {}", self.version)
        } else {
            write!(
                f,
                "Version '{}' is valid and PEP 440 compliant",
                self.version
            )
        }
    }
}

/// How the first compared version relates to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Comparison {
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = ">")]
    Greater,
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Comparison::Less => "<",
            Comparison::Equal => "==",
            Comparison::Greater => ">",
        })
    }
}

/// Holds the versions as given, so a `v` prefix is echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompareReport {
    pub version1: String,
    pub version2: String,
    pub comparison: Comparison,
}

impl Display for CompareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.version1, self.comparison, self.version2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoReport {
    pub next_version: CalVer,
    /// The date of `next_version`, as `YYYY-MM-DD`.
    pub date: String,
    pub micro: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_package_version: Option<String>,
}

impl InfoReport {
    pub fn new(next_version: CalVer, current_package_version: Option<String>) -> Self {
        Self {
            next_version,
            date: next_version.date_string(),
            micro: next_version.micro(),
            current_package_version,
        }
    }
}

impl Display for InfoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Version Information:")?;
        write!(f, "\n  next_version: {}", self.next_version)?;
        write!(f, "\n  date: {}", self.date)?;
        write!(f, "\n  micro: {}", self.micro)?;
        if let Some(version) = &self.current_package_version {
            write!(f, "\n  current_package_version: {version}")?;
        }
        Ok(())
    }
}
