use crate::version::CalVer;

/// A release-versioning standard that a [CalVer] can be checked against, on top of the CalVer
/// grammar itself.
pub trait Standard {
    /// Returns true if `version` is acceptable under this standard.
    fn accepts(&self, version: &CalVer) -> bool;

    /// Parses `version_str` and checks it. Strings that are not valid CalVer are never compliant.
    fn is_compliant(&self, version_str: &str) -> bool {
        CalVer::parse(version_str).is_some_and(|version| self.accepts(&version))
    }
}

/// [PEP 440](https://peps.python.org/pep-0440/) public versions.
///
/// A canonical CalVer is a PEP 440 *release segment* (`N(.N)*`), so every valid CalVer is
/// accepted.
pub struct Pep440;

impl Standard for Pep440 {
    fn accepts(&self, version: &CalVer) -> bool {
        is_release_segment(&version.to_string())
    }
}

fn is_release_segment(s: &str) -> bool {
    s.split('.')
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}
