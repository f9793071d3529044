//! # calver-check
//!
//! Compute, validate, and compare calendar versions of the form `YYYY.MM.DD.MICRO`.
//!
//! `MICRO` is a counter that disambiguates releases made on the same (UTC) day. It starts at `1`
//! each day, and the next version for a day is one more than the highest version already tagged
//! on that day.
//!
//! ## Examples
//!
//! Get the next version from a list of existing tags:
//!
//! ```
//! use calver_check::prelude::*;
//!
//! let today = Date::explicit(2024, 1, 18).unwrap();
//! let tags = ["v2024.01.17.4", "v2024.01.18.1", "v2024.01.18.2", "some-other-tag"];
//! assert_eq!("2024.01.18.3", next_version(&today, tags).to_string());
//! ```
//!
//! Or, with tags read from a git repository:
//!
//! ```no_run
//! use calver_check::prelude::*;
//!
//! let tags = GitTags::new(".").tags();
//! let next = next_version(&Date::utc_now(), &tags);
//! println!("{next}");
//! ```
//!
//! Parse and compare versions:
//!
//! ```
//! use calver_check::prelude::*;
//!
//! let a = CalVer::parse("v2024.01.18.2").unwrap();
//! let b = CalVer::parse("2024.01.18.10").unwrap();
//! assert!(a < b);
//!
//! // parsing never errors, it only reports absence
//! assert!(CalVer::parse("2024.1.18.1").is_none());
//! ```
//!
//! ## Format
//!
//! | Part | Digits | Range | Notes |
//! |---|---|---|---|
//! | prefix | | | Optional `v`. Accepted when parsing, never rendered. |
//! | year | exactly 4 | any | |
//! | month | exactly 2 | `01`–`12` | |
//! | day | exactly 2 | `01`–`31` | Not checked against the month: `2024.02.31.1` is valid. |
//! | micro | 1 or more | `1`– | Not zero-padded when rendered. |
//!
//! ## Prelude
//!
//! calver-check provides a prelude module for convenience. Use it with:
//!
//! ```
//! use calver_check::prelude::*;
//! ```

mod calc;
pub mod command;
mod compliance;
mod error;
pub mod report;
mod source;
mod version;

pub use crate::calc::{latest, next_version};
pub use crate::compliance::{Pep440, Standard};
pub use crate::error::{CommandError, DateError, SourceError, VersionError};
pub use crate::source::{CargoManifest, GitTags, MetadataSource, TagSource, VersionFile};
pub use crate::version::{CalVer, Date};

/// A convenience module appropriate for glob imports (`use calver_check::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::latest;
    #[doc(no_inline)]
    pub use crate::next_version;
    #[doc(no_inline)]
    pub use crate::CalVer;
    #[doc(no_inline)]
    pub use crate::Date;
    #[doc(no_inline)]
    pub use crate::GitTags;
    #[doc(no_inline)]
    pub use crate::MetadataSource;
    #[doc(no_inline)]
    pub use crate::TagSource;
}
