use crate::error::{DateError, VersionError};
use chrono::{Datelike, NaiveDate, Utc};
use core::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};
use serde::{Serialize, Serializer};

/// How many digits a field of the textual form may span. A `max` of `None` is unbounded.
struct Width {
    min: usize,
    max: Option<usize>,
}

const YEAR_WIDTH: Width = Width {
    min: 4,
    max: Some(4),
};
const MONTH_WIDTH: Width = Width {
    min: 2,
    max: Some(2),
};
const DAY_WIDTH: Width = Width {
    min: 2,
    max: Some(2),
};
const MICRO_WIDTH: Width = Width { min: 1, max: None };

const PREFIX: u8 = b'v';
const SEPARATOR: u8 = b'.';

/// Consumes the run of ascii digits at the start of `bytes` and returns its value along with the
/// remaining bytes. Returns `None` if the run is not within `width`, or if it overflows.
fn take_field<'a>(bytes: &'a [u8], width: &Width) -> Option<(u64, &'a [u8])> {
    let len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if len < width.min || width.max.is_some_and(|max| len > max) {
        return None;
    }

    let (digits, rest) = bytes.split_at(len);
    let mut value: u64 = 0;
    for digit in digits {
        value = value.checked_mul(10)?.checked_add(u64::from(digit - b'0'))?;
    }
    Some((value, rest))
}

/// Consumes the field separator at the start of `bytes`.
fn take_separator(bytes: &[u8]) -> Option<&[u8]> {
    match bytes.split_first() {
        Some((&SEPARATOR, rest)) => Some(rest),
        _ => None,
    }
}

/// A calendar version of the form `YYYY.MM.DD.MICRO`.
///
/// `MICRO` is a same-day sequence counter starting at `1`. Versions are totally ordered by
/// `(year, month, day, micro)`, so a later date always sorts higher, and within a day the higher
/// counter wins.
///
/// Values are only created by [parsing](CalVer::parse) or by computing the next version for a
/// date (see [`next_version`](crate::next_version)). They are never mutated.
///
/// # Examples
///
/// ```
/// use calver_check::CalVer;
///
/// let a = CalVer::parse("v2024.01.18.1").unwrap();
/// let b = CalVer::parse("2024.01.18.2").unwrap();
/// assert!(a < b);
/// assert_eq!("2024.01.18.1", a.to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalVer {
    // field order is significant: derived ordering is lexicographic over it
    year: i32,
    month: u32,
    day: u32,
    micro: u64,
}

impl CalVer {
    /// Parses a version string, returning `None` if it is not a valid CalVer.
    ///
    /// The accepted grammar is an optional leading `v`, then a 4-digit year, a 2-digit month, a
    /// 2-digit day and a micro of one or more digits, all separated by `.`. Surrounding whitespace
    /// is ignored. Anything else (including trailing text) is rejected.
    ///
    /// After the structural match, the month must be in `1..=12`, the day in `1..=31` and the micro
    /// at least `1`.
    ///
    /// The micro must also fit in a `u64`.
    ///
    /// Note that days are *not* checked against their month: `2024.02.31.1` parses even though
    /// February 31st does not exist.
    pub fn parse(version_str: &str) -> Option<Self> {
        let bytes = version_str.trim().as_bytes();
        let bytes = bytes.strip_prefix(&[PREFIX]).unwrap_or(bytes);

        let (year, rest) = take_field(bytes, &YEAR_WIDTH)?;
        let (month, rest) = take_field(take_separator(rest)?, &MONTH_WIDTH)?;
        let (day, rest) = take_field(take_separator(rest)?, &DAY_WIDTH)?;
        let (micro, rest) = take_field(take_separator(rest)?, &MICRO_WIDTH)?;
        if !rest.is_empty() {
            return None;
        }

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) || micro < 1 {
            return None;
        }

        // year is at most 4 digits, month and day are range checked, so these always fit
        Some(Self {
            year: i32::try_from(year).ok()?,
            month: u32::try_from(month).ok()?,
            day: u32::try_from(day).ok()?,
            micro,
        })
    }

    /// Returns true if `version_str` parses as a CalVer.
    pub fn is_valid(version_str: &str) -> bool {
        Self::parse(version_str).is_some()
    }

    /// The version for `date` with the given same-day counter.
    pub(crate) fn on_date(date: &Date, micro: u64) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            micro,
        }
    }

    /// Returns true if this version was released on `date`.
    pub fn is_on(&self, date: &Date) -> bool {
        (self.year, self.month, self.day) == (date.year(), date.month(), date.day())
    }

    /// The year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month (`1`–`12`)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The day of the month (`1`–`31`)
    pub fn day(&self) -> u32 {
        self.day
    }

    /// The same-day sequence counter, at least `1`.
    pub fn micro(&self) -> u64 {
        self.micro
    }

    /// The date portion rendered as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Display for CalVer {
    /// Renders the canonical form, without a `v` prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}.{:02}.{:02}.{}",
            self.year, self.month, self.day, self.micro
        )
    }
}

impl FromStr for CalVer {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| VersionError::Invalid {
            version_string: s.to_owned(),
        })
    }
}

impl Serialize for CalVer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The calendar date a version is computed for.
///
/// ```
/// use calver_check::Date;
///
/// let explicit = Date::explicit(2021, 2, 3).unwrap();
/// let parsed: Date = "2021-02-03".parse().unwrap();
/// assert_eq!(explicit, parsed);
///
/// let today = Date::utc_now();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date(NaiveDate);

impl Date {
    /// Returns a new [Date] representing the current date in UTC at the time of this call.
    pub fn utc_now() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Returns result of a new [Date] representing the given date, or
    /// [DateError::InvalidDateArguments].
    pub fn explicit(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .filter(|date| (0..=9999).contains(&date.year()))
            .map(Self)
            .ok_or(DateError::InvalidDateArguments { year, month, day })
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date string in the format `YYYY-MM-DD`.
    ///
    /// See [NaiveDate::from_str].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::from_str(s).map_err(|source| DateError::UnparseableDate {
            date_string: s.to_owned(),
            source,
        })?;
        Self::explicit(date.year(), date.month(), date.day())
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Deref for Date {
    type Target = NaiveDate;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
