use crate::version::{CalVer, Date};

/// Returns the next version for `date`, given the existing version tags.
///
/// Only tags that [parse](CalVer::parse) and fall on `date` are considered. If any exist, the
/// result's micro is one more than the highest of them (staying at `u64::MAX` if that is the
/// highest). Otherwise, it is `1`. Tags from other
/// dates never influence the result, so the counter resets every day.
///
/// This function is pure: the tags and the date are supplied by the caller.
///
/// # Example
///
/// ```
/// use calver_check::{next_version, Date};
///
/// let date = Date::explicit(2024, 1, 18).unwrap();
/// let next = next_version(&date, ["v2024.01.18.1", "v2024.01.18.2", "not-a-version"]);
/// assert_eq!("2024.01.18.3", next.to_string());
///
/// let next = next_version(&date, ["v2024.01.17.9"]);
/// assert_eq!("2024.01.18.1", next.to_string());
/// ```
pub fn next_version<I>(date: &Date, tags: I) -> CalVer
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let next_micro = tags
        .into_iter()
        .filter_map(|tag| CalVer::parse(tag.as_ref()))
        .filter(|version| version.is_on(date))
        .map(|version| version.micro())
        .max()
        .map_or(1, |micro| micro.saturating_add(1));

    CalVer::on_date(date, next_micro)
}

/// Returns the greatest valid version among `tags`, along with the tag text it was parsed from.
///
/// Invalid tags are skipped. If two tags parse to the same version (e.g. `v2024.01.18.1` and
/// `2024.01.18.1`), the first one seen wins.
pub fn latest<I>(tags: I) -> Option<(String, CalVer)>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| {
            let tag = tag.as_ref();
            CalVer::parse(tag).map(|version| (tag.trim().to_owned(), version))
        })
        .fold(None, |best: Option<(String, CalVer)>, candidate| match best {
            Some(best) if best.1 >= candidate.1 => Some(best),
            _ => Some(candidate),
        })
}
