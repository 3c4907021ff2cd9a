//! Display helpers for the dashboard.

use itertools::Itertools;
use url::Url;

use crate::model::PostedDate;

/// Formats a count with thousands separators, e.g. `2,847,500`.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let head = digits.len() % 3;

    let mut groups = Vec::with_capacity(digits.len() / 3 + 1);
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend((head..digits.len()).step_by(3).map(|i| &digits[i..i + 3]));

    groups.into_iter().join(",")
}

/// Turns a user-entered link into a navigable URL.
///
/// Links without a scheme are assumed to be `https`. Empty or unparseable
/// links yield `None`.
pub fn normalize_link(link: &str) -> Option<Url> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }

    if link.starts_with("http://") || link.starts_with("https://") {
        Url::parse(link).ok()
    } else {
        Url::parse(&format!("https://{link}")).ok()
    }
}

/// Username as shown in the table, always `@`-prefixed.
pub fn profile_handle(username: &str) -> String {
    if username.starts_with('@') {
        username.to_string()
    } else {
        format!("@{username}")
    }
}

/// Posted date as shown in the table, `MM/DD/YYYY`.
pub fn short_date(date: PostedDate) -> String {
    date.format("%m/%d/%Y").to_string()
}
