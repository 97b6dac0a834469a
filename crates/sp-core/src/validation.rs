//! Input validation for values entered at the CLI.

use chrono::NaiveDate;

use crate::errors::CoreError;

/// Loose email shape check: a non-empty local part of `[A-Za-z0-9+_.-]`,
/// an `@`, and a non-empty remainder.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'))
}

/// `owner/name` where both halves are `[A-Za-z0-9_.-]+`.
#[must_use]
pub fn is_valid_github_repo(repo: &str) -> bool {
    let is_segment = |s: &str| {
        !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    };
    match repo.split_once('/') {
        Some((owner, name)) => is_segment(owner) && is_segment(name),
        None => false,
    }
}

fn is_within_range(value: i64, min: i64, max: i64) -> bool {
    (min..=max).contains(&value)
}

/// Trim and collapse internal whitespace runs to a single space.
#[must_use]
pub fn sanitize_input(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Require a plausible email address.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the offending value.
pub fn require_email(email: &str) -> Result<(), CoreError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("'{email}' is not a valid email address")))
    }
}

/// Require `owner/name` repository syntax.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the offending value.
pub fn require_github_repo(repo: &str) -> Result<(), CoreError> {
    if is_valid_github_repo(repo) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{repo}' is not a repository name of the form owner/name"
        )))
    }
}

/// Require a deadline strictly after `today`.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the deadline is today or earlier.
pub fn require_future_deadline(deadline: NaiveDate, today: NaiveDate) -> Result<(), CoreError> {
    if deadline > today {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "deadline {deadline} must be after today ({today})"
        )))
    }
}

/// Require daily hours in `1..=24`.
///
/// # Errors
///
/// Returns `CoreError::Validation` when out of range.
pub fn require_daily_hours(hours: u32) -> Result<(), CoreError> {
    if is_within_range(i64::from(hours), 1, 24) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "daily hours must be between 1 and 24, got {hours}"
        )))
    }
}

/// Require a completion percentage in `0..=100`.
///
/// # Errors
///
/// Returns `CoreError::Validation` when out of range.
pub fn require_percentage(value: u32) -> Result<u8, CoreError> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= 100)
        .ok_or_else(|| CoreError::Validation(format!("percentage must be 0-100, got {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ada@example.com", true)]
    #[case("first.last+tag@x", true)]
    #[case("no-at-sign", false)]
    #[case("@example.com", false)]
    #[case("ada@", false)]
    #[case("sp ace@example.com", false)]
    fn email_shapes(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(input), expected);
    }

    #[rstest]
    #[case("rust-lang/rust", true)]
    #[case("a_b.c/d-e.f", true)]
    #[case("rust-lang", false)]
    #[case("rust-lang/", false)]
    #[case("a/b/c", false)]
    #[case("own er/repo", false)]
    fn repo_shapes(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid_github_repo(input), expected);
    }

    #[test]
    fn require_email_names_bad_value() {
        assert!(require_email("ada@example.com").is_ok());
        let err = require_email("ada at example").unwrap_err();
        assert!(err.to_string().contains("ada at example"));
    }

    #[test]
    fn sanitize_collapses_whitespace() {
        assert_eq!(sanitize_input("  Math,\t  Physics \n"), "Math, Physics");
    }

    #[test]
    fn deadline_must_be_in_future() {
        let today = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        assert!(require_future_deadline(today.succ_opt().unwrap(), today).is_ok());
        assert!(require_future_deadline(today, today).is_err());
    }

    #[test]
    fn hours_and_percentage_ranges() {
        assert!(require_daily_hours(0).is_err());
        assert!(require_daily_hours(1).is_ok());
        assert!(require_daily_hours(25).is_err());
        assert_eq!(require_percentage(100).unwrap(), 100);
        assert!(require_percentage(101).is_err());
        assert!(require_percentage(1000).is_err());
    }
}
