//! Format checks shared by tool parameter validation.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+'-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("Failed to compile email regex")
});

pub fn is_email(value: &str) -> bool {
    !value.contains("..") && EMAIL_RE.is_match(value)
}

/// An absolute URL with a host, e.g. `https://www.linkedin.com/in/someone`.
pub fn is_url(value: &str) -> bool {
    url::Url::parse(value).is_ok_and(|url| url.has_host())
}

/// Checks an optional email field, naming it in the error.
pub fn check_email(field: &str, value: Option<&str>) -> Result<(), String> {
    match value {
        Some(v) if !is_email(v) => Err(format!("{field} must be a valid email address")),
        _ => Ok(()),
    }
}

/// Checks an optional URL field, naming it in the error.
pub fn check_url(field: &str, value: Option<&str>) -> Result<(), String> {
    match value {
        Some(v) if !is_url(v) => Err(format!("{field} must be a valid URL")),
        _ => Ok(()),
    }
}

pub fn check_non_empty(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(format!("{field} must not be empty"))
    } else {
        Ok(())
    }
}
