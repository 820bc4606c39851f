//! Form field validation shared by comments and share messages

use regex::Regex;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";

fn email_regex() -> Option<&'static Regex> {
    EMAIL_RE
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to compile email regex");
                None
            }
        })
        .as_ref()
}

/// Check an address the way a form email field would: `local@domain.tld`
pub fn is_valid_email(value: &str) -> bool {
    value.len() <= 254 && email_regex().is_some_and(|re| re.is_match(value))
}

/// Validate a required text field with a maximum length in characters
pub fn required_text(
    field: &str,
    value: &str,
    max_chars: Option<usize>,
) -> crate::error::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        crate::bail_form!(field, "this field is required");
    }
    if let Some(max) = max_chars {
        if trimmed.chars().count() > max {
            crate::bail_form!(
                field,
                format!("ensure this value has at most {} characters", max)
            );
        }
    }
    Ok(trimmed.to_string())
}

/// Validate a required email field
pub fn required_email(field: &str, value: &str) -> crate::error::Result<String> {
    let trimmed = required_text(field, value, Some(254))?;
    if !is_valid_email(&trimmed) {
        crate::bail_form!(field, "enter a valid email address");
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("reader@example.com"));
        assert!(is_valid_email("first.last+blog@mail.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_required_text_trims_and_limits() {
        assert_eq!(required_text("name", "  Ada ", Some(25)).unwrap(), "Ada");
        assert!(required_text("name", "   ", None).is_err());
        assert!(required_text("name", &"x".repeat(26), Some(25)).is_err());
    }
}
