use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Lowest accepted category code ("General").
pub const MIN_CATEGORY: i32 = 0;
/// Highest accepted category code.
pub const MAX_CATEGORY: i32 = 4;

const MAX_EMAIL_LEN: usize = 254;

/// local@domain, where each domain label is 1-63 alphanumerics/hyphens not
/// starting or ending with a hyphen.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email pattern is valid")
});

/// A user-correctable input problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidEmail,
    InvalidCategory,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidEmail => write!(f, "invalid email address format"),
            ValidationError::InvalidCategory => write!(
                f,
                "category must be an integer between {MIN_CATEGORY} and {MAX_CATEGORY}"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check address syntax only. No DNS or MX lookups are made.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::InvalidEmail);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Parse a category code and check it lies in `[MIN_CATEGORY, MAX_CATEGORY]`.
pub fn validate_category(raw: &str) -> Result<i32, ValidationError> {
    let category: i32 = raw.parse().map_err(|_| ValidationError::InvalidCategory)?;
    if !(MIN_CATEGORY..=MAX_CATEGORY).contains(&category) {
        return Err(ValidationError::InvalidCategory);
    }
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for ok in [
            "ana@example.com",
            "ana.perez+propuestas@mitic.gov.py",
            "x_y-z@sub-domain.example.org",
            "root@localhost",
        ] {
            assert_eq!(validate_email(ok), Ok(()), "{ok}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "bad-email",
            "@example.com",
            "ana@",
            "ana@@example.com",
            "ana@-example.com",
            "ana@example-.com",
            "ana@example..com",
            "ana maria@example.com",
            "<b>ana</b>@example.com",
        ] {
            assert_eq!(validate_email(bad), Err(ValidationError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn rejects_overlong_address() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(validate_email(&long), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn category_in_range_is_returned_unchanged() {
        for c in MIN_CATEGORY..=MAX_CATEGORY {
            assert_eq!(validate_category(&c.to_string()), Ok(c));
        }
    }

    #[test]
    fn category_out_of_range_fails() {
        for raw in ["-1", "5", "9", "2147483647"] {
            assert_eq!(validate_category(raw), Err(ValidationError::InvalidCategory), "{raw}");
        }
    }

    #[test]
    fn category_unparsable_fails() {
        for raw in ["", "dos", "1.5", " 2", "99999999999"] {
            assert_eq!(validate_category(raw), Err(ValidationError::InvalidCategory), "{raw}");
        }
    }
}
