use once_cell::sync::Lazy;
use regex::Regex;

/// local-part@domain, where the domain ends in a label of two or more
/// letters or is a bracketed IPv4 address. The local part may be quoted.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is valid")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
