/// Trim leading and trailing whitespace from a submitted form field.
pub fn trim_field(value: &str) -> String {
    value.trim().to_string()
}

/// Normalize an email address for storage and comparison: trim, then
/// lowercase. All email lookups go through values produced here, which is
/// what makes login case-insensitive.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Decorate a username with stars for display. Presentation only; stored
/// data and comparisons always use the undecorated value.
pub fn decorate_username(username: &str) -> String {
    format!("★{username}★")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_field_strips_surrounding_whitespace() {
        assert_eq!(trim_field("  alice \t"), "alice");
        assert_eq!(trim_field("alice"), "alice");
    }

    #[test]
    fn trim_field_keeps_inner_whitespace() {
        assert_eq!(trim_field(" a b "), "a b");
    }

    #[test]
    fn trim_field_of_blank_input_is_empty() {
        assert_eq!(trim_field("   "), "");
        assert_eq!(trim_field(""), "");
    }

    #[test]
    fn normalize_email_lowercases() {
        assert_eq!(normalize_email("A@x.com"), "a@x.com");
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn decorate_username_brackets_with_stars() {
        assert_eq!(decorate_username("alice"), "★alice★");
        assert_eq!(decorate_username(""), "★★");
    }
}
