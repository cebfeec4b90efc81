regex!(ALPHA, r"^[a-zA-ZÀ-ỹ]+$");
regex!(ALPHANUMERIC, r"^[a-zA-Z0-9À-ỹ]+$");
regex!(DIGITS, r"^[0-9]+$");
regex!(SPECIAL_CHAR, r"[^a-zA-Z0-9\s]");

/// Latin letters, including Vietnamese accented letters.
pub fn is_alpha(value: &str) -> bool {
    ALPHA.is_match(value)
}

pub fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC.is_match(value)
}

pub fn is_numeric(value: &str) -> bool {
    DIGITS.is_match(value)
}

pub fn is_digits_only(value: &str) -> bool {
    DIGITS.is_match(value)
}

pub fn has_special_char(value: &str) -> bool {
    SPECIAL_CHAR.is_match(value)
}

pub fn has_no_whitespace(value: &str) -> bool {
    !value.chars().any(char::is_whitespace)
}

/// Ignores case and every character outside `[a-z0-9]`.
pub fn is_palindrome(value: &str) -> bool {
    let cleaned: Vec<char> = value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}
