use super::strip_whitespace;
use url::Url;

regex!(EMAIL, r"^[^\s@]+@[^\s@]+\.[^\s@]+$");
regex!(MOBILE_VN, r"^(\+84|84|0)(3|5|7|8|9)[0-9]{8}$");
regex!(E164, r"^\+[1-9][0-9]{1,14}$");

/// One `@`, no whitespace, and a dot somewhere in the domain part.
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Absolute http(s) URL.
pub fn is_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

pub fn is_json(value: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(value).is_ok()
}

/// Vietnamese mobile number: `+84`, `84` or `0`, a network digit in
/// {3,5,7,8,9}, then 8 digits. Spaces are ignored.
pub fn is_mobile_phone(value: &str) -> bool {
    MOBILE_VN.is_match(&strip_whitespace(value))
}

/// E.164 international number. Spaces are ignored.
pub fn is_phone_international(value: &str) -> bool {
    E164.is_match(&strip_whitespace(value))
}
