//! Short single-pattern checks used by quick form validation.

use super::{contact, strip_whitespace};

regex!(NUMBER, r"^-?[0-9]+(\.[0-9]+)?$");
regex!(WEB_ADDRESS, r"^(https?://)?(www\.)?[a-zA-Z0-9-]+\.[a-zA-Z]{2,}(\.[a-zA-Z]{2,})?(/.*)?$");
regex!(ALNUM_ASCII, r"^[a-zA-Z0-9]+$");
regex!(ZIP_CODE, r"^[0-9]{5}$");
regex!(CVV, r"^[0-9]{3,4}$");
regex!(CARD_FORMAT, r"^[0-9]{16}$");
regex!(EMAIL_STRICT, r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$");

/// Present and not blank.
pub fn is_required(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Integer or decimal, optional leading minus.
pub fn is_number(value: &str) -> bool {
    NUMBER.is_match(value)
}

/// Host-shaped address where the scheme and `www.` are optional
/// (`example.com`, `www.google.com/path`).
pub fn is_web_address(value: &str) -> bool {
    WEB_ADDRESS.is_match(value)
}

pub fn is_alphanumeric_ascii(value: &str) -> bool {
    ALNUM_ASCII.is_match(value)
}

pub fn is_zip_code(value: &str) -> bool {
    ZIP_CODE.is_match(value)
}

pub fn is_cvv(value: &str) -> bool {
    CVV.is_match(value)
}

/// Exactly 16 digits after removing spaces. Shape only, no checksum.
pub fn is_card_number_format(value: &str) -> bool {
    CARD_FORMAT.is_match(&strip_whitespace(value))
}

/// Address with a restricted local part and an alphabetic TLD.
pub fn is_email_strict(value: &str) -> bool {
    EMAIL_STRICT.is_match(value)
}

pub fn is_phone(value: &str) -> bool {
    contact::is_mobile_phone(value)
}
