use super::strip_whitespace;

regex!(CARD_DIGITS, r"^[0-9]{13,19}$");

/// Card number check: 13–19 digits (spaces ignored) passing the Luhn checksum.
pub fn is_credit_card(value: &str) -> bool {
    let sanitized = strip_whitespace(value);
    CARD_DIGITS.is_match(&sanitized) && luhn_valid(&sanitized)
}

/// Luhn checksum over an ASCII digit string. Walking from the rightmost
/// digit, every second digit is doubled (minus 9 when above 9); the total
/// must be a multiple of 10. An empty string is not a valid number.
pub fn luhn_valid(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }
    let mut sum = 0u32;
    for (i, b) in digits.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return false;
        }
        let mut digit = u32::from(b - b'0');
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}
