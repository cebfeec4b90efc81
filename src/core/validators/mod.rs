//! Deterministic, side-effect free input checks.
//!
//! Every validator is total: malformed input yields `false`, never a panic.
//! Callers map absent values to `""` before calling.

pub mod basic;
pub mod coerce;
pub mod contact;
pub mod dates;
pub mod finance;
pub mod misc;
pub mod numbers;
pub mod password;
pub mod patterns;
pub mod strings;
pub mod structure;
pub mod vietnam;

pub use basic::{contains, ends_with, equals, is_empty, is_length, starts_with, LengthOptions};
pub use contact::{is_email, is_json, is_mobile_phone, is_phone_international, is_url};
pub use dates::{
    is_date, is_future_date, is_future_date_at, is_valid_age, is_valid_age_on, is_valid_time,
    AgeOptions, BookingWindow,
};
pub use finance::{is_credit_card, luhn_valid};
pub use misc::{is_hex_color, is_ip, is_message, is_name};
pub use numbers::{
    is_even, is_float, is_in_range, is_int, is_negative, is_odd, is_positive, RangeOptions,
};
pub use password::{is_strong_password, is_strong_password_with, is_username, PasswordPolicy};
pub use strings::{
    has_no_whitespace, has_special_char, is_alpha, is_alphanumeric, is_digits_only, is_numeric,
    is_palindrome,
};
pub use structure::{is_empty_array, is_empty_object};
pub use vietnam::{is_id_card_vn, is_postal_code_vn, is_tax_code_vn};

pub(crate) fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Single-argument validators addressable by name (used by the CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ValidatorKind {
    Empty,
    Required,
    Alpha,
    Alphanumeric,
    AlphanumericAscii,
    Numeric,
    DigitsOnly,
    SpecialChar,
    NoWhitespace,
    Palindrome,
    Int,
    Float,
    Number,
    Email,
    EmailStrict,
    Url,
    WebAddress,
    Json,
    MobilePhone,
    PhoneInternational,
    Date,
    Age,
    FutureDate,
    StrongPassword,
    Username,
    IdCardVn,
    TaxCodeVn,
    PostalCodeVn,
    ZipCode,
    CreditCard,
    CardNumberFormat,
    Cvv,
    Ip,
    HexColor,
    Name,
    Message,
}

impl ValidatorKind {
    pub fn check(self, value: &str) -> bool {
        use ValidatorKind::*;
        match self {
            Empty => is_empty(value),
            Required => patterns::is_required(Some(value)),
            Alpha => is_alpha(value),
            Alphanumeric => is_alphanumeric(value),
            AlphanumericAscii => patterns::is_alphanumeric_ascii(value),
            Numeric => is_numeric(value),
            DigitsOnly => is_digits_only(value),
            SpecialChar => has_special_char(value),
            NoWhitespace => has_no_whitespace(value),
            Palindrome => is_palindrome(value),
            Int => is_int(value),
            Float => is_float(value),
            Number => patterns::is_number(value),
            Email => is_email(value),
            EmailStrict => patterns::is_email_strict(value),
            Url => is_url(value),
            WebAddress => patterns::is_web_address(value),
            Json => is_json(value),
            MobilePhone => is_mobile_phone(value),
            PhoneInternational => is_phone_international(value),
            Date => is_date(value),
            Age => is_valid_age(value, AgeOptions::default()),
            FutureDate => is_future_date(value),
            StrongPassword => is_strong_password(value),
            Username => is_username(value),
            IdCardVn => is_id_card_vn(value),
            TaxCodeVn => is_tax_code_vn(value),
            PostalCodeVn => is_postal_code_vn(value),
            ZipCode => patterns::is_zip_code(value),
            CreditCard => is_credit_card(value),
            CardNumberFormat => patterns::is_card_number_format(value),
            Cvv => patterns::is_cvv(value),
            Ip => is_ip(value),
            HexColor => is_hex_color(value),
            Name => is_name(value),
            Message => is_message(value),
        }
    }
}
