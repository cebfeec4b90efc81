use super::strip_whitespace;

regex!(ID_CARD, r"^([0-9]{9}|[0-9]{12})$");
regex!(TAX_CODE, r"^([0-9]{10}|[0-9]{13})$");
regex!(POSTAL_CODE, r"^[0-9]{6}$");

/// CMND (9 digits) or CCCD (12 digits). Spaces are ignored.
pub fn is_id_card_vn(value: &str) -> bool {
    ID_CARD.is_match(&strip_whitespace(value))
}

/// Mã số thuế: 10 digits, or 13 for a branch. Spaces are ignored.
pub fn is_tax_code_vn(value: &str) -> bool {
    TAX_CODE.is_match(&strip_whitespace(value))
}

pub fn is_postal_code_vn(value: &str) -> bool {
    POSTAL_CODE.is_match(value)
}
