regex!(IPV4, r"^([0-9]{1,3}\.){3}[0-9]{1,3}$");
regex!(HEX_COLOR, r"^#?([a-fA-F0-9]{6}|[a-fA-F0-9]{3})$");
regex!(NAME, r"^[a-zA-ZÀ-ỹ\s]{2,50}$");

/// Dotted IPv4 address with each octet at most 255.
pub fn is_ip(value: &str) -> bool {
    IPV4.is_match(value)
        && value
            .split('.')
            .all(|part| part.parse::<u16>().is_ok_and(|n| n <= 255))
}

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Person name: letters (Vietnamese included) and spaces, 2–50 characters.
pub fn is_name(value: &str) -> bool {
    let s = value.trim();
    NAME.is_match(s) && s.chars().count() >= 2
}

/// Free-text message of 10–500 characters after trimming.
pub fn is_message(value: &str) -> bool {
    let len = value.trim().chars().count();
    (10..=500).contains(&len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ip() {
        assert!(is_ip("192.168.1.1"));
        assert!(is_ip("0.0.0.0"));
        assert!(is_ip("255.255.255.255"));
        assert!(!is_ip("256.1.1.1"));
        assert!(!is_ip("1.1.1"));
        assert!(!is_ip("1.1.1.1.1"));
        assert!(!is_ip("a.b.c.d"));
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#ff5733"));
        assert!(is_hex_color("FFF"));
        assert!(!is_hex_color("#ff573"));
        assert!(!is_hex_color("#gggggg"));
    }

    #[test]
    fn test_is_name() {
        assert!(is_name("Nguyễn Văn A"));
        assert!(is_name("  An  "));
        assert!(!is_name("A"));
        assert!(!is_name("R2D2"));
        assert!(!is_name(&"a".repeat(51)));
    }

    #[test]
    fn test_is_message() {
        assert!(is_message("Hello world"));
        assert!(!is_message("   short   "));
        assert!(!is_message(&"x".repeat(501)));
        assert!(is_message(&"x".repeat(500)));
    }
}
