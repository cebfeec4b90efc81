/// Blank after trimming.
pub fn is_empty(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthOptions {
    pub min: usize,
    pub max: Option<usize>,
}

impl LengthOptions {
    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }
}

/// Character count within `[min, max]`, both inclusive.
pub fn is_length(value: &str, options: LengthOptions) -> bool {
    let len = value.chars().count();
    len >= options.min && options.max.map_or(true, |max| len <= max)
}

/// Exact match, e.g. a password and its confirmation.
pub fn equals(value: &str, comparison: &str) -> bool {
    value == comparison
}

pub fn contains(value: &str, seed: &str) -> bool {
    value.contains(seed)
}

pub fn starts_with(value: &str, prefix: &str) -> bool {
    value.starts_with(prefix)
}

pub fn ends_with(value: &str, suffix: &str) -> bool {
    value.ends_with(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(""));
        assert!(is_empty("  \t\n"));
        assert!(!is_empty(" a "));
    }

    #[test]
    fn test_is_length() {
        assert!(is_length("hello", LengthOptions::between(3, 10)));
        assert!(!is_length("hi", LengthOptions::between(3, 10)));
        assert!(!is_length("hello world!", LengthOptions::between(3, 10)));
        assert!(is_length("", LengthOptions::default()));
        // 以字元計算，不是位元組
        assert!(is_length("Việt", LengthOptions::between(4, 4)));
    }

    #[test]
    fn test_string_relations() {
        assert!(equals("abc", "abc"));
        assert!(!equals("abc", "abd"));
        assert!(contains("hello world", "world"));
        assert!(contains("hello", ""));
        assert!(starts_with("hello", "hel"));
        assert!(ends_with("hello", "lo"));
        assert!(!ends_with("hello", "he"));
    }
}
