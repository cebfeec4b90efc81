use serde::{Deserialize, Serialize};

regex!(USERNAME, r"^[a-zA-Z0-9_]{3,20}$");

/// Minimum character-class counts for a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub min_lowercase: usize,
    pub min_uppercase: usize,
    pub min_numbers: usize,
    pub min_symbols: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            min_lowercase: 1,
            min_uppercase: 1,
            min_numbers: 1,
            min_symbols: 1,
        }
    }
}

impl PasswordPolicy {
    pub fn allows(&self, password: &str) -> bool {
        let mut lower = 0;
        let mut upper = 0;
        let mut digits = 0;
        let mut symbols = 0;
        let mut length = 0;

        for c in password.chars() {
            length += 1;
            match c {
                'a'..='z' => lower += 1,
                'A'..='Z' => upper += 1,
                '0'..='9' => digits += 1,
                _ => symbols += 1,
            }
        }

        length >= self.min_length
            && lower >= self.min_lowercase
            && upper >= self.min_uppercase
            && digits >= self.min_numbers
            && symbols >= self.min_symbols
    }
}

/// Checks against [`PasswordPolicy::default`]: 8+ characters with at least
/// one lowercase, uppercase, digit and symbol.
pub fn is_strong_password(value: &str) -> bool {
    PasswordPolicy::default().allows(value)
}

pub fn is_strong_password_with(value: &str, policy: &PasswordPolicy) -> bool {
    policy.allows(value)
}

/// Letters, digits and underscore, 3 to 20 characters.
pub fn is_username(value: &str) -> bool {
    USERNAME.is_match(value)
}
