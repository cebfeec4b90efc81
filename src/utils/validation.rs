use crate::utils::error::{KitError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(KitError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 下限不得大於上限，例如 age.min / age.max
pub fn validate_ordered_bounds<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    min: T,
    max: T,
) -> Result<()> {
    if min > max {
        return Err(KitError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("min ({}) must not exceed max ({})", min, max),
        });
    }
    Ok(())
}

pub fn validate_distinct(field_name: &str, left: &str, right: &str) -> Result<()> {
    if left == right {
        return Err(KitError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("both values are '{}'", left),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("ajax.base_url", "https://example.com").is_ok());
        assert!(validate_url("ajax.base_url", "http://example.com").is_ok());
        assert!(validate_url("ajax.base_url", "").is_err());
        assert!(validate_url("ajax.base_url", "invalid-url").is_err());
        assert!(validate_url("ajax.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("ui.toast_duration_ms", 5, 1).is_ok());
        assert!(validate_positive_number("ui.toast_duration_ms", 0, 1).is_err());
    }

    #[test]
    fn test_validate_ordered_bounds() {
        assert!(validate_ordered_bounds("age", 18, 65).is_ok());
        assert!(validate_ordered_bounds("age", 10, 10).is_ok());
        assert!(validate_ordered_bounds("age", 70, 65).is_err());
    }

    #[test]
    fn test_validate_distinct_and_non_empty() {
        assert!(validate_distinct("locale", ".", ",").is_ok());
        assert!(validate_distinct("locale", ".", ".").is_err());
        assert!(validate_non_empty_string("locale.decimal_separator", "").is_err());
        // 空白字元是合法的分隔符號
        assert!(validate_non_empty_string("locale.thousands_separator", " ").is_ok());
    }
}
