use crate::core::validators::is_email;
use crate::domain::model::{FieldRule, FormData, FormValidation, NodeId};
use crate::domain::ports::DomHost;
use std::collections::BTreeMap;

const REQUIRED_MESSAGE: &str = "Required";
const EMAIL_MESSAGE: &str = "Invalid email";
const CUSTOM_MESSAGE: &str = "Invalid value";

/// Collects the successful controls of `form` in document order.
///
/// Only named `input`, `select` and `textarea` elements count. Disabled
/// controls and unchecked checkboxes or radios are skipped. A repeated name
/// keeps the last value.
pub fn get_data<D: DomHost + ?Sized>(dom: &D, form: NodeId) -> FormData {
    let mut data = FormData::new();
    for control in dom.query_selector_all(Some(form), "input[name], select[name], textarea[name]") {
        if dom.attribute(control, "disabled").is_some() {
            continue;
        }
        let Some(name) = dom.attribute(control, "name") else {
            continue;
        };
        if let Some(value) = control_value(dom, control) {
            data.insert(name, value);
        }
    }
    data
}

fn control_value<D: DomHost + ?Sized>(dom: &D, control: NodeId) -> Option<String> {
    match dom.tag(control)?.as_str() {
        "textarea" => Some(dom.text(control)),
        "select" => {
            let options = dom.query_selector_all(Some(control), "option");
            let chosen = options
                .iter()
                .copied()
                .find(|&o| dom.attribute(o, "selected").is_some())
                .or_else(|| options.first().copied())?;
            Some(dom.attribute(chosen, "value").unwrap_or_else(|| dom.text(chosen)))
        }
        _ => {
            let kind = dom
                .attribute(control, "type")
                .unwrap_or_default()
                .to_ascii_lowercase();
            match kind.as_str() {
                "checkbox" | "radio" => dom
                    .attribute(control, "checked")
                    .map(|_| dom.attribute(control, "value").unwrap_or_else(|| "on".to_string())),
                "button" | "submit" | "reset" | "image" | "file" => None,
                _ => Some(dom.attribute(control, "value").unwrap_or_default()),
            }
        }
    }
}

/// Checks `data` against `rules`, one entry per field name.
///
/// The checks run as required, email, custom; a later failure overwrites the
/// message of an earlier one. A missing field is treated as `""`.
pub fn validate(data: &FormData, rules: &BTreeMap<String, FieldRule>) -> FormValidation {
    let mut errors = BTreeMap::new();

    for (field, rule) in rules {
        let value = data.get(field).map(String::as_str).unwrap_or("");

        if rule.required && value.trim().is_empty() {
            errors.insert(
                field.clone(),
                rule.message.clone().unwrap_or_else(|| REQUIRED_MESSAGE.to_string()),
            );
        }
        if rule.email && !is_email(value) {
            errors.insert(
                field.clone(),
                rule.message.clone().unwrap_or_else(|| EMAIL_MESSAGE.to_string()),
            );
        }
        if let Some(check) = rule.custom {
            if !check(value) {
                errors.insert(
                    field.clone(),
                    rule.message.clone().unwrap_or_else(|| CUSTOM_MESSAGE.to_string()),
                );
            }
        }
    }

    if !errors.is_empty() {
        tracing::debug!("Form validation failed for {} field(s)", errors.len());
    }
    FormValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dom::{Document, Markup};

    fn signup_form() -> (Document, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let form = doc.append_markup(
            body,
            Markup::new("form")
                .id("signup")
                .child(Markup::new("input").attr("name", "email").attr("value", "an@example.com"))
                .child(Markup::new("input").attr("name", "nick").attr("disabled", ""))
                .child(Markup::new("input").attr("type", "checkbox").attr("name", "terms").attr("checked", ""))
                .child(Markup::new("input").attr("type", "checkbox").attr("name", "news"))
                .child(Markup::new("input").attr("type", "radio").attr("name", "plan").attr("value", "free"))
                .child(
                    Markup::new("input")
                        .attr("type", "radio")
                        .attr("name", "plan")
                        .attr("value", "pro")
                        .attr("checked", ""),
                )
                .child(
                    Markup::new("select")
                        .attr("name", "city")
                        .child(Markup::new("option").attr("value", "hn").text("Ha Noi"))
                        .child(Markup::new("option").attr("selected", "").text("Da Nang")),
                )
                .child(Markup::new("textarea").attr("name", "bio").text("Hello"))
                .child(Markup::new("input").attr("value", "no name"))
                .child(Markup::new("input").attr("type", "submit").attr("name", "go")),
        );
        (doc, form)
    }

    #[test]
    fn test_get_data_collects_successful_controls() {
        let (doc, form) = signup_form();
        let data = get_data(&doc, form);

        assert_eq!(data.get("email").map(String::as_str), Some("an@example.com"));
        assert_eq!(data.get("terms").map(String::as_str), Some("on"));
        assert_eq!(data.get("plan").map(String::as_str), Some("pro"));
        assert_eq!(data.get("city").map(String::as_str), Some("Da Nang"));
        assert_eq!(data.get("bio").map(String::as_str), Some("Hello"));
        assert!(!data.contains_key("nick"));
        assert!(!data.contains_key("news"));
        assert!(!data.contains_key("go"));
        assert_eq!(data.len(), 5);
    }

    #[test]
    fn test_validate_default_messages() {
        let mut rules = BTreeMap::new();
        rules.insert("name".to_string(), FieldRule::required());
        rules.insert("email".to_string(), FieldRule::required().and_email());
        rules.insert(
            "age".to_string(),
            FieldRule::default().with_check(|v| v.parse::<u32>().is_ok()),
        );

        let mut data = FormData::new();
        data.insert("name".to_string(), "  ".to_string());
        data.insert("email".to_string(), "not-an-email".to_string());
        data.insert("age".to_string(), "abc".to_string());

        let result = validate(&data, &rules);
        assert!(!result.is_valid);
        assert_eq!(result.errors["name"], "Required");
        assert_eq!(result.errors["email"], "Invalid email");
        assert_eq!(result.errors["age"], "Invalid value");
    }

    #[test]
    fn test_later_check_overwrites_message() {
        let mut rules = BTreeMap::new();
        rules.insert("email".to_string(), FieldRule::required().and_email());
        rules.insert(
            "phone".to_string(),
            FieldRule::required().with_check(|v| v.len() == 10).with_message("Phone?"),
        );

        // 缺少欄位時 email 檢查會覆蓋 required 的訊息
        let result = validate(&FormData::new(), &rules);
        assert_eq!(result.errors["email"], "Invalid email");
        assert_eq!(result.errors["phone"], "Phone?");
    }

    #[test]
    fn test_validate_passes_clean_data() {
        let mut rules = BTreeMap::new();
        rules.insert("email".to_string(), FieldRule::email());
        let mut data = FormData::new();
        data.insert("email".to_string(), "an@example.com".to_string());

        let result = validate(&data, &rules);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }
}
