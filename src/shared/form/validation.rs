use std::collections::BTreeMap;
use std::sync::LazyLock;

use email_address::EmailAddress;
use regex::Regex;
use serde::Serialize;

/// Field name → message of the first rule that field failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// A static validation rule. Every rule except `Required` passes on an empty
/// value, so a field is only length/pattern-checked once something was typed.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    Pattern(&'static LazyLock<Regex>, &'static str),
    Email(&'static str),
}

impl Rule {
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        let empty = value.trim().is_empty();

        match *self {
            Rule::Required(message) if empty => Err(message),
            Rule::MinLength(min, message) if !empty && value.chars().count() < min => Err(message),
            Rule::Pattern(regex, message) if !empty && !regex.is_match(value) => Err(message),
            Rule::Email(message) if !empty && !is_valid_email(value.trim()) => Err(message),
            _ => Ok(()),
        }
    }
}

/// Runs `rules` in order and records the first failure for `field`.
pub fn check_field(errors: &mut FieldErrors, field: &str, value: &str, rules: &[Rule]) {
    if let Some(message) = rules.iter().find_map(|rule| rule.check(value).err()) {
        errors.insert(field, message);
    }
}

/// Image URLs stored on records must point at a common raster format.
pub static IMAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://).+\.(jpg|jpeg|png|gif|webp)$").expect("valid image url regex")
});

pub static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

fn is_valid_email(value: &str) -> bool {
    // A bare `user@host` is RFC-valid but never a real login.
    EmailAddress::is_valid(value)
        && value
            .rsplit_once('@')
            .map(|(_, domain)| domain.contains('.') && !domain.ends_with('.'))
            .unwrap_or(false)
}

/// Splits a comma separated input ("React, Node.js, MongoDB") into trimmed,
/// non-empty entries, keeping their order.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rule = Rule::Required("Title is required");
        assert_eq!(rule.check(""), Err("Title is required"));
        assert_eq!(rule.check("   "), Err("Title is required"));
        assert_eq!(rule.check("x"), Ok(()));
    }

    #[test]
    fn test_min_length_counts_characters() {
        let rule = Rule::MinLength(5, "Title must be at least 5 characters");
        assert_eq!(rule.check("Hi"), Err("Title must be at least 5 characters"));
        assert_eq!(rule.check("Héllo"), Ok(()));
        // empty is Required's job
        assert_eq!(rule.check(""), Ok(()));
    }

    #[test]
    fn test_image_url_pattern() {
        let rule = Rule::Pattern(&IMAGE_URL, "Please enter a valid image URL");
        assert_eq!(rule.check("https://x/y.jpg"), Ok(()));
        assert_eq!(rule.check("http://cdn.site/a/b.WEBP"), Ok(()));
        assert_eq!(
            rule.check("ftp://x/y.jpg"),
            Err("Please enter a valid image URL")
        );
        assert_eq!(
            rule.check("https://x/y.pdf"),
            Err("Please enter a valid image URL")
        );
    }

    #[test]
    fn test_email_rule() {
        let rule = Rule::Email("Invalid email address");
        assert_eq!(rule.check("admin@example.com"), Ok(()));
        assert_eq!(rule.check("admin@localhost"), Err("Invalid email address"));
        assert_eq!(rule.check("not-an-email"), Err("Invalid email address"));
    }

    #[test]
    fn test_check_field_reports_first_failure_only() {
        let mut errors = FieldErrors::default();
        check_field(
            &mut errors,
            "title",
            "",
            &[
                Rule::Required("Title is required"),
                Rule::MinLength(5, "Title must be at least 5 characters"),
            ],
        );

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("title"), Some("Title is required"));
    }

    #[test]
    fn test_split_list_trims_and_drops_empty_entries() {
        assert_eq!(
            split_list("React, Node.js ,, MongoDB ,"),
            vec!["React", "Node.js", "MongoDB"]
        );
        assert!(split_list("  ").is_empty());
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::default().into_result().is_ok());

        let mut errors = FieldErrors::default();
        errors.insert("name", "Skill name is required");
        assert_eq!(
            errors.into_result().unwrap_err().get("name"),
            Some("Skill name is required")
        );
    }
}
