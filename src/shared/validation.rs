use lazy_static::lazy_static;
use regex::Regex;
use validator::{ValidationErrors, ValidationErrorsKind};

lazy_static! {
    /// Regex for a canonical complaint tracking id: the `C-` prefix followed
    /// by at least ten digits (time component plus random suffix)
    /// - Valid: "C-2507291234", "C-25072912345678"
    /// - Invalid: "C-123", "c-2507291234", "C-ABC", "2507291234"
    pub static ref TRACKING_ID_REGEX: Regex = Regex::new(r"^C-\d{10,}$").unwrap();

    /// Regex for a submitter contact number: digits with an optional leading
    /// `+`, 7 to 15 digits total
    /// - Valid: "9876543210", "+919876543210"
    /// - Invalid: "98-76", "phone", ""
    pub static ref CONTACT_REGEX: Regex = Regex::new(r"^\+?\d{7,15}$").unwrap();
}

/// Canonicalize a user-supplied tracking id before lookup: trim whitespace
/// and uppercase the alphabetic prefix. Lookups are case-insensitive by
/// normalizing here and storing ids already canonical.
pub fn normalize_tracking_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Flatten `validator` errors into one message per offending field, walking
/// nested structs so `submitter.name` style paths come out too.
pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<String> {
    fn walk(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
        for (field, kind) in errors.errors() {
            let path = if prefix.is_empty() {
                field.to_string()
            } else {
                format!("{}.{}", prefix, field)
            };
            match kind {
                ValidationErrorsKind::Field(errs) => {
                    for e in errs {
                        match &e.message {
                            Some(msg) => out.push(format!("{}: {}", path, msg)),
                            None => out.push(format!("{}: invalid value", path)),
                        }
                    }
                }
                ValidationErrorsKind::Struct(nested) => walk(&path, nested, out),
                ValidationErrorsKind::List(items) => {
                    for (index, nested) in items {
                        walk(&format!("{}[{}]", path, index), nested, out);
                    }
                }
            }
        }
    }

    let mut out = Vec::new();
    walk("", errors, &mut out);
    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Inner {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(nested)]
        submitter: Inner,
        #[validate(length(min = 1, message = "description is required"))]
        description: String,
    }

    #[test]
    fn test_tracking_id_regex_valid() {
        assert!(TRACKING_ID_REGEX.is_match("C-2507291234"));
        assert!(TRACKING_ID_REGEX.is_match("C-25072912345678"));
    }

    #[test]
    fn test_tracking_id_regex_invalid() {
        assert!(!TRACKING_ID_REGEX.is_match("C-123")); // too short
        assert!(!TRACKING_ID_REGEX.is_match("c-2507291234")); // lowercase prefix
        assert!(!TRACKING_ID_REGEX.is_match("C-ABCDEFGHIJ")); // non-digits
        assert!(!TRACKING_ID_REGEX.is_match("2507291234")); // missing prefix
        assert!(!TRACKING_ID_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_contact_regex() {
        assert!(CONTACT_REGEX.is_match("9876543210"));
        assert!(CONTACT_REGEX.is_match("+919876543210"));
        assert!(!CONTACT_REGEX.is_match("98-7654"));
        assert!(!CONTACT_REGEX.is_match("phone"));
        assert!(!CONTACT_REGEX.is_match(""));
    }

    #[test]
    fn test_normalize_tracking_id() {
        assert_eq!(normalize_tracking_id("  c-2507291234 "), "C-2507291234");
        assert_eq!(normalize_tracking_id("C-2507291234"), "C-2507291234");
    }

    #[test]
    fn test_collect_field_errors_includes_nested_paths() {
        let outer = Outer {
            submitter: Inner {
                name: "".to_string(),
            },
            description: "".to_string(),
        };
        let errors = outer.validate().unwrap_err();
        let collected = collect_field_errors(&errors);
        assert_eq!(collected.len(), 2);
        assert!(collected
            .iter()
            .any(|m| m == "submitter.name: name is required"));
        assert!(collected
            .iter()
            .any(|m| m == "description: description is required"));
    }
}
