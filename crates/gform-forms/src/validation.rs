//! Type-directed validation of submitted values.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::error::{ErrorReason, ValidationErrors};
use crate::field::{Field, FieldKind};
use crate::params::{to_id_keyed, FieldMap, FieldValue, Values};

/// Stands in for a value the caller did not submit.
static ABSENT: FieldValue = FieldValue::Single(String::new());

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$").ok()
});

/// Validates name-keyed values against the fields.
///
/// Values are first translated to id-keyed form through `map`, then looked up
/// by each field's id. A required field without a value reports `Empty`. An
/// optional field without a value still runs its kind check against the empty
/// string, so an absent optional number or choice reports `Invalid value`.
/// Returns every failure in field order.
///
/// # Example
///
/// ```
/// use gform_forms::{validate, Field, FieldKind, FieldMap, Values};
///
/// let fields = vec![Field::new("entry.1", "email", "", FieldKind::Email).required()];
/// let map = FieldMap::from_fields(&fields);
///
/// let mut values = Values::new();
/// values.insert("email".into(), "not-an-email".into());
/// let errors = validate(&values, &fields, &map).unwrap_err();
/// assert_eq!(errors.messages(), vec!["email: Invalid value"]);
///
/// values.insert("email".into(), "a@b.com".into());
/// assert!(validate(&values, &fields, &map).is_ok());
/// ```
pub fn validate(submitted: &Values, fields: &[Field], map: &FieldMap) -> Result<(), ValidationErrors> {
    let params = to_id_keyed(submitted, map);
    let mut errors = ValidationErrors::new();

    for field in fields {
        let value = params.get(&field.id);

        if field.required && !value.is_some_and(|v| !v.is_empty()) {
            errors.add(&field.name, ErrorReason::Empty);
            continue;
        }

        if !check_value(&field.kind, value.unwrap_or(&ABSENT)) {
            errors.add(&field.name, ErrorReason::InvalidValue);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Runs the kind-specific check for a present, non-empty value.
pub fn check_value(kind: &FieldKind, value: &FieldValue) -> bool {
    match kind {
        FieldKind::Number => value.as_single().is_some_and(is_numeric),
        FieldKind::Email => value.as_single().is_some_and(is_email),
        FieldKind::Url => value.as_single().is_some_and(is_url),
        FieldKind::Radio { values } | FieldKind::Select { values } => value
            .as_single()
            .is_some_and(|v| values.iter().any(|allowed| allowed == v)),
        FieldKind::Checkbox { values } => match value {
            FieldValue::Multiple(items) => items
                .iter()
                .all(|item| values.iter().any(|allowed| allowed == item)),
            FieldValue::Single(_) => false,
        },
        FieldKind::Text {
            pattern: Some(pattern),
        } => value
            .as_single()
            .is_some_and(|v| matches_pattern(pattern, v)),
        FieldKind::Text { pattern: None } | FieldKind::Textarea | FieldKind::Other(_) => true,
    }
}

/// Returns true if the value parses as a finite number.
pub fn is_numeric(value: &str) -> bool {
    value
        .trim_start()
        .parse::<f64>()
        .is_ok_and(f64::is_finite)
}

/// Returns true for a syntactically valid email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

/// Returns true for an absolute URL with a host.
pub fn is_url(value: &str) -> bool {
    url::Url::parse(value).is_ok_and(|url| url.has_host())
}

/// Compiles `pattern` and tests it against `value` without anchoring.
///
/// An invalid pattern never matches.
pub fn matches_pattern(pattern: &str, value: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(value),
        Err(err) => {
            warn!(pattern, error = %err, "invalid field pattern");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, FieldValue)]) -> Values {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    fn run(fields: &[Field], pairs: &[(&str, FieldValue)]) -> Result<(), Vec<String>> {
        let map = FieldMap::from_fields(fields);
        validate(&values(pairs), fields, &map).map_err(|e| e.messages())
    }

    fn choices() -> Vec<String> {
        vec!["Red".into(), "Blue".into(), "Green".into()]
    }

    #[test]
    fn test_email_field_examples() {
        let fields = vec![Field::new("entry.1", "email", "", FieldKind::Email).required()];
        assert_eq!(
            run(&fields, &[("email", "".into())]),
            Err(vec!["email: Empty".to_string()])
        );
        assert_eq!(
            run(&fields, &[("email", "not-an-email".into())]),
            Err(vec!["email: Invalid value".to_string()])
        );
        assert_eq!(run(&fields, &[("email", "a@b.com".into())]), Ok(()));
    }

    #[test]
    fn test_missing_required_reports_empty_only() {
        let fields = vec![Field::new("entry.1", "age", "", FieldKind::Number).required()];
        assert_eq!(run(&fields, &[]), Err(vec!["age: Empty".to_string()]));
    }

    #[test]
    fn test_missing_optional_still_checked() {
        let fields = vec![Field::new("entry.1", "age", "", FieldKind::Number)];
        assert_eq!(run(&fields, &[]), Err(vec!["age: Invalid value".to_string()]));
        assert_eq!(
            run(&fields, &[("age", "".into())]),
            Err(vec!["age: Invalid value".to_string()])
        );
    }

    #[test]
    fn test_missing_optional_by_kind() {
        let fields = vec![
            Field::new("entry.1", "email", "", FieldKind::Email),
            Field::new("entry.2", "site", "", FieldKind::Url),
            Field::new("entry.3", "colour", "", FieldKind::Radio { values: choices() }),
            Field::new("entry.4", "size", "", FieldKind::Select { values: choices() }),
            Field::new("entry.5", "pets", "", FieldKind::Checkbox { values: choices() }),
            Field::new(
                "entry.6",
                "code",
                "",
                FieldKind::Text {
                    pattern: Some("[0-9]{3}".into()),
                },
            ),
            Field::new("entry.7", "free", "", FieldKind::Text { pattern: None }),
            Field::new("entry.8", "notes", "", FieldKind::Textarea),
            Field::new("entry.9", "when", "", FieldKind::Other("date".into())),
        ];
        assert_eq!(
            run(&fields, &[]),
            Err(vec![
                "email: Invalid value".to_string(),
                "site: Invalid value".to_string(),
                "colour: Invalid value".to_string(),
                "size: Invalid value".to_string(),
                "pets: Invalid value".to_string(),
                "code: Invalid value".to_string(),
            ])
        );
    }

    #[test]
    fn test_optional_checkbox_accepts_empty_list() {
        let fields = vec![Field::new(
            "entry.3",
            "colours",
            "",
            FieldKind::Checkbox { values: choices() },
        )];
        assert_eq!(
            run(&fields, &[("colours", FieldValue::Multiple(vec![]))]),
            Ok(())
        );
        // a bare empty string is not a list
        assert_eq!(
            run(&fields, &[("colours", "".into())]),
            Err(vec!["colours: Invalid value".to_string()])
        );
    }

    #[test]
    fn test_zero_is_a_present_value() {
        // "0" counts as submitted, unlike loosely typed emptiness checks
        let fields = vec![
            Field::new("entry.1", "count", "", FieldKind::Number).required(),
            Field::new("entry.2", "note", "", FieldKind::Text { pattern: None }).required(),
        ];
        assert_eq!(
            run(&fields, &[("count", "0".into()), ("note", "0".into())]),
            Ok(())
        );
    }

    #[test]
    fn test_number() {
        let fields = vec![Field::new("entry.1", "age", "", FieldKind::Number)];
        assert_eq!(run(&fields, &[("age", "42".into())]), Ok(()));
        assert_eq!(run(&fields, &[("age", "-1.5e3".into())]), Ok(()));
        assert_eq!(run(&fields, &[("age", " 7".into())]), Ok(()));
        assert!(run(&fields, &[("age", "forty".into())]).is_err());
        assert!(run(&fields, &[("age", "NaN".into())]).is_err());
        assert!(run(&fields, &[("age", "inf".into())]).is_err());
        assert!(run(&fields, &[("age", vec!["1"].into())]).is_err());
    }

    #[test]
    fn test_url() {
        assert!(is_url("https://example.com/path?q=1"));
        assert!(is_url("http://localhost:8080"));
        assert!(!is_url("example.com"));
        assert!(!is_url("not a url"));
    }

    #[test]
    fn test_email() {
        assert!(is_email("user.name+tag@domain.co.uk"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
        assert!(!is_email("user@localhost"));
        assert!(!is_email("two@@example.com"));
    }

    #[test]
    fn test_radio_and_select_membership() {
        for kind in [
            FieldKind::Radio { values: choices() },
            FieldKind::Select { values: choices() },
        ] {
            let fields = vec![Field::new("entry.2", "colour", "", kind)];
            assert_eq!(run(&fields, &[("colour", "Blue".into())]), Ok(()));
            assert_eq!(
                run(&fields, &[("colour", "blue".into())]),
                Err(vec!["colour: Invalid value".to_string()])
            );
            assert!(run(&fields, &[("colour", vec!["Blue"].into())]).is_err());
        }
    }

    #[test]
    fn test_checkbox() {
        let fields = vec![Field::new(
            "entry.3",
            "colours",
            "",
            FieldKind::Checkbox { values: choices() },
        )];
        // non-sequence
        assert_eq!(
            run(&fields, &[("colours", "Red".into())]),
            Err(vec!["colours: Invalid value".to_string()])
        );
        // unknown option
        assert_eq!(
            run(&fields, &[("colours", vec!["Red", "Pink"].into())]),
            Err(vec!["colours: Invalid value".to_string()])
        );
        // subsets
        assert_eq!(run(&fields, &[("colours", vec!["Red"].into())]), Ok(()));
        assert_eq!(
            run(&fields, &[("colours", vec!["Green", "Red", "Blue"].into())]),
            Ok(())
        );
    }

    #[test]
    fn test_required_checkbox_with_empty_list() {
        let fields = vec![Field::new(
            "entry.3",
            "colours",
            "",
            FieldKind::Checkbox { values: choices() },
        )
        .required()];
        assert_eq!(
            run(&fields, &[("colours", FieldValue::Multiple(vec![]))]),
            Err(vec!["colours: Empty".to_string()])
        );
    }

    #[test]
    fn test_text_pattern_is_unanchored() {
        let fields = vec![Field::new(
            "entry.4",
            "code",
            "",
            FieldKind::Text {
                pattern: Some("[0-9]{3}".into()),
            },
        )];
        assert_eq!(run(&fields, &[("code", "abc123def".into())]), Ok(()));
        assert!(run(&fields, &[("code", "12".into())]).is_err());
    }

    #[test]
    fn test_invalid_pattern_fails_value() {
        assert!(!matches_pattern("([a-z", "abc"));
    }

    #[test]
    fn test_unchecked_kinds() {
        let fields = vec![
            Field::new("entry.5", "notes", "", FieldKind::Textarea),
            Field::new("entry.6", "when", "", FieldKind::Other("date".into())),
            Field::new("entry.7", "free", "", FieldKind::Text { pattern: None }),
        ];
        assert_eq!(
            run(
                &fields,
                &[
                    ("notes", "anything".into()),
                    ("when", "whenever".into()),
                    ("free", vec!["a", "b"].into()),
                ]
            ),
            Ok(())
        );
    }

    #[test]
    fn test_errors_follow_field_order_and_are_deterministic() {
        let fields = vec![
            Field::new("entry.1", "email", "", FieldKind::Email).required(),
            Field::new("entry.2", "age", "", FieldKind::Number).required(),
        ];
        let input = [("age", FieldValue::from("x"))];
        let first = run(&fields, &input);
        let second = run(&fields, &input);
        assert_eq!(
            first,
            Err(vec!["email: Empty".to_string(), "age: Invalid value".to_string()])
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let fields = vec![Field::new("entry.1", "email", "", FieldKind::Email).required()];
        assert_eq!(
            run(&fields, &[("foo", "a@b.com".into())]),
            Err(vec!["email: Empty".to_string()])
        );
    }
}
