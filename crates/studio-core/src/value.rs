//! # Document Value Accessors
//!
//! Documents arrive from the editing surface as JSON values. These
//! accessors are the single place where the "not provided" policy lives:
//! an absent field, a `null`, and an empty or whitespace-only string are
//! all the same thing to every rule. Required rules fail on them and
//! optional rules skip them.

use serde_json::Value;

use crate::ident::DocRef;

/// Read a string field, treating blank strings as not provided.
pub fn str_field<'a>(record: &'a Value, name: &str) -> Option<&'a str> {
    match record.get(name)?.as_str() {
        Some(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

/// Read a numeric field.
pub fn num_field(record: &Value, name: &str) -> Option<f64> {
    record.get(name)?.as_f64()
}

/// Read a boolean field. Absent means `false` was never asserted.
pub fn bool_field(record: &Value, name: &str) -> Option<bool> {
    record.get(name)?.as_bool()
}

/// Read an array field.
pub fn array_field<'a>(record: &'a Value, name: &str) -> Option<&'a Vec<Value>> {
    record.get(name)?.as_array()
}

/// Read a reference field of the form `{"_ref": "..."}`.
pub fn ref_field(record: &Value, name: &str) -> Option<DocRef> {
    as_ref(record.get(name)?)
}

/// Interpret a value as a document reference.
///
/// References are objects carrying a non-blank `_ref` key. Anything else
/// is not a reference.
pub fn as_ref(value: &Value) -> Option<DocRef> {
    let target = value.get("_ref")?.as_str()?;
    if target.trim().is_empty() {
        None
    } else {
        Some(DocRef(target.to_string()))
    }
}

/// Whether a field carries a usable value.
///
/// Blank strings and `null` do not count; `false`, `0`, and empty arrays
/// do. Every rule shares this policy: absent and empty string mean the
/// same thing.
pub fn is_provided(record: &Value, name: &str) -> bool {
    match record.get(name) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_str_field_blank_is_absent() {
        let record = json!({"name": "", "bio": "   ", "city": "Detroit"});
        assert_eq!(str_field(&record, "name"), None);
        assert_eq!(str_field(&record, "bio"), None);
        assert_eq!(str_field(&record, "city"), Some("Detroit"));
        assert_eq!(str_field(&record, "missing"), None);
    }

    #[test]
    fn test_str_field_non_string_is_absent() {
        let record = json!({"count": 3});
        assert_eq!(str_field(&record, "count"), None);
    }

    #[test]
    fn test_num_and_bool_fields() {
        let record = json!({"coverCharge": 12.5, "isFree": false});
        assert_eq!(num_field(&record, "coverCharge"), Some(12.5));
        assert_eq!(bool_field(&record, "isFree"), Some(false));
        assert_eq!(num_field(&record, "missing"), None);
    }

    #[test]
    fn test_ref_field() {
        let record = json!({"headline": {"_ref": "artist-42"}});
        assert_eq!(
            ref_field(&record, "headline"),
            Some(DocRef("artist-42".into()))
        );
        assert_eq!(ref_field(&record, "missing"), None);

        let blank = json!({"headline": {"_ref": ""}});
        assert_eq!(ref_field(&blank, "headline"), None);
    }

    #[test]
    fn test_as_ref_non_object() {
        assert_eq!(as_ref(&json!("artist-42")), None);
        assert_eq!(as_ref(&json!({"_type": "reference"})), None);
    }

    #[test]
    fn test_is_provided_policy() {
        let record = json!({
            "empty": "",
            "null": null,
            "zero": 0,
            "no": false,
            "list": []
        });
        assert!(!is_provided(&record, "empty"));
        assert!(!is_provided(&record, "null"));
        assert!(!is_provided(&record, "missing"));
        assert!(is_provided(&record, "zero"));
        assert!(is_provided(&record, "no"));
        assert!(is_provided(&record, "list"));
    }
}
