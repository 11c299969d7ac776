//! Field readers for hand-edited or legacy JSON files.
//!
//! Each reader accepts any JSON value and falls back to the field's empty
//! value instead of failing, so one odd field never costs the whole file.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings as-is; numbers and booleans in their JSON spelling; anything else `""`.
pub(crate) fn text<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Only a JSON `true` counts.
pub(crate) fn flag<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(d)?, Value::Bool(true)))
}

/// Non-blank string, otherwise absent.
pub(crate) fn optional_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// String items of an array; non-strings and non-arrays are dropped.
pub(crate) fn string_list<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "super::text")]
        text: String,
        #[serde(default, deserialize_with = "super::flag")]
        flag: bool,
        #[serde(default, deserialize_with = "super::optional_text")]
        optional: Option<String>,
        #[serde(default, deserialize_with = "super::string_list")]
        list: Vec<String>,
    }

    fn read(v: serde_json::Value) -> Fields {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn text_stringifies_scalars_and_blanks_the_rest() {
        assert_eq!(read(json!({"text": "a"})).text, "a");
        assert_eq!(read(json!({"text": 5551234})).text, "5551234");
        assert_eq!(read(json!({"text": true})).text, "true");
        assert_eq!(read(json!({"text": null})).text, "");
        assert_eq!(read(json!({"text": ["x"]})).text, "");
    }

    #[test]
    fn flag_is_true_only_for_true() {
        assert!(read(json!({"flag": true})).flag);
        assert!(!read(json!({"flag": null})).flag);
        assert!(!read(json!({"flag": "yes"})).flag);
        assert!(!read(json!({"flag": 1})).flag);
    }

    #[test]
    fn optional_text_treats_blank_as_absent() {
        assert_eq!(read(json!({"optional": "2024-01-01"})).optional.as_deref(), Some("2024-01-01"));
        assert_eq!(read(json!({"optional": "  "})).optional, None);
        assert_eq!(read(json!({"optional": 7})).optional, None);
    }

    #[test]
    fn string_list_keeps_only_strings() {
        assert_eq!(read(json!({"list": ["a", 1, null, "b"]})).list, vec!["a", "b"]);
        assert!(read(json!({"list": "a,b"})).list.is_empty());
    }

    #[test]
    fn missing_keys_take_defaults() {
        let p = read(json!({}));
        assert_eq!(p.text, "");
        assert!(!p.flag);
        assert_eq!(p.optional, None);
        assert!(p.list.is_empty());
    }
}
