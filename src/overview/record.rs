// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One software entry on the overview page.
///
/// Decoding is lenient about absence and strict about shape: a missing key or a
/// JSON `null` yields an empty string, while a value of the wrong type fails.
/// Only JSON objects are records. Unknown keys are ignored and a repeated key
/// keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SoftwareRecord {
    pub slug: String,
    pub brand_name: String,
    pub short_statement: String,
}

impl<'de> Deserialize<'de> for SoftwareRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SoftwareRecordVisitor)
    }
}

struct SoftwareRecordVisitor;

impl<'de> Visitor<'de> for SoftwareRecordVisitor {
    type Value = SoftwareRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a software object with slug, brand_name and short_statement")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut record = SoftwareRecord::default();
        while let Some(key) = map.next_key::<String>()? {
            let field = match key.as_str() {
                "slug" => &mut record.slug,
                "brand_name" => &mut record.brand_name,
                "short_statement" => &mut record.short_statement,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };
            *field = map.next_value::<Option<String>>()?.unwrap_or_default();
        }
        Ok(record)
    }
}

/// Decode a JSON array of software records, preserving input order.
///
/// A top-level `null` decodes as an empty sequence and a `null` element as an
/// empty record.
///
/// # Example
/// ```
/// use codemeta_overview::overview::decode_records;
///
/// let records = decode_records(br#"[{"slug":"rsd","brand_name":"RSD"}]"#).unwrap();
/// assert_eq!(records[0].brand_name, "RSD");
/// assert_eq!(records[0].short_statement, "");
/// ```
pub fn decode_records(input: &[u8]) -> Result<Vec<SoftwareRecord>, serde_json::Error> {
    let records: Option<Vec<Option<SoftwareRecord>>> = serde_json::from_slice(input)?;
    Ok(records
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_records_in_order() {
        let input = br#"[
            {"slug": "b-tool", "brand_name": "B Tool", "short_statement": "Second letter"},
            {"slug": "a-tool", "brand_name": "A Tool", "short_statement": "First letter"}
        ]"#;

        let records = decode_records(input).unwrap();
        let slugs: Vec<&str> = records.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b-tool", "a-tool"]);
        assert_eq!(records[1].short_statement, "First letter");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let records = decode_records(br#"[{"slug": "x"}]"#).unwrap();

        assert_eq!(
            records,
            vec![SoftwareRecord {
                slug: "x".to_string(),
                brand_name: String::new(),
                short_statement: String::new(),
            }]
        );
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let records = decode_records(br#"[{"slug": "x", "brand_name": null}]"#).unwrap();
        assert_eq!(records[0].brand_name, "");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let input = br#"[{"slug": "x", "is_published": true, "id": 7}]"#;
        let records = decode_records(input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug, "x");
    }

    #[test]
    fn test_empty_array_and_null_document() {
        assert!(decode_records(b"[]").unwrap().is_empty());
        assert!(decode_records(b"null").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_slugs_kept() {
        let input = br#"[{"slug": "dup", "brand_name": "One"}, {"slug": "dup", "brand_name": "Two"}]"#;
        let records = decode_records(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].brand_name, "One");
        assert_eq!(records[1].brand_name, "Two");
    }

    #[test]
    fn test_shape_mismatches_fail() {
        assert!(decode_records(b"not json").is_err());
        assert!(decode_records(br#"{"slug": "x"}"#).is_err());
        assert!(decode_records(br#"[{"slug": 5}]"#).is_err());
        assert!(decode_records(br#"[{"slug": "x", "brand_name": ["a"]}]"#).is_err());
        assert!(decode_records(br#"["x"]"#).is_err());
        assert!(decode_records(br#"[{"slug": "x"}"#).is_err());
    }

    #[test]
    fn test_array_elements_are_not_records() {
        assert!(decode_records(br#"[["x", "y", "z"]]"#).is_err());
        assert!(decode_records(br#"[[]]"#).is_err());
        assert!(decode_records(br#"[{"slug": "x"}, ["a", "B", "c"]]"#).is_err());
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let input = br#"[{"slug": "a", "slug": "b", "brand_name": "B"}]"#;
        let records = decode_records(input).unwrap();
        assert_eq!(records[0].slug, "b");
        assert_eq!(records[0].brand_name, "B");

        // null still means empty when it comes last
        let records = decode_records(br#"[{"slug": "a", "slug": null}]"#).unwrap();
        assert_eq!(records[0].slug, "");
    }

    #[test]
    fn test_null_element_is_empty_record() {
        let records = decode_records(br#"[null, {"slug": "x"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], SoftwareRecord::default());
        assert_eq!(records[1].slug, "x");
    }
}
