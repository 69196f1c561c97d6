//! Dataset domain model: the two upstream sources, their fixed
//! field-projection tables, and shape-aware decoding of fetched JSON.
//!
//! The two sources disagree about their top-level shape — the people API
//! nests its records under a `results` key while the users API returns a
//! bare array. That asymmetry is part of the upstream contract and is
//! modeled explicitly by [`Shape`].

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::error::DecodeError;

/// Default upstream endpoints (see `SourcesConfig` for env overrides).
pub const PEOPLE_URL: &str = "https://swapi.dev/api/people";
pub const USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// How a source wraps its records at the top level of the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `{ "results": [ record, ... ] }`
    NestedResults,
    /// `[ record, ... ]`
    BareArray,
}

/// One upstream source: display label, URL, and expected response shape.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub label: &'static str,
    pub url: Url,
    pub shape: Shape,
}

impl Endpoint {
    /// The people source (nested shape).
    pub fn people(url: Url) -> Self {
        Self {
            label: "Swapi Data",
            url,
            shape: Shape::NestedResults,
        }
    }

    /// The users source (flat shape).
    pub fn users(url: Url) -> Self {
        Self {
            label: "JSPH Data",
            url,
            shape: Shape::BareArray,
        }
    }

    /// The field-projection table for this source's records.
    pub fn fields(&self) -> &'static [FieldProjection] {
        match self.shape {
            Shape::NestedResults => PEOPLE_FIELDS,
            Shape::BareArray => USER_FIELDS,
        }
    }
}

/// One labeled line of a card: which record key to read and how to title it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldProjection {
    pub title: &'static str,
    pub key: &'static str,
}

impl FieldProjection {
    const fn new(title: &'static str, key: &'static str) -> Self {
        Self { title, key }
    }
}

/// Projection table for people records. Declaration order is display order.
pub const PEOPLE_FIELDS: &[FieldProjection] = &[
    FieldProjection::new("Eye Color", "eye_color"),
    FieldProjection::new("Birth Year", "birth_year"),
    FieldProjection::new("Hair Color", "hair_color"),
    FieldProjection::new("Height", "height"),
];

/// Projection table for user records. Declaration order is display order.
pub const USER_FIELDS: &[FieldProjection] = &[
    FieldProjection::new("Username", "username"),
    FieldProjection::new("Email", "email"),
    FieldProjection::new("Phone", "phone"),
    FieldProjection::new("Website", "website"),
];

/// One fetched record: an open mapping from string keys to JSON values.
///
/// Record shapes are unknown at compile time; field access goes through
/// [`Record::field`], which makes the missing-field case an explicit
/// `Option` rather than an implicit hole.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Look up a field by key.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The text rendered for a field: strings verbatim, missing and null as
    /// empty text (the detail line still appears), anything else in its
    /// JSON notation.
    pub fn field_text(&self, key: &str) -> String {
        match self.field(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// The record's display name, from its `name` field.
    pub fn display_name(&self) -> String {
        match self.field("name") {
            Some(Value::String(s)) => s.clone(),
            _ => "(unnamed)".to_string(),
        }
    }
}

/// Decode a fetched JSON body into records, honouring the endpoint's shape.
///
/// Entries that are not JSON objects are skipped with a log line rather
/// than failing the whole dataset.
pub fn decode(endpoint: &Endpoint, value: &Value) -> Result<Vec<Record>, DecodeError> {
    let entries = match endpoint.shape {
        Shape::NestedResults => value
            .as_object()
            .and_then(|obj| obj.get("results"))
            .and_then(Value::as_array)
            .ok_or(DecodeError::MissingResults {
                label: endpoint.label,
                found: json_type_name(value),
            })?,
        Shape::BareArray => value.as_array().ok_or(DecodeError::NotAnArray {
            label: endpoint.label,
            found: json_type_name(value),
        })?,
    };

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.as_object() {
            Some(map) => records.push(Record::new(map.clone())),
            None => eprintln!(
                "{}: skipping non-object entry ({})",
                endpoint.label,
                json_type_name(entry)
            ),
        }
    }
    Ok(records)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn people_endpoint() -> Endpoint {
        Endpoint::people(Url::parse(PEOPLE_URL).unwrap())
    }

    fn users_endpoint() -> Endpoint {
        Endpoint::users(Url::parse(USERS_URL).unwrap())
    }

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => Record::new(map),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn field_tables_keep_declaration_order() {
        let titles: Vec<_> = PEOPLE_FIELDS.iter().map(|f| f.title).collect();
        assert_eq!(titles, vec!["Eye Color", "Birth Year", "Hair Color", "Height"]);

        let keys: Vec<_> = USER_FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["username", "email", "phone", "website"]);
    }

    #[test]
    fn missing_field_renders_empty_text() {
        let rec = record(json!({ "name": "Luke" }));
        assert_eq!(rec.field("height"), None);
        assert_eq!(rec.field_text("height"), "");
    }

    #[test]
    fn null_field_renders_empty_text() {
        let rec = record(json!({ "height": null }));
        assert_eq!(rec.field_text("height"), "");
    }

    #[test]
    fn string_fields_render_verbatim_and_numbers_in_json_notation() {
        let rec = record(json!({ "height": "172", "id": 7 }));
        assert_eq!(rec.field_text("height"), "172");
        assert_eq!(rec.field_text("id"), "7");
    }

    #[test]
    fn display_name_falls_back_when_absent() {
        assert_eq!(record(json!({ "name": "Leanne" })).display_name(), "Leanne");
        assert_eq!(record(json!({})).display_name(), "(unnamed)");
        assert_eq!(record(json!({ "name": 42 })).display_name(), "(unnamed)");
    }

    #[test]
    fn decode_unwraps_the_results_envelope() {
        let body = json!({ "results": [{ "name": "Luke" }, { "name": "Leia" }] });
        let records = decode(&people_endpoint(), &body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].display_name(), "Luke");
    }

    #[test]
    fn decode_accepts_a_bare_array() {
        let body = json!([{ "name": "Leanne" }]);
        let records = decode(&users_endpoint(), &body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].display_name(), "Leanne");
    }

    #[test]
    fn decode_rejects_a_bare_array_for_the_nested_shape() {
        let err = decode(&people_endpoint(), &json!([{ "name": "Luke" }])).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingResults {
                label: "Swapi Data",
                found: "array",
            }
        );
    }

    #[test]
    fn decode_rejects_an_object_for_the_flat_shape() {
        let err = decode(&users_endpoint(), &json!({ "users": [] })).unwrap_err();
        assert_eq!(
            err,
            DecodeError::NotAnArray {
                label: "JSPH Data",
                found: "object",
            }
        );
    }

    #[test]
    fn decode_skips_non_object_entries() {
        let body = json!([{ "name": "Leanne" }, 42, "stray"]);
        let records = decode(&users_endpoint(), &body).unwrap();
        assert_eq!(records.len(), 1);
    }
}
