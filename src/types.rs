// SPDX-License-Identifier: PMPL-1.0-or-later

//! SDK object shapes consumed by the translators.
//!
//! These mirror the JSON the Sentiance SDK hands to application code. Only
//! the fields that carry enumerated constants are modelled; everything else
//! (`id`, timestamps, locations, ...) rides along in `extra` and is written
//! back unchanged.
//!
//! Optional fields deserialise an empty string as absent and always
//! serialise absence as an explicit `null`.

use serde::{Deserialize, Deserializer, Serialize};

/// Fields not modelled explicitly, preserved verbatim.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// A place the user visited or lives/works at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    #[serde(rename = "type")]
    pub venue_type: String,
    pub significance: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A timeline event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub transport_mode: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub occupant_role: Option<String>,
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A behavioural segment the user belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub category: String,
    pub subcategory: String,
    #[serde(rename = "type")]
    pub segment_type: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Snapshot of what the SDK knows about the user right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub semantic_time: String,
    pub events: Vec<Event>,
    pub active_segments: Vec<Segment>,
    #[serde(default)]
    pub home: Option<Venue>,
    #[serde(default)]
    pub work: Option<Venue>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Venue {
    pub fn new(venue_type: impl Into<String>, significance: impl Into<String>) -> Self {
        Self {
            venue_type: venue_type.into(),
            significance: significance.into(),
            extra: Extra::new(),
        }
    }
}

impl Event {
    /// An event with only its type set.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            transport_mode: None,
            occupant_role: None,
            venue: None,
            extra: Extra::new(),
        }
    }
}

impl Segment {
    pub fn new(
        category: impl Into<String>,
        subcategory: impl Into<String>,
        segment_type: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
            segment_type: segment_type.into(),
            extra: Extra::new(),
        }
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_optional_fields_default_to_none() {
        let event: Event = serde_json::from_value(json!({ "type": "STATIONARY" })).unwrap();
        assert_eq!(event, Event::new("STATIONARY"));
    }

    #[test]
    fn empty_optional_string_is_absent() {
        let event: Event =
            serde_json::from_value(json!({ "type": "IN_TRANSPORT", "transportMode": "" }))
                .unwrap();
        assert_eq!(event.transport_mode, None);
    }

    #[test]
    fn extra_fields_survive_roundtrip() {
        let input = json!({
            "id": "evt-1",
            "startTime": "2024-05-01T08:00:00Z",
            "type": "IN_TRANSPORT",
            "transportMode": "CAR",
            "occupantRole": null,
            "venue": null
        });
        let event: Event = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(event.extra.get("id"), Some(&json!("evt-1")));
        assert_eq!(serde_json::to_value(&event).unwrap(), input);
    }

    #[test]
    fn absent_optionals_serialise_as_null() {
        let value = serde_json::to_value(Event::new("STATIONARY")).unwrap();
        assert_eq!(
            value,
            json!({ "type": "STATIONARY", "transportMode": null, "occupantRole": null, "venue": null })
        );
    }

    #[test]
    fn user_context_requires_semantic_time() {
        let result: Result<UserContext, _> =
            serde_json::from_value(json!({ "events": [], "activeSegments": [] }));
        assert!(result.is_err());
    }
}
