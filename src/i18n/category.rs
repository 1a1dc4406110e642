// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation categories.
//!
//! Every enumerated constant family the SDK emits gets one variant. Each
//! variant knows three names: the camelCase identifier callers dispatch on
//! (`transportMode`), the SDK type name used in the documentation
//! (`TransportMode`), and the declaration name the table is rendered under
//! (`TRANSPORT_MODE_TRANSLATIONS`).

use serde::{Deserialize, Serialize};

/// One enumerated SDK constant family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    TransportMode,
    EventType,
    OccupantRole,
    SemanticTime,
    VenueSignificance,
    VenueType,
    UserContextUpdateCriteria,
    SegmentCategory,
    SegmentSubcategory,
    SegmentType,
    HarshDrivingEventType,
    DetectionStatus,
    LocationPermission,
}

impl Category {
    /// Identifier used by [`crate::i18n::Registry::translate_by_name`] and the CLI.
    pub fn id(&self) -> &'static str {
        match self {
            Category::TransportMode => "transportMode",
            Category::EventType => "eventType",
            Category::OccupantRole => "occupantRole",
            Category::SemanticTime => "semanticTime",
            Category::VenueSignificance => "venueSignificance",
            Category::VenueType => "venueType",
            Category::UserContextUpdateCriteria => "userContextUpdateCriteria",
            Category::SegmentCategory => "segmentCategory",
            Category::SegmentSubcategory => "segmentSubcategory",
            Category::SegmentType => "segmentType",
            Category::HarshDrivingEventType => "harshDrivingEventType",
            Category::DetectionStatus => "detectionStatus",
            Category::LocationPermission => "locationPermission",
        }
    }

    /// Parse a camelCase identifier. Case-sensitive, like the SDK field names.
    pub fn from_id(id: &str) -> Option<Category> {
        Category::all().iter().copied().find(|c| c.id() == id)
    }

    /// Type name as it appears in the SDK documentation.
    pub fn sdk_name(&self) -> &'static str {
        match self {
            Category::TransportMode => "TransportMode",
            Category::EventType => "EventType",
            Category::OccupantRole => "OccupantRole",
            Category::SemanticTime => "SemanticTime",
            Category::VenueSignificance => "VenueSignificance",
            Category::VenueType => "VenueType",
            Category::UserContextUpdateCriteria => "UserContextUpdateCriteria",
            Category::SegmentCategory => "SegmentCategory",
            Category::SegmentSubcategory => "SegmentSubcategory",
            Category::SegmentType => "SegmentType",
            Category::HarshDrivingEventType => "HarshDrivingEventType",
            Category::DetectionStatus => "DetectionStatus",
            Category::LocationPermission => "LocationPermission",
        }
    }

    /// Name the table is declared under when rendered as constant definitions.
    pub fn declaration_name(&self) -> &'static str {
        match self {
            Category::TransportMode => "TRANSPORT_MODE_TRANSLATIONS",
            Category::EventType => "EVENT_TYPE_TRANSLATIONS",
            Category::OccupantRole => "OCCUPANT_ROLE_TRANSLATIONS",
            Category::SemanticTime => "SEMANTIC_TIME_TRANSLATIONS",
            Category::VenueSignificance => "VENUE_SIGNIFICANCE_TRANSLATIONS",
            Category::VenueType => "VENUE_TYPE_TRANSLATIONS",
            Category::UserContextUpdateCriteria => "USER_CONTEXT_UPDATE_CRITERIA_TRANSLATIONS",
            Category::SegmentCategory => "SEGMENT_CATEGORY_TRANSLATIONS",
            Category::SegmentSubcategory => "SEGMENT_SUBCATEGORY_TRANSLATIONS",
            Category::SegmentType => "SEGMENT_TYPE_TRANSLATIONS",
            Category::HarshDrivingEventType => "HARSH_DRIVING_EVENT_TYPE_TRANSLATIONS",
            Category::DetectionStatus => "DETECTION_STATUS_TRANSLATIONS",
            Category::LocationPermission => "LOCATION_PERMISSION_TRANSLATIONS",
        }
    }

    /// All categories, in declaration order.
    pub fn all() -> &'static [Category] {
        &[
            Category::TransportMode,
            Category::EventType,
            Category::OccupantRole,
            Category::SemanticTime,
            Category::VenueSignificance,
            Category::VenueType,
            Category::UserContextUpdateCriteria,
            Category::SegmentCategory,
            Category::SegmentSubcategory,
            Category::SegmentType,
            Category::HarshDrivingEventType,
            Category::DetectionStatus,
            Category::LocationPermission,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_id(s).ok_or_else(|| {
            let known: Vec<&str> = Category::all().iter().map(|c| c.id()).collect();
            anyhow::anyhow!("unknown category '{}' (expected one of: {})", s, known.join(", "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_categories() {
        assert_eq!(Category::all().len(), 13);
    }

    #[test]
    fn id_roundtrip() {
        for category in Category::all() {
            assert_eq!(Category::from_id(category.id()), Some(*category));
        }
    }

    #[test]
    fn ids_are_case_sensitive() {
        assert_eq!(Category::from_id("TransportMode"), None);
        assert_eq!(Category::from_id("transportmode"), None);
    }

    #[test]
    fn from_str_lists_known_ids_on_error() {
        let err = "hoverboard".parse::<Category>().unwrap_err().to_string();
        assert!(err.contains("hoverboard"));
        assert!(err.contains("locationPermission"));
    }

    #[test]
    fn serde_uses_camel_case_ids() {
        let json = serde_json::to_string(&Category::HarshDrivingEventType).unwrap();
        assert_eq!(json, "\"harshDrivingEventType\"");
        let parsed: Category = serde_json::from_str("\"segmentSubcategory\"").unwrap();
        assert_eq!(parsed, Category::SegmentSubcategory);
    }

    #[test]
    fn declaration_names_end_with_translations() {
        for category in Category::all() {
            assert!(category.declaration_name().ends_with("_TRANSLATIONS"));
        }
    }
}
