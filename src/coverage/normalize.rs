// SPDX-License-Identifier: PMPL-1.0-or-later

//! iOS-style prefixed constant names
//!
//! The iOS SDK documents constants as `SENT<Type><Value>` (for example
//! `SENTSegmentTypeBarGoer`), while the dictionary keys use the
//! SCREAMING_SNAKE_CASE form (`BAR_GOER`). Normalisation maps the former to
//! the latter.

use crate::i18n::Category;

/// `(prefix, category)` for every known iOS type prefix.
pub const PREFIX_RULES: &[(&str, Category)] = &[
    ("SENTSegmentType", Category::SegmentType),
    ("SENTTransportMode", Category::TransportMode),
    ("SENTVenueType", Category::VenueType),
    ("SENTOccupantRole", Category::OccupantRole),
    ("SENTVenueSignificance", Category::VenueSignificance),
    ("SENTSemanticTime", Category::SemanticTime),
    ("SENTSegmentCategory", Category::SegmentCategory),
    ("SENTSegmentSubCategory", Category::SegmentSubcategory),
    ("SENTTimelineEventType", Category::EventType),
    ("SENTHarshDrivingEventType", Category::HarshDrivingEventType),
];

/// Longest matching prefix rule and the remainder after it.
pub fn split_prefix(token: &str) -> Option<(&'static str, Category, &str)> {
    PREFIX_RULES
        .iter()
        .filter(|(prefix, _)| token.starts_with(prefix))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(prefix, category)| (*prefix, *category, &token[prefix.len()..]))
}

/// A token after normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub value: String,
    /// Category implied by the stripped prefix, if any.
    pub category: Option<Category>,
}

/// Normalise a documentation token.
///
/// Tokens without a known prefix come back unchanged. Prefixed tokens lose
/// the prefix and have their PascalCase remainder converted to
/// SCREAMING_SNAKE_CASE; a remainder that is already uppercase keeps its
/// underscores as they are.
pub fn normalize_token(token: &str) -> Normalized {
    match split_prefix(token) {
        Some((_, category, rest)) => Normalized {
            value: screaming_snake(rest),
            category: Some(category),
        },
        None => Normalized {
            value: token.to_string(),
            category: None,
        },
    }
}

fn screaming_snake(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;
    for c in input.chars() {
        if c.is_uppercase() {
            if let Some(p) = prev {
                if p.is_lowercase() || p.is_ascii_digit() {
                    out.push('_');
                }
            }
        }
        out.extend(c.to_uppercase());
        prev = Some(c);
    }
    out.trim_start_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unprefixed_token_is_unchanged() {
        let n = normalize_token("BOAT");
        assert_eq!(n.value, "BOAT");
        assert_eq!(n.category, None);
    }

    #[test]
    fn uppercase_remainder_keeps_underscores() {
        let n = normalize_token("SENTSegmentTypeBAR_GOER");
        assert_eq!(n.value, "BAR_GOER");
        assert_eq!(n.category, Some(Category::SegmentType));
    }

    #[test]
    fn pascal_case_remainder_becomes_snake() {
        assert_eq!(normalize_token("SENTSegmentTypeBarGoer").value, "BAR_GOER");
        assert_eq!(normalize_token("SENTTransportModeOnFoot").value, "ON_FOOT");
        assert_eq!(normalize_token("SENTVenueTypeTravelHotel").value, "TRAVEL_HOTEL");
        assert_eq!(normalize_token("SENTSemanticTimeLateMorning").value, "LATE_MORNING");
    }

    #[test]
    fn leading_underscore_is_dropped() {
        assert_eq!(normalize_token("SENTTransportMode_Car").value, "CAR");
    }

    #[test]
    fn sub_category_prefix() {
        let n = normalize_token("SENTSegmentSubCategoryWiningAndDining");
        assert_eq!(n.value, "WINING_AND_DINING");
        assert_eq!(n.category, Some(Category::SegmentSubcategory));
    }

    #[test]
    fn timeline_event_type_maps_to_event_type() {
        let n = normalize_token("SENTTimelineEventTypeOffTheGrid");
        assert_eq!(n.value, "OFF_THE_GRID");
        assert_eq!(n.category, Some(Category::EventType));
    }

    #[test]
    fn ten_rules() {
        assert_eq!(PREFIX_RULES.len(), 10);
    }

    #[test]
    fn bare_prefix_has_empty_remainder() {
        let (prefix, _, rest) = split_prefix("SENTVenueType").unwrap();
        assert_eq!(prefix, "SENTVenueType");
        assert!(rest.is_empty());
    }
}
