// SPDX-License-Identifier: PMPL-1.0-or-later

//! Structured-object translators
//!
//! Copy-and-substitute over the SDK shapes in [`crate::types`]: every
//! translator returns a new value and leaves its input untouched, so callers
//! keep the raw SDK object alongside the display version.

pub mod json;

use crate::i18n::{Category, Registry};
use crate::types::*;

pub use json::{translate_json, ObjectKind};

/// Applies a [`Registry`] to SDK objects.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    registry: Registry,
}

impl Translator {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Translator over the built-in Spanish dictionary.
    pub fn spanish() -> Self {
        Self::new(Registry::spanish())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Single constant lookup, pass-through on miss.
    pub fn translate_constant<'a>(&'a self, category: Category, value: &'a str) -> &'a str {
        self.registry.translate(category, value)
    }

    fn owned(&self, category: Category, value: &str) -> String {
        self.registry.translate(category, value).to_string()
    }

    fn optional(&self, category: Category, value: Option<&String>) -> Option<String> {
        value.map(|v| self.owned(category, v))
    }

    /// `None` in, `None` out.
    pub fn translate_venue(&self, venue: Option<&Venue>) -> Option<Venue> {
        let venue = venue?;
        Some(Venue {
            venue_type: self.owned(Category::VenueType, &venue.venue_type),
            significance: self.owned(Category::VenueSignificance, &venue.significance),
            extra: venue.extra.clone(),
        })
    }

    pub fn translate_event(&self, event: &Event) -> Event {
        Event {
            event_type: self.owned(Category::EventType, &event.event_type),
            transport_mode: self.optional(Category::TransportMode, event.transport_mode.as_ref()),
            occupant_role: self.optional(Category::OccupantRole, event.occupant_role.as_ref()),
            venue: self.translate_venue(event.venue.as_ref()),
            extra: event.extra.clone(),
        }
    }

    pub fn translate_segment(&self, segment: &Segment) -> Segment {
        Segment {
            category: self.owned(Category::SegmentCategory, &segment.category),
            subcategory: self.owned(Category::SegmentSubcategory, &segment.subcategory),
            segment_type: self.owned(Category::SegmentType, &segment.segment_type),
            extra: segment.extra.clone(),
        }
    }

    /// Events and segments keep their length and order.
    pub fn translate_user_context(&self, context: &UserContext) -> UserContext {
        UserContext {
            semantic_time: self.owned(Category::SemanticTime, &context.semantic_time),
            events: context.events.iter().map(|e| self.translate_event(e)).collect(),
            active_segments: context
                .active_segments
                .iter()
                .map(|s| self.translate_segment(s))
                .collect(),
            home: self.translate_venue(context.home.as_ref()),
            work: self.translate_venue(context.work.as_ref()),
            extra: context.extra.clone(),
        }
    }
}
