// SPDX-License-Identifier: PMPL-1.0-or-later

//! Spanish dictionary for Sentiance SDK constants.
//!
//! ## Categories
//!
//! | Identifier                  | SDK type                    | Entries |
//! |-----------------------------|-----------------------------|---------|
//! | `transportMode`             | `TransportMode`             | 13      |
//! | `eventType`                 | `EventType`                 | 4       |
//! | `occupantRole`              | `OccupantRole`              | 3       |
//! | `semanticTime`              | `SemanticTime`              | 8       |
//! | `venueSignificance`         | `VenueSignificance`         | 4       |
//! | `venueType`                 | `VenueType`                 | 28      |
//! | `userContextUpdateCriteria` | `UserContextUpdateCriteria` | 3       |
//! | `segmentCategory`           | `SegmentCategory`           | 3       |
//! | `segmentSubcategory`        | `SegmentSubcategory`        | 12      |
//! | `segmentType`               | `SegmentType`               | 63      |
//! | `harshDrivingEventType`     | `HarshDrivingEventType`     | 3       |
//! | `detectionStatus`           | `DetectionStatus`           | 7       |
//! | `locationPermission`        | `LocationPermission`        | 6       |
//!
//! ## Design
//!
//! The tables are embedded at compile time as static data and loaded into a
//! [`Registry`] value on demand. Lookups never fail: an unknown category or
//! constant returns the input string itself.

mod catalog;
mod category;
mod registry;

pub use catalog::table_for;
pub use category::Category;
pub use registry::Registry;
