// SPDX-License-Identifier: PMPL-1.0-or-later

//! sentiance-es: Spanish display strings for Sentiance SDK constants.
//!
//! The SDK reports transport modes, venue types, segments and the like as
//! enumerated string constants (`BICYCLE`, `TRAVEL_HOTEL`, `BAR_GOER`). This
//! crate turns them into text an end user can read.
//!
//! PILLARS:
//! 1. **i18n**: thirteen static tables behind an explicit [`i18n::Registry`];
//!    lookups pass unknown values through unchanged.
//! 2. **translate**: copy-and-substitute translators for events, venues,
//!    segments and the user context.
//! 3. **coverage**: a checker that scans the SDK documentation for constants
//!    the dictionary does not declare yet.
//!
//! ```
//! use sentiance_es::translate::Translator;
//! use sentiance_es::types::Event;
//!
//! let translator = Translator::spanish();
//! let event = translator.translate_event(&Event::new("STATIONARY"));
//! assert_eq!(event.event_type, "Estacionario");
//! assert_eq!(event.transport_mode, None);
//! ```

pub mod config;
pub mod coverage;
pub mod i18n;
pub mod translate;
pub mod types;
