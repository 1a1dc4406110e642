// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translate raw SDK JSON
//!
//! Accepts a single object or an array of objects of one [`ObjectKind`].
//! A JSON `null` venue translates to `null`.

use super::Translator;
use crate::types::*;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ObjectKind {
    Event,
    Venue,
    Segment,
    UserContext,
}

impl ObjectKind {
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Event => "event",
            ObjectKind::Venue => "venue",
            ObjectKind::Segment => "segment",
            ObjectKind::UserContext => "user context",
        }
    }
}

/// Translate `input` as `kind`, returning the translated JSON.
pub fn translate_json(translator: &Translator, kind: ObjectKind, input: Value) -> Result<Value> {
    match input {
        Value::Array(items) => {
            let count = items.len();
            tracing::debug!(kind = kind.name(), count, "translating array");
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    translate_one(translator, kind, item)
                        .with_context(|| format!("{} at index {}", kind.name(), i))
                })
                .collect::<Result<Vec<_>>>()
                .map(Value::Array)
        }
        other => translate_one(translator, kind, other),
    }
}

fn translate_one(translator: &Translator, kind: ObjectKind, input: Value) -> Result<Value> {
    match kind {
        ObjectKind::Event => apply(input, kind, |e: Event| translator.translate_event(&e)),
        ObjectKind::Segment => apply(input, kind, |s: Segment| translator.translate_segment(&s)),
        ObjectKind::UserContext => apply(input, kind, |c: UserContext| {
            translator.translate_user_context(&c)
        }),
        ObjectKind::Venue => apply(input, kind, |v: Option<Venue>| {
            translator.translate_venue(v.as_ref())
        }),
    }
}

fn apply<T, U, F>(input: Value, kind: ObjectKind, f: F) -> Result<Value>
where
    T: DeserializeOwned,
    U: Serialize,
    F: FnOnce(T) -> U,
{
    let parsed: T = serde_json::from_value(input)
        .with_context(|| format!("parsing {} JSON", kind.name()))?;
    Ok(serde_json::to_value(f(parsed))?)
}
