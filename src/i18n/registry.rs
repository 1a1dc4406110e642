// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation registry: the table-of-tables the translators dispatch on.
//!
//! A [`Registry`] is an ordinary immutable value. Callers build one (usually
//! [`Registry::spanish`]) and hand it to whatever needs lookups; there is no
//! process-wide instance.
//!
//! Lookups are pass-through on miss: an unknown category or an unknown
//! value yields the input unchanged, so new SDK constants never break the
//! caller. They just show up untranslated.

use super::catalog::table_for;
use super::Category;
use anyhow::{bail, Context, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Key/display pairs for one category, in declaration order.
#[derive(Debug, Clone, Default)]
struct Table {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Table {
    fn from_static(pairs: &[(&str, &str)]) -> Self {
        let mut table = Table::default();
        for (key, display) in pairs {
            table.upsert(key, display);
        }
        table
    }

    /// Replace in place if the key exists, append otherwise.
    fn upsert(&mut self, key: &str, display: &str) {
        match self.index.get(key) {
            Some(&pos) => self.entries[pos].1 = display.to_string(),
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), display.to_string()));
            }
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
            // An empty display string never replaces the raw value.
            .filter(|display| !display.is_empty())
    }
}

/// Immutable mapping from every [`Category`] to its translation table.
#[derive(Debug, Clone)]
pub struct Registry {
    tables: BTreeMap<Category, Table>,
}

impl Registry {
    /// The built-in Spanish dictionary.
    pub fn spanish() -> Self {
        let tables = Category::all()
            .iter()
            .map(|c| (*c, Table::from_static(table_for(*c))))
            .collect();
        Self { tables }
    }

    /// Build a registry from explicit tables. Categories not listed get an
    /// empty table, so every lookup on them passes through.
    pub fn from_tables<'a, I>(tables: I) -> Self
    where
        I: IntoIterator<Item = (Category, &'a [(&'a str, &'a str)])>,
    {
        let mut registry = Self {
            tables: Category::all()
                .iter()
                .map(|c| (*c, Table::default()))
                .collect(),
        };
        for (category, pairs) in tables {
            registry.tables.insert(category, Table::from_static(pairs));
        }
        registry
    }

    /// Translate `value` within `category`, or return it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentiance_es::i18n::{Category, Registry};
    /// let registry = Registry::spanish();
    /// assert_eq!(registry.translate(Category::TransportMode, "BICYCLE"), "Bicicleta");
    /// assert_eq!(registry.translate(Category::TransportMode, "HOVERBOARD"), "HOVERBOARD");
    /// ```
    pub fn translate<'a>(&'a self, category: Category, value: &'a str) -> &'a str {
        self.lookup(category, value).unwrap_or(value)
    }

    /// Like [`Registry::translate`], dispatching on the camelCase category
    /// identifier. An identifier that names no category passes `value` through.
    pub fn translate_by_name<'a>(&'a self, category: &str, value: &'a str) -> &'a str {
        match Category::from_id(category) {
            Some(c) => self.translate(c, value),
            None => value,
        }
    }

    /// Display string for `key`, if the table has one.
    pub fn lookup(&self, category: Category, key: &str) -> Option<&str> {
        self.tables.get(&category).and_then(|t| t.get(key))
    }

    pub fn contains_key(&self, category: Category, key: &str) -> bool {
        self.tables
            .get(&category)
            .map(|t| t.index.contains_key(key))
            .unwrap_or(false)
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::all().iter().copied().filter(|c| self.tables.contains_key(c))
    }

    /// `(key, display)` pairs of one table, in declaration order.
    pub fn entries(&self, category: Category) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.tables
            .get(&category)
            .into_iter()
            .flat_map(|t| t.entries.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Every key across all tables, category boundaries discarded.
    pub fn all_keys(&self) -> BTreeSet<&str> {
        self.tables
            .values()
            .flat_map(|t| t.entries.iter().map(|(k, _)| k.as_str()))
            .collect()
    }

    /// Total number of entries across all tables.
    pub fn len(&self) -> usize {
        self.tables.values().map(|t| t.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge display-string overrides from a YAML file.
    ///
    /// The file maps category identifiers to `KEY: "display"` mappings:
    ///
    /// ```yaml
    /// transportMode:
    ///   SCOOTER: "Patinete"
    ///   BUS: "Autobús"
    /// ```
    ///
    /// Existing keys are replaced in place, new keys are appended in file
    /// order. Unknown category identifiers are skipped with a warning.
    pub fn with_overrides_file(self, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading overrides {}", path.display()))?;
        self.with_overrides_yaml(&content)
            .with_context(|| format!("parsing overrides {}", path.display()))
    }

    /// Same as [`Registry::with_overrides_file`], from YAML text.
    pub fn with_overrides_yaml(mut self, yaml: &str) -> Result<Self> {
        let root: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let mapping = match root {
            serde_yaml::Value::Mapping(m) => m,
            serde_yaml::Value::Null => return Ok(self),
            _ => bail!("overrides must be a mapping of category to entries"),
        };

        for (category_key, entries) in mapping {
            let Some(id) = category_key.as_str() else {
                bail!("category keys must be strings, found {:?}", category_key);
            };
            let Some(category) = Category::from_id(id) else {
                tracing::warn!(category = id, "skipping overrides for unknown category");
                continue;
            };
            let serde_yaml::Value::Mapping(entries) = entries else {
                bail!("entries for '{}' must be a mapping", id);
            };

            let table = self.tables.entry(category).or_default();
            for (key, display) in entries {
                match (key.as_str(), display.as_str()) {
                    (Some(k), Some(d)) => {
                        tracing::debug!(category = id, key = k, "override");
                        table.upsert(k, d);
                    }
                    _ => bail!("entries for '{}' must map strings to strings", id),
                }
            }
        }

        Ok(self)
    }

    /// Render every table as `export const NAME = { KEY: "display", ... };`
    /// blocks, the format [`crate::coverage::constants::extract_declared_keys`]
    /// reads back.
    pub fn render_declarations(&self) -> String {
        self.categories()
            .map(|c| self.render_declaration(c))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One category's block, preceded by a banner comment.
    pub fn render_declaration(&self, category: Category) -> String {
        let mut out = String::new();
        let rule = "=".repeat(76);
        let _ = writeln!(out, "// {}", rule);
        let _ = writeln!(out, "// {}", category.sdk_name());
        let _ = writeln!(out, "// {}", rule);
        let _ = writeln!(out, "export const {} = {{", category.declaration_name());

        let entries: Vec<(&str, &str)> = self.entries(category).collect();
        for (i, (key, display)) in entries.iter().enumerate() {
            let comma = if i + 1 < entries.len() { "," } else { "" };
            let _ = writeln!(out, "  {}: {}{}", key, quote(display), comma);
        }
        out.push_str("};\n");
        out
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::spanish()
    }
}

fn quote(value: &str) -> String {
    // serde_json string escaping is valid JS string syntax.
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_key_translates_to_its_table_value() {
        let registry = Registry::spanish();
        for category in Category::all() {
            for (key, display) in table_for(*category) {
                assert_eq!(registry.translate(*category, key), *display);
            }
        }
    }

    #[test]
    fn bicycle_is_bicicleta() {
        let registry = Registry::spanish();
        assert_eq!(registry.translate(Category::TransportMode, "BICYCLE"), "Bicicleta");
    }

    #[test]
    fn unknown_value_passes_through() {
        let registry = Registry::spanish();
        assert_eq!(registry.translate(Category::TransportMode, "HOVERBOARD"), "HOVERBOARD");
        assert_eq!(registry.translate(Category::TransportMode, ""), "");
    }

    #[test]
    fn key_from_another_table_passes_through() {
        let registry = Registry::spanish();
        // BAR_GOER is a segment type, not a transport mode.
        assert_eq!(registry.translate(Category::TransportMode, "BAR_GOER"), "BAR_GOER");
    }

    #[test]
    fn unknown_category_name_passes_through() {
        let registry = Registry::spanish();
        assert_eq!(registry.translate_by_name("hoverboardMode", "CAR"), "CAR");
        assert_eq!(registry.translate_by_name("transportMode", "CAR"), "Coche");
    }

    #[test]
    fn same_key_differs_per_category() {
        let registry = Registry::spanish();
        assert_eq!(registry.translate(Category::VenueSignificance, "HOME"), "Casa");
        assert_eq!(registry.translate(Category::SegmentSubcategory, "HOME"), "Hogar");
    }

    #[test]
    fn entries_follow_declaration_order() {
        let registry = Registry::spanish();
        let keys: Vec<&str> = registry
            .entries(Category::OccupantRole)
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["DRIVER", "PASSENGER", "UNAVAILABLE"]);
    }

    #[test]
    fn from_tables_leaves_other_categories_empty() {
        let pairs: &[(&str, &str)] = &[("CAR", "Auto")];
        let registry = Registry::from_tables([(Category::TransportMode, pairs)]);
        assert_eq!(registry.translate(Category::TransportMode, "CAR"), "Auto");
        assert_eq!(registry.translate(Category::EventType, "STATIONARY"), "STATIONARY");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.categories().count(), 13);
    }

    #[test]
    fn overrides_replace_in_place_and_append() {
        let registry = Registry::spanish()
            .with_overrides_yaml(
                "occupantRole:\n  PASSENGER: \"Acompañante\"\n  CO_PILOT: \"Copiloto\"\n",
            )
            .unwrap();
        let entries: Vec<(&str, &str)> = registry.entries(Category::OccupantRole).collect();
        assert_eq!(
            entries,
            vec![
                ("DRIVER", "Conductor"),
                ("PASSENGER", "Acompañante"),
                ("UNAVAILABLE", "No disponible"),
                ("CO_PILOT", "Copiloto"),
            ]
        );
    }

    #[test]
    fn overrides_skip_unknown_category() {
        let registry = Registry::spanish()
            .with_overrides_yaml("teleportMode:\n  BEAM: \"Rayo\"\n")
            .unwrap();
        assert_eq!(registry.len(), Registry::spanish().len());
    }

    #[test]
    fn overrides_reject_non_string_entries() {
        let result = Registry::spanish().with_overrides_yaml("transportMode:\n  CAR: 3\n");
        assert!(result.is_err());
        let result = Registry::spanish().with_overrides_yaml("transportMode:\n  CAR: [a, b]\n");
        assert!(result.is_err());
        let result = Registry::spanish().with_overrides_yaml("- CAR\n");
        assert!(result.is_err());
    }

    #[test]
    fn empty_override_is_treated_as_missing() {
        let registry = Registry::spanish()
            .with_overrides_yaml("transportMode:\n  CAR: \"\"\n")
            .unwrap();
        assert_eq!(registry.translate(Category::TransportMode, "CAR"), "CAR");
        assert!(registry.contains_key(Category::TransportMode, "CAR"));
    }

    #[test]
    fn render_declarations_contains_every_table() {
        let rendered = Registry::spanish().render_declarations();
        for category in Category::all() {
            assert!(rendered.contains(&format!("export const {} = {{", category.declaration_name())));
        }
        assert!(rendered.contains("  BICYCLE: \"Bicicleta\","));
        assert!(rendered.contains("  METRO: \"Metro / Subterráneo\"\n};"));
    }

    #[test]
    fn render_single_declaration() {
        let rendered = Registry::spanish().render_declaration(Category::HarshDrivingEventType);
        assert!(rendered.ends_with(
            "export const HARSH_DRIVING_EVENT_TYPE_TRANSLATIONS = {\n  ACCELERATION: \"Aceleración brusca\",\n  BRAKING: \"Frenada brusca\",\n  TURN: \"Giro brusco\"\n};\n"
        ));
        assert!(rendered.starts_with("// ====="));
    }
}
