//! English to French taxonomy translation.
//!
//! The export only carries English type and sub-type labels. Two reference
//! tables map them to French; a record any of whose labels is missing from
//! those tables cannot be placed on the French page and is dropped.

use crate::config::FrenchConfig;
use crate::error::{DrdError, Result};
use crate::pipeline::expand::{split_subtypes, SUBTYPE_SEPARATOR};
use crate::pipeline::loader::find_column;
use crate::types::Record;
use csv::ReaderBuilder;
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const TYPE_KEY_COLUMN: &str = "Entity Type Eng";
pub const TYPE_VALUE_COLUMN: &str = "Entity Type FR";
pub const SUBTYPE_KEY_COLUMN: &str = "Entity sub-type";
pub const SUBTYPE_VALUE_COLUMN: &str = "Entity sub-type FR";

/// Exact-match label lookup.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn load(path: &Path, key_column: &str, value_column: &str) -> Result<Self> {
        let file = File::open(path).map_err(|source| DrdError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, key_column, value_column, &path.display().to_string())
    }

    /// Reads a two-column table. Rows with a blank key or value are not entries;
    /// a repeated key keeps its last value.
    pub fn from_reader<R: Read>(
        reader: R,
        key_column: &str,
        value_column: &str,
        source_name: &str,
    ) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let key_idx = find_column(&headers, key_column, source_name)?;
        let value_idx = find_column(&headers, value_column, source_name)?;

        let mut entries = HashMap::new();
        for result in csv_reader.records() {
            let record = result?;
            let key = record.get(key_idx).unwrap_or("").trim();
            let value = record.get(value_idx).unwrap_or("").trim();
            if key.is_empty() || value.is_empty() {
                continue;
            }
            entries.insert(key.to_string(), value.to_string());
        }

        debug!("Loaded {} translations from {}", entries.len(), source_name);
        Ok(Self { entries })
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A label with no entry in its translation table.
#[derive(Error, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum MissingTranslation {
    #[error("type '{0}'")]
    Type(String),

    #[error("sub-type '{0}'")]
    Subtype(String),
}

#[derive(Debug)]
pub struct TranslationOutcome {
    pub records: Vec<Record>,
    pub dropped: usize,
    pub missing_labels: BTreeSet<MissingTranslation>,
}

#[derive(Debug, Clone)]
pub struct Translator {
    types: TranslationTable,
    subtypes: TranslationTable,
}

impl Translator {
    pub fn new(types: TranslationTable, subtypes: TranslationTable) -> Self {
        Self { types, subtypes }
    }

    pub fn load(config: &FrenchConfig) -> Result<Self> {
        let types = TranslationTable::load(&config.type_table, TYPE_KEY_COLUMN, TYPE_VALUE_COLUMN)?;
        let subtypes = TranslationTable::load(
            &config.subtype_table,
            SUBTYPE_KEY_COLUMN,
            SUBTYPE_VALUE_COLUMN,
        )?;
        info!(
            "Loaded {} type and {} sub-type translations",
            types.len(),
            subtypes.len()
        );
        Ok(Self::new(types, subtypes))
    }

    /// Translates one record, or returns the first label lacking a translation.
    ///
    /// Each listed sub-type is translated on its own and the results re-joined,
    /// leaving the fan-out to the expander.
    pub fn translate(&self, record: Record) -> std::result::Result<Record, MissingTranslation> {
        let kind = self
            .types
            .get(&record.kind)
            .ok_or_else(|| MissingTranslation::Type(record.kind.clone()))?
            .to_string();

        let subtypes = split_subtypes(&record.subtype)
            .map(|label| {
                self.subtypes
                    .get(label)
                    .ok_or_else(|| MissingTranslation::Subtype(label.to_string()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let separator = SUBTYPE_SEPARATOR.to_string();
        Ok(Record {
            kind,
            subtype: subtypes.join(separator.as_str()),
            ..record
        })
    }

    pub fn translate_all(&self, records: Vec<Record>) -> TranslationOutcome {
        let mut translated = Vec::with_capacity(records.len());
        let mut dropped = 0;
        let mut missing_labels = BTreeSet::new();

        for record in records {
            let name = record.name.clone();
            match self.translate(record) {
                Ok(record) => translated.push(record),
                Err(label) => {
                    debug!(name = %name, label = %label, "Dropping untranslated record");
                    dropped += 1;
                    missing_labels.insert(label);
                }
            }
        }

        if dropped > 0 {
            warn!(
                "Dropped {} records with untranslated labels: {}",
                dropped,
                missing_labels
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        TranslationOutcome {
            records: translated,
            dropped,
            missing_labels,
        }
    }
}
