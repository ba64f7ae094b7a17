// Page generation pipeline: load, normalize, translate, expand, group, remap, render

pub mod categories;
pub mod expand;
pub mod group;
pub mod loader;
pub mod normalize;
pub mod translate;

use crate::config::Config;
use crate::error::{DrdError, Result};
use crate::language::Language;
use crate::output::write_atomically;
use crate::render::render_page;
use categories::{CategoryMap, Directory};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, instrument, warn};
use translate::Translator;

/// Counts gathered along one run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub language: Language,
    pub rows_read: usize,
    pub missing_fields: usize,
    pub excluded: usize,
    pub untranslated: usize,
    pub records: usize,
    pub expanded_records: usize,
    /// Entry count per display category, in page order
    pub sections: Vec<(String, usize)>,
    /// Types present in the export that no category lists
    pub unmapped_types: Vec<String>,
}

/// Result of a complete pipeline run
#[derive(Debug)]
pub struct PipelineOutput {
    pub directory: Directory,
    pub page: String,
    pub report: PipelineReport,
}

pub struct Pipeline {
    language: Language,
    categories: CategoryMap,
    translator: Option<Translator>,
}

impl Pipeline {
    /// Builds the pipeline for `language`, loading the translation tables the
    /// French page needs.
    pub fn new(language: Language, config: &Config) -> Result<Self> {
        let translator = if language.translates_taxonomy() {
            Some(Translator::load(&config.french)?)
        } else {
            None
        };
        Ok(Self {
            language,
            categories: language.category_map(),
            translator,
        })
    }

    pub fn english() -> Self {
        Self {
            language: Language::English,
            categories: CategoryMap::english(),
            translator: None,
        }
    }

    pub fn french(translator: Translator) -> Self {
        Self {
            language: Language::French,
            categories: CategoryMap::french(),
            translator: Some(translator),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn run(&self, input: &Path) -> Result<PipelineOutput> {
        let file = File::open(input).map_err(|source| DrdError::Read {
            path: input.to_path_buf(),
            source,
        })?;
        self.run_from_reader(file, &input.display().to_string())
    }

    /// Runs every stage and renders the page in memory. Nothing is written.
    #[instrument(skip(self, reader), fields(language = %self.language))]
    pub fn run_from_reader<R: Read>(&self, reader: R, source_name: &str) -> Result<PipelineOutput> {
        let loaded = loader::load_rows_from_reader(reader, &self.language.columns(), source_name)?;
        let mut records = normalize::normalize_rows(loaded.rows);

        let mut untranslated = 0;
        if let Some(translator) = &self.translator {
            let outcome = translator.translate_all(records);
            untranslated = outcome.dropped;
            records = outcome.records;
        }
        let record_count = records.len();

        let expanded = expand::expand_subtypes(records);
        let expanded_count = expanded.len();
        info!(
            "Expanded {} records into {} single sub-type entries",
            record_count, expanded_count
        );

        let groups = group::group_by_type(expanded);
        let unmapped_types = self.categories.unmapped_types(&groups);
        for kind in &unmapped_types {
            warn!(
                "Type '{}' ({} entries) is not listed under any category and will not be published",
                kind,
                groups.get(kind).map_or(0, Vec::len)
            );
        }

        let directory = self.categories.remap(&groups);
        let page = render_page(self.language, &directory)?;

        let report = PipelineReport {
            language: self.language,
            rows_read: loaded.stats.rows_read,
            missing_fields: loaded.stats.missing_fields,
            excluded: loaded.stats.excluded,
            untranslated,
            records: record_count,
            expanded_records: expanded_count,
            sections: directory
                .sections
                .iter()
                .map(|s| (s.category.clone(), s.entries.len()))
                .collect(),
            unmapped_types,
        };

        Ok(PipelineOutput {
            directory,
            page,
            report,
        })
    }

    /// Runs the pipeline and writes the page to `output` only once rendering
    /// has succeeded.
    pub fn run_to_file(&self, input: &Path, output: &Path) -> Result<PipelineReport> {
        let result = self.run(input)?;
        write_atomically(output, &result.page)?;
        info!("💾 Saved page to {}", output.display());
        Ok(result.report)
    }
}
