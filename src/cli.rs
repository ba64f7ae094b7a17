use crate::config::Config;
use crate::language::Language;
use crate::logging;
use crate::pipeline::{Pipeline, PipelineReport};
use anyhow::Context;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Input file containing entity data (CSV export)
    pub input: PathBuf,

    /// Destination file to write the page to
    #[arg(short = 'o', value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parses the process arguments under the binary name of `language`.
    pub fn parse_for(language: Language) -> Self {
        let (name, about) = match language {
            Language::English => (
                "gen_drd",
                "Generate Wikitext source for the Data Resource Directory GCpedia page.",
            ),
            Language::French => (
                "gen_drd_fr",
                "Generate French Wikitext source for the Data Resource Directory GCpedia page.",
            ),
        };
        let matches = Self::command().name(name).about(about).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    pub fn output_path(&self, language: Language) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(language.default_output()))
    }
}

/// Entry point shared by both binaries.
pub fn run(language: Language) -> anyhow::Result<()> {
    let cli = Cli::parse_for(language);
    let config = Config::load().context("Failed to load configuration")?;
    let _log_guard = logging::init_logging(&config.log_dir).with_context(|| {
        format!("Failed to initialize logging in '{}'", config.log_dir.display())
    })?;

    let output = cli.output_path(language);
    info!(
        "Generating {} page from {} into {}",
        language,
        cli.input.display(),
        output.display()
    );

    let report = Pipeline::new(language, &config)
        .and_then(|pipeline| pipeline.run_to_file(&cli.input, &output))
        .map_err(|e| {
            error!("Page generation failed: {}", e);
            e
        })
        .with_context(|| format!("Failed to generate page from '{}'", cli.input.display()))?;

    print_summary(&report, &output);
    Ok(())
}

fn print_summary(report: &PipelineReport, output: &std::path::Path) {
    println!("\n📊 Results:");
    println!("   Rows read: {}", report.rows_read);
    println!("   Dropped (missing fields): {}", report.missing_fields);
    println!("   Dropped (excluded): {}", report.excluded);
    if report.language.translates_taxonomy() {
        println!("   Dropped (untranslated): {}", report.untranslated);
    }
    println!(
        "   Entries: {} ({} after sub-type expansion)",
        report.records, report.expanded_records
    );
    for (category, count) in &report.sections {
        println!("   {}: {}", category, count);
    }
    if !report.unmapped_types.is_empty() {
        println!(
            "\n⚠️  Types not published: {}",
            report.unmapped_types.join(", ")
        );
    }
    println!("   Output file: {}", output.display());
    println!("\n✅ Completed Successfully\n");
}
