use anyhow::Result;
use drd::config::{Config, FrenchConfig};
use drd::{DrdError, Language, Pipeline};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const EXPORT: &str = "French Entity Full Name,Label,Type,SubType,French URL,URL,Not4DERD,French Description,Description\n\
Conseil des données,Data Council,Communities,Committees,https://example.ca/fr/conseil,https://example.ca/council,,Oriente le travail.,Steers work.\n\
Réseau des données,Data Network,Communities,\"Committees, Working Groups\",,,,,\n\
Comité inconnu,Unknown Committee,Communities,Councils,,,,,\n\
Comité caché,Hidden Committee,Communities,Committees,,,checked,,\n\
Équipe analytique,Analytics Team,Teams,Teams,,,,Tableaux de bord.,Dashboards.\n";

fn write_tables(dir: &Path) -> Result<Config> {
    let type_table = dir.join("types.csv");
    let subtype_table = dir.join("subtypes.csv");
    fs::write(
        &type_table,
        "Entity Type Eng,Entity Type FR\nCommunities,Communautés\nTeams,Équipes\n",
    )?;
    fs::write(
        &subtype_table,
        "Entity sub-type,Entity sub-type FR\nCommittees,Comités\nWorking Groups,Groupes de travail\nTeams,Équipes\n",
    )?;

    Ok(Config {
        french: FrenchConfig {
            type_table,
            subtype_table,
        },
        ..Config::default()
    })
}

#[test]
fn test_french_page_end_to_end() -> Result<()> {
    let temp_dir = tempdir()?;
    let config = write_tables(temp_dir.path())?;
    let input = temp_dir.path().join("export.csv");
    let output = temp_dir.path().join("output_template_FR.txt");
    fs::write(&input, EXPORT)?;

    let pipeline = Pipeline::new(Language::French, &config)?;
    let report = pipeline.run_to_file(&input, &output)?;

    assert_eq!(report.rows_read, 5);
    assert_eq!(report.excluded, 1);
    assert_eq!(report.untranslated, 1);
    assert_eq!(report.records, 3);
    assert_eq!(report.expanded_records, 4);

    let page = fs::read_to_string(&output)?;
    assert!(page.contains("== Communautés =="));
    assert!(page.contains("[https://example.ca/fr/conseil Conseil des données]"));
    assert!(page.contains("Oriente le travail."));
    assert!(page.contains("Groupes de travail"));
    assert!(page.contains("== Organisations avec Équipes =="));
    assert!(page.contains("Équipe analytique"));
    assert!(!page.contains("Comité inconnu"));
    assert!(!page.contains("Comité caché"));
    assert!(!page.contains("Data Council"));

    Ok(())
}

#[test]
fn test_untranslated_subtype_only_drops_that_record() -> Result<()> {
    let temp_dir = tempdir()?;
    let config = write_tables(temp_dir.path())?;

    let output = Pipeline::new(Language::French, &config)?
        .run_from_reader(EXPORT.as_bytes(), "export.csv")?;

    let names: Vec<_> = output
        .directory
        .section("Communautés")
        .unwrap()
        .entries
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Conseil des données", "Réseau des données", "Réseau des données"]
    );

    Ok(())
}

#[test]
fn test_missing_translation_table_is_fatal() {
    let temp_dir = tempdir().unwrap();
    let config = Config {
        french: FrenchConfig {
            type_table: temp_dir.path().join("absent-types.csv"),
            subtype_table: temp_dir.path().join("absent-subtypes.csv"),
        },
        ..Config::default()
    };

    let err = Pipeline::new(Language::French, &config).err().unwrap();
    assert!(matches!(err, DrdError::Read { .. }));
}

#[test]
fn test_english_pipeline_ignores_translation_tables() -> Result<()> {
    let temp_dir = tempdir()?;
    let config = Config {
        french: FrenchConfig {
            type_table: temp_dir.path().join("absent-types.csv"),
            subtype_table: temp_dir.path().join("absent-subtypes.csv"),
        },
        ..Config::default()
    };

    let pipeline = Pipeline::new(Language::English, &config)?;
    assert_eq!(pipeline.language(), Language::English);

    Ok(())
}
