use crate::error::{DrdError, Result};
use crate::language::{ColumnSet, EXCLUDED_MARKER};
use crate::pipeline::expand::split_subtypes;
use crate::types::RawRow;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use tracing::{debug, info, instrument};

/// Counts of what the loader kept and why it dropped the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub rows_read: usize,
    pub missing_fields: usize,
    pub excluded: usize,
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub rows: Vec<RawRow>,
    pub stats: LoadStats,
}

/// Header positions of the selected columns.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    name: usize,
    kind: usize,
    subtype: usize,
    url: usize,
    description: usize,
    exclusion: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, columns: &ColumnSet, source_name: &str) -> Result<Self> {
        Ok(Self {
            name: find_column(headers, columns.name, source_name)?,
            kind: find_column(headers, columns.kind, source_name)?,
            subtype: find_column(headers, columns.subtype, source_name)?,
            url: find_column(headers, columns.url, source_name)?,
            description: find_column(headers, columns.description, source_name)?,
            exclusion: find_column(headers, columns.exclusion, source_name)?,
        })
    }
}

/// Locates `column` in a header row, ignoring surrounding whitespace.
pub(crate) fn find_column(headers: &StringRecord, column: &str, source_name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| DrdError::MissingColumn {
            column: column.to_string(),
            source_name: source_name.to_string(),
        })
}

/// Reads CSV rows, keeping only those with a name, type and sub-type that are
/// not flagged as excluded from publication.
#[instrument(skip(reader, columns))]
pub fn load_rows_from_reader<R: Read>(
    mut reader: R,
    columns: &ColumnSet,
    source_name: &str,
) -> Result<LoadOutcome> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;

    if let Some(line) = find_unterminated_quote(&input) {
        return Err(DrdError::UnterminatedQuote {
            line,
            source_name: source_name.to_string(),
        });
    }

    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(input.as_slice());
    let headers = csv_reader.headers()?.clone();
    let index = ColumnIndex::resolve(&headers, columns, source_name)?;

    let mut rows = Vec::new();
    let mut stats = LoadStats::default();

    for (line, result) in csv_reader.records().enumerate() {
        let record = result?;
        stats.rows_read += 1;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let name = cell(index.name);
        let kind = cell(index.kind);
        let subtype = cell(index.subtype);

        if is_blank(name) || is_blank(kind) || split_subtypes(subtype).next().is_none() {
            debug!(row = line + 1, "Dropping row without name, type or sub-type");
            stats.missing_fields += 1;
            continue;
        }

        if cell(index.exclusion).trim() == EXCLUDED_MARKER {
            debug!(row = line + 1, name = name.trim(), "Dropping row excluded from publication");
            stats.excluded += 1;
            continue;
        }

        rows.push(RawRow {
            name: name.to_string(),
            kind: kind.to_string(),
            subtype: subtype.to_string(),
            url: cell(index.url).to_string(),
            description: cell(index.description).to_string(),
        });
    }

    info!(
        "Loaded {} of {} rows ({} missing fields, {} excluded)",
        rows.len(),
        stats.rows_read,
        stats.missing_fields,
        stats.excluded
    );

    Ok(LoadOutcome { rows, stats })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Returns the line a quoted field opens on when that field is never closed.
///
/// Follows the reader's quoting rules: `"` opens a quote only as the first
/// byte of a field, `""` inside quotes is an escaped quote, and anywhere else
/// `"` is plain text.
fn find_unterminated_quote(input: &[u8]) -> Option<usize> {
    let mut line = 1;
    let mut field_start = true;
    let mut open_line = None;
    let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);
    let mut bytes = input.iter().peekable();

    while let Some(&byte) = bytes.next() {
        if byte == b'\n' {
            line += 1;
        }
        match open_line {
            Some(_) if byte == b'"' => {
                if bytes.peek() == Some(&&b'"') {
                    bytes.next();
                } else {
                    open_line = None;
                }
            }
            Some(_) => {}
            None => match byte {
                b',' | b'\n' | b'\r' => field_start = true,
                b'"' if field_start => {
                    open_line = Some(line);
                    field_start = false;
                }
                _ => field_start = false,
            },
        }
    }

    open_line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{ENGLISH_COLUMNS, FRENCH_COLUMNS};

    fn load(csv: &str) -> Result<LoadOutcome> {
        load_rows_from_reader(csv.as_bytes(), &ENGLISH_COLUMNS, "test.csv")
    }

    #[test]
    fn test_selects_columns_in_any_order() {
        let csv = "Description,Extra,Not4DERD,URL,SubType,Type,Label\n\
                   Desc,x,,https://example.ca,Committees,Communities,Data Council\n";
        let outcome = load(csv).unwrap();

        assert_eq!(outcome.rows.len(), 1);
        let row = &outcome.rows[0];
        assert_eq!(row.name, "Data Council");
        assert_eq!(row.kind, "Communities");
        assert_eq!(row.subtype, "Committees");
        assert_eq!(row.url, "https://example.ca");
        assert_eq!(row.description, "Desc");
    }

    #[test]
    fn test_missing_column_is_reported() {
        let csv = "Label,Type,URL,Not4DERD,Description\nA,B,,,\n";
        let err = load(csv).unwrap_err();

        match err {
            DrdError::MissingColumn { column, source_name } => {
                assert_eq!(column, "SubType");
                assert_eq!(source_name, "test.csv");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_drops_rows_missing_identity_fields() {
        let csv = "Label,Type,SubType,URL,Not4DERD,Description\n\
                   ,Communities,Committees,,,\n\
                   Name,   ,Committees,,,\n\
                   Name,Communities,,,,\n\
                   Name,Communities,\" , \",,,\n\
                   Kept,Communities,Committees,,,\n";
        let outcome = load(csv).unwrap();

        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].name, "Kept");
        assert_eq!(
            outcome.stats,
            LoadStats {
                rows_read: 5,
                missing_fields: 4,
                excluded: 0
            }
        );
    }

    #[test]
    fn test_drops_excluded_rows() {
        let csv = "Label,Type,SubType,URL,Not4DERD,Description\n\
                   Hidden,Teams,Teams,,checked,\n\
                   Shown,Teams,Teams,,,\n\
                   AlsoShown,Teams,Teams,,unchecked,\n";
        let outcome = load(csv).unwrap();

        let names: Vec<_> = outcome.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Shown", "AlsoShown"]);
        assert_eq!(outcome.stats.excluded, 1);
    }

    #[test]
    fn test_short_rows_read_as_empty_cells() {
        let csv = "Label,Type,SubType,URL,Not4DERD,Description\nShort,Teams,Teams\n";
        let outcome = load(csv).unwrap();

        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].url, "");
        assert_eq!(outcome.rows[0].description, "");
    }

    #[test]
    fn test_bom_prefixed_header() {
        let csv = "\u{feff}Label,Type,SubType,URL,Not4DERD,Description\n\
                   Data Council,Communities,Committees,,,\n";
        let outcome = load(csv).unwrap();

        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].name, "Data Council");
    }

    #[test]
    fn test_unterminated_quote_is_fatal() {
        let csv = "Label,Type,SubType,URL,Not4DERD,Description\n\
                   First,Teams,Teams,,,\"never closed\n\
                   Second,Teams,Teams,,,\n";
        let err = load(csv).unwrap_err();

        match err {
            DrdError::UnterminatedQuote { line, source_name } => {
                assert_eq!(line, 2);
                assert_eq!(source_name, "test.csv");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_quotes_inside_fields_are_text() {
        let csv = "Label,Type,SubType,URL,Not4DERD,Description\n\
                   The \"Hub\",Teams,Teams,,,\"Says \"\"hi\"\"\nover two lines\"\n";
        let outcome = load(csv).unwrap();

        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].name, "The \"Hub\"");
        assert_eq!(outcome.rows[0].description, "Says \"hi\"\nover two lines");
    }

    #[test]
    fn test_invalid_utf8_is_csv_error() {
        let mut csv = b"Label,Type,SubType,URL,Not4DERD,Description\n".to_vec();
        csv.extend_from_slice(b"Bad \xff name,Teams,Teams,,,\n");
        let err = load_rows_from_reader(csv.as_slice(), &ENGLISH_COLUMNS, "test.csv").unwrap_err();

        assert!(matches!(err, DrdError::Csv(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn test_french_columns() {
        let csv = "French Entity Full Name,Label,Type,SubType,French URL,URL,Not4DERD,French Description,Description\n\
                   Conseil,Council,Communities,Committees,https://fr.example.ca,https://example.ca,,Bonjour,Hello\n";
        let outcome = load_rows_from_reader(csv.as_bytes(), &FRENCH_COLUMNS, "fr.csv").unwrap();

        let row = &outcome.rows[0];
        assert_eq!(row.name, "Conseil");
        assert_eq!(row.url, "https://fr.example.ca");
        assert_eq!(row.description, "Bonjour");
    }
}
