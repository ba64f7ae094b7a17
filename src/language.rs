use crate::pipeline::categories::CategoryMap;
use std::fmt;

/// Column names the loader selects from the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSet {
    pub name: &'static str,
    pub kind: &'static str,
    pub subtype: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub exclusion: &'static str,
}

pub const ENGLISH_COLUMNS: ColumnSet = ColumnSet {
    name: "Label",
    kind: "Type",
    subtype: "SubType",
    url: "URL",
    description: "Description",
    exclusion: "Not4DERD",
};

pub const FRENCH_COLUMNS: ColumnSet = ColumnSet {
    name: "French Entity Full Name",
    kind: "Type",
    subtype: "SubType",
    url: "French URL",
    description: "French Description",
    exclusion: "Not4DERD",
};

/// Value of the exclusion column that keeps a row off the published page.
pub const EXCLUDED_MARKER: &str = "checked";

/// Page language. Every per-language difference hangs off this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    French,
}

impl Language {
    pub fn columns(self) -> ColumnSet {
        match self {
            Language::English => ENGLISH_COLUMNS,
            Language::French => FRENCH_COLUMNS,
        }
    }

    pub fn default_output(self) -> &'static str {
        match self {
            Language::English => "output_template.txt",
            Language::French => "output_template_FR.txt",
        }
    }

    pub fn category_map(self) -> CategoryMap {
        match self {
            Language::English => CategoryMap::english(),
            Language::French => CategoryMap::french(),
        }
    }

    /// The export's taxonomy is English; the French page translates it.
    pub fn translates_taxonomy(self) -> bool {
        matches!(self, Language::French)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "en"),
            Language::French => write!(f, "fr"),
        }
    }
}
