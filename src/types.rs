/// A row as read from the export, before normalization.
///
/// Cells are kept verbatim; the loader has already checked that name, type and
/// sub-type are not blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub name: String,
    pub kind: String,
    pub subtype: String,
    pub url: String,
    pub description: String,
}

/// One directory entry.
///
/// `url` and `description` are `None` when the export has no value, which the
/// page template renders differently from an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub kind: String,
    pub subtype: String,
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl Record {
    /// Ordering key: type, sub-type, name, then url and description so that
    /// otherwise-equal entries still land in a fixed order.
    pub fn sort_key(&self) -> (&str, &str, &str, Option<&str>, Option<&str>) {
        (
            &self.kind,
            &self.subtype,
            &self.name,
            self.url.as_deref(),
            self.description.as_deref(),
        )
    }
}
