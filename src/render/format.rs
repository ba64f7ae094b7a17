/// Zero-width space, lets the wiki wrap long labels after a slash.
pub const ZERO_WIDTH_SPACE: char = '\u{200b}';

/// Inserts a zero-width space after every `/` in a link label.
pub fn format_link_text(item: &str) -> String {
    item.replace('/', &format!("/{ZERO_WIDTH_SPACE}"))
}

/// Converts a heading into the wiki's in-page anchor (`#...`).
///
/// Labels containing `/` only have the slash escaped as `.2F`. Anything else
/// has spaces turned into underscores and the remaining reserved characters
/// percent-encoded.
pub fn gen_url(item: &str) -> String {
    if item.contains('/') {
        return format!("#{}", item.replace('/', ".2F"));
    }
    format!("#{}", urlencoding::encode(&item.replace(' ', "_")))
}
