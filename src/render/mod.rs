pub mod format;

use crate::error::Result;
use crate::language::Language;
use crate::pipeline::categories::{Directory, Section};
use askama::Template;

#[derive(Template)]
#[template(path = "drd_two_col.txt", escape = "none")]
pub struct EnglishPageTemplate<'a> {
    pub sections: &'a [Section],
}

#[derive(Template)]
#[template(path = "drd_two_col_fr.txt", escape = "none")]
pub struct FrenchPageTemplate<'a> {
    pub sections: &'a [Section],
}

/// Filters available to the page templates.
mod filters {
    use super::format;

    pub fn link_text<T: std::fmt::Display>(s: T) -> ::askama::Result<String> {
        Ok(format::format_link_text(&s.to_string()))
    }

    pub fn anchor<T: std::fmt::Display>(s: T) -> ::askama::Result<String> {
        Ok(format::gen_url(&s.to_string()))
    }
}

/// Renders the whole page in memory.
pub fn render_page(language: Language, directory: &Directory) -> Result<String> {
    let sections = directory.sections.as_slice();
    let page = match language {
        Language::English => EnglishPageTemplate { sections }.render()?,
        Language::French => FrenchPageTemplate { sections }.render()?,
    };
    Ok(page)
}
