use crate::pipeline::group::TypeGroups;
use crate::types::Record;

/// A published heading and the raw type labels gathered under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub members: Vec<String>,
}

impl Category {
    pub fn new(name: &str, members: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Ordered list of display categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap {
    categories: Vec<Category>,
}

impl CategoryMap {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn english() -> Self {
        Self::new(vec![
            Category::new("Communities", &["Committees", "Communities", "Working Groups"]),
            Category::new(
                "Data Glossaries",
                &["Data Glossaries", "Other", "Top-20 Data terms"],
            ),
            Category::new(
                "Learning Resources",
                &["Data Glossaries", "Documents", "Learning Resources"],
            ),
            Category::new("Organizations and Teams", &["Organizations", "Teams"]),
            Category::new("Projects/Initiatives", &["Projects/Initiatives"]),
            Category::new("Policy Instruments", &["Policy Instruments"]),
        ])
    }

    pub fn french() -> Self {
        Self::new(vec![
            Category::new("Communautés", &["Comités", "Communautés", "Groupes de travail"]),
            Category::new(
                "Glossaires de données",
                &[
                    "Glossaires de données",
                    "Autre",
                    "Les 20 principaux termes relatifs aux données",
                ],
            ),
            Category::new(
                "Ressources d'apprentissage",
                &[
                    "Glossaires de données",
                    "Documents",
                    "Ressources d'apprentissage",
                ],
            ),
            Category::new("Organisations avec Équipes", &["Organisations", "Équipes"]),
            Category::new("Projets / initiatives", &["Projets / initiatives"]),
            Category::new("Instruments de politique", &["Instruments de politique"]),
        ])
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_member(&self, label: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.members.iter().any(|m| m == label))
    }

    /// Builds one section per declared category, in declared order, by
    /// concatenating the groups of its member types. Categories with no
    /// matching group still get an (empty) section.
    pub fn remap(&self, groups: &TypeGroups) -> Directory {
        let sections = self
            .categories
            .iter()
            .map(|category| Section {
                category: category.name.clone(),
                entries: category
                    .members
                    .iter()
                    .filter_map(|member| groups.get(member))
                    .flatten()
                    .cloned()
                    .collect(),
            })
            .collect();

        Directory { sections }
    }

    /// Types present in `groups` that no category claims.
    pub fn unmapped_types(&self, groups: &TypeGroups) -> Vec<String> {
        groups
            .keys()
            .filter(|kind| !self.is_member(kind))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: String,
    pub entries: Vec<Record>,
}

/// The page content: every declared category, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub sections: Vec<Section>,
}

impl Directory {
    pub fn section(&self, category: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.category == category)
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}
