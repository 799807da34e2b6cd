//! Closed tag vocabularies: the category and emotional-impact catalogs.
//!
//! Each catalog is a static ordered list of tag definitions. A [`TagVocabulary`]
//! wraps one catalog with a name whitelist and the numbered listing that is
//! substituted into the stage prompts.

mod category;
mod emotional_impact;

use std::collections::HashSet;

pub use category::CATEGORY_TAGS;
pub use emotional_impact::EMOTIONAL_IMPACT_TAGS;

/// One named tag plus the guidelines telling the model when to use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagDefinition {
    pub name: &'static str,
    pub guidelines: &'static [&'static str],
}

impl TagDefinition {
    /// `"<name>\n   - <guideline>\n   - <guideline>"`
    pub fn to_text(&self) -> String {
        let mut text = self.name.to_string();
        for guideline in self.guidelines {
            text.push_str("\n   - ");
            text.push_str(guideline);
        }
        text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCatalog {
    Category,
    EmotionalImpact,
}

impl TagCatalog {
    pub fn definitions(self) -> &'static [TagDefinition] {
        match self {
            TagCatalog::Category => CATEGORY_TAGS,
            TagCatalog::EmotionalImpact => EMOTIONAL_IMPACT_TAGS,
        }
    }
}

impl std::fmt::Display for TagCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagCatalog::Category => write!(f, "category"),
            TagCatalog::EmotionalImpact => write!(f, "emotional_impact"),
        }
    }
}

/// Read-only view over one catalog. Built once at startup and shared.
#[derive(Debug, Clone)]
pub struct TagVocabulary {
    catalog: TagCatalog,
    definitions: &'static [TagDefinition],
    names: HashSet<&'static str>,
    listing: String,
}

impl TagVocabulary {
    pub fn new(catalog: TagCatalog) -> Self {
        Self::from_definitions(catalog, catalog.definitions())
    }

    pub fn from_definitions(catalog: TagCatalog, definitions: &'static [TagDefinition]) -> Self {
        let names = definitions.iter().map(|d| d.name).collect();
        let listing = render_listing(definitions);
        Self {
            catalog,
            definitions,
            names,
            listing,
        }
    }

    pub fn catalog(&self) -> TagCatalog {
        self.catalog
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Tag names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.definitions.iter().map(|d| d.name)
    }

    /// Numbered prompt-ready listing of every entry.
    pub fn listing(&self) -> &str {
        &self.listing
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn render_listing(definitions: &[TagDefinition]) -> String {
    definitions
        .iter()
        .enumerate()
        .map(|(i, def)| format!("{}. {}\n", i + 1, def.to_text()))
        .collect::<Vec<_>>()
        .join("\n")
}
