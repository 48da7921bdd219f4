//! Plugin classification by language tag.
//!
//! Single-purpose tags match exactly; `csv <name>` is a family matched by
//! prefix. Anything else is still a valid plugin block.

use std::collections::BTreeSet;
use std::fmt;

/// What a plugin block's language tag selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind<'a> {
    Vega,
    VegaLite,
    Tabulator,
    Mermaid,
    Treebark,
    Dropdown,
    Slider,
    Number,
    Css,
    /// Inline CSV data for the named data source.
    Csv {
        data_source: &'a str,
    },
    /// A tag registered with a [`PluginVocabulary`].
    Registered(&'a str),
    Generic,
}

const EXACT_TAGS: &[(&str, PluginKind<'static>)] = &[
    ("json vega", PluginKind::Vega),
    ("json vega-lite", PluginKind::VegaLite),
    ("json tabulator", PluginKind::Tabulator),
    ("yaml mermaid", PluginKind::Mermaid),
    ("yaml treebark", PluginKind::Treebark),
    ("yaml dropdown", PluginKind::Dropdown),
    ("yaml slider", PluginKind::Slider),
    ("yaml number", PluginKind::Number),
    ("css", PluginKind::Css),
];

const CSV_PREFIX: &str = "csv ";

impl<'a> PluginKind<'a> {
    /// Classifies against the built-in tags.
    pub fn of(language: &'a str) -> Self {
        if let Some((_, kind)) = EXACT_TAGS.iter().find(|(tag, _)| *tag == language) {
            return *kind;
        }
        if let Some(name) = language.strip_prefix(CSV_PREFIX)
            && !name.trim().is_empty()
        {
            return PluginKind::Csv {
                data_source: name.trim(),
            };
        }
        PluginKind::Generic
    }

    /// Short stable name, e.g. for markup attributes.
    pub fn name(&self) -> &'static str {
        match self {
            PluginKind::Vega => "vega",
            PluginKind::VegaLite => "vega-lite",
            PluginKind::Tabulator => "tabulator",
            PluginKind::Mermaid => "mermaid",
            PluginKind::Treebark => "treebark",
            PluginKind::Dropdown => "dropdown",
            PluginKind::Slider => "slider",
            PluginKind::Number => "number",
            PluginKind::Css => "css",
            PluginKind::Csv { .. } => "csv",
            PluginKind::Registered(_) => "registered",
            PluginKind::Generic => "generic",
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, PluginKind::Generic)
    }
}

impl fmt::Display for PluginKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginKind::Csv { data_source } => write!(f, "csv ({data_source})"),
            PluginKind::Registered(tag) => write!(f, "registered ({tag})"),
            other => f.write_str(other.name()),
        }
    }
}

/// The built-in tags plus extra exact tags registered at runtime.
#[derive(Debug, Clone, Default)]
pub struct PluginVocabulary {
    extra: BTreeSet<String>,
}

impl PluginVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self::new();
        for tag in tags {
            vocabulary.register(tag);
        }
        vocabulary
    }

    /// Registers an exact tag. Returns false if it was already known.
    pub fn register(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into().trim().to_string();
        if tag.is_empty() || !PluginKind::of(&tag).is_generic() {
            return false;
        }
        self.extra.insert(tag)
    }

    pub fn contains(&self, language: &str) -> bool {
        !PluginKind::of(language).is_generic() || self.extra.contains(language)
    }

    /// Built-in tags win over registered ones.
    pub fn classify<'a>(&self, language: &'a str) -> PluginKind<'a> {
        match PluginKind::of(language) {
            PluginKind::Generic if self.extra.contains(language) => PluginKind::Registered(language),
            kind => kind,
        }
    }

    pub fn registered(&self) -> impl Iterator<Item = &str> {
        self.extra.iter().map(String::as_str)
    }
}
