//! Header alias and service keyword vocabularies

use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

/// One of the three canonical columns of a rate table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Service,
    Entry,
    Rate,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Service, Self::Entry, Self::Rate];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Entry => "entry",
            Self::Rate => "rate",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Service => 0,
            Self::Entry => 1,
            Self::Rate => 2,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lowercase and collapse runs of whitespace
#[must_use]
pub fn normalize_label(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Serializable form of the vocabulary, as loaded from JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabularyConfig {
    pub fields: FieldAliasConfig,
    pub services: Vec<ServiceConfig>,
}

/// Accepted header spellings per canonical field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldAliasConfig {
    pub service: Vec<String>,
    pub entry: Vec<String>,
    pub rate: Vec<String>,
}

/// A canonical service name with the keywords that identify it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    pub name: String,
    pub keywords: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            fields: FieldAliasConfig {
                service: strings(&["Наименование", "Услуга", "Услуги", "Service", "Name"]),
                entry: strings(&["Вход", "Entry"]),
                rate: strings(&["Ставка", "Rate"]),
            },
            services: vec![
                ServiceConfig {
                    name: "Фрахт".into(),
                    keywords: strings(&["фрахт", "организация морской перевозки"]),
                },
                ServiceConfig {
                    name: "Транспортно-Экспедиторское обслуживание".into(),
                    keywords: strings(&["транспортно-экспедиторское обслуживание"]),
                },
                ServiceConfig {
                    name: "Организация ЖД перевозки".into(),
                    keywords: strings(&["организация жд перевозки", "жд", "ржд"]),
                },
                ServiceConfig {
                    name: "Организация автовывоза".into(),
                    keywords: strings(&[
                        "организация автовывоза",
                        "автовывоз",
                        "организация автоперевозки",
                        "автоперевозка",
                        "организация автомобильной перевозки",
                    ]),
                },
            ],
        }
    }
}

/// Column indices of the three canonical fields within a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldColumns([usize; 3]);

impl FieldColumns {
    #[must_use]
    pub const fn column(&self, field: Field) -> usize {
        self.0[field.index()]
    }
}

/// Lookup from normalized header spelling to canonical field
#[derive(Debug, Clone)]
pub struct FieldAliases {
    aliases: HashMap<String, Field>,
}

impl FieldAliases {
    pub fn from_config(config: &FieldAliasConfig) -> Result<Self> {
        let mut aliases = HashMap::new();

        for (field, list) in [
            (Field::Service, &config.service),
            (Field::Entry, &config.entry),
            (Field::Rate, &config.rate),
        ] {
            if list.iter().all(|a| a.trim().is_empty()) {
                return Err(ExtractError::EmptyAliases(field));
            }
            for alias in list {
                let alias = normalize_label(alias);
                if alias.is_empty() {
                    continue;
                }
                if let Some(&first) = aliases.get(&alias) {
                    if first != field {
                        return Err(ExtractError::AliasConflict {
                            alias,
                            first,
                            second: field,
                        });
                    }
                    continue;
                }
                aliases.insert(alias, field);
            }
        }

        Ok(Self { aliases })
    }

    /// Canonical field for a header cell, if it is a known alias
    #[must_use]
    pub fn field_for(&self, header: &str) -> Option<Field> {
        self.aliases.get(&normalize_label(header)).copied()
    }

    /// Match a header row bijectively: every header must be an alias and every
    /// canonical field must be claimed by exactly one header.
    #[must_use]
    pub fn match_headers<S: AsRef<str>>(&self, headers: &[S]) -> Option<FieldColumns> {
        if headers.len() != Field::ALL.len() {
            return None;
        }

        let mut columns: [Option<usize>; 3] = [None; 3];
        for (idx, header) in headers.iter().enumerate() {
            let field = self.field_for(header.as_ref())?;
            let slot = &mut columns[field.index()];
            if slot.is_some() {
                return None;
            }
            *slot = Some(idx);
        }

        Some(FieldColumns([columns[0]?, columns[1]?, columns[2]?]))
    }
}

/// Ordered keyword table mapping free-text service names to canonical ones
#[derive(Debug, Clone)]
pub struct ServiceTaxonomy {
    keywords: Vec<(String, String)>,
}

impl ServiceTaxonomy {
    pub fn from_config(services: &[ServiceConfig]) -> Result<Self> {
        let mut keywords: Vec<(String, String)> = Vec::new();

        for service in services {
            if service.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(ExtractError::EmptyKeywords(service.name.clone()));
            }
            for keyword in &service.keywords {
                let keyword = normalize_label(keyword);
                if keyword.is_empty() {
                    continue;
                }
                if let Some((_, first)) = keywords.iter().find(|(k, _)| *k == keyword) {
                    if *first == service.name {
                        continue;
                    }
                    return Err(ExtractError::KeywordConflict {
                        keyword,
                        first: first.clone(),
                        second: service.name.clone(),
                    });
                }
                keywords.push((keyword, service.name.clone()));
            }
        }

        Ok(Self { keywords })
    }

    /// Canonical service for the first keyword found in `text`
    #[must_use]
    pub fn canonicalize(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.keywords
            .iter()
            .find(|(keyword, _)| lower.contains(keyword.as_str()))
            .map(|(_, name)| name.as_str())
    }

    /// Keyword → canonical name pairs in lookup order
    pub fn keywords(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keywords.iter().map(|(k, n)| (k.as_str(), n.as_str()))
    }
}

/// Field aliases and service taxonomy, validated and ready for lookups
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub fields: FieldAliases,
    pub services: ServiceTaxonomy,
}

static BUILTIN: LazyLock<Vocabulary> = LazyLock::new(|| {
    Vocabulary::from_config(&VocabularyConfig::default()).expect("built-in vocabulary is valid")
});

impl Vocabulary {
    pub fn from_config(config: &VocabularyConfig) -> Result<Self> {
        Ok(Self {
            fields: FieldAliases::from_config(&config.fields)?,
            services: ServiceTaxonomy::from_config(&config.services)?,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: VocabularyConfig =
            serde_json::from_str(json).map_err(|e| ExtractError::Config(e.to_string()))?;
        Self::from_config(&config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ExtractError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&content)
    }

    /// Process-wide default vocabulary
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }
}
