//! Explicit language and dialect registries.
//!
//! Registries are plain objects built once at startup and passed to
//! whatever needs them. Population is the caller's business; the core
//! only defines the lookup contract.

use indexmap::IndexMap;

use crate::{DataTypeMappingTable, Emitter};

/// A registered target language: emitter plus type-mapping table.
pub struct Language {
    pub id: String,
    pub display_name: String,
    pub types: DataTypeMappingTable,
    pub emitter: Box<dyn Emitter>,
}

impl Language {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        types: DataTypeMappingTable,
        emitter: Box<dyn Emitter>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            types,
            emitter,
        }
    }
}

/// Enumerable, by-identifier collection of target languages.
#[derive(Default)]
pub struct LanguageRegistry {
    languages: IndexMap<String, Language>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, language: Language) {
        self.languages.insert(language.id.clone(), language);
    }

    pub fn get(&self, id: &str) -> Option<&Language> {
        self.languages.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.values()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }
}

/// A registered SQL dialect: type-mapping table only.
pub struct SqlDialect {
    pub id: String,
    pub display_name: String,
    pub types: DataTypeMappingTable,
}

impl SqlDialect {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        types: DataTypeMappingTable,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            types,
        }
    }
}

/// Enumerable, by-identifier collection of SQL dialects.
#[derive(Default)]
pub struct DialectRegistry {
    dialects: IndexMap<String, SqlDialect>,
}

impl DialectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, dialect: SqlDialect) {
        self.dialects.insert(dialect.id.clone(), dialect);
    }

    pub fn get(&self, id: &str) -> Option<&SqlDialect> {
        self.dialects.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SqlDialect> {
        self.dialects.values()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.dialects.keys().map(String::as_str).collect()
    }
}
