//! Registry construction for the built-in targets.
//!
//! Registries are built once per invocation and passed down; nothing in
//! the workspace holds global state.

use arbor_codegen::{DialectRegistry, Language, LanguageRegistry};
use arbor_codegen_csharp::{CSharpEmitter, csharp_types};

pub fn languages() -> LanguageRegistry {
    let mut registry = LanguageRegistry::new();
    registry.register(Language::new(
        "csharp",
        "C#",
        csharp_types(),
        Box::new(CSharpEmitter),
    ));
    registry
}

pub fn dialects() -> DialectRegistry {
    arbor_codegen_sql::dialects()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_targets() {
        assert_eq!(languages().ids(), ["csharp"]);
        assert_eq!(dialects().ids(), ["sqlserver", "postgres"]);
    }
}
