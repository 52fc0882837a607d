//! Artifact kinds.
//!
//! Every node in the tree carries a kind from one closed set. Keeping the
//! sets closed means dispatch over them (factory, emitters) is exhaustive
//! `match`: adding a variant is a compile error everywhere it matters.

use serde::{Deserialize, Serialize};

/// Domain vocabulary kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainKind {
    /// The model root.
    Model,
    /// A domain entity.
    Entity,
    /// A lifecycle state owned by an entity.
    EntityState,
    /// A scalar property of an entity.
    Property,
    /// A relation from one entity to another.
    Relation,
}

/// Code-element kinds (declaration-level AST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Namespace,
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
    Field,
    Property,
    Method,
    Constructor,
    Event,
    Indexer,
    Operator,
    Import,
    Attribute,
    Parameter,
}

/// Statement kinds (body-level AST).
///
/// `ElseIf`, `SwitchCase`, and `CatchClause` are branch nodes produced by
/// the factory when it unfolds a composite statement; they have no
/// standalone statement variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    Assign,
    Comment,
    Block,
    If,
    ElseIf,
    For,
    ForEach,
    While,
    Switch,
    SwitchCase,
    TryCatch,
    CatchClause,
    Throw,
    Return,
    UsingScope,
    Raw,
}

/// The kind of an artifact node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    Domain(DomainKind),
    Element(ElementKind),
    Statement(StatementKind),
}

impl ArtifactKind {
    /// Stable display name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            ArtifactKind::Domain(kind) => match kind {
                DomainKind::Model => "Model",
                DomainKind::Entity => "Entity",
                DomainKind::EntityState => "EntityState",
                DomainKind::Property => "Property",
                DomainKind::Relation => "Relation",
            },
            ArtifactKind::Element(kind) => match kind {
                ElementKind::Namespace => "Namespace",
                ElementKind::Class => "Class",
                ElementKind::Interface => "Interface",
                ElementKind::Struct => "Struct",
                ElementKind::Enum => "Enum",
                ElementKind::Delegate => "Delegate",
                ElementKind::Field => "Field",
                ElementKind::Property => "PropertyElement",
                ElementKind::Method => "Method",
                ElementKind::Constructor => "Constructor",
                ElementKind::Event => "Event",
                ElementKind::Indexer => "Indexer",
                ElementKind::Operator => "Operator",
                ElementKind::Import => "Import",
                ElementKind::Attribute => "Attribute",
                ElementKind::Parameter => "Parameter",
            },
            ArtifactKind::Statement(kind) => match kind {
                StatementKind::Assign => "Assign",
                StatementKind::Comment => "Comment",
                StatementKind::Block => "Block",
                StatementKind::If => "If",
                StatementKind::ElseIf => "ElseIf",
                StatementKind::For => "For",
                StatementKind::ForEach => "ForEach",
                StatementKind::While => "While",
                StatementKind::Switch => "Switch",
                StatementKind::SwitchCase => "SwitchCase",
                StatementKind::TryCatch => "TryCatch",
                StatementKind::CatchClause => "CatchClause",
                StatementKind::Throw => "Throw",
                StatementKind::Return => "Return",
                StatementKind::UsingScope => "UsingScope",
                StatementKind::Raw => "Raw",
            },
        }
    }

    /// The property that participates in this kind's display label, if any.
    ///
    /// Setting that property re-derives the label and surfaces a distinct
    /// label change on the returned [`Change`](crate::Change).
    pub fn label_property(&self) -> Option<&'static str> {
        match self {
            ArtifactKind::Domain(_) => Some("name"),
            ArtifactKind::Element(_) => Some("name"),
            ArtifactKind::Statement(_) => None,
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<DomainKind> for ArtifactKind {
    fn from(kind: DomainKind) -> Self {
        Self::Domain(kind)
    }
}

impl From<ElementKind> for ArtifactKind {
    fn from(kind: ElementKind) -> Self {
        Self::Element(kind)
    }
}

impl From<StatementKind> for ArtifactKind {
    fn from(kind: StatementKind) -> Self {
        Self::Statement(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(ArtifactKind::Domain(DomainKind::Entity).name(), "Entity");
        assert_eq!(ArtifactKind::Element(ElementKind::Class).name(), "Class");
        assert_eq!(ArtifactKind::Statement(StatementKind::If).name(), "If");
    }

    #[test]
    fn test_label_property() {
        assert_eq!(
            ArtifactKind::Domain(DomainKind::Entity).label_property(),
            Some("name")
        );
        assert_eq!(
            ArtifactKind::Statement(StatementKind::Return).label_property(),
            None
        );
    }
}
