//! Serializable artifact snapshots.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ArtifactId, ArtifactKind, ArtifactNode, PropertyValue};

/// Errors raised while reading a serialized state.
///
/// Malformed input is an integrity failure, not a domain failure: the core
/// never silently repairs a corrupt snapshot.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to parse artifact state")]
    Parse(#[from] serde_json::Error),
}

/// A lossless snapshot of one node and, recursively, its children.
///
/// `node -> state -> node` reproduces identical identifiers, property
/// values, and child order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactState {
    pub id: ArtifactId,
    pub kind: ArtifactKind,
    pub properties: IndexMap<String, PropertyValue>,
    pub children: Vec<ArtifactState>,
}

impl ArtifactState {
    /// Capture the subtree rooted at `node`.
    pub fn capture(node: &ArtifactNode) -> Self {
        Self {
            id: node.id(),
            kind: node.kind(),
            properties: node.properties(),
            children: node.children().iter().map(Self::capture).collect(),
        }
    }

    /// Rebuild a detached subtree from this snapshot.
    pub fn restore(&self) -> ArtifactNode {
        let node = ArtifactNode::with_id(self.kind, self.id);
        for (name, value) in &self.properties {
            node.set(name, value.clone());
        }
        for child in &self.children {
            node.add_child(&child.restore());
        }
        node
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainKind;

    fn sample_tree() -> ArtifactNode {
        let model = ArtifactNode::new(DomainKind::Model);
        model.set("name", "Shop");

        let entity = ArtifactNode::new(DomainKind::Entity);
        entity.set("name", "Customer");
        model.add_child(&entity);

        let prop = ArtifactNode::new(DomainKind::Property);
        prop.set("name", "Name");
        prop.set("nullable", false);
        prop.set("max_length", 50u32);
        entity.add_child(&prop);

        model
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let tree = sample_tree();
        let state = ArtifactState::capture(&tree);
        let restored = state.restore();

        assert_eq!(restored.id(), tree.id());
        assert_eq!(restored.kind(), tree.kind());
        assert_eq!(restored.properties(), tree.properties());

        let original_child = &tree.children()[0];
        let restored_child = &restored.children()[0];
        assert_eq!(restored_child.id(), original_child.id());
        assert_eq!(restored_child.properties(), original_child.properties());
        assert_eq!(
            restored_child.children()[0].properties(),
            original_child.children()[0].properties()
        );
    }

    #[test]
    fn test_json_round_trip() {
        let state = ArtifactState::capture(&sample_tree());
        let json = state.to_json().unwrap();
        let back = ArtifactState::from_json(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(ArtifactState::from_json("{").is_err());
        assert!(ArtifactState::from_json(r#"{"id": 42}"#).is_err());
    }
}
