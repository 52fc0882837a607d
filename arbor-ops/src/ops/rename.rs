//! Renaming an artifact.

use arbor_model::{ArtifactId, ArtifactNode, domain};

use super::{conflict, resolve};
use crate::{Operation, OperationResult};

/// Parameters for [`RenameArtifact`].
#[derive(Debug, Clone)]
pub struct RenameArtifactParams {
    /// Identifier of the node to rename.
    pub target: ArtifactId,
    /// The new name.
    pub new_name: String,
}

/// Renames a node, retaining the old name for undo.
pub struct RenameArtifact {
    root: ArtifactNode,
    params: RenameArtifactParams,
    renamed: Option<Renamed>,
}

struct Renamed {
    node: ArtifactNode,
    old_name: String,
}

impl RenameArtifact {
    pub fn new(root: &ArtifactNode, params: RenameArtifactParams) -> Self {
        Self {
            root: root.clone(),
            params,
            renamed: None,
        }
    }

    /// Check the retained node is still part of this operation's tree.
    fn in_tree(&self, node: &ArtifactNode) -> bool {
        node.root().same_node(&self.root)
    }
}

/// True when a sibling of the same kind already holds `name`.
fn name_taken(node: &ArtifactNode, name: &str) -> bool {
    node.parent().is_some_and(|parent| {
        parent.children().iter().any(|sibling| {
            sibling.kind() == node.kind()
                && !sibling.same_node(node)
                && sibling.get::<String>(domain::NAME).as_deref() == Some(name)
        })
    })
}

impl Operation for RenameArtifact {
    fn name(&self) -> &str {
        "rename"
    }

    fn validate(&self) -> Option<String> {
        let Some(node) = resolve(&self.root, self.params.target) else {
            return Some("artifact not found".to_string());
        };
        if self.params.new_name.trim().is_empty() {
            return Some("name must not be empty".to_string());
        }
        if name_taken(&node, &self.params.new_name) {
            return Some(format!(
                "a {} named '{}' already exists under {}",
                node.kind(),
                self.params.new_name,
                node.parent().map(|p| p.label()).unwrap_or_default()
            ));
        }
        None
    }

    fn execute(&mut self) -> OperationResult {
        if let Some(reason) = self.validate() {
            return OperationResult::fail(reason);
        }
        let node = resolve(&self.root, self.params.target)
            .expect("validated target disappeared mid-execute");

        let old_name = node.get::<String>(domain::NAME).unwrap_or_default();
        let old_label = node.label();
        node.set(domain::NAME, self.params.new_name.as_str());
        let result = OperationResult::ok(format!("renamed {} to {}", old_label, node.label()));
        self.renamed = Some(Renamed { node, old_name });
        result
    }

    fn undo(&mut self) -> OperationResult {
        let Some(renamed) = &self.renamed else {
            return conflict(self.name(), "nothing was executed");
        };
        if !self.in_tree(&renamed.node) {
            return conflict(self.name(), "the renamed node left the tree");
        }
        if name_taken(&renamed.node, &renamed.old_name) {
            return conflict(self.name(), "another node now holds the old name");
        }
        renamed.node.set(domain::NAME, renamed.old_name.as_str());
        OperationResult::ok(format!("restored name '{}'", renamed.old_name))
    }

    fn redo(&mut self) -> OperationResult {
        let Some(renamed) = &self.renamed else {
            return conflict(self.name(), "nothing was executed");
        };
        if !self.in_tree(&renamed.node) {
            return conflict(self.name(), "the renamed node left the tree");
        }
        if name_taken(&renamed.node, &self.params.new_name) {
            return conflict(self.name(), "another node now holds the new name");
        }
        renamed.node.set(domain::NAME, self.params.new_name.as_str());
        OperationResult::ok(format!("renamed to '{}'", self.params.new_name))
    }
}
