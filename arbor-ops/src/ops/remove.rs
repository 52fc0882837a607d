//! Removing an artifact subtree.

use arbor_model::{ArtifactId, ArtifactNode};

use super::{conflict, resolve};
use crate::{Operation, OperationResult};

/// Parameters for [`RemoveArtifact`].
#[derive(Debug, Clone)]
pub struct RemoveArtifactParams {
    /// Identifier of the node to remove (the whole subtree goes with it).
    pub target: ArtifactId,
}

/// Removes a subtree, retaining node, parent, and position for undo.
pub struct RemoveArtifact {
    root: ArtifactNode,
    params: RemoveArtifactParams,
    removed: Option<Removed>,
}

struct Removed {
    node: ArtifactNode,
    parent: ArtifactNode,
    index: usize,
}

impl RemoveArtifact {
    pub fn new(root: &ArtifactNode, params: RemoveArtifactParams) -> Self {
        Self {
            root: root.clone(),
            params,
            removed: None,
        }
    }
}

impl Operation for RemoveArtifact {
    fn name(&self) -> &str {
        "remove"
    }

    fn validate(&self) -> Option<String> {
        let Some(node) = resolve(&self.root, self.params.target) else {
            return Some("artifact not found".to_string());
        };
        if node.parent().is_none() {
            return Some("cannot remove the tree root".to_string());
        }
        None
    }

    fn execute(&mut self) -> OperationResult {
        if let Some(reason) = self.validate() {
            return OperationResult::fail(reason);
        }
        let node = resolve(&self.root, self.params.target)
            .expect("validated target disappeared mid-execute");
        let parent = node.parent().expect("validated parent disappeared");
        let index = parent.child_index(&node).expect("child index out of sync");

        parent.remove_child(&node);
        let result = OperationResult::ok(format!("removed {}", node.label()));
        self.removed = Some(Removed {
            node,
            parent,
            index,
        });
        result
    }

    fn undo(&mut self) -> OperationResult {
        let Some(removed) = &self.removed else {
            return conflict(self.name(), "nothing was executed");
        };
        if removed.node.parent().is_some() {
            return conflict(self.name(), "the removed node was re-attached elsewhere");
        }
        if self.root.find_descendant_by_id(removed.parent.id()).is_none() {
            return conflict(self.name(), "the former parent is no longer in the tree");
        }
        if removed.index > removed.parent.child_count() {
            return conflict(self.name(), "the former position no longer exists");
        }
        removed.parent.insert_child(removed.index, &removed.node);
        OperationResult::ok(format!("restored {}", removed.node.label()))
    }

    fn redo(&mut self) -> OperationResult {
        let Some(removed) = &self.removed else {
            return conflict(self.name(), "nothing was executed");
        };
        let attached = removed
            .node
            .parent()
            .is_some_and(|parent| parent.same_node(&removed.parent));
        if !attached {
            return conflict(self.name(), "the node is no longer where undo put it");
        }
        removed.parent.remove_child(&removed.node);
        OperationResult::ok(format!("removed {}", removed.node.label()))
    }
}
