//! Concrete operations over the domain model.
//!
//! Each operation is constructed from the tree root plus a plain-data
//! parameter record, mirroring how consumers (UI, scripting, automation)
//! drive the engine.

mod add_entity;
mod add_property;
mod add_relation;
mod composite;
mod remove;
mod rename;

pub use add_entity::{AddEntity, AddEntityParams, AddEntityWithProperties};
pub use add_property::{AddProperty, AddPropertyParams};
pub use add_relation::{AddRelation, AddRelationParams};
pub use composite::CompositeOperation;
pub use remove::{RemoveArtifact, RemoveArtifactParams};
pub use rename::{RenameArtifact, RenameArtifactParams};

use arbor_model::{ArtifactId, ArtifactNode, domain};

use crate::OperationResult;

/// Plain-data description of a property to create.
#[derive(Debug, Clone)]
pub struct PropertySpec {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
    pub max_length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable: true,
            max_length: None,
            precision: None,
            scale: None,
        }
    }

    pub fn not_nullable(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn max_length(mut self, length: u32) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn precision(mut self, precision: u32, scale: u32) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    /// Build a detached property node from this spec.
    pub(crate) fn build(&self) -> ArtifactNode {
        let node = domain::property(&self.name, &self.data_type, self.nullable);
        if let Some(length) = self.max_length {
            node.set(domain::MAX_LENGTH, length);
        }
        if let Some(precision) = self.precision {
            node.set(domain::PRECISION, precision);
        }
        if let Some(scale) = self.scale {
            node.set(domain::SCALE, scale);
        }
        node
    }
}

pub(crate) fn resolve(root: &ArtifactNode, id: ArtifactId) -> Option<ArtifactNode> {
    root.find_descendant_by_id(id)
}

pub(crate) fn conflict(operation: &str, detail: &str) -> OperationResult {
    OperationResult::fail(format!(
        "cannot {operation}: the tree changed since the operation ran ({detail})"
    ))
}

/// Shared undo/redo plumbing for operations that attach one created
/// subtree to a container.
pub(crate) struct Attachment {
    pub container: ArtifactNode,
    pub node: ArtifactNode,
}

impl Attachment {
    pub fn undo(&self, operation: &str) -> OperationResult {
        let attached = self
            .node
            .parent()
            .is_some_and(|parent| parent.same_node(&self.container));
        if !attached {
            return conflict(operation, "the created node is no longer where it was added");
        }
        self.container.remove_child(&self.node);
        OperationResult::ok(format!("removed {}", self.node.label()))
    }

    pub fn redo(&self, root: &ArtifactNode, operation: &str) -> OperationResult {
        if self.node.parent().is_some() {
            return conflict(operation, "the node is already attached");
        }
        if root.find_descendant_by_id(self.container.id()).is_none() {
            return conflict(operation, "the container is no longer in the tree");
        }
        if let Some(name) = self.node.get::<String>(domain::NAME) {
            let taken = self.container.children().iter().any(|sibling| {
                sibling.kind() == self.node.kind()
                    && sibling.get::<String>(domain::NAME).as_deref() == Some(name.as_str())
            });
            if taken {
                return conflict(operation, "another node now holds that name");
            }
        }
        self.container.add_child(&self.node);
        OperationResult::ok(format!("restored {}", self.node.label()))
    }
}
