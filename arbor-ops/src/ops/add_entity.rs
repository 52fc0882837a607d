//! Adding entities to a model.

use arbor_model::{ArtifactId, ArtifactNode, DomainKind, domain};

use super::{Attachment, PropertySpec, conflict, resolve};
use crate::{Operation, OperationResult};

/// Parameters for [`AddEntity`] and [`AddEntityWithProperties`].
#[derive(Debug, Clone)]
pub struct AddEntityParams {
    /// Identifier of the model root (or nesting container) to add under.
    pub container: ArtifactId,
    /// Name of the new entity.
    pub name: String,
}

/// Adds one entity (with its default state) under a container.
pub struct AddEntity {
    root: ArtifactNode,
    params: AddEntityParams,
    attachment: Option<Attachment>,
}

impl AddEntity {
    pub fn new(root: &ArtifactNode, params: AddEntityParams) -> Self {
        Self {
            root: root.clone(),
            params,
            attachment: None,
        }
    }

    /// The entity node created by `execute`, if any.
    pub fn created(&self) -> Option<&ArtifactNode> {
        self.attachment.as_ref().map(|a| &a.node)
    }
}

impl Operation for AddEntity {
    fn name(&self) -> &str {
        "add entity"
    }

    fn validate(&self) -> Option<String> {
        validate_new_entity(&self.root, &self.params)
    }

    fn execute(&mut self) -> OperationResult {
        if let Some(reason) = self.validate() {
            return OperationResult::fail(reason);
        }
        let container = resolve(&self.root, self.params.container)
            .expect("validated container disappeared mid-execute");

        let entity = domain::entity(&self.params.name);
        container.add_child(&entity);
        let result = OperationResult::ok(format!("added {}", entity.label()));
        self.attachment = Some(Attachment {
            container,
            node: entity,
        });
        result
    }

    fn undo(&mut self) -> OperationResult {
        match &self.attachment {
            Some(attachment) => attachment.undo(self.name()),
            None => conflict(self.name(), "nothing was executed"),
        }
    }

    fn redo(&mut self) -> OperationResult {
        match &self.attachment {
            Some(attachment) => attachment.redo(&self.root, self.name()),
            None => conflict(self.name(), "nothing was executed"),
        }
    }
}

/// Adds one entity together with its properties in a single undoable step.
///
/// Creates the entity node, its default state node, and one property node
/// per spec; undo removes the whole subtree, redo restores the same nodes
/// with the same identifiers.
pub struct AddEntityWithProperties {
    root: ArtifactNode,
    params: AddEntityParams,
    properties: Vec<PropertySpec>,
    attachment: Option<Attachment>,
}

impl AddEntityWithProperties {
    pub fn new(
        root: &ArtifactNode,
        params: AddEntityParams,
        properties: Vec<PropertySpec>,
    ) -> Self {
        Self {
            root: root.clone(),
            params,
            properties,
            attachment: None,
        }
    }

    /// The entity node created by `execute`, if any.
    pub fn created(&self) -> Option<&ArtifactNode> {
        self.attachment.as_ref().map(|a| &a.node)
    }
}

impl Operation for AddEntityWithProperties {
    fn name(&self) -> &str {
        "add entity with properties"
    }

    fn validate(&self) -> Option<String> {
        if let Some(reason) = validate_new_entity(&self.root, &self.params) {
            return Some(reason);
        }
        for (index, spec) in self.properties.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Some(format!("property #{} has an empty name", index + 1));
            }
            let duplicates = self
                .properties
                .iter()
                .filter(|other| other.name == spec.name)
                .count();
            if duplicates > 1 {
                return Some(format!("duplicate property name '{}'", spec.name));
            }
        }
        None
    }

    fn execute(&mut self) -> OperationResult {
        if let Some(reason) = self.validate() {
            return OperationResult::fail(reason);
        }
        let container = resolve(&self.root, self.params.container)
            .expect("validated container disappeared mid-execute");

        let entity = domain::entity(&self.params.name);
        for spec in &self.properties {
            entity.add_child(&spec.build());
        }
        container.add_child(&entity);

        let result = OperationResult::ok(format!(
            "added {} with {} properties",
            entity.label(),
            self.properties.len()
        ));
        self.attachment = Some(Attachment {
            container,
            node: entity,
        });
        result
    }

    fn undo(&mut self) -> OperationResult {
        match &self.attachment {
            Some(attachment) => attachment.undo(self.name()),
            None => conflict(self.name(), "nothing was executed"),
        }
    }

    fn redo(&mut self) -> OperationResult {
        match &self.attachment {
            Some(attachment) => attachment.redo(&self.root, self.name()),
            None => conflict(self.name(), "nothing was executed"),
        }
    }
}

fn validate_new_entity(root: &ArtifactNode, params: &AddEntityParams) -> Option<String> {
    let Some(container) = resolve(root, params.container) else {
        return Some("container not found".to_string());
    };
    if params.name.trim().is_empty() {
        return Some("entity name must not be empty".to_string());
    }
    if domain::find_child_named(&container, DomainKind::Entity, &params.name).is_some() {
        return Some(format!(
            "an entity named '{}' already exists under {}",
            params.name,
            container.label()
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_validation_leaves_tree_untouched() {
        let model = domain::model("Shop");
        let mut op = AddEntity::new(
            &model,
            AddEntityParams {
                container: model.id(),
                name: "".to_string(),
            },
        );

        let result = op.execute();
        assert!(!result.success);
        assert_eq!(model.child_count(), 0);
    }

    #[test]
    fn test_duplicate_entity_rejected() {
        let model = domain::model("Shop");
        model.add_child(&domain::entity("Customer"));

        let mut op = AddEntity::new(
            &model,
            AddEntityParams {
                container: model.id(),
                name: "Customer".to_string(),
            },
        );

        let result = op.execute();
        assert!(!result.success);
        assert!(result.message.contains("already exists"));
        assert_eq!(domain::entities(&model).len(), 1);
    }

    #[test]
    fn test_undo_redo_keeps_identity() {
        let model = domain::model("Shop");
        let mut op = AddEntity::new(
            &model,
            AddEntityParams {
                container: model.id(),
                name: "Customer".to_string(),
            },
        );

        assert!(op.execute().success);
        let id = op.created().unwrap().id();

        assert!(op.undo().success);
        assert_eq!(model.child_count(), 0);

        assert!(op.redo().success);
        assert_eq!(domain::entities(&model)[0].id(), id);
    }

    #[test]
    fn test_redo_rejects_occupied_name_slot() {
        let model = domain::model("Shop");
        let mut op = AddEntity::new(
            &model,
            AddEntityParams {
                container: model.id(),
                name: "Customer".to_string(),
            },
        );

        assert!(op.execute().success);
        assert!(op.undo().success);

        // An unrelated edit reuses the name while the operation sits
        // on the redo stack.
        model.add_child(&domain::entity("Customer"));

        let result = op.redo();
        assert!(!result.success);
        assert_eq!(domain::entities(&model).len(), 1);
    }

    #[test]
    fn test_undo_rejects_conflicting_tree_change() {
        let model = domain::model("Shop");
        let mut op = AddEntity::new(
            &model,
            AddEntityParams {
                container: model.id(),
                name: "Customer".to_string(),
            },
        );
        assert!(op.execute().success);

        // An unrelated mutation detaches the entity before undo runs.
        let created = op.created().unwrap().clone();
        model.remove_child(&created);

        let result = op.undo();
        assert!(!result.success);
        assert!(result.message.contains("tree changed"));
    }
}
