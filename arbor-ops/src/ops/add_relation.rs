//! Adding a relation between entities.

use arbor_model::{ArtifactId, ArtifactKind, ArtifactNode, DomainKind, domain};

use super::{Attachment, conflict, resolve};
use crate::{Operation, OperationResult};

/// Parameters for [`AddRelation`].
#[derive(Debug, Clone)]
pub struct AddRelationParams {
    /// Identifier of the entity that owns the relation.
    pub entity: ArtifactId,
    /// Name of the relation.
    pub name: String,
    /// Identifier of the target entity. Stored on the relation node and
    /// resolved at read time; never an owning reference.
    pub target: ArtifactId,
}

/// Adds a relation node pointing at another entity.
pub struct AddRelation {
    root: ArtifactNode,
    params: AddRelationParams,
    attachment: Option<Attachment>,
}

impl AddRelation {
    pub fn new(root: &ArtifactNode, params: AddRelationParams) -> Self {
        Self {
            root: root.clone(),
            params,
            attachment: None,
        }
    }

    pub fn created(&self) -> Option<&ArtifactNode> {
        self.attachment.as_ref().map(|a| &a.node)
    }
}

impl Operation for AddRelation {
    fn name(&self) -> &str {
        "add relation"
    }

    fn validate(&self) -> Option<String> {
        let Some(entity) = resolve(&self.root, self.params.entity) else {
            return Some("container not found".to_string());
        };
        if entity.kind() != ArtifactKind::Domain(DomainKind::Entity) {
            return Some(format!("{} is not an entity", entity.label()));
        }
        if self.params.name.trim().is_empty() {
            return Some("relation name must not be empty".to_string());
        }
        match resolve(&self.root, self.params.target) {
            None => return Some("target entity not found".to_string()),
            Some(target) if target.kind() != ArtifactKind::Domain(DomainKind::Entity) => {
                return Some(format!("{} is not an entity", target.label()));
            }
            Some(_) => {}
        }
        if domain::find_child_named(&entity, DomainKind::Relation, &self.params.name).is_some() {
            return Some(format!(
                "a relation named '{}' already exists under {}",
                self.params.name,
                entity.label()
            ));
        }
        None
    }

    fn execute(&mut self) -> OperationResult {
        if let Some(reason) = self.validate() {
            return OperationResult::fail(reason);
        }
        let entity = resolve(&self.root, self.params.entity)
            .expect("validated entity disappeared mid-execute");

        let relation = domain::relation(&self.params.name, self.params.target);
        entity.add_child(&relation);
        let result = OperationResult::ok(format!("added {}", relation.label()));
        self.attachment = Some(Attachment {
            container: entity,
            node: relation,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_resolves_after_execute() {
        let model = domain::model("Shop");
        let customer = domain::entity("Customer");
        let order = domain::entity("Order");
        model.add_child(&customer);
        model.add_child(&order);

        let mut op = AddRelation::new(
            &model,
            AddRelationParams {
                entity: order.id(),
                name: "Customer".to_string(),
                target: customer.id(),
            },
        );
        assert!(op.execute().success);

        let relation = &domain::relations(&order)[0];
        assert!(
            domain::resolve_relation_target(relation)
                .unwrap()
                .same_node(&customer)
        );
    }

    #[test]
    fn test_missing_target_rejected() {
        let model = domain::model("Shop");
        let order = domain::entity("Order");
        model.add_child(&order);

        let mut op = AddRelation::new(
            &model,
            AddRelationParams {
                entity: order.id(),
                name: "Customer".to_string(),
                target: ArtifactId::new(),
            },
        );

        let result = op.execute();
        assert!(!result.success);
        assert_eq!(result.message, "target entity not found");
        assert!(domain::relations(&order).is_empty());
    }
}
