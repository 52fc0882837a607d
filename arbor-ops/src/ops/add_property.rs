//! Adding a property to an entity.

use arbor_model::{ArtifactId, ArtifactKind, ArtifactNode, DomainKind};

use super::{Attachment, PropertySpec, conflict, resolve};
use crate::{Operation, OperationResult};

/// Parameters for [`AddProperty`].
#[derive(Debug, Clone)]
pub struct AddPropertyParams {
    /// Identifier of the entity to add the property to.
    pub entity: ArtifactId,
    /// The property to create.
    pub spec: PropertySpec,
}

/// Adds one property node under an entity.
pub struct AddProperty {
    root: ArtifactNode,
    params: AddPropertyParams,
    attachment: Option<Attachment>,
}

impl AddProperty {
    pub fn new(root: &ArtifactNode, params: AddPropertyParams) -> Self {
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

impl Operation for AddProperty {
    fn name(&self) -> &str {
        "add property"
    }

    fn validate(&self) -> Option<String> {
        let Some(entity) = resolve(&self.root, self.params.entity) else {
            return Some("container not found".to_string());
        };
        if entity.kind() != ArtifactKind::Domain(DomainKind::Entity) {
            return Some(format!("{} is not an entity", entity.label()));
        }
        if self.params.spec.name.trim().is_empty() {
            return Some("property name must not be empty".to_string());
        }
        if arbor_model::domain::find_child_named(
            &entity,
            DomainKind::Property,
            &self.params.spec.name,
        )
        .is_some()
        {
            return Some(format!(
                "a property named '{}' already exists under {}",
                self.params.spec.name,
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

        let property = self.params.spec.build();
        entity.add_child(&property);
        let result = OperationResult::ok(format!("added {}", property.label()));
        self.attachment = Some(Attachment {
            container: entity,
            node: property,
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
    use arbor_model::domain;

    #[test]
    fn test_add_property_to_entity() {
        let model = domain::model("Shop");
        let customer = domain::entity("Customer");
        model.add_child(&customer);

        let mut op = AddProperty::new(
            &model,
            AddPropertyParams {
                entity: customer.id(),
                spec: PropertySpec::new("Name", "VarChar")
                    .not_nullable()
                    .max_length(50),
            },
        );

        assert!(op.execute().success);
        let props = domain::properties(&customer);
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].get::<u32>(domain::MAX_LENGTH), Some(50));
        assert_eq!(props[0].get::<bool>(domain::NULLABLE), Some(false));
    }

    #[test]
    fn test_rejects_non_entity_container() {
        let model = domain::model("Shop");
        let mut op = AddProperty::new(
            &model,
            AddPropertyParams {
                entity: model.id(),
                spec: PropertySpec::new("Name", "VarChar"),
            },
        );

        let result = op.execute();
        assert!(!result.success);
        assert!(result.message.contains("not an entity"));
    }
}
