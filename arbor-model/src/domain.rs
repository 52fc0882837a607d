//! Domain vocabulary over the artifact tree.
//!
//! Domain nodes are plain [`ArtifactNode`]s with well-known kinds and
//! property names; this module owns those names and the constructors and
//! accessors that keep them consistent.

use crate::{ArtifactId, ArtifactKind, ArtifactNode, DomainKind};

/// Display name, participates in the node's label.
pub const NAME: &str = "name";
/// Generic data type name of a property (e.g. `VarChar`, `Decimal`).
pub const DATA_TYPE: &str = "data_type";
/// Whether a property accepts null.
pub const NULLABLE: &str = "nullable";
/// Maximum length of a length-bearing property.
pub const MAX_LENGTH: &str = "max_length";
/// Length-bearing property requested as unlimited.
pub const UNLIMITED: &str = "unlimited";
/// Numeric precision.
pub const PRECISION: &str = "precision";
/// Numeric scale.
pub const SCALE: &str = "scale";
/// Identifier of a relation's target entity.
///
/// Stored as an id, never as an owning reference; resolved at read time by
/// an ancestor-scoped lookup so structural edits cannot leave a dangling
/// pointer.
pub const TARGET_ENTITY: &str = "target_entity";

/// Name given to the state every new entity starts with.
pub const DEFAULT_STATE: &str = "Default";

/// Create a model root.
pub fn model(name: &str) -> ArtifactNode {
    let node = ArtifactNode::new(DomainKind::Model);
    node.set(NAME, name);
    node
}

/// Create a detached entity with its default state child.
pub fn entity(name: &str) -> ArtifactNode {
    let node = ArtifactNode::new(DomainKind::Entity);
    node.set(NAME, name);
    node.add_child(&entity_state(DEFAULT_STATE));
    node
}

/// Create a detached entity state.
pub fn entity_state(name: &str) -> ArtifactNode {
    let node = ArtifactNode::new(DomainKind::EntityState);
    node.set(NAME, name);
    node
}

/// Create a detached property of the given generic data type.
pub fn property(name: &str, data_type: &str, nullable: bool) -> ArtifactNode {
    let node = ArtifactNode::new(DomainKind::Property);
    node.set(NAME, name);
    node.set(DATA_TYPE, data_type);
    node.set(NULLABLE, nullable);
    node
}

/// Create a detached relation pointing at `target`.
pub fn relation(name: &str, target: ArtifactId) -> ArtifactNode {
    let node = ArtifactNode::new(DomainKind::Relation);
    node.set(NAME, name);
    node.set(TARGET_ENTITY, target);
    node
}

/// Children of `node` that are of `kind`, in order.
pub fn children_of_kind(node: &ArtifactNode, kind: DomainKind) -> Vec<ArtifactNode> {
    node.children()
        .into_iter()
        .filter(|child| child.kind() == ArtifactKind::Domain(kind))
        .collect()
}

/// Entities directly under a model root.
pub fn entities(model: &ArtifactNode) -> Vec<ArtifactNode> {
    children_of_kind(model, DomainKind::Entity)
}

/// Properties directly under an entity.
pub fn properties(entity: &ArtifactNode) -> Vec<ArtifactNode> {
    children_of_kind(entity, DomainKind::Property)
}

/// Relations directly under an entity.
pub fn relations(entity: &ArtifactNode) -> Vec<ArtifactNode> {
    children_of_kind(entity, DomainKind::Relation)
}

/// Find a child of `parent` with the given kind and name.
pub fn find_child_named(
    parent: &ArtifactNode,
    kind: DomainKind,
    name: &str,
) -> Option<ArtifactNode> {
    children_of_kind(parent, kind)
        .into_iter()
        .find(|child| child.get::<String>(NAME).as_deref() == Some(name))
}

/// Resolve a relation's target entity.
///
/// Walks up to the enclosing model root and searches that subtree for the
/// stored target identifier. Returns `None` when the target was removed.
pub fn resolve_relation_target(relation: &ArtifactNode) -> Option<ArtifactNode> {
    let target: ArtifactId = relation.get(TARGET_ENTITY)?;
    let scope = relation
        .find_ancestor(DomainKind::Model)
        .unwrap_or_else(|| relation.root());
    scope.find_descendant_by_id(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_starts_with_default_state() {
        let customer = entity("Customer");
        let states = children_of_kind(&customer, DomainKind::EntityState);
        assert_eq!(states.len(), 1);
        assert_eq!(
            states[0].get::<String>(NAME).as_deref(),
            Some(DEFAULT_STATE)
        );
    }

    #[test]
    fn test_find_child_named() {
        let shop = model("Shop");
        let customer = entity("Customer");
        shop.add_child(&customer);

        assert!(find_child_named(&shop, DomainKind::Entity, "Customer").is_some());
        assert!(find_child_named(&shop, DomainKind::Entity, "Order").is_none());
    }

    #[test]
    fn test_relation_resolves_through_model_scope() {
        let shop = model("Shop");
        let customer = entity("Customer");
        let order = entity("Order");
        shop.add_child(&customer);
        shop.add_child(&order);

        let rel = relation("Customer", customer.id());
        order.add_child(&rel);

        assert!(resolve_relation_target(&rel).unwrap().same_node(&customer));
    }

    #[test]
    fn test_relation_target_dangles_to_none_after_removal() {
        let shop = model("Shop");
        let customer = entity("Customer");
        let order = entity("Order");
        shop.add_child(&customer);
        shop.add_child(&order);

        let rel = relation("Customer", customer.id());
        order.add_child(&rel);

        shop.remove_child(&customer);
        assert!(resolve_relation_target(&rel).is_none());
    }
}
