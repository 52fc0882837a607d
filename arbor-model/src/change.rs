//! Change descriptors.
//!
//! Mutations return descriptors instead of broadcasting observer events;
//! callers that need notification forward the descriptor explicitly.

use crate::{ArtifactId, PropertyValue};

/// Description of one property mutation on a node.
///
/// Returned by [`ArtifactNode::set`](crate::ArtifactNode::set); absent when
/// the new value equals the old one (no-op writes produce no change).
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    /// Identifier of the mutated node.
    pub node: ArtifactId,
    /// Name of the property that changed.
    pub property: String,
    /// Previous value, if the property existed.
    pub old: Option<PropertyValue>,
    /// New value.
    pub new: PropertyValue,
    /// Label re-derivation, when the property participates in the node's
    /// display label. Distinct from the property change itself.
    pub label: Option<LabelChange>,
}

/// A display-label transition caused by a property change.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelChange {
    pub old: String,
    pub new: String,
}
