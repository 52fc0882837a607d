//! Artifact tree kernel for the arbor code generator.
//!
//! Everything arbor models (domain entities, the code-element AST, the
//! statement AST) lives in one ownership tree of typed, observable nodes
//! called *artifacts*. This crate provides that tree:
//!
//! - [`ArtifactNode`]: a tree node with identity, an ordered property bag,
//!   ordered children, and a back-reference to its parent.
//! - [`ArtifactState`]: a lossless serializable snapshot of a subtree,
//!   used for persistence and operation replay.
//! - [`domain`]: constructors and accessors for the domain vocabulary
//!   (model, entity, entity state, property, relation).
//!
//! The tree is single-writer by design: no internal locking, mutation from
//! one logical thread at a time. Mutations return [`Change`] descriptors
//! instead of firing implicit global events.

mod change;
pub mod domain;
mod id;
mod kind;
mod node;
mod property;
mod state;

pub use change::{Change, LabelChange};
pub use id::ArtifactId;
pub use kind::{ArtifactKind, DomainKind, ElementKind, StatementKind};
pub use node::ArtifactNode;
pub use property::{FromProperty, PropertyValue};
pub use state::{ArtifactState, StateError};
