//! The artifact tree node.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;

use crate::{ArtifactId, ArtifactKind, Change, FromProperty, LabelChange, PropertyValue};

/// A node in the artifact tree.
///
/// `ArtifactNode` is a cheap shared handle; cloning it clones the handle,
/// not the node. A node owns its children and holds only a weak
/// back-reference to its parent, so dropping a subtree's root drops the
/// subtree. Nodes are created detached and join a tree through
/// [`add_child`](Self::add_child).
///
/// The tree is single-writer: no internal locking, callers marshal all
/// mutation onto one logical thread.
#[derive(Clone)]
pub struct ArtifactNode {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    id: ArtifactId,
    kind: ArtifactKind,
    properties: IndexMap<String, PropertyValue>,
    children: Vec<ArtifactNode>,
    parent: Weak<RefCell<Inner>>,
    payload: Option<Rc<dyn Any>>,
}

impl ArtifactNode {
    /// Create a detached node of the given kind with a fresh identifier.
    pub fn new(kind: impl Into<ArtifactKind>) -> Self {
        Self::with_id(kind, ArtifactId::new())
    }

    /// Create a detached node with an explicit identifier.
    ///
    /// Used by state restoration; everything else wants [`new`](Self::new).
    pub fn with_id(kind: impl Into<ArtifactKind>, id: ArtifactId) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                id,
                kind: kind.into(),
                properties: IndexMap::new(),
                children: Vec::new(),
                parent: Weak::new(),
                payload: None,
            })),
        }
    }

    pub fn id(&self) -> ArtifactId {
        self.inner.borrow().id
    }

    pub fn kind(&self) -> ArtifactKind {
        self.inner.borrow().kind
    }

    /// Whether two handles refer to the same node.
    pub fn same_node(&self, other: &ArtifactNode) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Set a property, comparing by equality.
    ///
    /// Returns a [`Change`] descriptor, or `None` when the value is
    /// unchanged (no-op writes leave no trace). When the property
    /// participates in the node's display label the descriptor carries the
    /// label transition as well.
    pub fn set(&self, name: &str, value: impl Into<PropertyValue>) -> Option<Change> {
        let value = value.into();
        let mut inner = self.inner.borrow_mut();

        let old = inner.properties.get(name).cloned();
        if old.as_ref() == Some(&value) {
            return None;
        }

        let affects_label = inner.kind.label_property() == Some(name);
        let old_label = affects_label.then(|| derive_label(&inner));

        inner.properties.insert(name.to_string(), value.clone());

        let label = old_label.map(|old| LabelChange {
            old,
            new: derive_label(&inner),
        });

        Some(Change {
            node: inner.id,
            property: name.to_string(),
            old,
            new: value,
            label,
        })
    }

    /// Read a property with a typed extraction.
    pub fn get<T: FromProperty>(&self, name: &str) -> Option<T> {
        T::from_property(self.inner.borrow().properties.get(name)?)
    }

    /// Read a property as its raw tagged value.
    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        self.inner.borrow().properties.get(name).cloned()
    }

    /// Snapshot of the property bag in insertion order.
    pub fn properties(&self) -> IndexMap<String, PropertyValue> {
        self.inner.borrow().properties.clone()
    }

    /// Human-readable display label, derived from kind and properties.
    pub fn label(&self) -> String {
        derive_label(&self.inner.borrow())
    }

    /// Append `child` to this node's child sequence.
    ///
    /// The child's parent pointer and this node's child sequence are
    /// updated together; no partial state is observable. Attaching a node
    /// that already has a parent, or attaching a node to its own
    /// descendant, is a programmer error.
    pub fn add_child(&self, child: &ArtifactNode) {
        let index = self.inner.borrow().children.len();
        self.insert_child(index, child);
    }

    /// Insert `child` at `index` in this node's child sequence.
    pub fn insert_child(&self, index: usize, child: &ArtifactNode) {
        assert!(
            child.parent().is_none(),
            "node {} is already attached to a parent",
            child.id()
        );
        assert!(
            child.find_descendant_by_id(self.id()).is_none(),
            "attaching a node to its own descendant would create a cycle"
        );

        child.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
        self.inner.borrow_mut().children.insert(index, child.clone());
    }

    /// Remove `child` from this node's child sequence.
    ///
    /// Returns `false` when `child` is not a child of this node.
    pub fn remove_child(&self, child: &ArtifactNode) -> bool {
        let Some(index) = self.child_index(child) else {
            return false;
        };
        self.inner.borrow_mut().children.remove(index);
        child.inner.borrow_mut().parent = Weak::new();
        true
    }

    /// Detach this node from its parent, if attached.
    pub fn detach(&self) {
        if let Some(parent) = self.parent() {
            parent.remove_child(self);
        }
    }

    /// Position of `child` in the child sequence.
    pub fn child_index(&self, child: &ArtifactNode) -> Option<usize> {
        self.inner
            .borrow()
            .children
            .iter()
            .position(|c| c.same_node(child))
    }

    /// Ordered snapshot of the child handles.
    pub fn children(&self) -> Vec<ArtifactNode> {
        self.inner.borrow().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    /// The owning parent, or `None` for a detached node or tree root.
    pub fn parent(&self) -> Option<ArtifactNode> {
        self.inner
            .borrow()
            .parent
            .upgrade()
            .map(|inner| ArtifactNode { inner })
    }

    /// The root of the tree this node belongs to (itself when detached).
    pub fn root(&self) -> ArtifactNode {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Walk the parent chain and return the nearest ancestor of `kind`.
    pub fn find_ancestor(&self, kind: impl Into<ArtifactKind>) -> Option<ArtifactNode> {
        let kind = kind.into();
        let mut current = self.parent();
        while let Some(node) = current {
            if node.kind() == kind {
                return Some(node);
            }
            current = node.parent();
        }
        None
    }

    /// Depth-first search of the subtree rooted here (self included).
    pub fn find_descendant_by_id(&self, id: ArtifactId) -> Option<ArtifactNode> {
        if self.id() == id {
            return Some(self.clone());
        }
        let children = self.children();
        children
            .iter()
            .find_map(|child| child.find_descendant_by_id(id))
    }

    /// Attach an opaque payload to this node.
    ///
    /// AST wrapper nodes carry their structural element here so unwrapping
    /// hands back the exact value the factory received.
    pub fn set_payload(&self, payload: Rc<dyn Any>) {
        self.inner.borrow_mut().payload = Some(payload);
    }

    /// Downcast the payload to `T`.
    pub fn payload<T: Any>(&self) -> Option<Rc<T>> {
        let payload = self.inner.borrow().payload.clone()?;
        payload.downcast::<T>().ok()
    }
}

impl PartialEq for ArtifactNode {
    fn eq(&self, other: &Self) -> bool {
        self.same_node(other)
    }
}

impl fmt::Debug for ArtifactNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ArtifactNode")
            .field("id", &inner.id)
            .field("kind", &inner.kind)
            .field("label", &derive_label(&inner))
            .field("children", &inner.children.len())
            .finish()
    }
}

fn derive_label(inner: &Inner) -> String {
    match inner
        .kind
        .label_property()
        .and_then(|prop| inner.properties.get(prop))
    {
        Some(PropertyValue::Str(name)) if !name.is_empty() => {
            format!("{} '{}'", inner.kind.name(), name)
        }
        _ => inner.kind.name().to_string(),
    }
}
