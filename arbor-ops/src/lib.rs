//! Operation engine for the arbor artifact tree.
//!
//! Every mutation of the tree goes through an [`Operation`]: a command
//! object that validates its preconditions, executes, and can undo and
//! redo itself structurally. Expected domain failures (duplicate name,
//! missing container) are returned as [`OperationResult`] values, never
//! raised; validation failure always leaves the tree untouched.
//!
//! Operations retain the exact nodes they created or removed, so undoing
//! and redoing reuses the same identities instead of re-deriving them by
//! name (which would be ambiguous after renames).

mod history;
mod operation;
pub mod ops;
mod result;

pub use history::OperationHistory;
pub use operation::Operation;
pub use result::OperationResult;
