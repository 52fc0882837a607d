//! The operation contract.

use crate::OperationResult;

/// A command over the artifact tree with undo/redo semantics.
///
/// Contract:
///
/// - [`validate`](Self::validate) returns `None` when the operation may
///   run, or a human-readable reason when it may not.
/// - [`execute`](Self::execute) must call `validate` first and return a
///   failure result *without mutating the tree* when validation fails.
///   This is an invariant, not a convention.
/// - [`undo`](Self::undo) reverses exactly the structural change `execute`
///   made, using the nodes the operation retained.
/// - [`redo`](Self::redo) re-applies using those same retained nodes, so
///   identifiers are stable across an undo/redo cycle.
///
/// Undo and redo check their retained structural preconditions and return
/// a conflict failure when the tree was changed underneath them by an
/// unrelated operation; they never best-effort reapply.
pub trait Operation {
    /// Short name of the operation, for history display.
    fn name(&self) -> &str;

    /// Check preconditions without mutating anything.
    fn validate(&self) -> Option<String>;

    /// Validate, then apply the structural change.
    fn execute(&mut self) -> OperationResult;

    /// Reverse the structural change made by the last `execute`/`redo`.
    fn undo(&mut self) -> OperationResult;

    /// Re-apply the structural change reversed by the last `undo`.
    fn redo(&mut self) -> OperationResult;
}
