//! The per-target emission contract.

use thiserror::Error;

use arbor_ast::{CodeElement, Statement};

use crate::builder::Indent;

/// Errors raised during emission.
///
/// An unsupported variant signals an incomplete target implementation,
/// a missing case in what must be exhaustive dispatch. It is a hard
/// failure, never a silently skipped node.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("the {language} emitter does not support {variant} elements")]
    Unsupported {
        language: &'static str,
        variant: &'static str,
    },
}

/// One emitter per target language.
///
/// `generate` converts any AST subtree into source text. Implementations
/// dispatch exhaustively over the closed variant sets; each call builds a
/// fresh [`CodeBuilder`](crate::CodeBuilder), so the indentation depth
/// resets per invocation and no state leaks between calls.
pub trait Emitter {
    /// Target language identifier (e.g. `"csharp"`).
    fn language(&self) -> &'static str;

    /// File extension for generated sources (e.g. `"cs"`).
    fn file_extension(&self) -> &'static str;

    /// Indentation unit of the target's code style.
    fn indent(&self) -> Indent;

    /// Emit a code element (and everything nested in it) as source text.
    fn generate(&self, element: &CodeElement) -> Result<String, EmitError>;

    /// Emit a single statement subtree as source text.
    fn generate_statement(&self, statement: &Statement) -> Result<String, EmitError>;
}
