//! Code-element and statement AST for the arbor code generator.
//!
//! The AST is a *closed* vocabulary: [`CodeElement`] covers declarations
//! (namespaces, classes, methods, …) and [`Statement`] covers bodies
//! (assignment, if/else, loops, and so on). Both are plain structural
//! data; expressions stay as strings, matching what emitters need.
//!
//! [`AstFactory`] wraps structural elements into artifact-tree nodes so
//! the same mutation and persistence machinery that serves the domain
//! model serves generated-code structure too. Dispatch over the variant
//! sets is exhaustive `match` everywhere: adding a variant is a compile
//! error in the factory and every emitter, never a silent no-op.

mod element;
mod factory;
mod modifiers;
mod statement;
mod types;

pub use element::{
    AttributeSpec, CodeElement, Constructor, Delegate, EnumDecl, Event, Field, Import, Indexer,
    Method, Namespace, OperatorOverload, Parameter, PropertyElement, TypeDecl,
};
pub use factory::{AstFactory, unwrap_element, unwrap_statement};
pub use modifiers::{AccessModifier, DocComment, MemberModifiers};
pub use statement::{
    CatchClause, ElseIfBranch, ForEachStatement, ForStatement, IfStatement, Statement, SwitchCase,
    SwitchStatement, TryCatchStatement,
};
pub use types::TypeReference;
