//! C# target for the arbor code generator.
//!
//! [`CSharpEmitter`] renders every element and statement variant of the
//! AST as C# source; [`csharp_types`] is the language's data-type mapping
//! table.

mod emitter;
mod naming;
mod types;

pub use emitter::CSharpEmitter;
pub use naming::{camel_case, pascal_case};
pub use types::csharp_types;
