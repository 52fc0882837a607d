//! Retargetable emission core for the arbor code generator.
//!
//! Target-language crates (e.g. `arbor-codegen-csharp`) implement
//! [`Emitter`] over the closed AST variant sets and register themselves,
//! together with their [`DataTypeMappingTable`], in an explicit
//! [`LanguageRegistry`]. SQL dialects carry only a mapping table and live
//! in the [`DialectRegistry`]. Registries are constructed once at startup
//! and passed by reference; there is no process-wide service locator.

pub mod builder;
mod emitter;
pub mod mapping;
mod registry;

pub use builder::{CodeBuilder, Indent};
pub use emitter::{EmitError, Emitter};
pub use mapping::{
    Bounds, DataTypeMapping, DataTypeMappingTable, GenericDataType, ParseDataTypeError,
    TypeLength, TypeParams,
};
pub use registry::{DialectRegistry, Language, LanguageRegistry, SqlDialect};
