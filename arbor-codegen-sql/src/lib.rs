//! SQL dialect definitions for the arbor code generator.
//!
//! Each dialect is a [`SqlDialect`](arbor_codegen::SqlDialect) carrying a
//! data-type mapping table; [`ddl`] renders `CREATE TABLE` scaffolds for
//! domain entities through whichever dialect the caller picked.

mod ddl;
mod postgres;
mod sqlserver;

use arbor_codegen::DialectRegistry;

pub use ddl::create_table;
pub use postgres::{postgres, postgres_types};
pub use sqlserver::{sqlserver, sqlserver_types};

/// A registry holding every built-in dialect.
pub fn dialects() -> DialectRegistry {
    let mut registry = DialectRegistry::new();
    registry.register(sqlserver());
    registry.register(postgres());
    registry
}
