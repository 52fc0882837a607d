//! Cross-system data-type mapping.

mod generic;
mod table;

pub use generic::{GenericDataType, ParseDataTypeError};
pub use table::{Bounds, DataTypeMapping, DataTypeMappingTable, TypeLength, TypeParams};
