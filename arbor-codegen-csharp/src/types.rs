//! C# data-type mappings.

use arbor_codegen::{DataTypeMapping, DataTypeMappingTable, GenericDataType};

/// The C# type-mapping table.
///
/// C# types take no length/precision parameters, so no mapping carries a
/// template; length constraints surface as validation attributes, not as
/// type syntax.
pub fn csharp_types() -> DataTypeMappingTable {
    DataTypeMappingTable::new("csharp")
        .with(DataTypeMapping::new(GenericDataType::Int, "int"))
        .with(DataTypeMapping::new(GenericDataType::SmallInt, "short"))
        .with(DataTypeMapping::new(GenericDataType::BigInt, "long"))
        .with(DataTypeMapping::new(GenericDataType::Decimal, "decimal"))
        .with(DataTypeMapping::new(GenericDataType::Float, "double"))
        .with(DataTypeMapping::new(GenericDataType::Bool, "bool"))
        .with(DataTypeMapping::new(GenericDataType::Char, "char"))
        .with(DataTypeMapping::new(GenericDataType::VarChar, "string"))
        .with(DataTypeMapping::new(GenericDataType::Text, "string"))
        .with(DataTypeMapping::new(GenericDataType::Date, "DateTime"))
        .with(DataTypeMapping::new(GenericDataType::DateTime, "DateTime"))
        .with(DataTypeMapping::new(GenericDataType::Time, "TimeSpan"))
        .with(DataTypeMapping::new(GenericDataType::Guid, "Guid"))
        .with(
            DataTypeMapping::new(GenericDataType::Binary, "byte[]")
                .notes("length constraints are not expressed in the type"),
        )
        .with(DataTypeMapping::new(GenericDataType::Json, "string"))
        .with(DataTypeMapping::new(GenericDataType::Xml, "string"))
}
