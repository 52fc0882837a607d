//! SQL Server (T-SQL) type mappings.

use arbor_codegen::{DataTypeMapping, DataTypeMappingTable, GenericDataType, SqlDialect};

pub fn sqlserver() -> SqlDialect {
    SqlDialect::new("sqlserver", "Microsoft SQL Server", sqlserver_types())
}

pub fn sqlserver_types() -> DataTypeMappingTable {
    DataTypeMappingTable::new("sqlserver")
        .with(DataTypeMapping::new(GenericDataType::Int, "INT"))
        .with(DataTypeMapping::new(GenericDataType::SmallInt, "SMALLINT"))
        .with(DataTypeMapping::new(GenericDataType::BigInt, "BIGINT"))
        .with(
            DataTypeMapping::new(GenericDataType::Decimal, "DECIMAL")
                .template("DECIMAL({precision},{scale})")
                .precision_bounds(1, 38)
                .scale_bounds(0, 38),
        )
        .with(DataTypeMapping::new(GenericDataType::Float, "FLOAT"))
        .with(DataTypeMapping::new(GenericDataType::Bool, "BIT"))
        .with(
            DataTypeMapping::new(GenericDataType::Char, "CHAR")
                .template("CHAR({maxlength})")
                .length_bounds(1, 8000),
        )
        .with(
            DataTypeMapping::new(GenericDataType::VarChar, "VARCHAR")
                .template("VARCHAR({maxlength})")
                .unlimited("MAX")
                .length_bounds(1, 8000),
        )
        .with(
            DataTypeMapping::new(GenericDataType::Text, "NVARCHAR(MAX)")
                .notes("TEXT is deprecated; unbounded Unicode text"),
        )
        .with(DataTypeMapping::new(GenericDataType::Date, "DATE"))
        .with(DataTypeMapping::new(GenericDataType::DateTime, "DATETIME2"))
        .with(DataTypeMapping::new(GenericDataType::Time, "TIME"))
        .with(DataTypeMapping::new(
            GenericDataType::Guid,
            "UNIQUEIDENTIFIER",
        ))
        .with(
            DataTypeMapping::new(GenericDataType::Binary, "VARBINARY")
                .template("VARBINARY({maxlength})")
                .unlimited("MAX")
                .length_bounds(1, 8000),
        )
        .with(
            DataTypeMapping::new(GenericDataType::Json, "NVARCHAR(MAX)")
                .notes("no native json type; validate with ISJSON"),
        )
        .with(DataTypeMapping::new(GenericDataType::Xml, "XML"))
}

#[cfg(test)]
mod tests {
    use arbor_codegen::TypeParams;

    use super::*;

    #[test]
    fn test_covers_every_generic_type() {
        let table = sqlserver_types();
        for generic in GenericDataType::ALL {
            assert!(table.get(generic).is_some(), "missing {generic:?}");
        }
    }

    #[test]
    fn test_common_type_defs() {
        let table = sqlserver_types();
        assert_eq!(
            table.generate_type_def(GenericDataType::VarChar, &TypeParams::length(50)),
            "VARCHAR(50)"
        );
        assert_eq!(
            table.generate_type_def(GenericDataType::VarChar, &TypeParams::unlimited()),
            "VARCHAR(MAX)"
        );
        assert_eq!(
            table.generate_type_def(GenericDataType::Decimal, &TypeParams::decimal(10, 2)),
            "DECIMAL(10,2)"
        );
        assert_eq!(
            table.generate_type_def(GenericDataType::Guid, &TypeParams::none()),
            "UNIQUEIDENTIFIER"
        );
    }

    #[test]
    fn test_length_clamped_to_varchar_limit() {
        let table = sqlserver_types();
        assert_eq!(
            table.generate_type_def(GenericDataType::VarChar, &TypeParams::length(20_000)),
            "VARCHAR(8000)"
        );
    }
}
