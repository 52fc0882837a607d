//! PostgreSQL type mappings.

use arbor_codegen::{DataTypeMapping, DataTypeMappingTable, GenericDataType, SqlDialect};

pub fn postgres() -> SqlDialect {
    SqlDialect::new("postgres", "PostgreSQL", postgres_types())
}

pub fn postgres_types() -> DataTypeMappingTable {
    DataTypeMappingTable::new("postgres")
        .with(DataTypeMapping::new(GenericDataType::Int, "integer"))
        .with(DataTypeMapping::new(GenericDataType::SmallInt, "smallint"))
        .with(DataTypeMapping::new(GenericDataType::BigInt, "bigint"))
        .with(
            DataTypeMapping::new(GenericDataType::Decimal, "numeric")
                .template("numeric({precision},{scale})")
                .precision_bounds(1, 1000)
                .scale_bounds(0, 1000),
        )
        .with(DataTypeMapping::new(
            GenericDataType::Float,
            "double precision",
        ))
        .with(DataTypeMapping::new(GenericDataType::Bool, "boolean"))
        .with(
            DataTypeMapping::new(GenericDataType::Char, "character")
                .template("character({maxlength})")
                .length_bounds(1, 10_485_760),
        )
        .with(
            // An unlimited request falls back to the bare native name,
            // which in PostgreSQL is already unbounded.
            DataTypeMapping::new(GenericDataType::VarChar, "character varying")
                .template("character varying({maxlength})")
                .length_bounds(1, 10_485_760),
        )
        .with(DataTypeMapping::new(GenericDataType::Text, "text"))
        .with(DataTypeMapping::new(GenericDataType::Date, "date"))
        .with(DataTypeMapping::new(
            GenericDataType::DateTime,
            "timestamp with time zone",
        ))
        .with(DataTypeMapping::new(GenericDataType::Time, "time"))
        .with(DataTypeMapping::new(GenericDataType::Guid, "uuid"))
        .with(DataTypeMapping::new(GenericDataType::Binary, "bytea"))
        .with(DataTypeMapping::new(GenericDataType::Json, "jsonb"))
        .with(DataTypeMapping::new(GenericDataType::Xml, "xml"))
}

#[cfg(test)]
mod tests {
    use arbor_codegen::TypeParams;

    use super::*;

    #[test]
    fn test_covers_every_generic_type() {
        let table = postgres_types();
        for generic in GenericDataType::ALL {
            assert!(table.get(generic).is_some(), "missing {generic:?}");
        }
    }

    #[test]
    fn test_common_type_defs() {
        let table = postgres_types();
        assert_eq!(
            table.generate_type_def(GenericDataType::VarChar, &TypeParams::length(50)),
            "character varying(50)"
        );
        assert_eq!(
            table.generate_type_def(GenericDataType::Decimal, &TypeParams::decimal(10, 2)),
            "numeric(10,2)"
        );
        assert_eq!(
            table.generate_type_def(GenericDataType::Guid, &TypeParams::none()),
            "uuid"
        );
        assert_eq!(
            table.generate_type_def(GenericDataType::Json, &TypeParams::none()),
            "jsonb"
        );
    }

    #[test]
    fn test_unlimited_varchar_drops_the_modifier() {
        let table = postgres_types();
        assert_eq!(
            table.generate_type_def(GenericDataType::VarChar, &TypeParams::unlimited()),
            "character varying"
        );
    }
}
