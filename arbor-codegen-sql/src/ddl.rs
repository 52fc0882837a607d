//! `CREATE TABLE` scaffolding from domain entities.

use std::str::FromStr;

use arbor_codegen::{CodeBuilder, GenericDataType, Indent, SqlDialect, TypeLength, TypeParams};
use arbor_model::{ArtifactNode, domain};

/// Render a `CREATE TABLE` statement for a domain entity.
///
/// Every table gets a surrogate `Id` primary key in the dialect's guid
/// type. Properties become columns typed through the dialect's mapping
/// table; relations become `<name>Id` columns with a `REFERENCES` clause
/// when the target entity still resolves. Resolution searches the
/// enclosing model subtree, so the caller must keep the model root alive;
/// parent links are weak and a dropped root takes the target entities
/// with it.
pub fn create_table(entity: &ArtifactNode, dialect: &SqlDialect) -> String {
    let name = entity.get::<String>(domain::NAME).unwrap_or_default();
    let guid = dialect
        .types
        .generate_type_def(GenericDataType::Guid, &TypeParams::none());

    let mut columns = vec![format!("Id {guid} NOT NULL PRIMARY KEY")];
    for property in domain::properties(entity) {
        columns.push(column_def(&property, dialect));
    }
    for relation in domain::relations(entity) {
        let relation_name = relation.get::<String>(domain::NAME).unwrap_or_default();
        let mut def = format!("{relation_name}Id {guid} NOT NULL");
        if let Some(target) = domain::resolve_relation_target(&relation) {
            let target_name = target.get::<String>(domain::NAME).unwrap_or_default();
            def.push_str(&format!(" REFERENCES {target_name} (Id)"));
        }
        columns.push(def);
    }

    let mut builder = CodeBuilder::new(Indent::SQL)
        .line(&format!("CREATE TABLE {name} ("))
        .indent();
    let last = columns.len() - 1;
    for (index, column) in columns.iter().enumerate() {
        if index < last {
            builder = builder.line(&format!("{column},"));
        } else {
            builder = builder.line(column);
        }
    }
    builder.dedent().line(");").build()
}

fn column_def(property: &ArtifactNode, dialect: &SqlDialect) -> String {
    let name = property.get::<String>(domain::NAME).unwrap_or_default();
    let type_def = type_def(property, dialect);
    let null_clause = if property.get::<bool>(domain::NULLABLE).unwrap_or(false) {
        "NULL"
    } else {
        "NOT NULL"
    };
    format!("{name} {type_def} {null_clause}")
}

fn type_def(property: &ArtifactNode, dialect: &SqlDialect) -> String {
    let raw = property.get::<String>(domain::DATA_TYPE).unwrap_or_default();
    let Ok(generic) = GenericDataType::from_str(&raw) else {
        // Unrecognized type names pass through untouched.
        return raw;
    };

    let max_length = if property.get::<bool>(domain::UNLIMITED).unwrap_or(false) {
        Some(TypeLength::Unlimited)
    } else {
        property
            .get::<u32>(domain::MAX_LENGTH)
            .map(TypeLength::Chars)
    };
    let params = TypeParams {
        max_length,
        precision: property.get::<u32>(domain::PRECISION),
        scale: property.get::<u32>(domain::SCALE),
    };
    dialect.types.generate_type_def(generic, &params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{postgres, sqlserver};

    // Returns the model root alongside the entity: parent links are weak,
    // so dropping the root would sever relation resolution.
    fn order_entity() -> (ArtifactNode, ArtifactNode) {
        let shop = domain::model("Shop");
        let customer = domain::entity("Customer");
        let order = domain::entity("Order");
        shop.add_child(&customer);
        shop.add_child(&order);

        let number = domain::property("Number", "VarChar", false);
        number.set(domain::MAX_LENGTH, 50i64);
        order.add_child(&number);

        let total = domain::property("Total", "Decimal", false);
        total.set(domain::PRECISION, 10i64);
        total.set(domain::SCALE, 2i64);
        order.add_child(&total);

        let notes = domain::property("Notes", "VarChar", true);
        notes.set(domain::UNLIMITED, true);
        order.add_child(&notes);

        order.add_child(&domain::relation("Customer", customer.id()));
        (shop, order)
    }

    #[test]
    fn test_sqlserver_create_table() {
        let (_shop, order) = order_entity();
        let sql = create_table(&order, &sqlserver());
        let expected = "\
CREATE TABLE Order (
    Id UNIQUEIDENTIFIER NOT NULL PRIMARY KEY,
    Number VARCHAR(50) NOT NULL,
    Total DECIMAL(10,2) NOT NULL,
    Notes VARCHAR(MAX) NULL,
    CustomerId UNIQUEIDENTIFIER NOT NULL REFERENCES Customer (Id)
);
";
        assert_eq!(sql, expected);
    }

    #[test]
    fn test_postgres_create_table() {
        let (_shop, order) = order_entity();
        let sql = create_table(&order, &postgres());
        assert!(sql.contains("Number character varying(50) NOT NULL,"));
        assert!(sql.contains("Total numeric(10,2) NOT NULL,"));
        assert!(sql.contains("Notes character varying NULL,"));
        assert!(sql.contains("CustomerId uuid NOT NULL REFERENCES Customer (Id)"));
    }

    #[test]
    fn test_dangling_relation_omits_references_clause() {
        let shop = domain::model("Shop");
        let customer = domain::entity("Customer");
        let order = domain::entity("Order");
        shop.add_child(&customer);
        shop.add_child(&order);
        order.add_child(&domain::relation("Customer", customer.id()));
        shop.remove_child(&customer);

        let sql = create_table(&order, &sqlserver());
        assert!(sql.contains("CustomerId UNIQUEIDENTIFIER NOT NULL\n"));
        assert!(!sql.contains("REFERENCES"));
    }
}
