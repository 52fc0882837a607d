//! The model-to-AST bridge.
//!
//! Turns domain entities into class declarations: one auto-property per
//! domain property (typed through the target language's mapping table), a
//! constructor taking the non-nullable ones, and one reference property
//! per relation.

use std::str::FromStr;

use arbor_ast::{CodeElement, Constructor, Parameter, PropertyElement, Statement, TypeDecl};
use arbor_codegen::{GenericDataType, Language, TypeParams};
use arbor_codegen_csharp::{camel_case, pascal_case};
use arbor_model::{ArtifactNode, domain};

/// Build the class declaration for one entity.
pub fn entity_class(entity: &ArtifactNode, language: &Language) -> CodeElement {
    let class_name = pascal_case(&name(entity));
    let mut class = TypeDecl::new(&class_name);
    let mut ctor = Constructor::new(&class_name);

    for property in domain::properties(entity) {
        let property_name = pascal_case(&name(&property));
        let ty = property_type(&property, language);
        class = class.member(CodeElement::Property(PropertyElement::new(
            &property_name,
            ty.as_str(),
        )));

        if !property.get::<bool>(domain::NULLABLE).unwrap_or(false) {
            let parameter = camel_case(&property_name);
            ctor = ctor
                .parameter(Parameter::new(&parameter, ty.as_str()))
                .statement(Statement::assign(&property_name, &parameter));
        }
    }

    for relation in domain::relations(entity) {
        let relation_name = pascal_case(&name(&relation));
        let target = domain::resolve_relation_target(&relation)
            .map_or_else(|| "object".to_string(), |target| pascal_case(&name(&target)));
        class = class.member(CodeElement::Property(PropertyElement::new(
            &relation_name,
            target.as_str(),
        )));
    }

    CodeElement::Class(class.member(CodeElement::Constructor(ctor)))
}

fn name(node: &ArtifactNode) -> String {
    node.get::<String>(domain::NAME).unwrap_or_default()
}

fn property_type(property: &ArtifactNode, language: &Language) -> String {
    let raw = property.get::<String>(domain::DATA_TYPE).unwrap_or_default();
    match GenericDataType::from_str(&raw) {
        Ok(generic) => language.types.generate_type_def(generic, &TypeParams::none()),
        // Unrecognized type names pass through untouched.
        Err(_) => raw,
    }
}

#[cfg(test)]
mod tests {
    use arbor_codegen::Emitter;

    use super::*;
    use crate::registries;

    #[test]
    fn test_entity_becomes_class_with_constructor() {
        let shop = domain::model("Shop");
        let customer = domain::entity("Customer");
        shop.add_child(&customer);
        customer.add_child(&domain::property("name", "VarChar", false));
        customer.add_child(&domain::property("nickname", "VarChar", true));

        let registry = registries::languages();
        let language = registry.get("csharp").unwrap();
        let source = language
            .emitter
            .generate(&entity_class(&customer, language))
            .unwrap();

        assert!(source.contains("public class Customer"));
        assert!(source.contains("public string Name { get; set; }"));
        assert!(source.contains("public string Nickname { get; set; }"));
        // Only the non-nullable property reaches the constructor.
        assert!(source.contains("public Customer(string name)"));
        assert!(source.contains("Name = name;"));
    }

    #[test]
    fn test_relation_becomes_reference_property() {
        let shop = domain::model("Shop");
        let customer = domain::entity("Customer");
        let order = domain::entity("Order");
        shop.add_child(&customer);
        shop.add_child(&order);
        order.add_child(&domain::relation("customer", customer.id()));

        let registry = registries::languages();
        let language = registry.get("csharp").unwrap();
        let source = language
            .emitter
            .generate(&entity_class(&order, language))
            .unwrap();

        assert!(source.contains("public Customer Customer { get; set; }"));
    }
}
