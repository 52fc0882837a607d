//! Snapshot tests for C# emission.
//!
//! Run `cargo insta review` to update snapshots when making intentional
//! changes to the emitted shape.

use arbor_ast::{
    CodeElement, Constructor, DocComment, ElseIfBranch, EnumDecl, IfStatement, Method, Namespace,
    Parameter, PropertyElement, Statement, TypeDecl,
};
use arbor_codegen::Emitter;
use arbor_codegen_csharp::CSharpEmitter;

#[test]
fn test_customer_class() {
    let class = TypeDecl::new("Customer")
        .doc(DocComment::new("A customer of the shop."))
        .base("EntityBase")
        .member(CodeElement::Property(
            PropertyElement::new("Id", "Guid").read_only(),
        ))
        .member(CodeElement::Property(PropertyElement::new("Name", "string")))
        .member(CodeElement::Constructor(
            Constructor::new("Customer")
                .parameter(Parameter::new("name", "string"))
                .statement(Statement::assign("Name", "name")),
        ))
        .member(CodeElement::Method(
            Method::new("Validate")
                .returns("bool")
                .statement(Statement::ret("!string.IsNullOrEmpty(Name)")),
        ));

    let text = CSharpEmitter.generate(&CodeElement::Class(class)).unwrap();
    insta::assert_snapshot!("customer_class", text);
}

#[test]
fn test_namespace_with_control_flow() {
    let describe = Method::new("Describe")
        .returns("string")
        .parameter(Parameter::new("count", "int"))
        .statement(Statement::If(
            IfStatement::new("count == 0")
                .then(Statement::ret("\"empty\""))
                .else_if(
                    ElseIfBranch::new("count == 1").statement(Statement::ret("\"single\"")),
                )
                .otherwise(Statement::ret("\"many\"")),
        ));

    let ns = Namespace::new("Shop.Model")
        .import("System")
        .import("System.Collections.Generic")
        .member(CodeElement::Enum(
            EnumDecl::new("Status")
                .valued_variant("New", 1)
                .variant("Archived"),
        ))
        .member(CodeElement::Class(
            TypeDecl::new("Formatter").member(CodeElement::Method(describe)),
        ));

    let text = CSharpEmitter
        .generate(&CodeElement::Namespace(ns))
        .unwrap();
    insta::assert_snapshot!("namespace_with_control_flow", text);
}
