//! Wrapping structural elements into artifact-tree nodes.

use std::any::Any;
use std::rc::Rc;

use arbor_model::{ArtifactNode, ElementKind, StatementKind};

use crate::{CodeElement, Statement};

/// Builds artifact-node wrappers around structural elements.
///
/// Dispatch is total over both closed variant sets; a new variant is a
/// compile error here, never a silent default case. The produced node is
/// referentially tied to its input: its payload is the exact `Rc` passed
/// in, and every nested statement, branch, case, and catch clause is
/// wrapped recursively and attached as a child in the order the input
/// exposes it; tree traversal and the element's own lists never
/// disagree.
pub struct AstFactory;

impl AstFactory {
    /// Wrap a code element and its nested structure.
    pub fn element(element: &Rc<CodeElement>) -> ArtifactNode {
        let kind = match &**element {
            CodeElement::Namespace(_) => ElementKind::Namespace,
            CodeElement::Class(_) => ElementKind::Class,
            CodeElement::Interface(_) => ElementKind::Interface,
            CodeElement::Struct(_) => ElementKind::Struct,
            CodeElement::Enum(_) => ElementKind::Enum,
            CodeElement::Delegate(_) => ElementKind::Delegate,
            CodeElement::Field(_) => ElementKind::Field,
            CodeElement::Property(_) => ElementKind::Property,
            CodeElement::Method(_) => ElementKind::Method,
            CodeElement::Constructor(_) => ElementKind::Constructor,
            CodeElement::Event(_) => ElementKind::Event,
            CodeElement::Indexer(_) => ElementKind::Indexer,
            CodeElement::Operator(_) => ElementKind::Operator,
            CodeElement::Import(_) => ElementKind::Import,
            CodeElement::Attribute(_) => ElementKind::Attribute,
            CodeElement::Parameter(_) => ElementKind::Parameter,
        };

        let node = ArtifactNode::new(kind);
        if let Some(name) = element.name() {
            node.set("name", name);
        }
        node.set_payload(Rc::clone(element) as Rc<dyn Any>);

        match &**element {
            CodeElement::Namespace(ns) => {
                attach_elements(&node, &ns.imports);
                attach_elements(&node, &ns.members);
            }
            CodeElement::Class(decl)
            | CodeElement::Interface(decl)
            | CodeElement::Struct(decl) => {
                attach_elements(&node, &decl.members);
            }
            CodeElement::Property(property) => {
                attach_statements(&node, &property.getter_body);
                attach_statements(&node, &property.setter_body);
            }
            CodeElement::Method(method) => {
                attach_statements(&node, &method.body);
            }
            CodeElement::Constructor(ctor) => {
                attach_statements(&node, &ctor.body);
            }
            CodeElement::Operator(op) => {
                attach_statements(&node, &op.body);
            }
            CodeElement::Indexer(indexer) => {
                attach_statements(&node, &indexer.getter_body);
                attach_statements(&node, &indexer.setter_body);
            }
            CodeElement::Enum(_)
            | CodeElement::Delegate(_)
            | CodeElement::Field(_)
            | CodeElement::Event(_)
            | CodeElement::Import(_)
            | CodeElement::Attribute(_)
            | CodeElement::Parameter(_) => {}
        }

        node
    }

    /// Wrap a statement and its nested structure.
    pub fn statement(statement: &Rc<Statement>) -> ArtifactNode {
        let kind = match &**statement {
            Statement::Assign { .. } => StatementKind::Assign,
            Statement::Comment(_) => StatementKind::Comment,
            Statement::Block(_) => StatementKind::Block,
            Statement::If(_) => StatementKind::If,
            Statement::For(_) => StatementKind::For,
            Statement::ForEach(_) => StatementKind::ForEach,
            Statement::While { .. } => StatementKind::While,
            Statement::Switch(_) => StatementKind::Switch,
            Statement::TryCatch(_) => StatementKind::TryCatch,
            Statement::Throw(_) => StatementKind::Throw,
            Statement::Return(_) => StatementKind::Return,
            Statement::UsingScope { .. } => StatementKind::UsingScope,
            Statement::Raw(_) => StatementKind::Raw,
        };

        let node = ArtifactNode::new(kind);
        node.set_payload(Rc::clone(statement) as Rc<dyn Any>);

        match &**statement {
            Statement::Block(body)
            | Statement::While { body, .. }
            | Statement::UsingScope { body, .. } => {
                attach_statements(&node, body);
            }
            Statement::If(stmt) => {
                attach_statements(&node, &stmt.then_branch);
                for branch in &stmt.else_if_branches {
                    let branch_node = ArtifactNode::new(StatementKind::ElseIf);
                    branch_node.set("condition", branch.condition.as_str());
                    attach_statements(&branch_node, &branch.body);
                    node.add_child(&branch_node);
                }
                attach_statements(&node, &stmt.else_branch);
            }
            Statement::For(stmt) => {
                attach_statements(&node, &stmt.body);
            }
            Statement::ForEach(stmt) => {
                attach_statements(&node, &stmt.body);
            }
            Statement::Switch(stmt) => {
                for case in &stmt.cases {
                    let case_node = ArtifactNode::new(StatementKind::SwitchCase);
                    case_node.set("value", case.value.as_str());
                    attach_statements(&case_node, &case.body);
                    node.add_child(&case_node);
                }
                attach_statements(&node, &stmt.default);
            }
            Statement::TryCatch(stmt) => {
                attach_statements(&node, &stmt.body);
                for clause in &stmt.catches {
                    let clause_node = ArtifactNode::new(StatementKind::CatchClause);
                    if let Some(ty) = &clause.exception_type {
                        clause_node.set("exception_type", ty.to_string());
                    }
                    attach_statements(&clause_node, &clause.body);
                    node.add_child(&clause_node);
                }
                attach_statements(&node, &stmt.finally);
            }
            Statement::Assign { .. }
            | Statement::Comment(_)
            | Statement::Throw(_)
            | Statement::Return(_)
            | Statement::Raw(_) => {}
        }

        node
    }
}

fn attach_elements(parent: &ArtifactNode, elements: &[Rc<CodeElement>]) {
    for element in elements {
        parent.add_child(&AstFactory::element(element));
    }
}

fn attach_statements(parent: &ArtifactNode, statements: &[Rc<Statement>]) {
    for statement in statements {
        parent.add_child(&AstFactory::statement(statement));
    }
}

/// Unwrap the code element a factory-produced node carries.
///
/// Panics when the node does not wrap a code element: that is a missing
/// case or a misused node, a programmer error by definition.
pub fn unwrap_element(node: &ArtifactNode) -> Rc<CodeElement> {
    node.payload::<CodeElement>()
        .unwrap_or_else(|| panic!("{} node does not wrap a code element", node.kind()))
}

/// Unwrap the statement a factory-produced node carries.
pub fn unwrap_statement(node: &ArtifactNode) -> Rc<Statement> {
    node.payload::<Statement>()
        .unwrap_or_else(|| panic!("{} node does not wrap a statement", node.kind()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CatchClause, ElseIfBranch, IfStatement, Method, SwitchCase, SwitchStatement,
        TryCatchStatement, TypeDecl,
    };
    use arbor_model::ArtifactKind;

    #[test]
    fn test_unwrap_is_reference_identical() {
        let element = Rc::new(CodeElement::Class(TypeDecl::new("Customer")));
        let node = AstFactory::element(&element);

        assert!(Rc::ptr_eq(&unwrap_element(&node), &element));
        assert_eq!(node.kind(), ArtifactKind::Element(ElementKind::Class));
        assert_eq!(node.label(), "Class 'Customer'");
    }

    #[test]
    fn test_method_body_wrapped_in_order() {
        let element = Rc::new(CodeElement::Method(
            Method::new("Validate")
                .statement(Statement::Comment("check".into()))
                .statement(Statement::ret("true")),
        ));
        let node = AstFactory::element(&element);

        let kinds: Vec<ArtifactKind> =
            node.children().iter().map(|child| child.kind()).collect();
        assert_eq!(
            kinds,
            [
                ArtifactKind::Statement(StatementKind::Comment),
                ArtifactKind::Statement(StatementKind::Return),
            ]
        );
    }

    #[test]
    fn test_if_unfolds_branches_in_order() {
        let statement = Rc::new(Statement::If(
            IfStatement::new("x > 0")
                .then(Statement::ret("1"))
                .else_if(ElseIfBranch::new("x < 0").statement(Statement::ret("-1")))
                .otherwise(Statement::ret("0")),
        ));
        let node = AstFactory::statement(&statement);

        let kinds: Vec<ArtifactKind> =
            node.children().iter().map(|child| child.kind()).collect();
        assert_eq!(
            kinds,
            [
                ArtifactKind::Statement(StatementKind::Return),
                ArtifactKind::Statement(StatementKind::ElseIf),
                ArtifactKind::Statement(StatementKind::Return),
            ]
        );

        let branch = &node.children()[1];
        assert_eq!(branch.get::<String>("condition").as_deref(), Some("x < 0"));
        assert_eq!(branch.child_count(), 1);
    }

    #[test]
    fn test_switch_and_try_unfold_completely() {
        let switch = Rc::new(Statement::Switch(
            SwitchStatement::new("status")
                .case(SwitchCase::new("1").statement(Statement::ret("\"new\"")))
                .case(SwitchCase::new("2").statement(Statement::ret("\"done\"")))
                .default(Statement::Throw(None)),
        ));
        let node = AstFactory::statement(&switch);
        assert_eq!(node.child_count(), 3);

        let try_catch = Rc::new(Statement::TryCatch(
            TryCatchStatement::new()
                .statement(Statement::Raw("Connect();".into()))
                .catch(CatchClause::all())
                .finally(Statement::Raw("Close();".into())),
        ));
        let node = AstFactory::statement(&try_catch);
        let kinds: Vec<ArtifactKind> =
            node.children().iter().map(|child| child.kind()).collect();
        assert_eq!(
            kinds,
            [
                ArtifactKind::Statement(StatementKind::Raw),
                ArtifactKind::Statement(StatementKind::CatchClause),
                ArtifactKind::Statement(StatementKind::Raw),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "does not wrap a code element")]
    fn test_unwrap_wrong_node_panics() {
        let node = ArtifactNode::new(ElementKind::Class);
        unwrap_element(&node);
    }
}
