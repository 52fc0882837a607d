//! Declaration-level AST: the closed `CodeElement` variant set.

use std::rc::Rc;

use crate::{AccessModifier, DocComment, MemberModifiers, Statement, TypeReference};

/// A structural code element.
///
/// This set is closed by design: factories and emitters dispatch over it
/// with exhaustive `match`, so a new variant fails to compile until every
/// dispatch site handles it.
#[derive(Debug, Clone)]
pub enum CodeElement {
    Namespace(Namespace),
    Class(TypeDecl),
    Interface(TypeDecl),
    Struct(TypeDecl),
    Enum(EnumDecl),
    Delegate(Delegate),
    Field(Field),
    Property(PropertyElement),
    Method(Method),
    Constructor(Constructor),
    Event(Event),
    Indexer(Indexer),
    Operator(OperatorOverload),
    Import(Import),
    Attribute(AttributeSpec),
    Parameter(Parameter),
}

impl CodeElement {
    /// Declared name, where the variant has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            CodeElement::Namespace(ns) => Some(&ns.name),
            CodeElement::Class(decl)
            | CodeElement::Interface(decl)
            | CodeElement::Struct(decl) => Some(&decl.name),
            CodeElement::Enum(decl) => Some(&decl.name),
            CodeElement::Delegate(delegate) => Some(&delegate.name),
            CodeElement::Field(field) => Some(&field.name),
            CodeElement::Property(property) => Some(&property.name),
            CodeElement::Method(method) => Some(&method.name),
            CodeElement::Constructor(ctor) => Some(&ctor.type_name),
            CodeElement::Event(event) => Some(&event.name),
            CodeElement::Indexer(_) => None,
            CodeElement::Operator(op) => Some(&op.symbol),
            CodeElement::Import(import) => Some(&import.namespace),
            CodeElement::Attribute(attr) => Some(&attr.name),
            CodeElement::Parameter(param) => Some(&param.name),
        }
    }
}

/// A namespace with imports and member declarations.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    pub name: String,
    pub imports: Vec<Rc<CodeElement>>,
    pub members: Vec<Rc<CodeElement>>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn import(mut self, namespace: impl Into<String>) -> Self {
        self.imports
            .push(Rc::new(CodeElement::Import(Import::new(namespace))));
        self
    }

    pub fn member(mut self, member: CodeElement) -> Self {
        self.members.push(Rc::new(member));
        self
    }
}

/// Shared shape of class, interface, and struct declarations.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub name: String,
    pub access: AccessModifier,
    pub modifiers: MemberModifiers,
    pub doc: Option<DocComment>,
    pub attributes: Vec<AttributeSpec>,
    pub base_types: Vec<TypeReference>,
    pub members: Vec<Rc<CodeElement>>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: AccessModifier::Public,
            modifiers: MemberModifiers::none(),
            doc: None,
            attributes: Vec::new(),
            base_types: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    pub fn modifiers(mut self, modifiers: MemberModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn doc(mut self, doc: DocComment) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn attribute(mut self, attribute: AttributeSpec) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn base(mut self, base: impl Into<TypeReference>) -> Self {
        self.base_types.push(base.into());
        self
    }

    pub fn member(mut self, member: CodeElement) -> Self {
        self.members.push(Rc::new(member));
        self
    }
}

/// An enum declaration with named (optionally valued) variants.
#[derive(Debug, Clone)]
pub struct EnumDecl {
    pub name: String,
    pub access: AccessModifier,
    pub doc: Option<DocComment>,
    pub attributes: Vec<AttributeSpec>,
    pub variants: Vec<(String, Option<i64>)>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: AccessModifier::Public,
            doc: None,
            attributes: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn variant(mut self, name: impl Into<String>) -> Self {
        self.variants.push((name.into(), None));
        self
    }

    pub fn valued_variant(mut self, name: impl Into<String>, value: i64) -> Self {
        self.variants.push((name.into(), Some(value)));
        self
    }
}

/// A delegate (function-type) declaration.
#[derive(Debug, Clone)]
pub struct Delegate {
    pub name: String,
    pub access: AccessModifier,
    pub return_type: Option<TypeReference>,
    pub parameters: Vec<Parameter>,
    pub doc: Option<DocComment>,
}

impl Delegate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: AccessModifier::Public,
            return_type: None,
            parameters: Vec::new(),
            doc: None,
        }
    }

    pub fn returns(mut self, ty: impl Into<TypeReference>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A field declaration.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: TypeReference,
    pub access: AccessModifier,
    pub modifiers: MemberModifiers,
    pub doc: Option<DocComment>,
    pub attributes: Vec<AttributeSpec>,
    pub initializer: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeReference>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            access: AccessModifier::Private,
            modifiers: MemberModifiers::none(),
            doc: None,
            attributes: Vec::new(),
            initializer: None,
        }
    }

    pub fn access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    pub fn modifiers(mut self, modifiers: MemberModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn initializer(mut self, init: impl Into<String>) -> Self {
        self.initializer = Some(init.into());
        self
    }
}

/// A property declaration; auto-property when both bodies are empty.
#[derive(Debug, Clone)]
pub struct PropertyElement {
    pub name: String,
    pub ty: TypeReference,
    pub access: AccessModifier,
    pub modifiers: MemberModifiers,
    pub doc: Option<DocComment>,
    pub attributes: Vec<AttributeSpec>,
    pub has_getter: bool,
    pub has_setter: bool,
    pub getter_body: Vec<Rc<Statement>>,
    pub setter_body: Vec<Rc<Statement>>,
}

impl PropertyElement {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeReference>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            access: AccessModifier::Public,
            modifiers: MemberModifiers::none(),
            doc: None,
            attributes: Vec::new(),
            has_getter: true,
            has_setter: true,
            getter_body: Vec::new(),
            setter_body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: DocComment) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn attribute(mut self, attribute: AttributeSpec) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn read_only(mut self) -> Self {
        self.has_setter = false;
        self
    }

    pub fn getter(mut self, statement: Statement) -> Self {
        self.getter_body.push(Rc::new(statement));
        self
    }

    pub fn setter(mut self, statement: Statement) -> Self {
        self.setter_body.push(Rc::new(statement));
        self
    }

    pub fn is_auto(&self) -> bool {
        self.getter_body.is_empty() && self.setter_body.is_empty()
    }
}

/// A method declaration.
#[derive(Debug, Clone)]
pub struct Method {
    pub name: String,
    pub access: AccessModifier,
    pub modifiers: MemberModifiers,
    pub doc: Option<DocComment>,
    pub attributes: Vec<AttributeSpec>,
    pub return_type: Option<TypeReference>,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Rc<Statement>>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: AccessModifier::Public,
            modifiers: MemberModifiers::none(),
            doc: None,
            attributes: Vec::new(),
            return_type: None,
            parameters: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    pub fn modifiers(mut self, modifiers: MemberModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn doc(mut self, doc: DocComment) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn returns(mut self, ty: impl Into<TypeReference>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(Rc::new(statement));
        self
    }
}

/// A constructor declaration.
#[derive(Debug, Clone)]
pub struct Constructor {
    pub type_name: String,
    pub access: AccessModifier,
    pub doc: Option<DocComment>,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Rc<Statement>>,
}

impl Constructor {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            access: AccessModifier::Public,
            doc: None,
            parameters: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(Rc::new(statement));
        self
    }
}

/// An event declaration.
#[derive(Debug, Clone)]
pub struct Event {
    pub name: String,
    pub ty: TypeReference,
    pub access: AccessModifier,
    pub modifiers: MemberModifiers,
    pub doc: Option<DocComment>,
}

impl Event {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeReference>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            access: AccessModifier::Public,
            modifiers: MemberModifiers::none(),
            doc: None,
        }
    }
}

/// An indexer declaration.
#[derive(Debug, Clone)]
pub struct Indexer {
    pub ty: TypeReference,
    pub parameter: Parameter,
    pub access: AccessModifier,
    pub getter_body: Vec<Rc<Statement>>,
    pub setter_body: Vec<Rc<Statement>>,
}

impl Indexer {
    pub fn new(ty: impl Into<TypeReference>, parameter: Parameter) -> Self {
        Self {
            ty: ty.into(),
            parameter,
            access: AccessModifier::Public,
            getter_body: Vec::new(),
            setter_body: Vec::new(),
        }
    }

    pub fn getter(mut self, statement: Statement) -> Self {
        self.getter_body.push(Rc::new(statement));
        self
    }

    pub fn setter(mut self, statement: Statement) -> Self {
        self.setter_body.push(Rc::new(statement));
        self
    }
}

/// An operator overload declaration.
#[derive(Debug, Clone)]
pub struct OperatorOverload {
    pub symbol: String,
    pub return_type: TypeReference,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Rc<Statement>>,
}

impl OperatorOverload {
    pub fn new(symbol: impl Into<String>, return_type: impl Into<TypeReference>) -> Self {
        Self {
            symbol: symbol.into(),
            return_type: return_type.into(),
            parameters: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(Rc::new(statement));
        self
    }
}

/// A using/import directive.
#[derive(Debug, Clone)]
pub struct Import {
    pub namespace: String,
}

impl Import {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

/// An attribute applied to a declaration, e.g. `Serializable` or
/// `MaxLength(50)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: String,
    pub arguments: Vec<String>,
}

impl AttributeSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }
}

/// A parameter of a method, constructor, delegate, or indexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeReference,
    pub default_value: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeReference>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default_value: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_composition() {
        let class = TypeDecl::new("Customer")
            .doc(DocComment::new("A customer."))
            .base("EntityBase")
            .member(CodeElement::Property(PropertyElement::new(
                "Name",
                "string",
            )))
            .member(CodeElement::Method(
                Method::new("Validate").returns("bool"),
            ));

        assert_eq!(class.members.len(), 2);
        assert_eq!(class.base_types[0].name, "EntityBase");
    }

    #[test]
    fn test_element_names() {
        let element = CodeElement::Class(TypeDecl::new("Customer"));
        assert_eq!(element.name(), Some("Customer"));

        let element = CodeElement::Import(Import::new("System"));
        assert_eq!(element.name(), Some("System"));
    }
}
