//! The C# emitter.

use arbor_ast::{
    AccessModifier, AttributeSpec, CatchClause, CodeElement, Constructor, Delegate, DocComment,
    EnumDecl, Event, Field, Import, Indexer, MemberModifiers, Method, Namespace,
    OperatorOverload, Parameter, PropertyElement, Statement, TypeDecl,
};
use arbor_codegen::{CodeBuilder, EmitError, Emitter, Indent};

/// Emits C# source text for every element and statement variant.
///
/// Dispatch over both variant sets is exhaustive `match`; a builder is
/// created per `generate` call, so the indentation counter starts at zero
/// for every top-level invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpEmitter;

impl Emitter for CSharpEmitter {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn indent(&self) -> Indent {
        Indent::CSHARP
    }

    fn generate(&self, element: &CodeElement) -> Result<String, EmitError> {
        let builder = CodeBuilder::new(self.indent());
        Ok(self.emit_element(builder, element)?.build())
    }

    fn generate_statement(&self, statement: &Statement) -> Result<String, EmitError> {
        let builder = CodeBuilder::new(self.indent());
        Ok(self.emit_statement(builder, statement)?.build())
    }
}

impl CSharpEmitter {
    fn emit_element(
        &self,
        builder: CodeBuilder,
        element: &CodeElement,
    ) -> Result<CodeBuilder, EmitError> {
        match element {
            CodeElement::Namespace(ns) => self.emit_namespace(builder, ns),
            CodeElement::Class(decl) => self.emit_type_decl(builder, decl, "class"),
            CodeElement::Interface(decl) => self.emit_type_decl(builder, decl, "interface"),
            CodeElement::Struct(decl) => self.emit_type_decl(builder, decl, "struct"),
            CodeElement::Enum(decl) => Ok(self.emit_enum(builder, decl)),
            CodeElement::Delegate(delegate) => Ok(self.emit_delegate(builder, delegate)),
            CodeElement::Field(field) => Ok(self.emit_field(builder, field)),
            CodeElement::Property(property) => self.emit_property(builder, property),
            CodeElement::Method(method) => self.emit_method(builder, method),
            CodeElement::Constructor(ctor) => self.emit_constructor(builder, ctor),
            CodeElement::Event(event) => Ok(self.emit_event(builder, event)),
            CodeElement::Indexer(indexer) => self.emit_indexer(builder, indexer),
            CodeElement::Operator(op) => self.emit_operator(builder, op),
            CodeElement::Import(import) => Ok(self.emit_import(builder, import)),
            CodeElement::Attribute(attribute) => {
                Ok(builder.line(&attribute_text(attribute)))
            }
            CodeElement::Parameter(parameter) => Ok(builder.line(&parameter_text(parameter))),
        }
    }

    fn emit_namespace(
        &self,
        builder: CodeBuilder,
        ns: &Namespace,
    ) -> Result<CodeBuilder, EmitError> {
        let mut builder = builder;
        for import in &ns.imports {
            builder = self.emit_element(builder, import.as_ref())?;
        }
        if !ns.imports.is_empty() {
            builder = builder.blank();
        }

        builder = builder.line(&format!("namespace {}", ns.name)).line("{").indent();
        builder = self.emit_members(builder, &ns.members)?;
        Ok(builder.dedent().line("}"))
    }

    fn emit_type_decl(
        &self,
        builder: CodeBuilder,
        decl: &TypeDecl,
        keyword: &str,
    ) -> Result<CodeBuilder, EmitError> {
        let mut builder = self.emit_doc(builder, decl.doc.as_ref());
        builder = emit_attributes(builder, &decl.attributes);

        let mut header = format!(
            "{}{} {} {}",
            access_text(decl.access),
            modifier_text(&decl.modifiers),
            keyword,
            decl.name
        );
        if !decl.base_types.is_empty() {
            let bases: Vec<String> = decl.base_types.iter().map(|b| b.to_string()).collect();
            header.push_str(&format!(" : {}", bases.join(", ")));
        }

        builder = builder.line(&header).line("{").indent();
        builder = self.emit_members(builder, &decl.members)?;
        Ok(builder.dedent().line("}"))
    }

    fn emit_members(
        &self,
        builder: CodeBuilder,
        members: &[std::rc::Rc<CodeElement>],
    ) -> Result<CodeBuilder, EmitError> {
        let mut builder = builder;
        for (index, member) in members.iter().enumerate() {
            if index > 0 {
                builder = builder.blank();
            }
            builder = self.emit_element(builder, member.as_ref())?;
        }
        Ok(builder)
    }

    fn emit_enum(&self, builder: CodeBuilder, decl: &EnumDecl) -> CodeBuilder {
        let builder = self.emit_doc(builder, decl.doc.as_ref());
        let builder = emit_attributes(builder, &decl.attributes);
        builder
            .line(&format!("{} enum {}", access_text(decl.access), decl.name))
            .line("{")
            .indent()
            .each(&decl.variants, |b, (name, value)| match value {
                Some(value) => b.line(&format!("{name} = {value},")),
                None => b.line(&format!("{name},")),
            })
            .dedent()
            .line("}")
    }

    fn emit_delegate(&self, builder: CodeBuilder, delegate: &Delegate) -> CodeBuilder {
        let builder = self.emit_doc(builder, delegate.doc.as_ref());
        builder.line(&format!(
            "{} delegate {} {}({});",
            access_text(delegate.access),
            return_text(delegate.return_type.as_ref()),
            delegate.name,
            parameters_text(&delegate.parameters)
        ))
    }

    fn emit_field(&self, builder: CodeBuilder, field: &Field) -> CodeBuilder {
        let builder = self.emit_doc(builder, field.doc.as_ref());
        let builder = emit_attributes(builder, &field.attributes);
        let initializer = field
            .initializer
            .as_ref()
            .map(|init| format!(" = {init}"))
            .unwrap_or_default();
        builder.line(&format!(
            "{}{} {} {}{};",
            access_text(field.access),
            modifier_text(&field.modifiers),
            field.ty,
            field.name,
            initializer
        ))
    }

    fn emit_property(
        &self,
        builder: CodeBuilder,
        property: &PropertyElement,
    ) -> Result<CodeBuilder, EmitError> {
        let builder = self.emit_doc(builder, property.doc.as_ref());
        let builder = emit_attributes(builder, &property.attributes);
        let header = format!(
            "{}{} {} {}",
            access_text(property.access),
            modifier_text(&property.modifiers),
            property.ty,
            property.name
        );

        if property.is_auto() {
            let accessors = match (property.has_getter, property.has_setter) {
                (true, true) => "{ get; set; }",
                (true, false) => "{ get; }",
                (false, true) => "{ set; }",
                (false, false) => "{ }",
            };
            return Ok(builder.line(&format!("{header} {accessors}")));
        }

        let mut builder = builder.line(&header).line("{").indent();
        if property.has_getter {
            builder = builder.line("get").line("{").indent();
            builder = self.emit_body(builder, &property.getter_body)?;
            builder = builder.dedent().line("}");
        }
        if property.has_setter {
            builder = builder.line("set").line("{").indent();
            builder = self.emit_body(builder, &property.setter_body)?;
            builder = builder.dedent().line("}");
        }
        Ok(builder.dedent().line("}"))
    }

    fn emit_method(
        &self,
        builder: CodeBuilder,
        method: &Method,
    ) -> Result<CodeBuilder, EmitError> {
        let builder = self.emit_doc(builder, method.doc.as_ref());
        let builder = emit_attributes(builder, &method.attributes);
        let signature = format!(
            "{}{} {} {}({})",
            access_text(method.access),
            modifier_text(&method.modifiers),
            return_text(method.return_type.as_ref()),
            method.name,
            parameters_text(&method.parameters)
        );

        // Abstract methods have no body in C#.
        if method.modifiers.is_abstract {
            return Ok(builder.line(&format!("{signature};")));
        }

        let mut builder = builder.line(&signature).line("{").indent();
        builder = self.emit_body(builder, &method.body)?;
        Ok(builder.dedent().line("}"))
    }

    fn emit_constructor(
        &self,
        builder: CodeBuilder,
        ctor: &Constructor,
    ) -> Result<CodeBuilder, EmitError> {
        let builder = self.emit_doc(builder, ctor.doc.as_ref());
        let mut builder = builder
            .line(&format!(
                "{} {}({})",
                access_text(ctor.access),
                ctor.type_name,
                parameters_text(&ctor.parameters)
            ))
            .line("{")
            .indent();
        builder = self.emit_body(builder, &ctor.body)?;
        Ok(builder.dedent().line("}"))
    }

    fn emit_event(&self, builder: CodeBuilder, event: &Event) -> CodeBuilder {
        let builder = self.emit_doc(builder, event.doc.as_ref());
        builder.line(&format!(
            "{}{} event {} {};",
            access_text(event.access),
            modifier_text(&event.modifiers),
            event.ty,
            event.name
        ))
    }

    fn emit_indexer(
        &self,
        builder: CodeBuilder,
        indexer: &Indexer,
    ) -> Result<CodeBuilder, EmitError> {
        let header = format!(
            "{} {} this[{}]",
            access_text(indexer.access),
            indexer.ty,
            parameter_text(&indexer.parameter)
        );

        if indexer.getter_body.is_empty() && indexer.setter_body.is_empty() {
            return Ok(builder.line(&format!("{header} {{ get; set; }}")));
        }

        let mut builder = builder.line(&header).line("{").indent();
        if !indexer.getter_body.is_empty() {
            builder = builder.line("get").line("{").indent();
            builder = self.emit_body(builder, &indexer.getter_body)?;
            builder = builder.dedent().line("}");
        }
        if !indexer.setter_body.is_empty() {
            builder = builder.line("set").line("{").indent();
            builder = self.emit_body(builder, &indexer.setter_body)?;
            builder = builder.dedent().line("}");
        }
        Ok(builder.dedent().line("}"))
    }

    fn emit_operator(
        &self,
        builder: CodeBuilder,
        op: &OperatorOverload,
    ) -> Result<CodeBuilder, EmitError> {
        let mut builder = builder
            .line(&format!(
                "public static {} operator {}({})",
                op.return_type,
                op.symbol,
                parameters_text(&op.parameters)
            ))
            .line("{")
            .indent();
        builder = self.emit_body(builder, &op.body)?;
        Ok(builder.dedent().line("}"))
    }

    fn emit_import(&self, builder: CodeBuilder, import: &Import) -> CodeBuilder {
        builder.line(&format!("using {};", import.namespace))
    }

    fn emit_statement(
        &self,
        builder: CodeBuilder,
        statement: &Statement,
    ) -> Result<CodeBuilder, EmitError> {
        match statement {
            Statement::Assign { target, value } => {
                Ok(builder.line(&format!("{target} = {value};")))
            }
            Statement::Comment(text) => Ok(builder.line(&format!("// {text}"))),
            Statement::Block(body) => self.emit_braced(builder, body),
            Statement::If(stmt) => {
                let builder = builder.line(&format!("if ({})", stmt.condition));
                let mut builder = self.emit_braced(builder, &stmt.then_branch)?;
                for branch in &stmt.else_if_branches {
                    builder = builder.line(&format!("else if ({})", branch.condition));
                    builder = self.emit_braced(builder, &branch.body)?;
                }
                if !stmt.else_branch.is_empty() {
                    builder = builder.line("else");
                    builder = self.emit_braced(builder, &stmt.else_branch)?;
                }
                Ok(builder)
            }
            Statement::For(stmt) => {
                let builder = builder.line(&format!(
                    "for ({}; {}; {})",
                    stmt.init, stmt.condition, stmt.increment
                ));
                self.emit_braced(builder, &stmt.body)
            }
            Statement::ForEach(stmt) => {
                let variable_type = stmt
                    .variable_type
                    .as_ref()
                    .map_or_else(|| "var".to_string(), |ty| ty.to_string());
                let builder = builder.line(&format!(
                    "foreach ({} {} in {})",
                    variable_type, stmt.variable, stmt.source
                ));
                self.emit_braced(builder, &stmt.body)
            }
            Statement::While { condition, body } => {
                let builder = builder.line(&format!("while ({condition})"));
                self.emit_braced(builder, body)
            }
            Statement::Switch(stmt) => {
                let mut builder = builder
                    .line(&format!("switch ({})", stmt.expression))
                    .line("{")
                    .indent();
                for case in &stmt.cases {
                    builder = builder.line(&format!("case {}:", case.value)).indent();
                    builder = self.emit_body(builder, &case.body)?;
                    builder = builder.line("break;").dedent();
                }
                if !stmt.default.is_empty() {
                    builder = builder.line("default:").indent();
                    builder = self.emit_body(builder, &stmt.default)?;
                    builder = builder.line("break;").dedent();
                }
                Ok(builder.dedent().line("}"))
            }
            Statement::TryCatch(stmt) => {
                let builder = builder.line("try");
                let mut builder = self.emit_braced(builder, &stmt.body)?;
                for clause in &stmt.catches {
                    builder = builder.line(&catch_text(clause));
                    builder = self.emit_braced(builder, &clause.body)?;
                }
                if !stmt.finally.is_empty() {
                    builder = builder.line("finally");
                    builder = self.emit_braced(builder, &stmt.finally)?;
                }
                Ok(builder)
            }
            Statement::Throw(expression) => Ok(match expression {
                Some(expression) => builder.line(&format!("throw {expression};")),
                None => builder.line("throw;"),
            }),
            Statement::Return(expression) => Ok(match expression {
                Some(expression) => builder.line(&format!("return {expression};")),
                None => builder.line("return;"),
            }),
            Statement::UsingScope { resource, body } => {
                let builder = builder.line(&format!("using ({resource})"));
                self.emit_braced(builder, body)
            }
            Statement::Raw(text) => Ok(builder.line(text)),
        }
    }

    fn emit_body(
        &self,
        builder: CodeBuilder,
        statements: &[std::rc::Rc<Statement>],
    ) -> Result<CodeBuilder, EmitError> {
        let mut builder = builder;
        for statement in statements {
            builder = self.emit_statement(builder, statement.as_ref())?;
        }
        Ok(builder)
    }

    fn emit_braced(
        &self,
        builder: CodeBuilder,
        statements: &[std::rc::Rc<Statement>],
    ) -> Result<CodeBuilder, EmitError> {
        let builder = builder.line("{").indent();
        let builder = self.emit_body(builder, statements)?;
        Ok(builder.dedent().line("}"))
    }

    fn emit_doc(&self, builder: CodeBuilder, doc: Option<&DocComment>) -> CodeBuilder {
        let Some(doc) = doc else {
            return builder;
        };
        let builder = builder
            .line("/// <summary>")
            .line(&format!("/// {}", doc.summary))
            .line("/// </summary>");
        match &doc.remarks {
            Some(remarks) => builder.line(&format!("/// <remarks>{remarks}</remarks>")),
            None => builder,
        }
    }
}

fn access_text(access: AccessModifier) -> &'static str {
    match access {
        AccessModifier::Public => "public",
        AccessModifier::Private => "private",
        AccessModifier::Protected => "protected",
        AccessModifier::Internal => "internal",
    }
}

/// Modifier tokens in C#'s conventional order, each with a leading space.
fn modifier_text(modifiers: &MemberModifiers) -> String {
    let mut out = String::new();
    for (enabled, token) in [
        (modifiers.is_static, "static"),
        (modifiers.is_abstract, "abstract"),
        (modifiers.is_virtual, "virtual"),
        (modifiers.is_override, "override"),
        (modifiers.is_sealed, "sealed"),
        (modifiers.is_readonly, "readonly"),
        (modifiers.is_async, "async"),
    ] {
        if enabled {
            out.push(' ');
            out.push_str(token);
        }
    }
    out
}

fn return_text(return_type: Option<&arbor_ast::TypeReference>) -> String {
    return_type.map_or_else(|| "void".to_string(), |ty| ty.to_string())
}

fn parameter_text(parameter: &Parameter) -> String {
    match &parameter.default_value {
        Some(default) => format!("{} {} = {}", parameter.ty, parameter.name, default),
        None => format!("{} {}", parameter.ty, parameter.name),
    }
}

fn parameters_text(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(parameter_text)
        .collect::<Vec<_>>()
        .join(", ")
}

fn attribute_text(attribute: &AttributeSpec) -> String {
    if attribute.arguments.is_empty() {
        format!("[{}]", attribute.name)
    } else {
        format!("[{}({})]", attribute.name, attribute.arguments.join(", "))
    }
}

fn emit_attributes(builder: CodeBuilder, attributes: &[AttributeSpec]) -> CodeBuilder {
    builder.each(attributes, |b, attribute| b.line(&attribute_text(attribute)))
}

fn catch_text(clause: &CatchClause) -> String {
    match (&clause.exception_type, &clause.variable) {
        (Some(ty), Some(variable)) => format!("catch ({ty} {variable})"),
        (Some(ty), None) => format!("catch ({ty})"),
        _ => "catch".to_string(),
    }
}
