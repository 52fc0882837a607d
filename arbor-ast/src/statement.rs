//! Body-level AST: the closed `Statement` variant set.
//!
//! Expressions (conditions, assignment values, return values) stay as
//! strings; only control structure is modeled.

use std::rc::Rc;

use crate::TypeReference;

/// A structural statement.
#[derive(Debug, Clone)]
pub enum Statement {
    /// `target = value`.
    Assign { target: String, value: String },
    /// A line comment.
    Comment(String),
    /// A braced sequence of statements.
    Block(Vec<Rc<Statement>>),
    If(IfStatement),
    For(ForStatement),
    ForEach(ForEachStatement),
    While {
        condition: String,
        body: Vec<Rc<Statement>>,
    },
    Switch(SwitchStatement),
    TryCatch(TryCatchStatement),
    /// `throw` or `throw <expression>`.
    Throw(Option<String>),
    /// `return` or `return <expression>`.
    Return(Option<String>),
    /// A scoped resource block (`using (...) { ... }`).
    UsingScope {
        resource: String,
        body: Vec<Rc<Statement>>,
    },
    /// Verbatim target-language text, emitted as-is at the current depth.
    Raw(String),
}

impl Statement {
    pub fn assign(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Assign {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn ret(expression: impl Into<String>) -> Self {
        Self::Return(Some(expression.into()))
    }
}

/// If with then branch, any number of else-if branches, and an optional
/// else branch.
#[derive(Debug, Clone)]
pub struct IfStatement {
    pub condition: String,
    pub then_branch: Vec<Rc<Statement>>,
    pub else_if_branches: Vec<ElseIfBranch>,
    pub else_branch: Vec<Rc<Statement>>,
}

impl IfStatement {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            then_branch: Vec::new(),
            else_if_branches: Vec::new(),
            else_branch: Vec::new(),
        }
    }

    pub fn then(mut self, statement: Statement) -> Self {
        self.then_branch.push(Rc::new(statement));
        self
    }

    pub fn else_if(mut self, branch: ElseIfBranch) -> Self {
        self.else_if_branches.push(branch);
        self
    }

    pub fn otherwise(mut self, statement: Statement) -> Self {
        self.else_branch.push(Rc::new(statement));
        self
    }
}

/// One `else if` branch.
#[derive(Debug, Clone)]
pub struct ElseIfBranch {
    pub condition: String,
    pub body: Vec<Rc<Statement>>,
}

impl ElseIfBranch {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            body: Vec::new(),
        }
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(Rc::new(statement));
        self
    }
}

/// A counted loop with free-form init/condition/increment clauses.
#[derive(Debug, Clone)]
pub struct ForStatement {
    pub init: String,
    pub condition: String,
    pub increment: String,
    pub body: Vec<Rc<Statement>>,
}

impl ForStatement {
    pub fn new(
        init: impl Into<String>,
        condition: impl Into<String>,
        increment: impl Into<String>,
    ) -> Self {
        Self {
            init: init.into(),
            condition: condition.into(),
            increment: increment.into(),
            body: Vec::new(),
        }
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(Rc::new(statement));
        self
    }
}

/// Iteration over a source expression.
#[derive(Debug, Clone)]
pub struct ForEachStatement {
    pub variable: String,
    pub variable_type: Option<TypeReference>,
    pub source: String,
    pub body: Vec<Rc<Statement>>,
}

impl ForEachStatement {
    pub fn new(variable: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            variable_type: None,
            source: source.into(),
            body: Vec::new(),
        }
    }

    pub fn typed(mut self, ty: impl Into<TypeReference>) -> Self {
        self.variable_type = Some(ty.into());
        self
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(Rc::new(statement));
        self
    }
}

/// Switch over an expression with cases and an optional default.
#[derive(Debug, Clone)]
pub struct SwitchStatement {
    pub expression: String,
    pub cases: Vec<SwitchCase>,
    pub default: Vec<Rc<Statement>>,
}

impl SwitchStatement {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            cases: Vec::new(),
            default: Vec::new(),
        }
    }

    pub fn case(mut self, case: SwitchCase) -> Self {
        self.cases.push(case);
        self
    }

    pub fn default(mut self, statement: Statement) -> Self {
        self.default.push(Rc::new(statement));
        self
    }
}

/// One `case` label and its body.
#[derive(Debug, Clone)]
pub struct SwitchCase {
    pub value: String,
    pub body: Vec<Rc<Statement>>,
}

impl SwitchCase {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            body: Vec::new(),
        }
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(Rc::new(statement));
        self
    }
}

/// Try with catch clauses and an optional finally.
#[derive(Debug, Clone)]
pub struct TryCatchStatement {
    pub body: Vec<Rc<Statement>>,
    pub catches: Vec<CatchClause>,
    pub finally: Vec<Rc<Statement>>,
}

impl TryCatchStatement {
    pub fn new() -> Self {
        Self {
            body: Vec::new(),
            catches: Vec::new(),
            finally: Vec::new(),
        }
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(Rc::new(statement));
        self
    }

    pub fn catch(mut self, clause: CatchClause) -> Self {
        self.catches.push(clause);
        self
    }

    pub fn finally(mut self, statement: Statement) -> Self {
        self.finally.push(Rc::new(statement));
        self
    }
}

impl Default for TryCatchStatement {
    fn default() -> Self {
        Self::new()
    }
}

/// One catch clause; catches everything when no exception type is given.
#[derive(Debug, Clone)]
pub struct CatchClause {
    pub exception_type: Option<TypeReference>,
    pub variable: Option<String>,
    pub body: Vec<Rc<Statement>>,
}

impl CatchClause {
    pub fn all() -> Self {
        Self {
            exception_type: None,
            variable: None,
            body: Vec::new(),
        }
    }

    pub fn of(ty: impl Into<TypeReference>, variable: impl Into<String>) -> Self {
        Self {
            exception_type: Some(ty.into()),
            variable: Some(variable.into()),
            body: Vec::new(),
        }
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(Rc::new(statement));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if_branches_keep_order() {
        let stmt = IfStatement::new("x > 0")
            .then(Statement::ret("1"))
            .else_if(ElseIfBranch::new("x < 0").statement(Statement::ret("-1")))
            .otherwise(Statement::ret("0"));

        assert_eq!(stmt.then_branch.len(), 1);
        assert_eq!(stmt.else_if_branches.len(), 1);
        assert_eq!(stmt.else_branch.len(), 1);
    }

    #[test]
    fn test_try_catch_shape() {
        let stmt = TryCatchStatement::new()
            .statement(Statement::Raw("Connect();".into()))
            .catch(CatchClause::of("TimeoutException", "ex").statement(Statement::Throw(None)))
            .finally(Statement::Raw("Close();".into()));

        assert_eq!(stmt.body.len(), 1);
        assert_eq!(stmt.catches.len(), 1);
        assert_eq!(stmt.finally.len(), 1);
    }
}
