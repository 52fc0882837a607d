//! Access and member modifiers, documentation comments.

/// Access level of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessModifier {
    #[default]
    Public,
    Private,
    Protected,
    Internal,
}

/// Non-access modifiers a member may carry.
///
/// Which combinations are meaningful is the target language's business;
/// the AST only records what was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberModifiers {
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_virtual: bool,
    pub is_override: bool,
    pub is_sealed: bool,
    pub is_readonly: bool,
    pub is_async: bool,
}

impl MemberModifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn statik() -> Self {
        Self {
            is_static: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A documentation comment attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
    pub summary: String,
    pub remarks: Option<String>,
}

impl DocComment {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            remarks: None,
        }
    }

    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }
}
