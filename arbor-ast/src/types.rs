//! Language-neutral type references.

use std::fmt;

/// A named reference to a type, independent of any target language.
///
/// Used for field types, parameter types, and return types. Rendering a
/// reference into target syntax is the emitter's job; the `Display` form
/// (`Name<Arg, …>`) is the neutral spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    pub name: String,
    pub type_args: Vec<TypeReference>,
}

impl TypeReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeReference>) -> Self {
        Self {
            name: name.into(),
            type_args: args,
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.type_args.is_empty() {
            write!(f, "<")?;
            for (index, arg) in self.type_args.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                arg.fmt(f)?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

impl From<&str> for TypeReference {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
