//! Indentation units.

/// One level of indentation in emitted source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Indent {
    /// 4-space indentation (C#, SQL).
    pub const CSHARP: Self = Self::Spaces(4);

    /// 4-space indentation for DDL output.
    pub const SQL: Self = Self::Spaces(4);

    /// 2-space indentation (TypeScript, JavaScript).
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// The text of one indentation unit.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(count) => " ".repeat(usize::from(*count)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}
