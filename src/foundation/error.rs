use crate::expression::lexer::Token;

/// Convenience result type used across the engine.
pub type ExprResult<T> = Result<T, ExprError>;

/// Error taxonomy for compiling and executing expressions.
///
/// Syntax and overflow errors are raised while turning text into a tree and carry the
/// offending lexeme and its source line. Type errors surface either at compile time
/// (constant subexpressions) or per call. Runtime errors depend on the bindings supplied
/// to `execute`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Malformed program text: unbalanced parentheses, missing operands, bad literals.
    #[error("syntax error at line {line} near '{lexeme}': {message}")]
    Syntax {
        /// 1-based source line of the offending token.
        line: u32,
        /// Offending lexeme (empty at end of input).
        lexeme: String,
        /// Human readable description.
        message: String,
    },

    /// A literal that does not fit the configured numeric width.
    #[error("overflow at line {line}: literal '{lexeme}' {message}")]
    Overflow {
        /// 1-based source line of the literal.
        line: u32,
        /// Literal text.
        lexeme: String,
        /// Human readable description.
        message: String,
    },

    /// An operator or function applied to operands of the wrong kind.
    #[error("type error: {0}")]
    Type(String),

    /// Failures that depend on the execution context (missing variables, arithmetic faults).
    #[error("runtime error: {0}")]
    Runtime(String),

    /// Misuse of the engine configuration surface.
    #[error("config error: {0}")]
    Config(String),
}

impl ExprError {
    /// Build an [`ExprError::Syntax`] pointing at `token`.
    pub fn syntax(token: &Token<'_>, msg: impl Into<String>) -> Self {
        Self::Syntax {
            line: token.line,
            lexeme: token.lexeme.to_owned(),
            message: msg.into(),
        }
    }

    /// Build an [`ExprError::Syntax`] at an explicit line without a token.
    pub fn syntax_at(line: u32, lexeme: &str, msg: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            lexeme: lexeme.to_owned(),
            message: msg.into(),
        }
    }

    /// Build an [`ExprError::Overflow`] for a literal token.
    pub fn overflow(token: &Token<'_>, msg: impl Into<String>) -> Self {
        Self::Overflow {
            line: token.line,
            lexeme: token.lexeme.to_owned(),
            message: msg.into(),
        }
    }

    /// Build an [`ExprError::Type`] value.
    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::Type(msg.into())
    }

    /// Build an [`ExprError::Runtime`] value.
    pub fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    /// Build an [`ExprError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors raised while reading program text (including literal overflow).
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. } | Self::Overflow { .. })
    }

    /// True for operand kind mismatches.
    pub fn is_type(&self) -> bool {
        matches!(self, Self::Type(_))
    }

    /// True for context-dependent execution failures.
    pub fn is_runtime(&self) -> bool {
        matches!(self, Self::Runtime(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
