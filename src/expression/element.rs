use crate::expression::lexer::Token;

/// Operator associativity used by the postfix parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` groups as `(a op b) op c`.
    Left,
    /// `a op b op c` groups as `a op (b op c)`.
    Right,
    /// Not an associative form (values, parentheses, comma).
    None,
}

/// Precedence given to values and parentheses; below every operator.
pub const NO_PRECEDENCE: i8 = -1;

/// Syntactic role of a token after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Integer literal.
    IntegerLiteral,
    /// Floating point literal.
    FloatLiteral,
    /// Quoted string literal.
    StringLiteral,
    /// `true` / `false`.
    BooleanLiteral,
    /// `null`.
    NullLiteral,
    /// Identifier read as a variable.
    Variable,
    /// Identifier immediately followed by `(`.
    Function,
    /// Unary `+`.
    Positive,
    /// Unary `-`.
    Negative,
    /// `!`
    Not,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// Binary `+`.
    Add,
    /// Binary `-`.
    Subtract,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubtractAssign,
    /// `*=`
    MultiplyAssign,
    /// `/=`
    DivideAssign,
    /// `,` between function arguments.
    Comma,
    /// `;` between statements.
    Semicolon,
    /// Grouping `(`.
    LeftParenthesis,
    /// `(` opening a function argument list.
    FunctionStartParenthesis,
    /// `)`
    RightParenthesis,
}

impl ElementType {
    /// True for elements that produce a value on their own (literals and variables).
    pub fn is_value(self) -> bool {
        matches!(
            self,
            Self::IntegerLiteral
                | Self::FloatLiteral
                | Self::StringLiteral
                | Self::BooleanLiteral
                | Self::NullLiteral
                | Self::Variable
        )
    }

    /// True for operators (everything that is neither a value nor a parenthesis).
    pub fn is_operator(self) -> bool {
        !self.is_value() && !self.is_parenthesis()
    }

    /// True for any of the three parenthesis kinds.
    pub fn is_parenthesis(self) -> bool {
        matches!(
            self,
            Self::LeftParenthesis | Self::FunctionStartParenthesis | Self::RightParenthesis
        )
    }

    /// True for the two opening parenthesis kinds.
    pub fn is_open_parenthesis(self) -> bool {
        matches!(self, Self::LeftParenthesis | Self::FunctionStartParenthesis)
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> i8 {
        match self {
            Self::Function | Self::Positive | Self::Negative | Self::Not => 8,
            Self::Multiply | Self::Divide | Self::Modulo => 7,
            Self::Add | Self::Subtract => 6,
            Self::Equal
            | Self::NotEqual
            | Self::Less
            | Self::Greater
            | Self::LessEqual
            | Self::GreaterEqual => 5,
            Self::And => 4,
            Self::Or => 3,
            Self::Assign
            | Self::AddAssign
            | Self::SubtractAssign
            | Self::MultiplyAssign
            | Self::DivideAssign => 2,
            Self::Comma => 1,
            Self::Semicolon => 0,
            Self::IntegerLiteral
            | Self::FloatLiteral
            | Self::StringLiteral
            | Self::BooleanLiteral
            | Self::NullLiteral
            | Self::Variable
            | Self::LeftParenthesis
            | Self::FunctionStartParenthesis
            | Self::RightParenthesis => NO_PRECEDENCE,
        }
    }

    /// Grouping direction for operators of equal precedence.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Function | Self::Positive | Self::Negative | Self::Not => Associativity::Right,
            Self::Assign
            | Self::AddAssign
            | Self::SubtractAssign
            | Self::MultiplyAssign
            | Self::DivideAssign => Associativity::Right,
            Self::Multiply
            | Self::Divide
            | Self::Modulo
            | Self::Add
            | Self::Subtract
            | Self::Equal
            | Self::NotEqual
            | Self::Less
            | Self::Greater
            | Self::LessEqual
            | Self::GreaterEqual
            | Self::And
            | Self::Or
            | Self::Semicolon => Associativity::Left,
            _ => Associativity::None,
        }
    }

    /// True for the prefix operators.
    pub fn is_unary(self) -> bool {
        matches!(self, Self::Positive | Self::Negative | Self::Not)
    }
}

/// A token annotated with its resolved role.
///
/// `argc` is only meaningful for [`ElementType::Function`] once the parser has closed its
/// argument list; it is zero everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<'a> {
    /// Originating token.
    pub token: Token<'a>,
    /// Resolved role.
    pub ty: ElementType,
    /// Argument count of a function call.
    pub argc: usize,
}

impl<'a> Element<'a> {
    /// Pair a token with its role.
    pub fn new(token: Token<'a>, ty: ElementType) -> Self {
        Self { token, ty, argc: 0 }
    }

    /// Source text of the element.
    pub fn lexeme(&self) -> &'a str {
        self.token.lexeme
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/element.rs"]
mod tests;
