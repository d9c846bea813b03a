use super::*;

#[test]
fn precedence_table() {
    use ElementType::*;
    let table = [
        (Function, 8),
        (Positive, 8),
        (Negative, 8),
        (Not, 8),
        (Multiply, 7),
        (Divide, 7),
        (Modulo, 7),
        (Add, 6),
        (Subtract, 6),
        (Equal, 5),
        (NotEqual, 5),
        (Less, 5),
        (Greater, 5),
        (LessEqual, 5),
        (GreaterEqual, 5),
        (And, 4),
        (Or, 3),
        (Assign, 2),
        (AddAssign, 2),
        (SubtractAssign, 2),
        (MultiplyAssign, 2),
        (DivideAssign, 2),
        (Comma, 1),
        (Semicolon, 0),
    ];
    for (ty, prec) in table {
        assert_eq!(ty.precedence(), prec, "{ty:?}");
        assert!(ty.is_operator(), "{ty:?}");
    }
}

#[test]
fn values_and_parentheses_sit_below_all_operators() {
    use ElementType::*;
    for ty in [IntegerLiteral, Variable, NullLiteral, LeftParenthesis, RightParenthesis] {
        assert_eq!(ty.precedence(), NO_PRECEDENCE);
        assert!(!ty.is_operator());
    }
    assert!(IntegerLiteral.is_value());
    assert!(!Function.is_value());
    assert!(FunctionStartParenthesis.is_open_parenthesis());
    assert!(!RightParenthesis.is_open_parenthesis());
}

#[test]
fn associativity_table() {
    use ElementType::*;
    for ty in [Function, Positive, Negative, Not, Assign, DivideAssign] {
        assert_eq!(ty.associativity(), Associativity::Right, "{ty:?}");
    }
    for ty in [Multiply, Subtract, LessEqual, And, Or, Semicolon] {
        assert_eq!(ty.associativity(), Associativity::Left, "{ty:?}");
    }
    assert_eq!(Comma.associativity(), Associativity::None);
    assert!(Not.is_unary());
    assert!(!Subtract.is_unary());
}
