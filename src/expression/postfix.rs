//! Infix to postfix conversion (shunting-yard).
//!
//! Operators are moved from an operator stack to the output while the stacked operator
//! binds tighter, or equally tight and the incoming operator is left associative.
//! Parentheses act as barriers. Closing a function argument list emits the function
//! element itself, carrying its argument count, as the call marker.

use crate::expression::element::{Associativity, Element, ElementType};
use crate::foundation::error::{ExprError, ExprResult};

#[derive(Debug, Default)]
struct CallFrame {
    argc: usize,
    pending: bool,
}

/// Reorder classified elements into postfix order.
pub fn to_postfix<'a>(elements: &[Element<'a>]) -> ExprResult<Vec<Element<'a>>> {
    let mut output: Vec<Element<'a>> = Vec::with_capacity(elements.len());
    let mut ops: Vec<Element<'a>> = Vec::new();
    let mut calls: Vec<CallFrame> = Vec::new();

    for el in elements {
        if !matches!(
            el.ty,
            ElementType::Comma
                | ElementType::RightParenthesis
                | ElementType::FunctionStartParenthesis
        ) && let Some(frame) = calls.last_mut()
        {
            frame.pending = true;
        }

        match el.ty {
            ty if ty.is_value() => output.push(*el),
            ElementType::LeftParenthesis | ElementType::Function => ops.push(*el),
            ElementType::FunctionStartParenthesis => {
                ops.push(*el);
                calls.push(CallFrame::default());
            }
            ElementType::RightParenthesis => {
                close_parenthesis(el, &mut ops, &mut output, &mut calls)?
            }
            ElementType::Comma => {
                pop_until_parenthesis(&mut ops, &mut output);
                let in_call = ops
                    .last()
                    .is_some_and(|top| top.ty == ElementType::FunctionStartParenthesis);
                let frame = match calls.last_mut() {
                    Some(frame) if in_call => frame,
                    _ => {
                        return Err(ExprError::syntax(
                            &el.token,
                            "',' outside of a function argument list",
                        ));
                    }
                };
                if !frame.pending {
                    return Err(ExprError::syntax(&el.token, "empty function argument"));
                }
                frame.argc += 1;
                frame.pending = false;
            }
            _ => {
                while let Some(top) = ops.last() {
                    if top.ty.is_parenthesis() {
                        break;
                    }
                    let (top_prec, prec) = (top.ty.precedence(), el.ty.precedence());
                    let pops = top_prec > prec
                        || (top_prec == prec && el.ty.associativity() == Associativity::Left);
                    if !pops {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        output.push(top);
                    }
                }
                ops.push(*el);
            }
        }
    }

    while let Some(top) = ops.pop() {
        if top.ty.is_parenthesis() {
            return Err(ExprError::syntax(&top.token, "unbalanced '(': missing ')'"));
        }
        output.push(top);
    }

    tracing::trace!(
        postfix = ?output.iter().map(|e| e.lexeme()).collect::<Vec<_>>(),
        "postfix order"
    );
    Ok(output)
}

fn pop_until_parenthesis<'a>(ops: &mut Vec<Element<'a>>, output: &mut Vec<Element<'a>>) {
    while let Some(top) = ops.last() {
        if top.ty.is_parenthesis() {
            break;
        }
        if let Some(top) = ops.pop() {
            output.push(top);
        }
    }
}

fn close_parenthesis<'a>(
    close: &Element<'a>,
    ops: &mut Vec<Element<'a>>,
    output: &mut Vec<Element<'a>>,
    calls: &mut Vec<CallFrame>,
) -> ExprResult<()> {
    pop_until_parenthesis(ops, output);
    let Some(open) = ops.pop() else {
        return Err(ExprError::syntax(&close.token, "unbalanced ')': no matching '('"));
    };
    if open.ty != ElementType::FunctionStartParenthesis {
        return Ok(());
    }

    let frame = calls.pop().unwrap_or_default();
    if frame.argc > 0 && !frame.pending {
        return Err(ExprError::syntax(&close.token, "empty function argument"));
    }
    let argc = frame.argc + usize::from(frame.pending);

    match ops.pop() {
        Some(func) if func.ty == ElementType::Function => {
            output.push(Element { argc, ..func });
            Ok(())
        }
        _ => Err(ExprError::syntax(
            &open.token,
            "function argument list without a function name",
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/postfix.rs"]
mod tests;
