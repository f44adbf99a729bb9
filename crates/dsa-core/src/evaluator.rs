//! Two-stack evaluation of fully parenthesized arithmetic expressions.
//!
//! Dijkstra's two-stack algorithm: operands and operators accumulate on
//! separate stacks, and every closing parenthesis applies one pending
//! operator to the top two operands. Operands are single decimal digits
//! and the recognized operators are `+`, `-` and `*`.

use std::fmt;

use crate::stack::Stack;

/// A binary operator recognized by [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
}

impl Op {
    fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Op::Add => left + right,
            Op::Sub => left - right,
            Op::Mul => left * right,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
        })
    }
}

/// Errors from [`evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("unrecognized token {0:?}")]
    UnrecognizedToken(char),
    #[error("closing parenthesis without a pending operator")]
    MissingOperator,
    #[error("operator {0} is missing an operand")]
    MissingOperand(Op),
    #[error("operator {0} was never closed")]
    PendingOperator(Op),
    #[error("expression left {0} extra values")]
    ExtraValues(usize),
    #[error("expression produced no value")]
    EmptyExpression,
}

/// Evaluates a fully parenthesized expression over single-digit operands.
///
/// Whitespace and opening parentheses are skipped. Each closing
/// parenthesis pops one operator and two operands; for subtraction the
/// operand pushed earlier is the minuend.
pub fn evaluate(expression: &str) -> Result<i64, EvalError> {
    let mut operators: Stack<Op> = Stack::new();
    let mut operands: Stack<i64> = Stack::new();

    for token in expression.chars() {
        match token {
            t if t.is_whitespace() => {}
            '(' => {}
            '+' => operators.push(Op::Add),
            '-' => operators.push(Op::Sub),
            '*' => operators.push(Op::Mul),
            ')' => {
                let op = operators.pop().ok_or(EvalError::MissingOperator)?;
                let right = operands.pop().ok_or(EvalError::MissingOperand(op))?;
                let left = operands.pop().ok_or(EvalError::MissingOperand(op))?;
                operands.push(op.apply(left, right));
            }
            digit if digit.is_ascii_digit() => {
                operands.push(i64::from(digit as u8 - b'0'));
            }
            other => return Err(EvalError::UnrecognizedToken(other)),
        }
    }

    if let Some(op) = operators.pop() {
        return Err(EvalError::PendingOperator(op));
    }
    let value = operands.pop().ok_or(EvalError::EmptyExpression)?;
    if !operands.is_empty() {
        return Err(EvalError::ExtraValues(operands.len()));
    }
    Ok(value)
}
